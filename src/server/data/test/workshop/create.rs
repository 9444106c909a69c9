use super::*;

/// Tests creating a workshop with sessions.
///
/// Verifies that the curriculum round-trips and that a session without explicit
/// spots is allocated the full capacity.
///
/// Expected: Ok(Workshop) with two sessions sorted by date
#[tokio::test]
async fn creates_workshop_with_sessions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let workshop = WorkshopRepository::new(db)
        .create(
            save_param(
                "Quadcopter Build",
                vec![
                    SessionParam {
                        date: date(20),
                        spots: Some(4),
                    },
                    SessionParam {
                        date: date(10),
                        spots: None,
                    },
                ],
            ),
            Utc::now(),
        )
        .await?;

    assert_eq!(workshop.title, "Quadcopter Build");
    assert_eq!(workshop.level, WorkshopLevel::Intermediate);
    assert_eq!(workshop.curriculum.len(), 2);
    assert_eq!(workshop.sessions.len(), 2);
    assert_eq!(workshop.sessions[0].date, date(10));
    assert_eq!(workshop.sessions[0].spots, 12);
    assert_eq!(workshop.sessions[0].allocation, 12);
    assert_eq!(workshop.sessions[1].spots, 4);

    Ok(())
}
