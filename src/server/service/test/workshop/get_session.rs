use super::*;

/// Tests the availability lookup.
///
/// Expected: the session for a scheduled date, None for any other date
#[tokio::test]
async fn finds_session_by_exact_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = days_from_today(5);
    let (workshop, _) = factory::helpers::create_workshop_with_session(db, date, 4).await?;
    let service = WorkshopService::new(db);

    let session = service.get_session(workshop.id, date).await?.unwrap();
    assert_eq!(session.spots, 4);
    assert!(session.has_available_spots());

    assert!(service
        .get_session(workshop.id, date + Duration::days(1))
        .await?
        .is_none());

    Ok(())
}
