use super::*;

/// Tests creating a workshop through the service.
///
/// Expected: Ok(Workshop) whose session defaults to the capacity
#[tokio::test]
async fn creates_valid_workshop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let workshop = WorkshopService::new(db)
        .create(save_param(vec![SessionParam {
            date: days_from_today(14),
            spots: None,
        }]))
        .await?;

    assert_eq!(workshop.sessions.len(), 1);
    assert_eq!(workshop.sessions[0].spots, 8);
    assert_eq!(workshop.created_at, workshop.updated_at);

    Ok(())
}

/// Tests that a blank required field is rejected.
///
/// Expected: Err(BadRequest) naming the field, nothing stored
#[tokio::test]
async fn rejects_blank_title() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = WorkshopService::new(db);

    let result = service
        .create(SaveWorkshopParam {
            title: "  ".to_string(),
            ..save_param(vec![])
        })
        .await;

    match result {
        Err(AppError::BadRequest(message)) => assert!(message.contains("title")),
        other => panic!("Expected BadRequest, got: {:?}", other.map(|w| w.id)),
    }
    assert!(service.get_all().await?.is_empty());

    Ok(())
}

/// Tests that a zero capacity is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_zero_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = WorkshopService::new(db)
        .create(SaveWorkshopParam {
            capacity: 0,
            ..save_param(vec![])
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
