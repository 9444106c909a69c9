use super::*;

/// Tests toggling the active flag twice.
///
/// Expected: inactive after the first toggle, active again after the second
#[tokio::test]
async fn toggles_back_and_forth() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let workshop = factory::workshop::create_workshop(db).await?;
    let service = WorkshopService::new(db);

    assert!(!service.toggle_status(workshop.id).await?.is_active);
    assert!(service.toggle_status(workshop.id).await?.is_active);

    Ok(())
}

/// Tests toggling an unknown workshop.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_workshop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = WorkshopService::new(db).toggle_status(404).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
