use super::*;

/// Tests that inactive workshops are hidden from public reads.
///
/// Expected: Err(NotFound) for the inactive workshop, Ok for the active one
#[tokio::test]
async fn hides_inactive_workshop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::workshop::create_workshop(db).await?;
    let inactive = factory::workshop::WorkshopFactory::new(db)
        .active(false)
        .build()
        .await?;
    let service = WorkshopService::new(db);

    assert_eq!(service.get_active_by_id(active.id).await?.id, active.id);
    assert!(matches!(
        service.get_active_by_id(inactive.id).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(service.get_active().await?.len(), 1);
    assert_eq!(service.get_all().await?.len(), 2);

    Ok(())
}
