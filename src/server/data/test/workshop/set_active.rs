use super::*;

/// Tests deactivating a workshop.
///
/// Expected: Ok(Some(Workshop)) with is_active false and hidden from the active list
#[tokio::test]
async fn deactivates_workshop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let workshop = factory::workshop::create_workshop(db).await?;
    let repo = WorkshopRepository::new(db);

    let updated = repo
        .set_active(workshop.id, false, Utc::now())
        .await?
        .unwrap();

    assert!(!updated.is_active);
    assert!(repo.get_all(true).await?.is_empty());

    Ok(())
}
