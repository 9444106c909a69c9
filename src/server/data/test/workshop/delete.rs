use super::*;

/// Tests deleting a workshop.
///
/// Expected: Ok(true) then Ok(false) for the same ID
#[tokio::test]
async fn deletes_workshop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let workshop = factory::workshop::create_workshop(db).await?;
    let repo = WorkshopRepository::new(db);

    assert!(repo.delete(workshop.id).await?);
    assert!(repo.find_by_id(workshop.id).await?.is_none());
    assert!(!repo.delete(workshop.id).await?);

    Ok(())
}
