use super::*;

/// Tests granting and revoking admin status.
///
/// Expected: Ok(true) for both updates with the flag flipped each time
#[tokio::test]
async fn grants_and_revokes_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.set_admin(user.id, true).await?);
    assert!(repo.find_by_id(user.id).await?.unwrap().admin);

    assert!(repo.set_admin(user.id, false).await?);
    assert!(!repo.find_by_id(user.id).await?.unwrap().admin);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UserRepository::new(db).set_admin(999, true).await?;

    assert!(!updated);

    Ok(())
}
