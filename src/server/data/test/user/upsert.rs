use super::*;

fn param(email: &str, name: &str, is_admin: Option<bool>) -> UpsertUserParam {
    UpsertUserParam {
        email: email.to_string(),
        name: name.to_string(),
        provider_subject: Some("subject".to_string()),
        is_admin,
    }
}

/// Tests creating a new user.
///
/// Verifies that upserting an unknown e-mail inserts a user with the e-mail
/// lower-cased and admin defaulting to false.
///
/// Expected: Ok(User) with normalized e-mail
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.upsert(param("Pilot@Example.com", "Pilot", None)).await?;

    assert_eq!(user.email, "pilot@example.com");
    assert_eq!(user.name, "Pilot");
    assert!(!user.admin);

    Ok(())
}

/// Tests updating an existing user by e-mail.
///
/// Verifies that a second upsert with the same e-mail updates the name
/// instead of inserting a second row.
///
/// Expected: Ok(User) with the same ID and new name
#[tokio::test]
async fn updates_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo.upsert(param("pilot@example.com", "Old", None)).await?;
    let second = repo.upsert(param("PILOT@example.com", "New", None)).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.name, "New");

    Ok(())
}

/// Tests that admin status is preserved when not provided.
///
/// Expected: Ok(User) still admin after a plain login upsert
#[tokio::test]
async fn preserves_admin_when_not_specified() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.upsert(param("admin@example.com", "Admin", Some(true)))
        .await?;
    let user = repo
        .upsert(param("admin@example.com", "Admin", None))
        .await?;

    assert!(user.admin);

    Ok(())
}
