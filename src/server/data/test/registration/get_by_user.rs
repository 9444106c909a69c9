use super::*;

/// Tests listing a user's registrations.
///
/// Verifies that other users' registrations are left out and the workshop summary is
/// attached.
///
/// Expected: Ok with only the user's registration
#[tokio::test]
async fn lists_only_own_registrations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, workshop, _, registration) =
        factory::helpers::create_registration_with_dependencies(db, session_date(), 5).await?;
    let other = factory::user::create_user(db).await?;
    factory::registration::create_registration(db, workshop.id, other.id, session_date()).await?;

    let registrations = RegistrationRepository::new(db).get_by_user(user.id).await?;

    assert_eq!(registrations.len(), 1);
    assert_eq!(registrations[0].id, registration.id);
    let summary = registrations[0].workshop.as_ref().unwrap();
    assert_eq!(summary.id, workshop.id);
    assert_eq!(summary.title, workshop.title);

    Ok(())
}

/// Tests listing registrations for a user without any.
///
/// Expected: Ok(empty)
#[tokio::test]
async fn returns_empty_for_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let registrations = RegistrationRepository::new(db).get_by_user(user.id).await?;

    assert!(registrations.is_empty());

    Ok(())
}
