use super::*;

/// Tests that an issued token authenticates its user.
///
/// Expected: Ok(IssuedToken) whose plaintext resolves through AuthGuard
#[tokio::test]
async fn issued_token_authenticates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::user::create_user(db).await?);
    let issued = AccessTokenService::new(db, 7).issue(user.clone()).await?;

    assert_eq!(issued.token.len(), 48);
    assert!(issued.expires_at > chrono::Utc::now() + chrono::Duration::days(6));

    let bearer = BearerToken(Some(issued.token));
    let resolved = AuthGuard::new(db, &bearer).require(&[]).await?;
    assert_eq!(resolved.id, user.id);

    Ok(())
}

/// Tests that tokens are stored hashed.
///
/// Expected: no stored row contains the plaintext
#[tokio::test]
async fn stores_only_hash() -> Result<(), AppError> {
    use sea_orm::EntityTrait;

    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = User::from_entity(factory::user::create_user(db).await?);
    let issued = AccessTokenService::new(db, 7).issue(user).await?;

    let rows = entity::prelude::AccessToken::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_ne!(rows[0].token_hash, issued.token);
    assert_eq!(rows[0].token_hash.len(), 64);

    Ok(())
}
