use super::*;

/// Tests logging out with a token.
///
/// Expected: Ok(true), then the token no longer authenticates
#[tokio::test]
async fn revoked_token_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let token = factory::access_token::create_access_token(db, user.id).await?;
    let service = AccessTokenService::new(db, 7);

    assert!(service.revoke(&token).await?);
    assert!(!service.revoke(&token).await?);

    let bearer = BearerToken(Some(token));
    let result = AuthGuard::new(db, &bearer).require(&[]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests purging expired tokens.
///
/// Expected: Ok(1) with the live token kept
#[tokio::test]
async fn purges_only_expired_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::access_token::AccessTokenFactory::new(db, user.id)
        .expires_in(chrono::Duration::days(-1))
        .build()
        .await?;
    let live = factory::access_token::create_access_token(db, user.id).await?;

    let purged = AccessTokenService::new(db, 7).purge_expired().await?;

    assert_eq!(purged, 1);
    let bearer = BearerToken(Some(live));
    assert!(AuthGuard::new(db, &bearer).require(&[]).await.is_ok());

    Ok(())
}
