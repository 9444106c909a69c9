use super::*;

/// Tests resolving a valid token to its user.
///
/// Expected: Ok(User) for the token owner
#[tokio::test]
async fn resolves_valid_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Ravi")
        .build()
        .await?;
    let token = factory::access_token::create_access_token(db, user.id).await?;

    let bearer = BearerToken(Some(token));
    let result = AuthGuard::new(db, &bearer).require(&[]).await?;

    assert_eq!(result.id, user.id);
    assert_eq!(result.name, "Ravi");

    Ok(())
}

/// Tests a request without a token.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn fails_without_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bearer = BearerToken(None);
    let result = AuthGuard::new(db, &bearer).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests an unknown token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn fails_with_unknown_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bearer = BearerToken(Some("not-a-real-token".to_string()));
    let result = AuthGuard::new(db, &bearer).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}

/// Tests an expired token.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn fails_with_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (token, _) = factory::access_token::AccessTokenFactory::new(db, user.id)
        .expires_in(Duration::hours(-1))
        .build()
        .await?;

    let bearer = BearerToken(Some(token));
    let result = AuthGuard::new(db, &bearer).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken))
    ));

    Ok(())
}
