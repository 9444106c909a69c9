use super::*;

/// Tests purging expired tokens while keeping valid ones.
///
/// Expected: Ok(1) and the valid token still resolves
#[tokio::test]
async fn removes_only_expired_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let valid = factory::access_token::create_access_token(db, user.id).await?;
    factory::access_token::AccessTokenFactory::new(db, user.id)
        .expires_in(Duration::days(-1))
        .build()
        .await?;

    let repo = AccessTokenRepository::new(db);
    let removed = repo.delete_expired(Utc::now()).await?;

    assert_eq!(removed, 1);
    assert_eq!(
        repo.find_user_id(&hash_token(&valid), Utc::now()).await?,
        Some(user.id)
    );

    Ok(())
}
