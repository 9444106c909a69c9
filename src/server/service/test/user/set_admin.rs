use super::*;

/// Tests granting and revoking admin.
///
/// Expected: Ok(User) reflecting each change
#[tokio::test]
async fn grants_and_revokes_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let service = UserService::new(db);

    let granted = service
        .set_admin(SetAdminParam {
            user_id: user.id,
            is_admin: true,
        })
        .await?;
    assert!(granted.admin);

    let revoked = service
        .set_admin(SetAdminParam {
            user_id: user.id,
            is_admin: false,
        })
        .await?;
    assert!(!revoked.admin);

    Ok(())
}

/// Tests changing an unknown user.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserService::new(db)
        .set_admin(SetAdminParam {
            user_id: 404,
            is_admin: true,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
