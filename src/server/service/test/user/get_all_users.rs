use super::*;

/// Tests page metadata of the user listing.
///
/// Expected: Ok with total 5 across 3 pages of 2
#[tokio::test]
async fn reports_pages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_auth_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::user::create_user(db).await?;
    }

    let page = UserService::new(db)
        .get_all_users(GetAllUsersParam {
            page: 2,
            per_page: 2,
        })
        .await?;

    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.users.len(), 1);

    Ok(())
}
