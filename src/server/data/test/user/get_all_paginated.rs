use super::*;

/// Tests paginating users alphabetically.
///
/// Verifies that the second page holds the remaining users and the total counts
/// every user rather than pages.
///
/// Expected: Ok with 1 user on page 1 and total 3
#[tokio::test]
async fn returns_requested_page_and_total() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for name in ["Charlie", "Alice", "Bob"] {
        factory::user::UserFactory::new(db).name(name).build().await?;
    }

    let repo = UserRepository::new(db);
    let (first_page, total) = repo.get_all_paginated(0, 2).await?;
    let (second_page, _) = repo.get_all_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        first_page.iter().map(|u| u.name.as_str()).collect::<Vec<_>>(),
        vec!["Alice", "Bob"]
    );
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].name, "Charlie");

    Ok(())
}
