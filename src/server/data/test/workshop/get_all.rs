use super::*;
use chrono::Duration;

/// Tests listing only active workshops, newest first.
///
/// Expected: Ok with the inactive workshop left out and the newest first
#[tokio::test]
async fn lists_active_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WorkshopRepository::new(db);
    let now = Utc::now();
    let older = repo
        .create(save_param("Older", vec![]), now - Duration::days(1))
        .await?;
    let newer = repo.create(save_param("Newer", vec![]), now).await?;
    factory::workshop::WorkshopFactory::new(db)
        .active(false)
        .build()
        .await?;

    let active = repo.get_all(true).await?;
    let all = repo.get_all(false).await?;

    assert_eq!(
        active.iter().map(|w| w.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );
    assert_eq!(all.len(), 3);

    Ok(())
}

/// Tests that sessions are attached to the workshops they belong to.
///
/// Expected: Ok with each workshop carrying only its own session
#[tokio::test]
async fn attaches_sessions_per_workshop() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (first, _) = factory::helpers::create_workshop_with_session(db, date(1), 3).await?;
    let (second, _) = factory::helpers::create_workshop_with_session(db, date(2), 5).await?;

    let workshops = WorkshopRepository::new(db).get_all(true).await?;

    let first = workshops.iter().find(|w| w.id == first.id).unwrap();
    let second = workshops.iter().find(|w| w.id == second.id).unwrap();
    assert_eq!(first.sessions.len(), 1);
    assert_eq!(first.sessions[0].spots, 3);
    assert_eq!(second.sessions[0].date, date(2));

    Ok(())
}
