use super::*;

/// Tests taking a seat from a session with free seats.
///
/// Expected: Ok(SpotUpdate::Updated) with one seat fewer, persisted
#[tokio::test]
async fn takes_available_seat() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (workshop, _) =
        factory::helpers::create_workshop_with_session(db, session_date(), 2).await?;
    let repo = WorkshopSessionRepository::new(db);

    let result = repo.reduce_spots(workshop.id, session_date(), 1).await?;

    match result {
        SpotUpdate::Updated(session) => assert_eq!(session.spots, 1),
        other => panic!("Expected Updated, got: {:?}", other),
    }
    let stored = repo.find(workshop.id, session_date()).await?.unwrap();
    assert_eq!(stored.spots, 1);

    Ok(())
}

/// Tests that a full session is never decremented.
///
/// Expected: Ok(SpotUpdate::Rejected) with the counter still at 0
#[tokio::test]
async fn rejects_when_full() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let workshop = factory::workshop::create_workshop(db).await?;
    factory::workshop_session::WorkshopSessionFactory::new(db, workshop.id)
        .date(session_date())
        .spots(0)
        .allocation(5)
        .build()
        .await?;
    let repo = WorkshopSessionRepository::new(db);

    let result = repo.reduce_spots(workshop.id, session_date(), 1).await?;

    assert_eq!(result, SpotUpdate::Rejected);
    assert_eq!(repo.find(workshop.id, session_date()).await?.unwrap().spots, 0);

    Ok(())
}

/// Tests reducing seats on a date without a session.
///
/// Expected: Ok(SpotUpdate::SessionNotFound)
#[tokio::test]
async fn reports_missing_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (workshop, _) =
        factory::helpers::create_workshop_with_session(db, session_date(), 2).await?;

    let result = WorkshopSessionRepository::new(db)
        .reduce_spots(workshop.id, session_date().succ_opt().unwrap(), 1)
        .await?;

    assert_eq!(result, SpotUpdate::SessionNotFound);

    Ok(())
}

/// Tests draining a session seat by seat.
///
/// Verifies that the counter reaches zero and the next request is rejected.
///
/// Expected: two updates followed by a rejection
#[tokio::test]
async fn drains_to_zero_then_rejects() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_workshop_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (workshop, _) =
        factory::helpers::create_workshop_with_session(db, session_date(), 2).await?;
    let repo = WorkshopSessionRepository::new(db);

    assert!(matches!(
        repo.reduce_spots(workshop.id, session_date(), 1).await?,
        SpotUpdate::Updated(_)
    ));
    assert!(matches!(
        repo.reduce_spots(workshop.id, session_date(), 1).await?,
        SpotUpdate::Updated(_)
    ));
    assert_eq!(
        repo.reduce_spots(workshop.id, session_date(), 1).await?,
        SpotUpdate::Rejected
    );

    Ok(())
}
