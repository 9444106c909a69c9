use entity::sea_orm_active_enums::RegistrationStatus;

use super::*;

/// Tests reconciling sessions by date.
///
/// Verifies that a kept date without registrations gets its new allocation free, a new
/// date is inserted and a date no longer listed is removed.
///
/// Expected: Ok with exactly the requested dates and allocations
#[tokio::test]
async fn keeps_adds_and_removes_by_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let kept = session_date();
    let dropped = NaiveDate::from_ymd_opt(2030, 6, 16).unwrap();
    let added = NaiveDate::from_ymd_opt(2030, 6, 17).unwrap();

    let workshop = factory::workshop::create_workshop(db).await?;
    factory::workshop_session::WorkshopSessionFactory::new(db, workshop.id)
        .date(kept)
        .spots(1)
        .allocation(4)
        .build()
        .await?;
    factory::workshop_session::create_session(db, workshop.id, dropped, 4).await?;

    let repo = WorkshopSessionRepository::new(db);
    repo.reconcile(workshop.id, &[(kept, 6), (added, 2)]).await?;

    let kept_session = repo.find(workshop.id, kept).await?.unwrap();
    assert_eq!(kept_session.spots, 6);
    assert_eq!(kept_session.allocation, 6);

    let added_session = repo.find(workshop.id, added).await?.unwrap();
    assert_eq!(added_session.spots, 2);

    assert!(repo.find(workshop.id, dropped).await?.is_none());

    Ok(())
}

/// Tests that seats held by live registrations stay taken.
///
/// Verifies that cancelled registrations do not count as held.
///
/// Expected: Ok with spots equal to the new allocation less the two live registrations
#[tokio::test]
async fn keeps_held_seats_taken() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let workshop = factory::workshop::create_workshop(db).await?;
    factory::workshop_session::WorkshopSessionFactory::new(db, workshop.id)
        .date(session_date())
        .spots(2)
        .allocation(4)
        .build()
        .await?;
    factory::registration::create_registration(db, workshop.id, user.id, session_date()).await?;
    factory::registration::RegistrationFactory::new(db, workshop.id, user.id, session_date())
        .status(RegistrationStatus::Confirmed)
        .build()
        .await?;
    factory::registration::RegistrationFactory::new(db, workshop.id, user.id, session_date())
        .status(RegistrationStatus::Cancelled)
        .build()
        .await?;

    let repo = WorkshopSessionRepository::new(db);
    repo.reconcile(workshop.id, &[(session_date(), 6)]).await?;

    let session = repo.find(workshop.id, session_date()).await?.unwrap();
    assert_eq!(session.spots, 4);
    assert_eq!(session.allocation, 6);

    Ok(())
}

/// Tests shrinking an allocation below the seats already held.
///
/// Expected: Err(BadRequest) with the session unchanged
#[tokio::test]
async fn rejects_allocation_below_held_seats() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;
    let workshop = factory::workshop::create_workshop(db).await?;
    factory::workshop_session::WorkshopSessionFactory::new(db, workshop.id)
        .date(session_date())
        .spots(2)
        .allocation(4)
        .build()
        .await?;
    factory::registration::create_registration(db, workshop.id, first.id, session_date()).await?;
    factory::registration::create_registration(db, workshop.id, second.id, session_date())
        .await?;

    let repo = WorkshopSessionRepository::new(db);
    let result = repo.reconcile(workshop.id, &[(session_date(), 1)]).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let session = repo.find(workshop.id, session_date()).await?.unwrap();
    assert_eq!(session.spots, 2);
    assert_eq!(session.allocation, 4);

    Ok(())
}

/// Tests removing a date that still has a live registration.
///
/// Expected: Err(BadRequest) with the session kept
#[tokio::test]
async fn rejects_removing_booked_date() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let workshop = factory::workshop::create_workshop(db).await?;
    factory::workshop_session::WorkshopSessionFactory::new(db, workshop.id)
        .date(session_date())
        .spots(3)
        .allocation(4)
        .build()
        .await?;
    factory::registration::create_registration(db, workshop.id, user.id, session_date()).await?;

    let repo = WorkshopSessionRepository::new(db);
    let result = repo.reconcile(workshop.id, &[]).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(repo.find(workshop.id, session_date()).await?.is_some());

    Ok(())
}
