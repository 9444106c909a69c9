use super::*;

/// Tests the booking and cancellation walkthrough on a one-seat session.
///
/// Books the only seat, checks a second booking is rejected, then cancels the first
/// ten days before the session.
///
/// Expected: refund of 500 on ₹1000 and the seat restored
#[tokio::test]
async fn books_last_seat_then_cancels_with_half_refund() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = days_from_today(10);
    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;
    let workshop = factory::workshop::WorkshopFactory::new(db)
        .price("₹1000")
        .build()
        .await?;
    factory::workshop_session::create_session(db, workshop.id, date, 1).await?;
    let service = RegistrationService::new(db);

    let registration = service
        .admit(offline_admission(workshop.id, first.id, date))
        .await?;

    let rejected = service
        .admit(offline_admission(workshop.id, second.id, date))
        .await;
    assert!(matches!(
        rejected,
        Err(AppError::RegistrationErr(RegistrationError::NoSpotsAvailable))
    ));

    let cancellation = service.cancel(first.id, registration.id, None).await?;

    assert_eq!(cancellation.refund_amount, 500.0);
    assert_eq!(cancellation.registration.refund_amount, 500.0);
    assert_eq!(
        cancellation.registration.status,
        RegistrationStatus::Cancelled
    );
    assert_eq!(
        cancellation.registration.cancellation_reason.as_deref(),
        Some("User requested cancellation")
    );
    assert_eq!(remaining_spots(db, workshop.id, date).await, 1);

    Ok(())
}

/// Tests the refund schedule through the service.
///
/// Expected: full refund 20 days out, nothing 3 days out
#[tokio::test]
async fn refunds_by_days_until_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let service = RegistrationService::new(db);

    for (days, expected) in [(20, 1000.0), (3, 0.0)] {
        let date = days_from_today(days);
        let (workshop, _) = factory::helpers::create_workshop_with_session(db, date, 2).await?;
        let registration = service
            .admit(offline_admission(workshop.id, user.id, date))
            .await?;

        let cancellation = service
            .cancel(user.id, registration.id, Some("Travel".to_string()))
            .await?;

        assert_eq!(cancellation.refund_amount, expected);
        assert_eq!(
            cancellation.registration.cancellation_reason.as_deref(),
            Some("Travel")
        );
    }

    Ok(())
}

/// Tests cancelling twice.
///
/// Expected: Err(NotCancellable) with the seat restored only once
#[tokio::test]
async fn rejects_second_cancellation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = days_from_today(30);
    let user = factory::user::create_user(db).await?;
    let (workshop, _) = factory::helpers::create_workshop_with_session(db, date, 2).await?;
    let service = RegistrationService::new(db);

    let registration = service
        .admit(offline_admission(workshop.id, user.id, date))
        .await?;
    service.cancel(user.id, registration.id, None).await?;
    let result = service.cancel(user.id, registration.id, None).await;

    assert!(matches!(
        result,
        Err(AppError::RegistrationErr(RegistrationError::NotCancellable))
    ));
    assert_eq!(remaining_spots(db, workshop.id, date).await, 2);

    Ok(())
}

/// Tests cancelling another user's registration.
///
/// Expected: Err(NotFound) and the registration untouched
#[tokio::test]
async fn hides_other_users_registration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = days_from_today(30);
    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let (workshop, _) = factory::helpers::create_workshop_with_session(db, date, 2).await?;
    let service = RegistrationService::new(db);

    let registration = service
        .admit(offline_admission(workshop.id, owner.id, date))
        .await?;
    let result = service.cancel(intruder.id, registration.id, None).await;

    assert!(matches!(
        result,
        Err(AppError::RegistrationErr(RegistrationError::NotFound))
    ));
    assert_eq!(
        service.get_for_user(owner.id).await?[0].status,
        RegistrationStatus::Registered
    );

    Ok(())
}

/// Tests cancelling when the session counter is already full.
///
/// Expected: Ok with the counter still capped at its allocation
#[tokio::test]
async fn cancellation_never_exceeds_allocation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = days_from_today(30);
    let (user, workshop, _, registration) =
        factory::helpers::create_registration_with_dependencies(db, date, 2).await?;

    let cancellation = RegistrationService::new(db)
        .cancel(user.id, registration.id, None)
        .await?;

    assert_eq!(
        cancellation.registration.status,
        RegistrationStatus::Cancelled
    );
    assert_eq!(remaining_spots(db, workshop.id, date).await, 2);

    Ok(())
}
