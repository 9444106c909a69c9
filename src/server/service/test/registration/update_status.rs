use super::*;
use crate::server::model::registration::UpdateRegistrationStatusParam;

/// Tests an admin confirming a registration.
///
/// Expected: Ok with confirmed status, confirmed_at and notes
#[tokio::test]
async fn confirms_registration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, _, registration) =
        factory::helpers::create_registration_with_dependencies(db, days_from_today(30), 2)
            .await?;

    let updated = RegistrationService::new(db)
        .update_status(
            registration.id,
            UpdateRegistrationStatusParam {
                status: RegistrationStatus::Confirmed,
                notes: Some("Paid in cash".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.status, RegistrationStatus::Confirmed);
    assert!(updated.confirmed_at.is_some());
    assert_eq!(updated.notes.as_deref(), Some("Paid in cash"));

    Ok(())
}

/// Tests an admin cancelling a registration.
///
/// Expected: Ok with the administrator reason, a full refund and the seat restored
#[tokio::test]
async fn admin_cancellation_runs_refund_flow() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = days_from_today(30);
    let user = factory::user::create_user(db).await?;
    let (workshop, _) = factory::helpers::create_workshop_with_session(db, date, 2).await?;
    let service = RegistrationService::new(db);
    let registration = service
        .admit(offline_admission(workshop.id, user.id, date))
        .await?;

    let updated = service
        .update_status(
            registration.id,
            UpdateRegistrationStatusParam {
                status: RegistrationStatus::Cancelled,
                notes: None,
            },
        )
        .await?;

    assert_eq!(updated.status, RegistrationStatus::Cancelled);
    assert_eq!(
        updated.cancellation_reason.as_deref(),
        Some("Cancelled by administrator")
    );
    assert_eq!(updated.refund_amount, 1000.0);
    assert_eq!(remaining_spots(db, workshop.id, date).await, 2);

    Ok(())
}

/// Tests leaving a terminal status.
///
/// Expected: Err(InvalidTransition)
#[tokio::test]
async fn rejects_transition_out_of_completed() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = days_from_today(30);
    let user = factory::user::create_user(db).await?;
    let (workshop, _) = factory::helpers::create_workshop_with_session(db, date, 2).await?;
    let registration =
        factory::registration::RegistrationFactory::new(db, workshop.id, user.id, date)
            .status(RegistrationStatus::Completed)
            .build()
            .await?;

    let result = RegistrationService::new(db)
        .update_status(
            registration.id,
            UpdateRegistrationStatusParam {
                status: RegistrationStatus::Confirmed,
                notes: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::RegistrationErr(
            RegistrationError::InvalidTransition { .. }
        ))
    ));

    Ok(())
}

/// Tests updating an unknown registration.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_registration() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RegistrationService::new(db)
        .update_status(
            404,
            UpdateRegistrationStatusParam {
                status: RegistrationStatus::Confirmed,
                notes: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::RegistrationErr(RegistrationError::NotFound))
    ));

    Ok(())
}
