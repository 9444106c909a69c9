use super::*;

fn verify_param(workshop_id: i32, user_id: i32, signature: String) -> VerifyPaymentParam {
    VerifyPaymentParam {
        gateway_order_id: "order_ABC".to_string(),
        payment_id: "pay_XYZ".to_string(),
        signature,
        workshop_id,
        user_id,
        session_date: Utc::now().date_naive() + Duration::days(20),
        participant: participant(),
    }
}

/// Tests verifying a correctly signed payment.
///
/// Expected: Ok(Registration) marked paid with the gateway identifiers
#[tokio::test]
async fn registers_paid_seat() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = Utc::now().date_naive() + Duration::days(20);
    let user = factory::user::create_user(db).await?;
    let (workshop, _) = factory::helpers::create_workshop_with_session(db, date, 2).await?;
    let http_client = reqwest::Client::new();
    let gateway = gateway();

    let signature = expected_signature("order_ABC", "pay_XYZ", KEY_SECRET).unwrap();
    let registration = PaymentService::new(db, &http_client, &gateway)
        .verify(verify_param(workshop.id, user.id, signature))
        .await?;

    assert_eq!(registration.payment.status, PaymentStatus::Paid);
    assert_eq!(registration.payment.payment_id.as_deref(), Some("pay_XYZ"));
    assert_eq!(
        registration.payment.gateway_order_id.as_deref(),
        Some("order_ABC")
    );
    assert_eq!(registration.participant.name, "Meera");

    Ok(())
}

/// Tests verifying a tampered signature.
///
/// Expected: Err(InvalidSignature) and no registration
#[tokio::test]
async fn rejects_invalid_signature() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = Utc::now().date_naive() + Duration::days(20);
    let user = factory::user::create_user(db).await?;
    let (workshop, _) = factory::helpers::create_workshop_with_session(db, date, 2).await?;
    let http_client = reqwest::Client::new();
    let gateway = gateway();

    let signature = expected_signature("order_OTHER", "pay_XYZ", KEY_SECRET).unwrap();
    let result = PaymentService::new(db, &http_client, &gateway)
        .verify(verify_param(workshop.id, user.id, signature))
        .await;

    assert!(matches!(
        result,
        Err(AppError::PaymentErr(PaymentError::InvalidSignature))
    ));
    let registrations = crate::server::service::registration::RegistrationService::new(db)
        .get_for_user(user.id)
        .await?;
    assert!(registrations.is_empty());

    Ok(())
}

/// Tests replaying a verified payment for another workshop.
///
/// Verifies that the second admission is refused and its seat is given back.
///
/// Expected: Err(PaymentAlreadyUsed) with a single registration on record
#[tokio::test]
async fn rejects_replayed_payment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = Utc::now().date_naive() + Duration::days(20);
    let user = factory::user::create_user(db).await?;
    let (paid_for, _) = factory::helpers::create_workshop_with_session(db, date, 2).await?;
    let (replayed_on, _) = factory::helpers::create_workshop_with_session(db, date, 2).await?;
    let http_client = reqwest::Client::new();
    let gateway = gateway();
    let service = PaymentService::new(db, &http_client, &gateway);

    let signature = expected_signature("order_ABC", "pay_XYZ", KEY_SECRET).unwrap();
    service
        .verify(verify_param(paid_for.id, user.id, signature.clone()))
        .await?;
    let result = service
        .verify(verify_param(replayed_on.id, user.id, signature))
        .await;

    assert!(matches!(
        result,
        Err(AppError::PaymentErr(PaymentError::PaymentAlreadyUsed))
    ));
    let registrations = crate::server::service::registration::RegistrationService::new(db)
        .get_for_user(user.id)
        .await?;
    assert_eq!(registrations.len(), 1);
    assert_eq!(registrations[0].workshop_id, paid_for.id);
    let session = crate::server::data::workshop_session::WorkshopSessionRepository::new(db)
        .find(replayed_on.id, date)
        .await?
        .unwrap();
    assert_eq!(session.spots, 2);

    Ok(())
}
