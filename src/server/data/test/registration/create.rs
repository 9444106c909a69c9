use super::*;

/// Tests inserting a registration.
///
/// Expected: Ok(Registration) in registered status with no refund and participant data kept
#[tokio::test]
async fn creates_registered_registration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_registration_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let (workshop, _) =
        factory::helpers::create_workshop_with_session(db, session_date(), 5).await?;

    let registration = RegistrationRepository::new(db)
        .create(
            NewRegistrationParam {
                workshop_id: workshop.id,
                user_id: user.id,
                session_date: session_date(),
                participant: ParticipantInfo {
                    name: "Asha".to_string(),
                    email: "asha@example.com".to_string(),
                    phone: "+91 98765 43210".to_string(),
                    experience: ExperienceLevel::Intermediate,
                    additional_info: Some("Vegetarian lunch".to_string()),
                },
                payment: PaymentInfo::offline("₹1000".to_string(), PaymentMethod::BankTransfer),
            },
            Utc::now(),
        )
        .await?;

    assert_eq!(registration.status, RegistrationStatus::Registered);
    assert_eq!(registration.participant.name, "Asha");
    assert_eq!(registration.participant.experience, ExperienceLevel::Intermediate);
    assert_eq!(registration.payment.method, Some(PaymentMethod::BankTransfer));
    assert_eq!(registration.refund_amount, 0.0);
    assert!(registration.cancelled_at.is_none());

    Ok(())
}
