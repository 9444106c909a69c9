use super::*;

/// Tests that admission checks run before the gateway is called.
///
/// Expected: Err(WorkshopUnavailable) for an inactive workshop
#[tokio::test]
async fn checks_admission_before_gateway() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = Utc::now().date_naive() + Duration::days(20);
    let user = factory::user::create_user(db).await?;
    let workshop = factory::workshop::WorkshopFactory::new(db)
        .active(false)
        .build()
        .await?;
    factory::workshop_session::create_session(db, workshop.id, date, 2).await?;
    let http_client = reqwest::Client::new();
    let gateway = gateway();

    let result = PaymentService::new(db, &http_client, &gateway)
        .create_order(CreateOrderParam {
            workshop_id: workshop.id,
            user_id: user.id,
            session_date: date,
            participant: participant(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::RegistrationErr(
            RegistrationError::WorkshopUnavailable
        ))
    ));

    Ok(())
}

/// Tests that an unpayable price is rejected without calling the gateway.
///
/// Expected: Err(InvalidAmount)
#[tokio::test]
async fn rejects_unpayable_price() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = Utc::now().date_naive() + Duration::days(20);
    let user = factory::user::create_user(db).await?;
    let workshop = factory::workshop::WorkshopFactory::new(db)
        .price("Free")
        .build()
        .await?;
    factory::workshop_session::create_session(db, workshop.id, date, 2).await?;
    let http_client = reqwest::Client::new();
    let gateway = gateway();

    let result = PaymentService::new(db, &http_client, &gateway)
        .create_order(CreateOrderParam {
            workshop_id: workshop.id,
            user_id: user.id,
            session_date: date,
            participant: participant(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::PaymentErr(PaymentError::InvalidAmount(_)))
    ));

    Ok(())
}

/// Tests a gateway that cannot be reached.
///
/// Expected: Err(PaymentError::Gateway)
#[tokio::test]
async fn reports_gateway_failure() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = Utc::now().date_naive() + Duration::days(20);
    let user = factory::user::create_user(db).await?;
    let (workshop, _) = factory::helpers::create_workshop_with_session(db, date, 2).await?;
    let http_client = reqwest::Client::new();
    let gateway = gateway();

    let result = PaymentService::new(db, &http_client, &gateway)
        .create_order(CreateOrderParam {
            workshop_id: workshop.id,
            user_id: user.id,
            session_date: date,
            participant: participant(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::PaymentErr(PaymentError::Gateway(_)))
    ));

    Ok(())
}
