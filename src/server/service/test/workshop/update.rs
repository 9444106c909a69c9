use entity::sea_orm_active_enums::{ExperienceLevel, PaymentMethod};

use crate::server::{
    error::registration::RegistrationError,
    model::registration::{AdmissionParam, ParticipantInfo, PaymentSource},
    service::registration::RegistrationService,
};

use super::*;

fn admission(workshop_id: i32, user_id: i32, date: NaiveDate) -> AdmissionParam {
    AdmissionParam {
        workshop_id,
        user_id,
        session_date: date,
        participant: ParticipantInfo {
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            experience: ExperienceLevel::Intermediate,
            additional_info: None,
        },
        payment: PaymentSource::Offline(PaymentMethod::Offline),
    }
}

fn one_seat(date: NaiveDate) -> Vec<SessionParam> {
    vec![SessionParam {
        date,
        spots: Some(1),
    }]
}

/// Tests that resaving a workshop keeps booked seats taken.
///
/// Verifies that after the only seat is booked, an update with the same sessions does not
/// free it for a second user.
///
/// Expected: Ok(Workshop) with no seat left, second admission Err(NoSpotsAvailable)
#[tokio::test]
async fn keeps_booked_seats_taken() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = days_from_today(14);
    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;
    let service = WorkshopService::new(db);
    let workshop = service.create(save_param(one_seat(date))).await?;

    let registrations = RegistrationService::new(db);
    registrations
        .admit(admission(workshop.id, first.id, date))
        .await?;

    let updated = service
        .update(
            workshop.id,
            SaveWorkshopParam {
                title: "Intro to Robotics (revised)".to_string(),
                ..save_param(one_seat(date))
            },
        )
        .await?;
    assert_eq!(updated.sessions[0].spots, 0);

    let result = registrations
        .admit(admission(workshop.id, second.id, date))
        .await;

    assert!(matches!(
        result,
        Err(AppError::RegistrationErr(RegistrationError::NoSpotsAvailable))
    ));

    Ok(())
}

/// Tests growing the allocation of a booked session.
///
/// Expected: Ok(Workshop) whose free seats are the new allocation less the booking
#[tokio::test]
async fn grows_allocation_around_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = days_from_today(14);
    let user = factory::user::create_user(db).await?;
    let service = WorkshopService::new(db);
    let workshop = service.create(save_param(one_seat(date))).await?;
    RegistrationService::new(db)
        .admit(admission(workshop.id, user.id, date))
        .await?;

    let updated = service
        .update(
            workshop.id,
            save_param(vec![SessionParam {
                date,
                spots: Some(5),
            }]),
        )
        .await?;

    assert_eq!(updated.sessions[0].allocation, 5);
    assert_eq!(updated.sessions[0].spots, 4);

    Ok(())
}

/// Tests dropping a session date that has a booking.
///
/// Expected: Err(BadRequest) and the booked session still present
#[tokio::test]
async fn rejects_dropping_booked_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let date = days_from_today(14);
    let user = factory::user::create_user(db).await?;
    let service = WorkshopService::new(db);
    let workshop = service.create(save_param(one_seat(date))).await?;
    RegistrationService::new(db)
        .admit(admission(workshop.id, user.id, date))
        .await?;

    let result = service
        .update(workshop.id, save_param(one_seat(days_from_today(21))))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    let session = WorkshopSessionRepository::new(db)
        .find(workshop.id, date)
        .await?
        .unwrap();
    assert_eq!(session.spots, 0);

    Ok(())
}
