use chrono::{Duration, NaiveDate, Utc};
use entity::sea_orm_active_enums::{
    ExperienceLevel, PaymentMethod, PaymentStatus, RegistrationStatus,
};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::workshop_session::WorkshopSessionRepository,
    error::{registration::RegistrationError, AppError},
    model::registration::{AdmissionParam, ParticipantInfo, PaymentSource},
    service::registration::RegistrationService,
};

mod cancel;
mod update_status;

fn days_from_today(days: i64) -> NaiveDate {
    Utc::now().date_naive() + Duration::days(days)
}

fn participant(name: &str) -> ParticipantInfo {
    ParticipantInfo {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "+91 90000 00000".to_string(),
        experience: ExperienceLevel::Beginner,
        additional_info: None,
    }
}

fn offline_admission(workshop_id: i32, user_id: i32, date: NaiveDate) -> AdmissionParam {
    AdmissionParam {
        workshop_id,
        user_id,
        session_date: date,
        participant: participant("Asha"),
        payment: PaymentSource::Offline(PaymentMethod::Offline),
    }
}

async fn remaining_spots(
    db: &sea_orm::DatabaseConnection,
    workshop_id: i32,
    date: NaiveDate,
) -> i32 {
    WorkshopSessionRepository::new(db)
        .find(workshop_id, date)
        .await
        .unwrap()
        .unwrap()
        .spots
}
