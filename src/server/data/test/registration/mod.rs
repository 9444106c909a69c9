use chrono::{Duration, NaiveDate, Utc};
use entity::sea_orm_active_enums::{ExperienceLevel, PaymentMethod, RegistrationStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::registration::RegistrationRepository,
    model::registration::{
        CancelRegistrationParam, NewRegistrationParam, ParticipantInfo, PaymentInfo,
        RegistrationFilter, UpdateRegistrationStatusParam,
    },
};

mod create;
mod get_by_user;

fn session_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 8, 1).unwrap()
}
