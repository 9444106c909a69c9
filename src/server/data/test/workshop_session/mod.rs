use chrono::NaiveDate;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::workshop_session::{SpotUpdate, WorkshopSessionRepository},
    error::AppError,
};

mod reconcile;
mod reduce_spots;

fn session_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 6, 15).unwrap()
}
