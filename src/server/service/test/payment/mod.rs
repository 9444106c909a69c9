use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{ExperienceLevel, PaymentStatus};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{payment::PaymentError, registration::RegistrationError, AppError},
    model::{
        payment::{CreateOrderParam, VerifyPaymentParam},
        registration::ParticipantInfo,
    },
    service::payment::{gateway::PaymentGateway, signature::expected_signature, PaymentService},
};

mod create_order;
mod verify;

const KEY_SECRET: &str = "test_secret";

fn gateway() -> PaymentGateway {
    // Nothing listens on port 1, so any order request fails fast.
    PaymentGateway::new(
        "rzp_test_key".to_string(),
        KEY_SECRET.to_string(),
        "http://127.0.0.1:1".to_string(),
    )
}

fn participant() -> ParticipantInfo {
    ParticipantInfo {
        name: "Meera".to_string(),
        email: "meera@example.com".to_string(),
        phone: "+91 91234 56789".to_string(),
        experience: ExperienceLevel::Advanced,
        additional_info: None,
    }
}
