//! Workshop registration factory.

use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{
    ExperienceLevel, PaymentMethod, PaymentStatus, RegistrationStatus,
};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating registrations with customizable fields.
pub struct RegistrationFactory<'a> {
    db: &'a DatabaseConnection,
    workshop_id: i32,
    user_id: i32,
    session_date: NaiveDate,
    payment_amount: String,
    status: RegistrationStatus,
}

impl<'a> RegistrationFactory<'a> {
    /// Creates a new factory.
    ///
    /// Defaults:
    /// - payment_amount: `"₹1000"`
    /// - status: `Registered`
    /// - offline payment, pending
    pub fn new(
        db: &'a DatabaseConnection,
        workshop_id: i32,
        user_id: i32,
        session_date: NaiveDate,
    ) -> Self {
        Self {
            db,
            workshop_id,
            user_id,
            session_date,
            payment_amount: "₹1000".to_string(),
            status: RegistrationStatus::Registered,
        }
    }

    /// Sets the stored payment amount string.
    pub fn payment_amount(mut self, amount: impl Into<String>) -> Self {
        self.payment_amount = amount.into();
        self
    }

    /// Sets the registration status.
    pub fn status(mut self, status: RegistrationStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the registration.
    pub async fn build(self) -> Result<entity::workshop_registration::Model, DbErr> {
        let now = Utc::now();
        let n = next_id();
        entity::workshop_registration::ActiveModel {
            workshop_id: ActiveValue::Set(self.workshop_id),
            user_id: ActiveValue::Set(self.user_id),
            session_date: ActiveValue::Set(self.session_date),
            participant_name: ActiveValue::Set(format!("Participant {}", n)),
            participant_email: ActiveValue::Set(format!("participant{}@example.com", n)),
            participant_phone: ActiveValue::Set("+91 90000 00000".to_string()),
            participant_experience: ActiveValue::Set(ExperienceLevel::Beginner),
            participant_additional_info: ActiveValue::Set(None),
            payment_amount: ActiveValue::Set(self.payment_amount),
            payment_status: ActiveValue::Set(PaymentStatus::Pending),
            payment_method: ActiveValue::Set(Some(PaymentMethod::Offline)),
            payment_id: ActiveValue::Set(None),
            gateway_order_id: ActiveValue::Set(None),
            gateway_signature: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            registered_at: ActiveValue::Set(now),
            confirmed_at: ActiveValue::Set(None),
            cancelled_at: ActiveValue::Set(None),
            cancellation_reason: ActiveValue::Set(None),
            refund_amount: ActiveValue::Set(0.0),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a `Registered` registration with default participant and payment info.
pub async fn create_registration(
    db: &DatabaseConnection,
    workshop_id: i32,
    user_id: i32,
    session_date: NaiveDate,
) -> Result<entity::workshop_registration::Model, DbErr> {
    RegistrationFactory::new(db, workshop_id, user_id, session_date)
        .build()
        .await
}
