//! Domain & parameter models for workshop registrations
//!
//! Besides the registration model itself this module holds the pure rules of the
//! registration lifecycle: which statuses may be cancelled, which admin transitions are
//! allowed, and how much of the paid amount is refunded depending on how close the
//! session is.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{
    ExperienceLevel, PaymentMethod, PaymentStatus, RegistrationStatus,
};

use crate::{
    model::registration::{
        CancellationDto, ExperienceLevelDto, PaginatedRegistrationsDto, ParticipantInfoDto,
        PaymentInfoDto, PaymentMethodDto, PaymentStatusDto, RegisterWorkshopDto,
        RegistrationDto, RegistrationStatusDto, RegistrationUserDto,
    },
    server::{error::registration::RegistrationError, model::workshop::WorkshopSummary},
};

/// Reason recorded when a user cancels without giving one.
pub const DEFAULT_CANCELLATION_REASON: &str = "User requested cancellation";

/// Reason recorded when an admin cancels through a status update.
pub const ADMIN_CANCELLATION_REASON: &str = "Cancelled by administrator";

/// Days before the session from which the full amount is refunded.
const FULL_REFUND_DAYS: i64 = 14;

/// Days before the session from which half the amount is refunded.
const HALF_REFUND_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: ExperienceLevel,
    pub additional_info: Option<String>,
}

impl ParticipantInfo {
    /// Converts the request DTO, rejecting blank contact fields.
    ///
    /// # Returns
    /// - `Ok(ParticipantInfo)` - Trimmed participant info
    /// - `Err(RegistrationError::MissingFields)` - Name, e-mail or phone is blank
    pub fn from_dto(dto: ParticipantInfoDto) -> Result<Self, RegistrationError> {
        let name = dto.name.trim().to_string();
        let email = dto.email.trim().to_string();
        let phone = dto.phone.trim().to_string();

        if name.is_empty() || email.is_empty() || phone.is_empty() {
            return Err(RegistrationError::MissingFields);
        }

        Ok(Self {
            name,
            email,
            phone,
            experience: dto.experience.into(),
            additional_info: dto
                .additional_info
                .map(|info| info.trim().to_string())
                .filter(|info| !info.is_empty()),
        })
    }

    pub fn into_dto(self) -> ParticipantInfoDto {
        ParticipantInfoDto {
            name: self.name,
            email: self.email,
            phone: self.phone,
            experience: self.experience.into(),
            additional_info: self.additional_info,
        }
    }
}

/// Payment details recorded with a registration.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentInfo {
    /// Amount as charged, copied from the workshop price.
    pub amount: String,
    pub status: PaymentStatus,
    pub method: Option<PaymentMethod>,
    pub payment_id: Option<String>,
    pub gateway_order_id: Option<String>,
    pub gateway_signature: Option<String>,
}

impl PaymentInfo {
    /// Payment info of an offline registration: pending until settled in person.
    pub fn offline(amount: String, method: PaymentMethod) -> Self {
        Self {
            amount,
            status: PaymentStatus::Pending,
            method: Some(method),
            payment_id: None,
            gateway_order_id: None,
            gateway_signature: None,
        }
    }

    /// Payment info of a gateway payment whose signature has been verified.
    pub fn paid_online(
        amount: String,
        payment_id: String,
        gateway_order_id: String,
        gateway_signature: String,
    ) -> Self {
        Self {
            amount,
            status: PaymentStatus::Paid,
            method: Some(PaymentMethod::Online),
            payment_id: Some(payment_id),
            gateway_order_id: Some(gateway_order_id),
            gateway_signature: Some(gateway_signature),
        }
    }

    pub fn into_dto(self) -> PaymentInfoDto {
        PaymentInfoDto {
            amount: self.amount,
            status: self.status.into(),
            method: self.method.map(Into::into),
            payment_id: self.payment_id,
            gateway_order_id: self.gateway_order_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationUser {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl RegistrationUser {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }
}

/// The registration domain model
///
/// `workshop` and `user` are only populated by listing queries that join them.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub id: i32,
    pub workshop_id: i32,
    pub user_id: i32,
    pub session_date: NaiveDate,
    pub participant: ParticipantInfo,
    pub payment: PaymentInfo,
    pub status: RegistrationStatus,
    pub registered_at: DateTime<Utc>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub cancellation_reason: Option<String>,
    pub refund_amount: f64,
    pub notes: Option<String>,
    pub workshop: Option<WorkshopSummary>,
    pub user: Option<RegistrationUser>,
}

impl Registration {
    pub fn from_entity(entity: entity::workshop_registration::Model) -> Self {
        Self {
            id: entity.id,
            workshop_id: entity.workshop_id,
            user_id: entity.user_id,
            session_date: entity.session_date,
            participant: ParticipantInfo {
                name: entity.participant_name,
                email: entity.participant_email,
                phone: entity.participant_phone,
                experience: entity.participant_experience,
                additional_info: entity.participant_additional_info,
            },
            payment: PaymentInfo {
                amount: entity.payment_amount,
                status: entity.payment_status,
                method: entity.payment_method,
                payment_id: entity.payment_id,
                gateway_order_id: entity.gateway_order_id,
                gateway_signature: entity.gateway_signature,
            },
            status: entity.status,
            registered_at: entity.registered_at,
            confirmed_at: entity.confirmed_at,
            cancelled_at: entity.cancelled_at,
            cancellation_reason: entity.cancellation_reason,
            refund_amount: entity.refund_amount,
            notes: entity.notes,
            workshop: None,
            user: None,
        }
    }

    /// Only live registrations can be cancelled.
    pub fn can_be_cancelled(&self) -> bool {
        matches!(
            self.status,
            RegistrationStatus::Registered | RegistrationStatus::Confirmed
        )
    }

    /// Refund owed if this registration were cancelled on `today`.
    pub fn calculate_refund(&self, today: NaiveDate) -> f64 {
        calculate_refund(&self.payment.amount, self.session_date, today)
    }

    pub fn into_dto(self) -> RegistrationDto {
        RegistrationDto {
            id: self.id,
            workshop_id: self.workshop_id,
            user_id: self.user_id,
            workshop: self.workshop.map(|w| w.into_dto()),
            user: self.user.map(|u| RegistrationUserDto {
                id: u.id,
                name: u.name,
                email: u.email,
            }),
            selected_date: self.session_date,
            participant_info: self.participant.into_dto(),
            payment_info: self.payment.into_dto(),
            status: self.status.into(),
            registered_at: self.registered_at,
            confirmed_at: self.confirmed_at,
            cancelled_at: self.cancelled_at,
            cancellation_reason: self.cancellation_reason,
            refund_amount: self.refund_amount,
            notes: self.notes,
        }
    }
}

/// Extracts the numeric value from a currency formatted amount.
///
/// Every character other than a digit or `.` is dropped, then the longest prefix that
/// reads as a decimal number is parsed, so `"₹1,000"` yields `1000.0` and `"1.5.0"`
/// yields `1.5`.
///
/// # Returns
/// - `Some(f64)` - The parsed amount
/// - `None` - No number could be read
pub fn parse_amount(amount: &str) -> Option<f64> {
    let mut number = String::new();
    let mut seen_dot = false;

    for c in amount.chars().filter(|c| c.is_ascii_digit() || *c == '.') {
        if c == '.' {
            if seen_dot {
                break;
            }
            seen_dot = true;
        }
        number.push(c);
    }

    number.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Share of the amount refunded when cancelling `days_until_session` days ahead.
pub fn refund_rate(days_until_session: i64) -> f64 {
    if days_until_session >= FULL_REFUND_DAYS {
        1.0
    } else if days_until_session >= HALF_REFUND_DAYS {
        0.5
    } else {
        0.0
    }
}

/// Refund for cancelling a registration of `amount` for `session_date` on `today`.
///
/// An amount without a readable number refunds nothing.
pub fn calculate_refund(amount: &str, session_date: NaiveDate, today: NaiveDate) -> f64 {
    let days = (session_date - today).num_days();

    parse_amount(amount)
        .map(|value| value * refund_rate(days))
        .unwrap_or(0.0)
}

/// Checks an admin status change against the registration lifecycle.
///
/// registered → confirmed | cancelled | completed, confirmed → cancelled | completed.
/// Keeping the current status is always allowed so notes can be edited.
pub fn validate_transition(
    from: RegistrationStatus,
    to: RegistrationStatus,
) -> Result<(), RegistrationError> {
    use RegistrationStatus::*;

    let allowed = from == to
        || matches!(
            (from, to),
            (Registered, Confirmed | Cancelled | Completed) | (Confirmed, Cancelled | Completed)
        );

    if allowed {
        Ok(())
    } else {
        Err(RegistrationError::InvalidTransition {
            from: status_label(from).to_string(),
            to: status_label(to).to_string(),
        })
    }
}

pub fn status_label(status: RegistrationStatus) -> &'static str {
    match status {
        RegistrationStatus::Registered => "registered",
        RegistrationStatus::Confirmed => "confirmed",
        RegistrationStatus::Cancelled => "cancelled",
        RegistrationStatus::Completed => "completed",
    }
}

/// How a seat is being paid for.
///
/// The amount is never taken from the client; admission copies it from the workshop price.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentSource {
    /// Settled outside the gateway, pending until an admin confirms it.
    Offline(PaymentMethod),
    /// Gateway payment whose signature has already been verified.
    Online {
        payment_id: String,
        gateway_order_id: String,
        signature: String,
    },
}

impl PaymentSource {
    /// Offline method chosen by the client; only `offline` and `bank_transfer` are honored.
    pub fn offline_from_dto(method: Option<PaymentMethodDto>) -> Self {
        match method {
            Some(PaymentMethodDto::BankTransfer) => Self::Offline(PaymentMethod::BankTransfer),
            _ => Self::Offline(PaymentMethod::Offline),
        }
    }

    /// Gateway order this payment settles, if paid online.
    pub fn gateway_order_id(&self) -> Option<&str> {
        match self {
            Self::Offline(_) => None,
            Self::Online {
                gateway_order_id, ..
            } => Some(gateway_order_id.as_str()),
        }
    }

    pub fn into_payment_info(self, amount: String) -> PaymentInfo {
        match self {
            Self::Offline(method) => PaymentInfo::offline(amount, method),
            Self::Online {
                payment_id,
                gateway_order_id,
                signature,
            } => PaymentInfo::paid_online(amount, payment_id, gateway_order_id, signature),
        }
    }
}

/// A request for a seat, checked and admitted by `RegistrationService::admit`
#[derive(Debug, Clone)]
pub struct AdmissionParam {
    pub workshop_id: i32,
    pub user_id: i32,
    pub session_date: NaiveDate,
    pub participant: ParticipantInfo,
    pub payment: PaymentSource,
}

impl AdmissionParam {
    /// Builds an offline admission from the register request body.
    ///
    /// # Returns
    /// - `Ok(AdmissionParam)` - All required fields present
    /// - `Err(RegistrationError::MissingFields)` - Workshop, date or participant missing or blank
    pub fn from_register_dto(
        user_id: i32,
        dto: RegisterWorkshopDto,
    ) -> Result<Self, RegistrationError> {
        let (Some(workshop_id), Some(session_date), Some(participant)) =
            (dto.workshop_id, dto.selected_date, dto.participant_info)
        else {
            return Err(RegistrationError::MissingFields);
        };

        Ok(Self {
            workshop_id,
            user_id,
            session_date,
            participant: ParticipantInfo::from_dto(participant)?,
            payment: PaymentSource::offline_from_dto(dto.payment_info.and_then(|p| p.method)),
        })
    }
}

/// Parameters for inserting a registration once a seat has been taken
#[derive(Debug, Clone)]
pub struct NewRegistrationParam {
    pub workshop_id: i32,
    pub user_id: i32,
    pub session_date: NaiveDate,
    pub participant: ParticipantInfo,
    pub payment: PaymentInfo,
}

/// Fields written when a registration is cancelled
#[derive(Debug, Clone)]
pub struct CancelRegistrationParam {
    pub reason: String,
    pub refund_amount: f64,
    pub cancelled_at: DateTime<Utc>,
}

/// Admin status update
#[derive(Debug, Clone)]
pub struct UpdateRegistrationStatusParam {
    pub status: RegistrationStatus,
    pub notes: Option<String>,
}

/// Admin registration listing query
#[derive(Debug, Clone, Default)]
pub struct RegistrationFilter {
    pub workshop_id: Option<i32>,
    pub status: Option<RegistrationStatus>,
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedRegistrations {
    pub registrations: Vec<Registration>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedRegistrations {
    pub fn into_dto(self) -> PaginatedRegistrationsDto {
        PaginatedRegistrationsDto {
            registrations: self
                .registrations
                .into_iter()
                .map(|r| r.into_dto())
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Result of a cancellation: the updated registration and the refund recorded on it.
#[derive(Debug, Clone)]
pub struct Cancellation {
    pub registration: Registration,
    pub refund_amount: f64,
}

impl Cancellation {
    pub fn into_dto(self) -> CancellationDto {
        CancellationDto {
            message: "Registration cancelled successfully".to_string(),
            refund_amount: self.refund_amount,
            registration: self.registration.into_dto(),
        }
    }
}

impl From<ExperienceLevelDto> for ExperienceLevel {
    fn from(level: ExperienceLevelDto) -> Self {
        match level {
            ExperienceLevelDto::Beginner => Self::Beginner,
            ExperienceLevelDto::Intermediate => Self::Intermediate,
            ExperienceLevelDto::Advanced => Self::Advanced,
        }
    }
}

impl From<ExperienceLevel> for ExperienceLevelDto {
    fn from(level: ExperienceLevel) -> Self {
        match level {
            ExperienceLevel::Beginner => Self::Beginner,
            ExperienceLevel::Intermediate => Self::Intermediate,
            ExperienceLevel::Advanced => Self::Advanced,
        }
    }
}

impl From<RegistrationStatusDto> for RegistrationStatus {
    fn from(status: RegistrationStatusDto) -> Self {
        match status {
            RegistrationStatusDto::Registered => Self::Registered,
            RegistrationStatusDto::Confirmed => Self::Confirmed,
            RegistrationStatusDto::Cancelled => Self::Cancelled,
            RegistrationStatusDto::Completed => Self::Completed,
        }
    }
}

impl From<RegistrationStatus> for RegistrationStatusDto {
    fn from(status: RegistrationStatus) -> Self {
        match status {
            RegistrationStatus::Registered => Self::Registered,
            RegistrationStatus::Confirmed => Self::Confirmed,
            RegistrationStatus::Cancelled => Self::Cancelled,
            RegistrationStatus::Completed => Self::Completed,
        }
    }
}

impl From<PaymentStatus> for PaymentStatusDto {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Pending => Self::Pending,
            PaymentStatus::Paid => Self::Paid,
            PaymentStatus::Failed => Self::Failed,
            PaymentStatus::Refunded => Self::Refunded,
        }
    }
}

impl From<PaymentMethodDto> for PaymentMethod {
    fn from(method: PaymentMethodDto) -> Self {
        match method {
            PaymentMethodDto::Online => Self::Online,
            PaymentMethodDto::Offline => Self::Offline,
            PaymentMethodDto::BankTransfer => Self::BankTransfer,
        }
    }
}

impl From<PaymentMethod> for PaymentMethodDto {
    fn from(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::Online => Self::Online,
            PaymentMethod::Offline => Self::Offline,
            PaymentMethod::BankTransfer => Self::BankTransfer,
        }
    }
}
