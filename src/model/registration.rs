use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::workshop::WorkshopSummaryDto;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ToSchema)]
pub enum ExperienceLevelDto {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatusDto {
    Registered,
    Confirmed,
    Cancelled,
    Completed,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatusDto {
    Pending,
    Paid,
    Failed,
    Refunded,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodDto {
    Online,
    Offline,
    BankTransfer,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantInfoDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub experience: ExperienceLevelDto,
    pub additional_info: Option<String>,
}

/// Payment choices a client may make for an offline registration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfoInputDto {
    pub method: Option<PaymentMethodDto>,
}

/// Request body of `POST /api/workshops/register`.
///
/// Every field is optional on the wire so that a missing one yields a
/// "Missing required fields" error instead of a deserialization rejection.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterWorkshopDto {
    pub workshop_id: Option<i32>,
    pub selected_date: Option<NaiveDate>,
    pub participant_info: Option<ParticipantInfoDto>,
    pub payment_info: Option<PaymentInfoInputDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfoDto {
    pub amount: String,
    pub status: PaymentStatusDto,
    pub method: Option<PaymentMethodDto>,
    pub payment_id: Option<String>,
    pub gateway_order_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationUserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDto {
    pub id: i32,
    pub workshop_id: i32,
    pub user_id: i32,
    pub workshop: Option<WorkshopSummaryDto>,
    pub user: Option<RegistrationUserDto>,
    pub selected_date: NaiveDate,
    pub participant_info: ParticipantInfoDto,
    pub payment_info: PaymentInfoDto,
    pub status: RegistrationStatusDto,
    pub registered_at: DateTime<Utc>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub cancelled_at: Option<DateTime<Utc>>,
    pub cancellation_reason: Option<String>,
    pub refund_amount: f64,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedRegistrationsDto {
    pub registrations: Vec<RegistrationDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, ToSchema)]
pub struct CancelRegistrationDto {
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CancellationDto {
    pub message: String,
    pub refund_amount: f64,
    pub registration: RegistrationDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpdateRegistrationStatusDto {
    pub status: RegistrationStatusDto,
    pub notes: Option<String>,
}
