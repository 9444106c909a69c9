use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::registration::ParticipantInfoDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentOrderDto {
    pub workshop_id: Option<i32>,
    pub selected_date: Option<NaiveDate>,
    pub participant_info: Option<ParticipantInfoDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrderDto {
    pub gateway_order_id: String,
    /// Amount in minor currency units.
    pub amount: i64,
    pub currency: String,
    pub workshop_title: String,
    pub selected_date: NaiveDate,
    pub participant_info: ParticipantInfoDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedPaymentOrderDto {
    pub order: PaymentOrderDto,
    /// Public key id the checkout widget is opened with.
    pub key_id: String,
}

/// Request body of `POST /api/workshops/payment/verify`.
///
/// Gateway fields keep the names the checkout widget hands back.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentDto {
    #[serde(rename = "razorpay_order_id")]
    pub gateway_order_id: Option<String>,
    #[serde(rename = "razorpay_payment_id")]
    pub payment_id: Option<String>,
    #[serde(rename = "razorpay_signature")]
    pub signature: Option<String>,
    pub workshop_id: Option<i32>,
    pub selected_date: Option<NaiveDate>,
    pub participant_info: Option<ParticipantInfoDto>,
}
