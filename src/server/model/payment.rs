//! Domain models for gateway checkout.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    model::payment::{
        CreatePaymentOrderDto, CreatedPaymentOrderDto, PaymentOrderDto, VerifyPaymentDto,
    },
    server::{
        error::{payment::PaymentError, registration::RegistrationError, AppError},
        model::registration::{parse_amount, AdmissionParam, ParticipantInfo, PaymentSource},
    },
};

/// Currency every order is created in.
pub const ORDER_CURRENCY: &str = "INR";

/// Converts a price string to minor currency units (paise).
///
/// # Returns
/// - `Ok(i64)` - Amount × 100, rounded
/// - `Err(PaymentError::InvalidAmount)` - Price has no positive number in it
pub fn amount_in_minor_units(price: &str) -> Result<i64, PaymentError> {
    parse_amount(price)
        .map(|value| (value * 100.0).round() as i64)
        .filter(|amount| *amount > 0)
        .ok_or_else(|| PaymentError::InvalidAmount(price.to_string()))
}

/// Checkout request for one seat.
#[derive(Debug, Clone)]
pub struct CreateOrderParam {
    pub workshop_id: i32,
    pub user_id: i32,
    pub session_date: NaiveDate,
    pub participant: ParticipantInfo,
}

impl CreateOrderParam {
    pub fn from_dto(user_id: i32, dto: CreatePaymentOrderDto) -> Result<Self, RegistrationError> {
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
        })
    }
}

/// Body of the gateway's create order call.
#[derive(Debug, Clone, Serialize)]
pub struct GatewayOrderRequest {
    pub amount: i64,
    pub currency: String,
    pub receipt: String,
    pub notes: GatewayOrderNotes,
}

#[derive(Debug, Clone, Serialize)]
pub struct GatewayOrderNotes {
    pub workshop_id: String,
    pub user_id: String,
    pub selected_date: String,
    pub participant_name: String,
}

/// Fields of the gateway's order response that are used.
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayOrder {
    pub id: String,
    pub amount: i64,
    pub currency: String,
}

/// An order opened with the gateway, ready for client checkout.
#[derive(Debug, Clone)]
pub struct PaymentOrder {
    pub gateway_order_id: String,
    pub amount: i64,
    pub currency: String,
    pub workshop_title: String,
    pub session_date: NaiveDate,
    pub participant: ParticipantInfo,
}

impl PaymentOrder {
    pub fn into_dto(self, key_id: String) -> CreatedPaymentOrderDto {
        CreatedPaymentOrderDto {
            order: PaymentOrderDto {
                gateway_order_id: self.gateway_order_id,
                amount: self.amount,
                currency: self.currency,
                workshop_title: self.workshop_title,
                selected_date: self.session_date,
                participant_info: self.participant.into_dto(),
            },
            key_id,
        }
    }
}

/// Completed checkout to verify and turn into a registration.
#[derive(Debug, Clone)]
pub struct VerifyPaymentParam {
    pub gateway_order_id: String,
    pub payment_id: String,
    pub signature: String,
    pub workshop_id: i32,
    pub user_id: i32,
    pub session_date: NaiveDate,
    pub participant: ParticipantInfo,
}

impl VerifyPaymentParam {
    /// Validates the verify request.
    ///
    /// Gateway parameters are checked first so an incomplete checkout is reported as such.
    ///
    /// # Returns
    /// - `Err(PaymentError::MissingVerificationParams)` - Order id, payment id or signature missing
    /// - `Err(RegistrationError::MissingFields)` - Workshop, date or participant missing
    pub fn from_dto(user_id: i32, dto: VerifyPaymentDto) -> Result<Self, AppError> {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let (Some(gateway_order_id), Some(payment_id), Some(signature)) = (
            non_blank(dto.gateway_order_id),
            non_blank(dto.payment_id),
            non_blank(dto.signature),
        ) else {
            return Err(PaymentError::MissingVerificationParams.into());
        };

        let (Some(workshop_id), Some(session_date), Some(participant)) =
            (dto.workshop_id, dto.selected_date, dto.participant_info)
        else {
            return Err(RegistrationError::MissingFields.into());
        };

        Ok(Self {
            gateway_order_id,
            payment_id,
            signature,
            workshop_id,
            user_id,
            session_date,
            participant: ParticipantInfo::from_dto(participant)?,
        })
    }

    pub fn into_admission(self) -> AdmissionParam {
        AdmissionParam {
            workshop_id: self.workshop_id,
            user_id: self.user_id,
            session_date: self.session_date,
            participant: self.participant,
            payment: PaymentSource::Online {
                payment_id: self.payment_id,
                gateway_order_id: self.gateway_order_id,
                signature: self.signature,
            },
        }
    }
}
