//! Online checkout through the payment gateway.
//!
//! `create_order` opens a gateway order once the seat request passes the admission checks.
//! `verify` checks the signature the gateway returned to the client and only then admits
//! the registration as paid.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{payment::PaymentError, AppError},
    model::{
        payment::{
            amount_in_minor_units, CreateOrderParam, GatewayOrderNotes, GatewayOrderRequest,
            PaymentOrder, VerifyPaymentParam, ORDER_CURRENCY,
        },
        registration::Registration,
    },
    service::{payment::gateway::PaymentGateway, registration::RegistrationService},
};

pub mod gateway;
pub mod signature;

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    gateway: &'a PaymentGateway,
}

impl<'a> PaymentService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        gateway: &'a PaymentGateway,
    ) -> Self {
        Self {
            db,
            http_client,
            gateway,
        }
    }

    /// Opens a gateway order for one seat.
    ///
    /// No seat is held; availability is checked again when the payment is verified.
    ///
    /// # Returns
    /// - `Ok(PaymentOrder)` - Order ready for checkout
    /// - `Err(RegistrationError)` - Admission checks failed
    /// - `Err(PaymentError::InvalidAmount)` - Workshop price is not payable
    /// - `Err(PaymentError::Gateway)` - Gateway call failed
    pub async fn create_order(&self, param: CreateOrderParam) -> Result<PaymentOrder, AppError> {
        let workshop = RegistrationService::new(self.db)
            .check_admission(param.workshop_id, param.user_id, param.session_date)
            .await?;

        let request = GatewayOrderRequest {
            amount: amount_in_minor_units(&workshop.price)?,
            currency: ORDER_CURRENCY.to_string(),
            receipt: format!("workshop_{}", Utc::now().timestamp_millis()),
            notes: GatewayOrderNotes {
                workshop_id: workshop.id.to_string(),
                user_id: param.user_id.to_string(),
                selected_date: param.session_date.to_string(),
                participant_name: param.participant.name.clone(),
            },
        };

        let order = self
            .gateway
            .create_order(self.http_client, &request)
            .await?;

        tracing::info!(
            "Opened payment order {} for workshop {} (user {})",
            order.id,
            workshop.id,
            param.user_id
        );

        Ok(PaymentOrder {
            gateway_order_id: order.id,
            amount: order.amount,
            currency: order.currency,
            workshop_title: workshop.title,
            session_date: param.session_date,
            participant: param.participant,
        })
    }

    /// Verifies a completed checkout and registers the paid seat.
    ///
    /// # Returns
    /// - `Ok(Registration)` - Registration with payment status `paid`
    /// - `Err(PaymentError::InvalidSignature)` - Signature does not match
    /// - `Err(RegistrationError)` - Admission failed after payment
    pub async fn verify(&self, param: VerifyPaymentParam) -> Result<Registration, AppError> {
        if !self.gateway.verify_signature(
            &param.gateway_order_id,
            &param.payment_id,
            &param.signature,
        ) {
            tracing::warn!(
                "Rejected payment {} for order {}: signature mismatch",
                param.payment_id,
                param.gateway_order_id
            );
            return Err(PaymentError::InvalidSignature.into());
        }

        RegistrationService::new(self.db)
            .admit(param.into_admission())
            .await
    }
}
