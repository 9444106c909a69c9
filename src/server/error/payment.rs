use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum PaymentError {
    /// Order id, payment id or signature absent from the verification request.
    #[error("Missing payment verification parameters")]
    MissingVerificationParams,

    /// Recomputed HMAC does not match the supplied signature.
    #[error("Invalid payment signature")]
    InvalidSignature,

    /// Workshop price contains no number to charge.
    #[error("Workshop price '{0}' has no payable amount")]
    InvalidAmount(String),

    /// Gateway order already recorded on a registration.
    #[error("Payment has already been used for a registration")]
    PaymentAlreadyUsed,

    /// Gateway rejected or failed the order request.
    ///
    /// Detail is logged; the client only sees a generic message.
    #[error("Payment gateway error: {0}")]
    Gateway(String),
}

/// - `MissingVerificationParams` / `InvalidSignature` / `InvalidAmount` → 400 Bad Request
/// - `PaymentAlreadyUsed` → 409 Conflict
/// - `Gateway` → 502 Bad Gateway
impl IntoResponse for PaymentError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::MissingVerificationParams | Self::InvalidSignature => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            Self::InvalidAmount(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::PaymentAlreadyUsed => (StatusCode::CONFLICT, self.to_string()),
            Self::Gateway(detail) => {
                tracing::error!("Payment gateway failure: {}", detail);
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to create payment order".to_string(),
                )
            }
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
