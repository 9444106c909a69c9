use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejections produced by the workshop registration flow.
#[derive(Error, Debug, PartialEq)]
pub enum RegistrationError {
    #[error("Workshop not found or inactive")]
    WorkshopUnavailable,

    #[error("No spots available for selected date")]
    NoSpotsAvailable,

    #[error("You are already registered for this workshop on the selected date")]
    AlreadyRegistered,

    #[error("Registration not found")]
    NotFound,

    #[error("Registration cannot be cancelled at this time")]
    NotCancellable,

    /// Admin attempted a status change the lifecycle does not allow.
    #[error("Cannot change registration status from {from} to {to}")]
    InvalidTransition {
        /// Current status
        from: String,
        /// Requested status
        to: String,
    },

    #[error("Missing required fields")]
    MissingFields,
}

/// - `WorkshopUnavailable` / `NotFound` → 404 Not Found
/// - `NoSpotsAvailable` / `AlreadyRegistered` / `NotCancellable` / `InvalidTransition` → 409 Conflict
/// - `MissingFields` → 400 Bad Request
impl IntoResponse for RegistrationError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::WorkshopUnavailable | Self::NotFound => StatusCode::NOT_FOUND,
            Self::NoSpotsAvailable
            | Self::AlreadyRegistered
            | Self::NotCancellable
            | Self::InvalidTransition { .. } => StatusCode::CONFLICT,
            Self::MissingFields => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
