use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::InternalServerError};

#[derive(Error, Debug)]
pub enum AuthError {
    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Request carried no `Authorization` header.
    #[error("No access token provided")]
    MissingToken,

    /// Presented token is unknown, revoked or expired.
    #[error("Access token is invalid or expired")]
    InvalidToken,

    /// Token resolved to a user id that no longer exists.
    #[error("User {0} referenced by access token not found in database")]
    UserNotInDatabase(i32),

    /// User is authenticated but lacks the required permission.
    ///
    /// # Fields
    /// - ID of the user who was denied
    /// - Description of what was attempted, logged server-side only
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Exchanging the authorization code with the identity provider failed.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),

    /// Identity provider returned a profile without an e-mail address.
    #[error("Identity provider did not return an e-mail address")]
    MissingEmail,
}

/// Converts authentication errors into HTTP responses.
///
/// - `CsrfValidationFailed` / `TokenExchange` / `MissingEmail` → 400 Bad Request
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// Client-facing messages stay generic; the detailed variant is logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::CsrfValidationFailed | Self::MissingEmail => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::TokenExchange(_) => return InternalServerError(self).into_response(),
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::InvalidToken | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Invalid or expired token")
            }
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Admin access required"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
