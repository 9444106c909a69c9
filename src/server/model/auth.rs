//! Authentication domain models.

use chrono::{DateTime, Utc};

use crate::{model::auth::AccessTokenDto, server::model::user::User};

/// Bearer token handed out after a successful sign-in.
///
/// Holds the only copy of the plaintext token; the database stores its hash.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: User,
}

impl IssuedToken {
    pub fn into_dto(self) -> AccessTokenDto {
        AccessTokenDto {
            token: self.token,
            expires_at: self.expires_at,
            user: self.user.into_dto(),
        }
    }
}

/// Profile returned by the identity provider's user info endpoint.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ProviderUserInfo {
    /// Stable subject identifier.
    pub sub: String,
    pub email: Option<String>,
    pub name: Option<String>,
}
