//! Bearer token authentication.
//!
//! `BearerToken` pulls the raw token out of the `Authorization` header without rejecting
//! the request, so handlers decide whether authentication is required. `AuthGuard` then
//! resolves the token to a user and checks permissions.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{access_token::AccessTokenRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::User,
    util::token::hash_token,
};

/// Token presented in the `Authorization` header, if any.
///
/// Accepts both `Bearer <token>` and a bare token value.
#[derive(Debug, Clone, Default)]
pub struct BearerToken(pub Option<String>);

impl BearerToken {
    fn parse(header: &str) -> Option<String> {
        let header = header.trim();
        let token = header
            .strip_prefix("Bearer ")
            .or_else(|| header.strip_prefix("bearer "))
            .unwrap_or(header)
            .trim();

        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(BearerToken::parse);

        Ok(Self(token))
    }
}

pub enum Permission {
    Admin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    token: &'a BearerToken,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, token: &'a BearerToken) -> Self {
        Self { db, token }
    }

    /// Resolves the bearer token to a user holding every listed permission.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user
    /// - `Err(AuthError::MissingToken)` - No token presented
    /// - `Err(AuthError::InvalidToken)` - Token unknown or expired
    /// - `Err(AuthError::UserNotInDatabase)` - Token owner was deleted
    /// - `Err(AuthError::AccessDenied)` - User lacks a required permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(token) = self.token.0.as_deref() else {
            return Err(AuthError::MissingToken.into());
        };

        let Some(user_id) = AccessTokenRepository::new(self.db)
            .find_user_id(&hash_token(token), Utc::now())
            .await?
        else {
            return Err(AuthError::InvalidToken.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin operation without admin permissions"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
