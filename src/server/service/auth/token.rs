//! Issuing and revoking bearer access tokens.
//!
//! Only the SHA-256 hash of a token is stored; the plaintext is returned once, at login.

use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::access_token::AccessTokenRepository,
    error::AppError,
    model::{auth::IssuedToken, user::User},
    util::token::{generate_token, hash_token},
};

pub struct AccessTokenService<'a> {
    db: &'a DatabaseConnection,
    ttl_days: i64,
}

impl<'a> AccessTokenService<'a> {
    pub fn new(db: &'a DatabaseConnection, ttl_days: i64) -> Self {
        Self { db, ttl_days }
    }

    /// Issues a new token for `user`, valid for the configured number of days.
    pub async fn issue(&self, user: User) -> Result<IssuedToken, AppError> {
        let token = generate_token();
        let expires_at = Utc::now() + Duration::days(self.ttl_days);

        AccessTokenRepository::new(self.db)
            .create(user.id, hash_token(&token), expires_at)
            .await?;

        Ok(IssuedToken {
            token,
            expires_at,
            user,
        })
    }

    /// Revokes a presented token.
    ///
    /// # Returns
    /// - `Ok(true)` - Token existed and was deleted
    /// - `Ok(false)` - Token was unknown
    pub async fn revoke(&self, token: &str) -> Result<bool, AppError> {
        let revoked = AccessTokenRepository::new(self.db)
            .delete_by_hash(&hash_token(token))
            .await?;

        Ok(revoked)
    }

    /// Deletes tokens that have expired.
    pub async fn purge_expired(&self) -> Result<u64, AppError> {
        let purged = AccessTokenRepository::new(self.db)
            .delete_expired(Utc::now())
            .await?;

        Ok(purged)
    }
}
