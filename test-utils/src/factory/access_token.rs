//! Access token factory.
//!
//! Tokens are stored hashed, so the factory returns the plaintext alongside the row
//! for tests that need to present it as a bearer token.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use sha2::{Digest, Sha256};

use crate::factory::helpers::next_id;

/// Factory for creating bearer token rows.
pub struct AccessTokenFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    token: String,
    expires_in: Duration,
}

impl<'a> AccessTokenFactory<'a> {
    /// Creates a new factory for the given user.
    ///
    /// Defaults:
    /// - token: `"test-token-{n}"`
    /// - expires_in: 7 days
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            token: format!("test-token-{}", next_id()),
            expires_in: Duration::days(7),
        }
    }

    /// Sets the plaintext token.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Sets the lifetime relative to now; negative values create an expired token.
    pub fn expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Inserts the hashed token.
    ///
    /// # Returns
    /// - `Ok((plaintext, model))` - The bearer value and the stored row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<(String, entity::access_token::Model), DbErr> {
        let now = Utc::now();
        let model = entity::access_token::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            token_hash: ActiveValue::Set(hex::encode(Sha256::digest(self.token.as_bytes()))),
            created_at: ActiveValue::Set(now),
            expires_at: ActiveValue::Set(now + self.expires_in),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((self.token, model))
    }
}

/// Creates a valid 7-day token for the user and returns its plaintext.
pub async fn create_access_token(db: &DatabaseConnection, user_id: i32) -> Result<String, DbErr> {
    let (token, _) = AccessTokenFactory::new(db, user_id).build().await?;
    Ok(token)
}
