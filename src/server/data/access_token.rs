//! Access token repository
//!
//! Stores bearer tokens by their SHA-256 hash and resolves presented tokens to users.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct AccessTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AccessTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores a token hash for a user.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the token
    /// - `token_hash` - Hex SHA-256 of the plaintext token
    /// - `expires_at` - Moment after which the token is rejected
    pub async fn create(
        &self,
        user_id: i32,
        token_hash: String,
        expires_at: DateTime<Utc>,
    ) -> Result<entity::access_token::Model, DbErr> {
        entity::access_token::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            token_hash: ActiveValue::Set(token_hash),
            created_at: ActiveValue::Set(Utc::now()),
            expires_at: ActiveValue::Set(expires_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Resolves a token hash to its owner if the token has not expired at `now`.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - Token is known and still valid
    /// - `Ok(None)` - Token is unknown or expired
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_user_id(
        &self,
        token_hash: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<i32>, DbErr> {
        let token = entity::prelude::AccessToken::find()
            .filter(entity::access_token::Column::TokenHash.eq(token_hash))
            .filter(entity::access_token::Column::ExpiresAt.gt(now))
            .one(self.db)
            .await?;

        Ok(token.map(|t| t.user_id))
    }

    /// Deletes a token by hash.
    ///
    /// # Returns
    /// - `Ok(true)` - Token existed and was removed
    /// - `Ok(false)` - No such token
    pub async fn delete_by_hash(&self, token_hash: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::AccessToken::delete_many()
            .filter(entity::access_token::Column::TokenHash.eq(token_hash))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every token that expired before `now`, returning how many were removed.
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::AccessToken::delete_many()
            .filter(entity::access_token::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
