//! User service for business logic.
//!
//! Admin-facing user management: paginated listing and granting or revoking admin.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{GetAllUsersParam, PaginatedUsers, SetAdminParam, User},
    util::pagination::{clamp_per_page, total_pages},
};

pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all users alphabetically by name, one page at a time.
    ///
    /// # Arguments
    /// - `param` - Zero-based page and page size (clamped to `1..=100`)
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_all_users(&self, param: GetAllUsersParam) -> Result<PaginatedUsers, AppError> {
        let per_page = clamp_per_page(param.per_page);

        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(param.page, per_page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page: param.page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Grants or revokes admin privileges.
    ///
    /// # Returns
    /// - `Ok(User)` - User with the new admin status
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn set_admin(&self, param: SetAdminParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if !user_repo.set_admin(param.user_id, param.is_admin).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let user = user_repo
            .find_by_id(param.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        tracing::info!(
            "Admin status of user {} set to {}",
            user.email,
            param.is_admin
        );

        Ok(user)
    }
}
