//! User domain models and parameters.
//!
//! Provides the domain model for application users signed in through the identity
//! provider, plus parameter types for upserts and admin management.

use chrono::{DateTime, Utc};

use crate::model::user::{PaginatedUsersDto, UserDto};

/// Signed-in user with permission flag.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Display name of the user.
    pub name: String,
    /// Lower-cased e-mail address, unique per user.
    pub email: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            admin: self.admin,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            admin: entity.admin,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for upserting a user after the identity provider callback.
///
/// The optional `is_admin` field preserves existing admin status when None, allowing
/// name updates without modifying permissions.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// E-mail from the identity provider; lower-cased before storage.
    pub email: String,
    /// Display name of the user.
    pub name: String,
    /// Subject identifier issued by the identity provider.
    pub provider_subject: Option<String>,
    /// Optional admin status (None preserves existing admin status, Some updates it).
    pub is_admin: Option<bool>,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page.
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of users per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        let users = self.users.into_iter().map(|u| u.into_dto()).collect();

        PaginatedUsersDto {
            users,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for paginated user queries.
#[derive(Debug, Clone)]
pub struct GetAllUsersParam {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of users to return per page.
    pub per_page: u64,
}

/// Parameters for setting user admin status.
#[derive(Debug, Clone)]
pub struct SetAdminParam {
    pub user_id: i32,
    /// Whether the user should have admin privileges.
    pub is_admin: bool,
}
