//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the IDs of the rows they reference, and
//! `helpers` bundles the common dependency chains.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let workshop = factory::workshop::create_workshop(&db).await?;
//!
//!     // Workshop with a single session holding two spots
//!     let (workshop, session) =
//!         factory::helpers::create_workshop_with_session(&db, date, 2).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let registration = factory::registration::RegistrationFactory::new(&db, workshop.id, user.id, date)
//!     .payment_amount("₹1000")
//!     .status(RegistrationStatus::Confirmed)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `access_token` - Create bearer token rows for a user
//! - `workshop` - Create workshop entities
//! - `workshop_session` - Create sessions for a workshop
//! - `registration` - Create workshop registrations
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod access_token;
pub mod helpers;
pub mod registration;
pub mod user;
pub mod workshop;
pub mod workshop_session;

pub use access_token::create_access_token;
pub use registration::create_registration;
pub use user::create_user;
pub use workshop::create_workshop;
pub use workshop_session::create_session;
