//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They enforce the workshop
//! and registration rules, open transactions where several writes must succeed together,
//! and call out to the identity provider and the payment gateway.

pub mod admin;
pub mod auth;
pub mod payment;
pub mod registration;
pub mod user;
pub mod workshop;
