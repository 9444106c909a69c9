//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entity models into these types at the data boundary, services
//! operate on them, and controllers convert them into DTOs with `into_dto`. Pure domain rules
//! (spot arithmetic, refund schedule, status transitions) live on these types so they can be
//! unit-tested without a database.

pub mod auth;
pub mod payment;
pub mod registration;
pub mod user;
pub mod workshop;
