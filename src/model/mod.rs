//! Data transfer objects shared by the HTTP API.
//!
//! These types define the JSON contract of every endpoint and carry the `utoipa` schema
//! used for the generated OpenAPI document. Domain logic never operates on them directly;
//! controllers convert between DTOs and the domain models in `server::model`.

pub mod api;
pub mod auth;
pub mod payment;
pub mod registration;
pub mod user;
pub mod workshop;
