//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every repository is generic over `ConnectionTrait` so services can run several of them
//! inside one transaction.

pub mod access_token;
pub mod registration;
pub mod user;
pub mod workshop;
pub mod workshop_session;
