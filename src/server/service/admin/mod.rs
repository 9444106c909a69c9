//! Administrative services.
//!
//! Holds the one-time admin code used to promote the first user to admin.

pub mod code;
