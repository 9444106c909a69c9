pub mod auth;
pub mod payment;
pub mod registration;
pub mod user;
pub mod workshop;

/// Page size used when a listing query does not name one.
pub(crate) fn default_per_page() -> u64 {
    10
}
