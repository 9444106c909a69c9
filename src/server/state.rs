//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - HTTP client for identity provider and payment gateway requests
//! - OAuth2 client for user sign-in
//! - Admin code service for temporary admin access
//! - Payment gateway credentials

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use super::service::{admin::code::AdminCodeService, payment::gateway::PaymentGateway};

/// Type alias for the OAuth2 client configured for the identity provider.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `AdminCodeService` uses `Arc` for shared state
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for making external API requests.
    ///
    /// Configured with no redirects to prevent SSRF. Shared by the OAuth exchange,
    /// the user info lookup and the payment gateway client.
    pub http_client: reqwest::Client,

    /// OAuth2 client handling the identity provider login flow.
    pub oauth_client: OAuth2Client,

    /// Endpoint returning the signed-in user's profile.
    pub oauth_userinfo_url: String,

    /// Service for managing temporary admin codes.
    pub admin_code_service: AdminCodeService,

    /// Credentials and base URL of the payment gateway.
    pub payment_gateway: PaymentGateway,

    /// Lifetime of issued bearer tokens, in days.
    pub access_token_ttl_days: i64,
}
