//! Sign-in through the OAuth2 identity provider and bearer token issuance.
//!
//! `AuthService` drives the authorization code flow: `login_url` starts it and `callback`
//! finishes it by upserting the user and issuing an access token through
//! `AccessTokenService`.

use sea_orm::DatabaseConnection;

use crate::server::state::OAuth2Client;

pub mod callback;
pub mod login;
pub mod token;

pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    /// Endpoint returning the signed-in user's profile.
    pub userinfo_url: &'a str,
    /// Lifetime of issued access tokens, in days.
    pub token_ttl_days: i64,
}

impl<'a> AuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        userinfo_url: &'a str,
        token_ttl_days: i64,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            userinfo_url,
            token_ttl_days,
        }
    }
}
