//! Type-safe session management wrappers.
//!
//! The server session only lives for the length of a login redirect. API requests are
//! authenticated with bearer tokens instead (see `middleware::auth`).
//!
//! - `CsrfSession` - CSRF state for the OAuth flow
//! - `OAuthFlowSession` - Whether a valid admin code was presented at login

use tower_sessions::Session;

use crate::server::error::AppError;

const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";
const SESSION_AUTH_SET_ADMIN: &str = "auth:set_admin";

/// CSRF protection session management.
///
/// Handles CSRF token storage and validation for OAuth flows. Tokens are stored
/// during login initiation and validated during the OAuth callback.
pub struct CsrfSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores a CSRF token in the session.
    ///
    /// # Arguments
    /// - `token` - The CSRF token to store
    ///
    /// # Returns
    /// - `Ok(())` - Token successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// Each token validates at most one callback.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - CSRF token was found and removed
    /// - `Ok(None)` - No CSRF token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}

/// OAuth flow state session management.
///
/// Carries the admin code result across the redirect to the identity provider.
pub struct OAuthFlowSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> OAuthFlowSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Records whether the login started with a valid admin code.
    ///
    /// # Arguments
    /// - `set_admin` - Whether to grant admin privileges
    ///
    /// # Returns
    /// - `Ok(())` - Flag successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_admin_flag(&self, set_admin: bool) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_SET_ADMIN, set_admin)
            .await?;
        Ok(())
    }

    /// Retrieves and removes the admin flag from the session.
    ///
    /// # Returns
    /// - `Ok(true)` - Admin code was validated, grant admin privileges
    /// - `Ok(false)` - No admin code was validated
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_admin_flag(&self) -> Result<bool, AppError> {
        let set_admin = self
            .session
            .remove(SESSION_AUTH_SET_ADMIN)
            .await?
            .unwrap_or(false);
        Ok(set_admin)
    }
}
