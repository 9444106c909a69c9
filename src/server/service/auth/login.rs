use oauth2::{CsrfToken, Scope};
use url::Url;

use crate::server::service::auth::AuthService;

impl<'a> AuthService<'a> {
    /// Builds the provider consent URL with a fresh CSRF state.
    ///
    /// Requests the `openid`, `email` and `profile` scopes; the e-mail address is what
    /// identifies a user.
    ///
    /// # Returns
    /// - `(Url, CsrfToken)` - Authorization URL and the state to store in the session
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url()
    }
}
