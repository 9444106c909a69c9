use oauth2::{AuthorizationCode, TokenResponse};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::{
        auth::{IssuedToken, ProviderUserInfo},
        user::UpsertUserParam,
    },
    service::auth::{token::AccessTokenService, AuthService},
};

impl<'a> AuthService<'a> {
    /// Completes the authorization code flow.
    ///
    /// Exchanges the code, fetches the provider profile, upserts the user by e-mail and
    /// issues an access token. Admin status is only ever granted here, never revoked.
    ///
    /// # Arguments
    /// - `authorization_code` - Code from the provider redirect
    /// - `set_admin` - Whether a valid admin code was presented at login
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Plaintext token, expiry and user
    /// - `Err(AuthError::TokenExchange)` - Provider rejected the code
    /// - `Err(AuthError::MissingEmail)` - Profile carried no e-mail address
    /// - `Err(AppError::ReqwestErr)` - Profile request failed
    pub async fn callback(
        &self,
        authorization_code: String,
        set_admin: bool,
    ) -> Result<IssuedToken, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let profile = self
            .fetch_user_info(token.access_token().secret())
            .await?;

        let param = upsert_param(profile, set_admin)?;
        let user = UserRepository::new(self.db).upsert(param).await?;

        if set_admin {
            tracing::info!("User {} has been set as admin", user.email);
        }

        AccessTokenService::new(self.db, self.token_ttl_days)
            .issue(user)
            .await
    }

    async fn fetch_user_info(&self, access_token: &str) -> Result<ProviderUserInfo, AppError> {
        let profile = self
            .http_client
            .get(self.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<ProviderUserInfo>()
            .await?;

        Ok(profile)
    }
}

/// Maps a provider profile onto the user upsert.
///
/// Users are keyed by e-mail. A missing display name falls back to the e-mail's local part.
fn upsert_param(profile: ProviderUserInfo, set_admin: bool) -> Result<UpsertUserParam, AuthError> {
    let email = profile
        .email
        .map(|email| email.trim().to_lowercase())
        .filter(|email| !email.is_empty())
        .ok_or(AuthError::MissingEmail)?;

    let name = profile
        .name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());

    Ok(UpsertUserParam {
        email,
        name,
        provider_subject: Some(profile.sub),
        is_admin: set_admin.then_some(true),
    })
}
