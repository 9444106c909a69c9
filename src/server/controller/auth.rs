use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::AccessTokenDto,
        user::UserDto,
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{AuthGuard, BearerToken},
            session::{CsrfSession, OAuthFlowSession},
        },
        service::auth::{token::AccessTokenService, AuthService},
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize)]
pub struct LoginParams {
    /// One-time code granting admin to the user who signs in with it.
    pub admin_code: Option<String>,
}

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    pub state: String,
    pub code: String,
}

/// Start sign-in with the identity provider.
///
/// Stores a CSRF state in the cookie session and redirects to the provider. A valid
/// admin code is consumed here and remembered until the callback.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    params(
        ("admin_code" = Option<String>, Query, description = "One-time admin code logged at startup")
    ),
    responses(
        (status = 307, description = "Redirect to the identity provider"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<LoginParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.oauth_userinfo_url,
        state.access_token_ttl_days,
    );

    if let Some(code) = params.admin_code {
        if state.admin_code_service.validate_and_consume(&code).await {
            OAuthFlowSession::new(&session).set_admin_flag(true).await?;
        } else {
            tracing::warn!("Login attempted with an invalid or expired admin code");
        }
    }

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Finish sign-in and issue an access token.
///
/// # Returns
/// - `200 OK` - Bearer token, its expiry and the signed-in user
/// - `400 Bad Request` - CSRF state mismatch or profile without e-mail
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state returned by the provider"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 200, description = "Signed in", body = AccessTokenDto),
        (status = 400, description = "CSRF validation failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.state).await?;

    let set_admin = OAuthFlowSession::new(&session).take_admin_flag().await?;

    let auth_service = AuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.oauth_userinfo_url,
        state.access_token_ttl_days,
    );

    let issued = auth_service.callback(params.code, set_admin).await?;

    tracing::info!("User {} signed in", issued.user.id);

    Ok((StatusCode::OK, Json(issued.into_dto())))
}

/// Revoke the presented access token.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Signed out", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &bearer).require(&[]).await?;

    let token = bearer.0.ok_or(AuthError::MissingToken)?;
    AccessTokenService::new(&state.db, state.access_token_ttl_days)
        .revoke(&token)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out successfully".to_string(),
        }),
    ))
}

/// Get the signed-in user.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Signed-in user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &bearer).require(&[]).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
