use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, payment, registration, user, workshop},
    error::{config::ConfigError, AppError},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Anantam Workshops API", description = "Workshop catalog, registration and payments"),
    modifiers(&BearerSecurity),
    tags(
        (name = "auth", description = "Sign-in and access tokens"),
        (name = "workshop", description = "Workshop catalog and session availability"),
        (name = "registration", description = "Workshop registrations and cancellations"),
        (name = "payment", description = "Online payment orders and verification"),
        (name = "user", description = "User administration")
    )
)]
struct ApiDoc;

/// Registers the `bearer` security scheme referenced by protected endpoints.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

/// Builds the API router with its OpenAPI document served at `/api/docs`.
///
/// # Arguments
/// - `app_url` - Frontend origin allowed by CORS
///
/// # Returns
/// - `Ok(Router)` - Router awaiting its state and session layer
/// - `Err(AppError::ConfigErr)` - `app_url` is not a valid origin header value
pub fn router(app_url: &str) -> Result<Router<AppState>, AppError> {
    let (router, api) = OpenApiRouter::<AppState>::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(workshop::get_workshops))
        .routes(routes!(workshop::get_workshop))
        .routes(routes!(workshop::get_availability))
        .routes(routes!(registration::register))
        .routes(routes!(payment::create_payment_order))
        .routes(routes!(payment::verify_payment))
        .routes(routes!(registration::get_my_registrations))
        .routes(routes!(registration::cancel_registration))
        .routes(routes!(
            workshop::get_all_workshops,
            workshop::create_workshop
        ))
        .routes(routes!(workshop::update_workshop, workshop::delete_workshop))
        .routes(routes!(workshop::toggle_workshop_status))
        .routes(routes!(registration::get_registrations))
        .routes(routes!(registration::update_registration_status))
        .routes(routes!(user::get_users))
        .routes(routes!(user::set_user_admin))
        .split_for_parts();

    Ok(router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(cors_layer(app_url)?))
}

fn cors_layer(app_url: &str) -> Result<CorsLayer, ConfigError> {
    let origin = HeaderValue::from_str(app_url.trim_end_matches('/')).map_err(|e| {
        ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true))
}
