use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        registration::{
            CancelRegistrationDto, CancellationDto, PaginatedRegistrationsDto,
            RegisterWorkshopDto, RegistrationDto, RegistrationStatusDto,
            UpdateRegistrationStatusDto,
        },
    },
    server::{
        controller::default_per_page,
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::registration::{
            AdmissionParam, RegistrationFilter, UpdateRegistrationStatusParam,
        },
        service::registration::RegistrationService,
        state::AppState,
    },
};

/// Tag for grouping registration endpoints in OpenAPI documentation
pub static REGISTRATION_TAG: &str = "registration";

/// Query of the admin registration listing.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationListParams {
    pub workshop_id: Option<i32>,
    pub status: Option<RegistrationStatusDto>,
    #[serde(default)]
    pub page: u64,
    #[serde(rename = "per_page", default = "default_per_page")]
    pub per_page: u64,
}

/// Register for a workshop session with offline payment.
///
/// The seat is taken and the registration stored in one transaction, so the last seat
/// can only ever be granted once.
///
/// # Access Control
/// - Any signed-in user
///
/// # Returns
/// - `201 Created` - Registration in `registered` status with pending payment
/// - `400 Bad Request` - Missing required fields
/// - `404 Not Found` - Workshop inactive or missing
/// - `409 Conflict` - No spots left or already registered
#[utoipa::path(
    post,
    path = "/api/workshops/register",
    tag = REGISTRATION_TAG,
    security(("bearer" = [])),
    request_body = RegisterWorkshopDto,
    responses(
        (status = 201, description = "Registration created", body = RegistrationDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Workshop not found or inactive", body = ErrorDto),
        (status = 409, description = "No spots available or already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    bearer: BearerToken,
    Json(payload): Json<RegisterWorkshopDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &bearer).require(&[]).await?;

    let param = AdmissionParam::from_register_dto(user.id, payload)?;
    let registration = RegistrationService::new(&state.db).admit(param).await?;

    Ok((StatusCode::CREATED, Json(registration.into_dto())))
}

/// GET /api/registrations - Registrations of the signed-in user, newest first
#[utoipa::path(
    get,
    path = "/api/registrations",
    tag = REGISTRATION_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "User's registrations", body = Vec<RegistrationDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_my_registrations(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &bearer).require(&[]).await?;

    let registrations = RegistrationService::new(&state.db)
        .get_for_user(user.id)
        .await?;

    let registrations: Vec<RegistrationDto> =
        registrations.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(registrations)))
}

/// Cancel one of the signed-in user's registrations.
///
/// The refund depends on how far away the session is: 14 days or more refunds in full,
/// 7 to 13 days refunds half, anything closer refunds nothing. The seat is returned to
/// the session. The body is optional.
///
/// # Returns
/// - `200 OK` - Cancelled registration and the refund recorded
/// - `404 Not Found` - No such registration for this user
/// - `409 Conflict` - Registration already cancelled or completed
#[utoipa::path(
    put,
    path = "/api/registrations/{id}/cancel",
    tag = REGISTRATION_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Registration ID")
    ),
    request_body(content = CancelRegistrationDto, description = "Optional cancellation reason"),
    responses(
        (status = 200, description = "Registration cancelled", body = CancellationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Registration not found", body = ErrorDto),
        (status = 409, description = "Registration cannot be cancelled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_registration(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(id): Path<i32>,
    payload: Option<Json<CancelRegistrationDto>>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &bearer).require(&[]).await?;

    let reason = payload.and_then(|Json(dto)| dto.reason);
    let cancellation = RegistrationService::new(&state.db)
        .cancel(user.id, id, reason)
        .await?;

    Ok((StatusCode::OK, Json(cancellation.into_dto())))
}

/// List registrations across all users.
///
/// # Access Control
/// - `Admin` - Only admins can list every registration
///
/// # Arguments
/// - `params` - Optional workshop and status filters plus pagination
#[utoipa::path(
    get,
    path = "/api/admin/registrations",
    tag = REGISTRATION_TAG,
    security(("bearer" = [])),
    params(
        ("workshopId" = Option<i32>, Query, description = "Only registrations of this workshop"),
        ("status" = Option<RegistrationStatusDto>, Query, description = "Only registrations in this status"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("per_page" = Option<u64>, Query, description = "Items per page (default: 10, max: 100)")
    ),
    responses(
        (status = 200, description = "Page of registrations", body = PaginatedRegistrationsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_registrations(
    State(state): State<AppState>,
    bearer: BearerToken,
    Query(params): Query<RegistrationListParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let filter = RegistrationFilter {
        workshop_id: params.workshop_id,
        status: params.status.map(Into::into),
        page: params.page,
        per_page: params.per_page,
    };

    let registrations = RegistrationService::new(&state.db)
        .get_paginated(filter)
        .await?;

    Ok((StatusCode::OK, Json(registrations.into_dto())))
}

/// Change a registration's status.
///
/// Cancelled and completed registrations are final. Cancelling here applies the same
/// refund schedule as a user cancellation and returns the seat.
///
/// # Access Control
/// - `Admin` - Only admins can change registration status
#[utoipa::path(
    put,
    path = "/api/admin/registrations/{id}/status",
    tag = REGISTRATION_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Registration ID")
    ),
    request_body = UpdateRegistrationStatusDto,
    responses(
        (status = 200, description = "Registration updated", body = RegistrationDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Registration not found", body = ErrorDto),
        (status = 409, description = "Status change not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_registration_status(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRegistrationStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let param = UpdateRegistrationStatusParam {
        status: payload.status.into(),
        notes: payload.notes,
    };

    let registration = RegistrationService::new(&state.db)
        .update_status(id, param)
        .await?;

    tracing::info!(
        "Admin {} set registration {} to {:?}",
        admin.id,
        id,
        registration.status
    );

    Ok((StatusCode::OK, Json(registration.into_dto())))
}
