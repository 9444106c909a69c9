use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        workshop::{AvailabilityDto, SaveWorkshopDto, WorkshopDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken, Permission},
        model::workshop::SaveWorkshopParam,
        service::workshop::WorkshopService,
        state::AppState,
    },
};

/// Tag for grouping workshop endpoints in OpenAPI documentation
pub static WORKSHOP_TAG: &str = "workshop";

/// List active workshops.
///
/// Returns every active workshop with its sessions, newest first.
///
/// # Returns
/// - `200 OK` - Active workshops
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/workshops",
    tag = WORKSHOP_TAG,
    responses(
        (status = 200, description = "Active workshops", body = Vec<WorkshopDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_workshops(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let workshops = WorkshopService::new(&state.db).get_active().await?;

    let workshops: Vec<WorkshopDto> = workshops.into_iter().map(|w| w.into_dto()).collect();

    Ok((StatusCode::OK, Json(workshops)))
}

/// Get one active workshop.
///
/// # Returns
/// - `200 OK` - Workshop with sessions
/// - `404 Not Found` - Workshop missing or inactive
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/workshops/{id}",
    tag = WORKSHOP_TAG,
    params(
        ("id" = i32, Path, description = "Workshop ID")
    ),
    responses(
        (status = 200, description = "Workshop details", body = WorkshopDto),
        (status = 404, description = "Workshop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_workshop(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let workshop = WorkshopService::new(&state.db).get_active_by_id(id).await?;

    Ok((StatusCode::OK, Json(workshop.into_dto())))
}

/// Check seat availability for one session.
///
/// A date on which the workshop holds no session reports no seats rather than an error.
///
/// # Returns
/// - `200 OK` - Availability of the session
/// - `404 Not Found` - Workshop missing or inactive
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/workshops/{id}/sessions/{date}/availability",
    tag = WORKSHOP_TAG,
    params(
        ("id" = i32, Path, description = "Workshop ID"),
        ("date" = String, Path, description = "Session date, YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Session availability", body = AvailabilityDto),
        (status = 404, description = "Workshop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_availability(
    State(state): State<AppState>,
    Path((id, date)): Path<(i32, NaiveDate)>,
) -> Result<impl IntoResponse, AppError> {
    let session = WorkshopService::new(&state.db).get_session(id, date).await?;

    let availability = match session {
        Some(session) => AvailabilityDto {
            available: session.has_available_spots(),
            spots: session.spots,
        },
        None => AvailabilityDto {
            available: false,
            spots: 0,
        },
    };

    Ok((StatusCode::OK, Json(availability)))
}

/// List all workshops, inactive ones included.
///
/// # Access Control
/// - `Admin` - Only admins can see inactive workshops
#[utoipa::path(
    get,
    path = "/api/admin/workshops",
    tag = WORKSHOP_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All workshops", body = Vec<WorkshopDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_workshops(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let workshops = WorkshopService::new(&state.db).get_all().await?;

    let workshops: Vec<WorkshopDto> = workshops.into_iter().map(|w| w.into_dto()).collect();

    Ok((StatusCode::OK, Json(workshops)))
}

/// Create a workshop with its sessions.
///
/// Sessions without an explicit seat count are allocated the workshop capacity.
///
/// # Access Control
/// - `Admin` - Only admins can create workshops
///
/// # Returns
/// - `201 Created` - Created workshop
/// - `400 Bad Request` - Missing or invalid fields
/// - `401 Unauthorized` / `403 Forbidden` - Not signed in or not an admin
#[utoipa::path(
    post,
    path = "/api/admin/workshops",
    tag = WORKSHOP_TAG,
    security(("bearer" = [])),
    request_body = SaveWorkshopDto,
    responses(
        (status = 201, description = "Workshop created", body = WorkshopDto),
        (status = 400, description = "Invalid workshop data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_workshop(
    State(state): State<AppState>,
    bearer: BearerToken,
    Json(payload): Json<SaveWorkshopDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let workshop = WorkshopService::new(&state.db)
        .create(SaveWorkshopParam::from(payload))
        .await?;

    tracing::info!("Admin {} created workshop {}", admin.id, workshop.id);

    Ok((StatusCode::CREATED, Json(workshop.into_dto())))
}

/// Replace a workshop's fields and sessions.
///
/// Sessions are matched by date: listed dates take the new allocation with booked seats
/// still taken, new dates are added and dates no longer listed are removed. Shrinking a
/// session below its bookings or removing a booked date is refused.
///
/// # Access Control
/// - `Admin` - Only admins can update workshops
#[utoipa::path(
    put,
    path = "/api/admin/workshops/{id}",
    tag = WORKSHOP_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Workshop ID")
    ),
    request_body = SaveWorkshopDto,
    responses(
        (status = 200, description = "Workshop updated", body = WorkshopDto),
        (status = 400, description = "Invalid workshop data or sessions conflict with bookings", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Workshop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_workshop(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<SaveWorkshopDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let workshop = WorkshopService::new(&state.db)
        .update(id, SaveWorkshopParam::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(workshop.into_dto())))
}

/// Delete a workshop together with its sessions and registrations.
///
/// # Access Control
/// - `Admin` - Only admins can delete workshops
#[utoipa::path(
    delete,
    path = "/api/admin/workshops/{id}",
    tag = WORKSHOP_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Workshop ID")
    ),
    responses(
        (status = 200, description = "Workshop deleted", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Workshop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_workshop(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &bearer)
        .require(&[Permission::Admin])
        .await?;

    WorkshopService::new(&state.db).delete(id).await?;

    tracing::info!("Admin {} deleted workshop {}", admin.id, id);

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Workshop deleted successfully".to_string(),
        }),
    ))
}

/// Flip a workshop between active and inactive.
///
/// # Access Control
/// - `Admin` - Only admins can toggle workshops
#[utoipa::path(
    patch,
    path = "/api/admin/workshops/{id}/toggle-status",
    tag = WORKSHOP_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Workshop ID")
    ),
    responses(
        (status = 200, description = "Workshop with its new status", body = WorkshopDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Workshop not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn toggle_workshop_status(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let workshop = WorkshopService::new(&state.db).toggle_status(id).await?;

    Ok((StatusCode::OK, Json(workshop.into_dto())))
}
