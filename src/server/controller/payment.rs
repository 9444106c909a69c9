use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        payment::{CreatePaymentOrderDto, CreatedPaymentOrderDto, VerifyPaymentDto},
        registration::RegistrationDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, BearerToken},
        model::payment::{CreateOrderParam, VerifyPaymentParam},
        service::payment::PaymentService,
        state::AppState,
    },
};

/// Tag for grouping payment endpoints in OpenAPI documentation
pub static PAYMENT_TAG: &str = "payment";

/// Open a payment gateway order for a workshop session.
///
/// No seat is held while the user pays; availability is checked again when the payment
/// is verified.
///
/// # Returns
/// - `200 OK` - Gateway order and the public key to open checkout with
/// - `400 Bad Request` - Missing fields or a price that cannot be charged
/// - `404 Not Found` - Workshop inactive or missing
/// - `409 Conflict` - No spots left or already registered
/// - `502 Bad Gateway` - Payment gateway refused or failed the order
#[utoipa::path(
    post,
    path = "/api/workshops/payment/create",
    tag = PAYMENT_TAG,
    security(("bearer" = [])),
    request_body = CreatePaymentOrderDto,
    responses(
        (status = 200, description = "Gateway order created", body = CreatedPaymentOrderDto),
        (status = 400, description = "Invalid order request", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Workshop not found or inactive", body = ErrorDto),
        (status = 409, description = "No spots available or already registered", body = ErrorDto),
        (status = 502, description = "Payment gateway error", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_payment_order(
    State(state): State<AppState>,
    bearer: BearerToken,
    Json(payload): Json<CreatePaymentOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &bearer).require(&[]).await?;

    let param = CreateOrderParam::from_dto(user.id, payload)?;
    let order = PaymentService::new(&state.db, &state.http_client, &state.payment_gateway)
        .create_order(param)
        .await?;

    let key_id = state.payment_gateway.key_id().to_string();

    Ok((StatusCode::OK, Json(order.into_dto(key_id))))
}

/// Verify a completed payment and register the user.
///
/// The gateway signature must match before anything is written. The registration is
/// then admitted exactly like an offline one, with the payment recorded as paid.
///
/// # Returns
/// - `201 Created` - Paid registration
/// - `400 Bad Request` - Missing fields or signature mismatch
/// - `409 Conflict` - Session filled up, user already registered or payment already used
#[utoipa::path(
    post,
    path = "/api/workshops/payment/verify",
    tag = PAYMENT_TAG,
    security(("bearer" = [])),
    request_body = VerifyPaymentDto,
    responses(
        (status = 201, description = "Payment verified and registration created", body = RegistrationDto),
        (status = 400, description = "Invalid payment verification", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Workshop not found or inactive", body = ErrorDto),
        (status = 409, description = "No spots available, already registered or payment already used", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn verify_payment(
    State(state): State<AppState>,
    bearer: BearerToken,
    Json(payload): Json<VerifyPaymentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &bearer).require(&[]).await?;

    let param = VerifyPaymentParam::from_dto(user.id, payload)?;
    let registration = PaymentService::new(&state.db, &state.http_client, &state.payment_gateway)
        .verify(param)
        .await?;

    Ok((StatusCode::CREATED, Json(registration.into_dto())))
}
