//! User registration.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{RegisterUserRequest, UserEnvelope};
use crate::app_state::AppState;
use crate::data::{User, validate_user};
use crate::error::{ApiError, ErrorResponse};
use crate::validator::Validator;

/// `POST /v1/users`: Register a new, inactive user.
///
/// # Errors
///
/// Returns [`ApiError::FailedValidation`] if a field breaks a rule or the
/// email address is already registered.
#[utoipa::path(
    post,
    path = "/v1/users",
    tag = "Users",
    summary = "Register a user",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered", body = UserEnvelope),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 422, description = "Validation failed or email taken", body = ErrorResponse),
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<RegisterUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload?;

    let mut user = User::new(req.name, req.email);
    let mut v = Validator::new();
    validate_user(&mut v, &user, Some(req.password.as_str()));
    if !v.valid() {
        return Err(ApiError::FailedValidation(v.into_errors()));
    }

    state.models.users.insert(&mut user, &req.password).await?;
    tracing::info!(id = user.id, "user registered");

    Ok((StatusCode::CREATED, Json(UserEnvelope { user })))
}

/// User routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/users", post(register_user))
}
