//! User record handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::USER_DELETED_MESSAGE;
use crate::domain::{User, UserDto};
use crate::errors::AppResult;

/// Create user record routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_user))
        .route("/get", get(get_user_info))
        .route("/update", put(update_user_info))
        .route("/delete", delete(delete_user))
}

/// Create the user record, overwriting any existing one
#[utoipa::path(
    post,
    path = "/user/create",
    tag = "User",
    request_body = UserDto,
    responses(
        (status = 201, description = "User record stored", body = User),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserDto>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.user_service.create_user(payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get the current user record
#[utoipa::path(
    get,
    path = "/user/get",
    tag = "User",
    responses(
        (status = 200, description = "Current user record", body = User),
        (status = 404, description = "No user record present")
    )
)]
pub async fn get_user_info(State(state): State<AppState>) -> AppResult<Json<User>> {
    let user = state.user_service.get_user_info().await?;

    Ok(Json(user))
}

/// Replace the existing user record
#[utoipa::path(
    put,
    path = "/user/update",
    tag = "User",
    request_body = UserDto,
    responses(
        (status = 200, description = "User record replaced", body = User),
        (status = 400, description = "Validation error"),
        (status = 404, description = "No user record present")
    )
)]
pub async fn update_user_info(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserDto>,
) -> AppResult<Json<User>> {
    let user = state.user_service.update_user_info(payload).await?;

    Ok(Json(user))
}

/// Delete the user record
#[utoipa::path(
    delete,
    path = "/user/delete",
    tag = "User",
    responses(
        (status = 200, description = "User record deleted", body = String),
        (status = 404, description = "No user record present")
    )
)]
pub async fn delete_user(State(state): State<AppState>) -> AppResult<&'static str> {
    state.user_service.delete_user().await?;

    Ok(USER_DELETED_MESSAGE)
}
