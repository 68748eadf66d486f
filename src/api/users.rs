//! User lookup endpoints

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};

use crate::{
    error::AppResult,
    models::User,
    AppState,
};

use super::ApiResponse;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/", get(list_users))
        .route("/users/:id", get(get_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResponse<Vec<User>> {
    ApiResponse::data(state.services.users.list_users())
}

/// Get user details by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User details", body = User),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<User>> {
    let user = state.services.users.get_user(&id)?;
    Ok(ApiResponse::data(user))
}
