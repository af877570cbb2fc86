//! User API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use super::ApiError;
use crate::domain::{Acronym, User};
use crate::infrastructure::AppState;

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = User,
    responses(
        (status = 200, description = "User stored", body = User),
        (status = 400, description = "Empty field")
    ),
    tag = "users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<User>,
) -> Result<Json<User>, ApiError> {
    payload.validate()?;
    Ok(Json(state.user_repo.create(payload).await?))
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses((status = 200, description = "All users", body = [User])),
    tag = "users"
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(state.user_repo.find_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(state.user_repo.find_by_id(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User identifier")),
    request_body = User,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Empty field"),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<User>,
) -> Result<Json<User>, ApiError> {
    payload.validate()?;

    let mut user = state.user_repo.find_by_id(id).await?;
    user.name = payload.name;
    user.username = payload.username;

    Ok(Json(state.user_repo.update(id, user).await?))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = Uuid, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found"),
        (status = 409, description = "User still owns acronyms")
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.user_repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/users/{id}/acronyms",
    params(("id" = Uuid, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Acronyms owned by the user", body = [Acronym]),
        (status = 404, description = "User not found")
    ),
    tag = "users"
)]
pub async fn get_user_acronyms(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Acronym>>, ApiError> {
    let user = state.user_repo.find_by_id(id).await?;
    Ok(Json(state.user_repo.find_acronyms(&user).await?))
}
