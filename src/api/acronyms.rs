//! Acronym API handlers using repository pattern

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::ApiError;
use crate::domain::{Acronym, AcronymField, DomainError, User};
use crate::infrastructure::AppState;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Matched exactly against `short` or `long`
    pub term: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/acronyms",
    request_body = Acronym,
    responses(
        (status = 200, description = "Acronym stored", body = Acronym),
        (status = 400, description = "Empty field"),
        (status = 500, description = "Unknown owner or storage failure")
    ),
    tag = "acronyms"
)]
pub async fn create_acronym(
    State(state): State<AppState>,
    Json(payload): Json<Acronym>,
) -> Result<Json<Acronym>, ApiError> {
    payload.validate()?;
    let acronym = state.acronym_repo.create(payload).await?;
    Ok(Json(acronym))
}

#[utoipa::path(
    get,
    path = "/api/acronyms",
    responses((status = 200, description = "All acronyms", body = [Acronym])),
    tag = "acronyms"
)]
pub async fn list_acronyms(State(state): State<AppState>) -> Result<Json<Vec<Acronym>>, ApiError> {
    Ok(Json(state.acronym_repo.find_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/acronyms/{id}",
    params(("id" = i32, Path, description = "Acronym identifier")),
    responses(
        (status = 200, description = "Acronym found", body = Acronym),
        (status = 404, description = "Acronym not found")
    ),
    tag = "acronyms"
)]
pub async fn get_acronym(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Acronym>, ApiError> {
    Ok(Json(state.acronym_repo.find_by_id(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/acronyms/{id}",
    params(("id" = i32, Path, description = "Acronym identifier")),
    request_body = Acronym,
    responses(
        (status = 200, description = "Acronym updated", body = Acronym),
        (status = 400, description = "Empty field"),
        (status = 404, description = "Acronym not found")
    ),
    tag = "acronyms"
)]
pub async fn update_acronym(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<Acronym>,
) -> Result<Json<Acronym>, ApiError> {
    payload.validate()?;

    let mut acronym = state.acronym_repo.find_by_id(id).await?;
    acronym.short = payload.short;
    acronym.long = payload.long;
    acronym.user_id = payload.user_id;

    Ok(Json(state.acronym_repo.update(id, acronym).await?))
}

#[utoipa::path(
    delete,
    path = "/api/acronyms/{id}",
    params(("id" = i32, Path, description = "Acronym identifier")),
    responses(
        (status = 204, description = "Acronym deleted"),
        (status = 404, description = "Acronym not found")
    ),
    tag = "acronyms"
)]
pub async fn delete_acronym(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    state.acronym_repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/acronyms/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Acronyms whose short or long form equals the term", body = [Acronym]),
        (status = 400, description = "Missing `term`")
    ),
    tag = "acronyms"
)]
pub async fn search_acronyms(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<Acronym>>, ApiError> {
    let term = params
        .term
        .ok_or_else(|| DomainError::Validation("missing query parameter `term`".to_string()))?;

    tracing::debug!("Searching acronyms for {:?}", term);
    let acronyms = state
        .acronym_repo
        .filter_eq_any((AcronymField::Short, &term), (AcronymField::Long, &term))
        .await?;

    Ok(Json(acronyms))
}

#[utoipa::path(
    get,
    path = "/api/acronyms/first",
    responses(
        (status = 200, description = "First stored acronym", body = Acronym),
        (status = 404, description = "No acronyms stored")
    ),
    tag = "acronyms"
)]
pub async fn first_acronym(State(state): State<AppState>) -> Result<Json<Acronym>, ApiError> {
    state
        .acronym_repo
        .first()
        .await?
        .map(Json)
        .ok_or(ApiError(DomainError::NotFound))
}

#[utoipa::path(
    get,
    path = "/api/acronyms/sorted",
    responses((status = 200, description = "Acronyms ordered by short form", body = [Acronym])),
    tag = "acronyms"
)]
pub async fn sorted_acronyms(
    State(state): State<AppState>,
) -> Result<Json<Vec<Acronym>>, ApiError> {
    let acronyms = state
        .acronym_repo
        .sorted_by(AcronymField::Short, true)
        .await?;
    Ok(Json(acronyms))
}

#[utoipa::path(
    get,
    path = "/api/acronyms/{id}/user",
    params(("id" = i32, Path, description = "Acronym identifier")),
    responses(
        (status = 200, description = "Owner of the acronym", body = User),
        (status = 404, description = "Acronym not found")
    ),
    tag = "acronyms"
)]
pub async fn get_acronym_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<User>, ApiError> {
    let acronym = state.acronym_repo.find_by_id(id).await?;
    Ok(Json(state.acronym_repo.find_user(&acronym).await?))
}
