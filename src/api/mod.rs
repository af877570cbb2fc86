pub mod acronyms;
pub mod error;
pub mod health;
pub mod users;

pub use error::ApiError;

use axum::{Router, routing::get};

use crate::infrastructure::AppState;

/// Explicit (verb, path) -> handler table for everything under `/api`
pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Acronyms
        .route(
            "/acronyms",
            get(acronyms::list_acronyms).post(acronyms::create_acronym),
        )
        .route("/acronyms/search", get(acronyms::search_acronyms))
        .route("/acronyms/first", get(acronyms::first_acronym))
        .route("/acronyms/sorted", get(acronyms::sorted_acronyms))
        .route(
            "/acronyms/:id",
            get(acronyms::get_acronym)
                .put(acronyms::update_acronym)
                .delete(acronyms::delete_acronym),
        )
        .route("/acronyms/:id/user", get(acronyms::get_acronym_user))
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/users/:id/acronyms", get(users::get_user_acronyms))
        .with_state(state)
}
