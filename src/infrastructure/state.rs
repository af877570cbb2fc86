//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{AcronymRepository, UserRepository};
use crate::infrastructure::{SeaOrmAcronymRepository, SeaOrmUserRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Acronym repository
    pub acronym_repo: Arc<dyn AcronymRepository>,
    /// User repository
    pub user_repo: Arc<dyn UserRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let acronym_repo = Arc::new(SeaOrmAcronymRepository::new(db.clone()));
        let user_repo = Arc::new(SeaOrmUserRepository::new(db));

        Self {
            acronym_repo,
            user_repo,
        }
    }
}
