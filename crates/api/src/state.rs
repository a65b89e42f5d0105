use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::BreedService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: warren_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Breed aggregate service (owns transaction boundaries).
    pub breeds: BreedService,
}

impl AppState {
    pub fn new(pool: warren_db::DbPool, config: ServerConfig) -> Self {
        Self {
            breeds: BreedService::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
