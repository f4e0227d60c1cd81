pub mod config;
pub mod db;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use sqlx::PgPool;

use crate::services::auth::Authenticator;

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: config::AppConfig,
    pub auth: Authenticator,
}

impl AppState {
    pub fn new(db: PgPool, config: config::AppConfig) -> Self {
        let auth = Authenticator::from_config(&config, &db);
        Self { db, config, auth }
    }
}
