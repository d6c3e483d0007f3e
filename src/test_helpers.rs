use std::sync::Arc;

use axum::Router;

use crate::{
    config::{AppConfig, AuthConfig, DatabaseConfig},
    db::connection,
    routes::app,
    state::AppState,
};

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Defaults with a private in-memory SQLite database and a fixed secret.
pub fn test_config() -> AppConfig {
    AppConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..DatabaseConfig::default()
        },
        auth: AuthConfig {
            jwt_secret: TEST_JWT_SECRET.to_string(),
            ..AuthConfig::default()
        },
        ..AppConfig::default()
    }
}

/// A fully layered app over a fresh schema. Each call gets its own database.
pub async fn test_app() -> anyhow::Result<(Router, Arc<AppState>)> {
    let cfg = test_config();
    let db = connection::connect(&cfg.database).await?;
    let state = AppState::new(cfg, db);
    Ok((app(Arc::clone(&state)), state))
}
