use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{auth::TokenService, config::AppConfig};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: DatabaseConnection,
    pub tokens: TokenService,
}

impl AppState {
    pub fn new(config: AppConfig, db: DatabaseConnection) -> Arc<Self> {
        let tokens = TokenService::from_config(&config.auth);
        Arc::new(Self { config, db, tokens })
    }
}
