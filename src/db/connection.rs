use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{config::DatabaseConfig, db::providers};

pub const ENTITY_REGISTRY_PATH: &str = "timetrack::db::entities::*";

/// Opens the pool for the configured URL and brings the schema in line with
/// the entity definitions.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let registry = providers::default_registry()?;
    let provider = registry.provider_for_url(&cfg.url)?;

    let db = provider.connect(cfg).await?;
    provider.post_connect(&db, cfg).await?;
    info!(backend = provider.id().as_str(), "database connected");

    info!("syncing database schema from entities");
    db.get_schema_registry(ENTITY_REGISTRY_PATH).sync(&db).await?;
    Ok(db)
}
