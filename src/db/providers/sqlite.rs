use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection};

use super::registry::{DbProvider, DbProviderId, pool_options};
use crate::config::DatabaseConfig;

const SQLITE_BUSY_TIMEOUT_MS: u64 = 5_000;

pub struct SqliteDbProvider;

impl SqliteDbProvider {
    /// Every connection to `:memory:` opens its own empty database.
    fn is_in_memory(url: &str) -> bool {
        let url = url.trim().to_ascii_lowercase();
        url.contains(":memory:") || url.contains("mode=memory")
    }
}

#[async_trait]
impl DbProvider for SqliteDbProvider {
    fn id(&self) -> DbProviderId {
        DbProviderId::Sqlite
    }

    fn supports_url(&self, url: &str) -> bool {
        url.trim().to_ascii_lowercase().starts_with("sqlite:")
    }

    async fn connect(&self, cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
        let options = if Self::is_in_memory(&cfg.url) {
            pool_options(cfg, 1, 1)
        } else {
            pool_options(cfg, cfg.max_connections, cfg.min_idle)
        };

        let db = Database::connect(options).await?;
        Ok(db)
    }

    async fn post_connect(&self, db: &DatabaseConnection, _cfg: &DatabaseConfig) -> Result<()> {
        db.execute_unprepared("PRAGMA foreign_keys = ON").await?;
        db.execute_unprepared(&format!("PRAGMA busy_timeout = {SQLITE_BUSY_TIMEOUT_MS}"))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SqliteDbProvider;

    #[test]
    fn detects_in_memory_urls() {
        assert!(SqliteDbProvider::is_in_memory("sqlite::memory:"));
        assert!(SqliteDbProvider::is_in_memory("sqlite://file:test?mode=memory"));
        assert!(!SqliteDbProvider::is_in_memory("sqlite://timetrack.db?mode=rwc"));
    }
}
