use anyhow::{Result, bail};
use axum::http::HeaderValue;

use super::{AppConfig, defaults::MIN_JWT_SECRET_BYTES};

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let errors = collect_errors(cfg);
    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

fn collect_errors(cfg: &AppConfig) -> Vec<String> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if cfg.database.url.trim().is_empty() {
        errors.push("database.url must not be empty".to_string());
    }

    if cfg.database.max_connections == 0 {
        errors.push("database.max_connections must be > 0".to_string());
    }

    if cfg.database.min_idle > cfg.database.max_connections {
        errors.push(format!(
            "database.min_idle ({}) must be <= database.max_connections ({})",
            cfg.database.min_idle, cfg.database.max_connections
        ));
    }

    if cfg.auth.jwt_secret.trim().is_empty() {
        errors.push("auth.jwt_secret must not be empty".to_string());
    } else if cfg.auth.jwt_secret.len() < MIN_JWT_SECRET_BYTES {
        errors.push(format!(
            "auth.jwt_secret must be at least {MIN_JWT_SECRET_BYTES} bytes"
        ));
    }

    if cfg.auth.access_token_ttl_secs == 0 {
        errors.push("auth.access_token_ttl_secs must be > 0".to_string());
    }

    for origin in cfg.cors.origins() {
        if HeaderValue::from_str(&origin).is_err() {
            errors.push(format!("cors.allowed_origins contains an invalid origin: {origin}"));
        }
    }

    errors
}
