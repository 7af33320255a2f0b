use std::env;

use anyhow::{Context, Result};
use infra::db::DbConfig;

/// Process configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub db: DbConfig,
    pub max_connections: u32,
    pub skip_migrations: bool,
    pub port: u16,
    pub introspection: bool,
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            db: DbConfig {
                host: required("DB_HOST")?,
                user: required("DB_USER")?,
                pass: required("DB_PASS")?,
                name: required("DB_NAME")?,
            },
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            skip_migrations: flag("SKIP_MIGRATIONS", false),
            port: env::var("PORT")
                .unwrap_or_else(|_| "4000".into())
                .parse()
                .context("PORT must be a valid port number")?,
            introspection: flag("GQL_INTROSPECTION", true),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000".to_string())
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect(),
        })
    }
}

fn required(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("{key} must be set"))
}

fn flag(key: &str, default: bool) -> bool {
    env::var(key)
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(default)
}
