use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Shared connection pool, opened once at startup and cloned into every request.
pub type Db = PgPool;

/// The four values needed to reach the database.
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub user: String,
    pub pass: String,
    pub name: String,
}

impl DbConfig {
    /// Assemble the connection string. User and password are percent-encoded
    /// so credentials containing `@`, `:` or `/` survive URL parsing.
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}/{}",
            urlencoding::encode(&self.user),
            urlencoding::encode(&self.pass),
            self.host,
            self.name
        )
    }

    pub fn pool_options(max_connections: u32) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(3))
            .idle_timeout(Some(Duration::from_secs(600))) // 10 minutes
            .max_lifetime(Some(Duration::from_secs(1800))) // 30 minutes
    }

    pub async fn connect(&self, max_connections: u32) -> sqlx::Result<Db> {
        Self::pool_options(max_connections)
            .connect(&self.connection_url())
            .await
    }
}

// Keep the password out of logs.
impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("pass", &"***")
            .field("name", &self.name)
            .finish()
    }
}

pub async fn run_migrations(db: &Db) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(db).await
}
