use std::time::Duration;

use configs::DatabaseConfig;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tracing::info;

use crate::errors::ModelError;

/// Open the process-wide pool. Connections are checked out per query and
/// returned to the pool when the query future completes or is dropped.
pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(cfg)).await?;
    info!(
        backend = ?db.get_database_backend(),
        max_connections = cfg.max_connections,
        min_connections = cfg.min_connections,
        "database pool ready"
    );
    Ok(db)
}

pub fn connect_options(cfg: &DatabaseConfig) -> ConnectOptions {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(cfg.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(cfg.max_lifetime_secs))
        .sqlx_logging(cfg.sqlx_logging);
    opt
}

/// Round-trip to the database; used by readiness checks.
pub async fn test_connection(db: &DatabaseConnection) -> Result<(), ModelError> {
    db.ping().await.map_err(ModelError::from)
}
