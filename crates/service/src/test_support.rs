#![cfg(test)]
use configs::DatabaseConfig;
use migration::MigratorTrait;
use models::db::connect_with_config;
use sea_orm::DatabaseConnection;

/// Fresh migrated in-memory database per test. One pooled connection keeps
/// all checkouts on the same in-memory file.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        acquire_timeout_secs: 10,
        ..Default::default()
    };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
