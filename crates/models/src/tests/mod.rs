
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Fresh in-memory SQLite with the schema applied. A single connection keeps
/// every query on the same in-memory database.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = DatabaseConfig {
        url: "sqlite::memory:".into(),
        max_connections: 1,
        min_connections: 1,
        ..Default::default()
    };
    let db = crate::db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
