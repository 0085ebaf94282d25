use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `config.toml` (or `CONFIG_PATH`), falling back to environment
/// variables when the file is absent. The result is normalized and validated.
pub fn load_config() -> Result<AppConfig, StartupError> {
    dotenvy::dotenv().ok();
    AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(format!("{e:#}")))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(err = %e, "cannot listen for Ctrl+C; shutdown only by process kill");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Open the pool, apply the schema, and serve until Ctrl+C. The pool is
/// closed after the server has drained.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    info!("schema up to date");

    let state = ServerState::new(db.clone());
    let app: Router = routes::build_router(state, build_cors());

    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "starting product catalog server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    info!("database pool closed");
    Ok(())
}
