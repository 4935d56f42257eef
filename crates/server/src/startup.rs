use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use service::stock::{repo::seaorm::SeaOrmStockRepository, StockService};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Wire repository, service and router over an open connection.
pub fn build_app(db: DatabaseConnection) -> Router {
    let repo = Arc::new(SeaOrmStockRepository::new(db));
    let stock_service = Arc::new(StockService::new(repo));
    routes::build_router(stock_service, build_cors())
}

/// Apply pending schema migrations.
pub async fn migrate(db: &DatabaseConnection) -> anyhow::Result<()> {
    migration::Migrator::up(db, None).await?;
    info!("migrations applied");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "cannot listen for Ctrl+C; shutdown only on process exit");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, draining connections");
}

/// Public entry: connect, migrate, and serve `cfg` until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let addr: SocketAddr = cfg
        .server
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server bind address {}: {e}", cfg.server.bind_addr())))?;

    common::env::ensure_sqlite_dir(&cfg.database.url).await?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    migrate(&db).await?;

    let app = build_app(db);

    info!(%addr, "starting stock server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
