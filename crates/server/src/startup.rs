use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, ServerConfig};
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};
use service::maintenance::{
    repo::seaorm::SeaOrmMaintenanceRequestRepository,
    repository::MaintenanceRequestRepository,
};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Host/port from configuration as a socket address. Host names such as
/// `localhost` are resolved; the first address wins.
pub async fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    tokio::net::lookup_host((server.host.as_str(), server.port))
        .await?
        .next()
        .ok_or_else(|| anyhow::anyhow!("server.host {} resolved to no address", server.host))
}

/// Connect storage, apply migrations if enabled, and assemble the router.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!("database migrations applied");
    }

    let repo: Arc<dyn MaintenanceRequestRepository> = Arc::new(SeaOrmMaintenanceRequestRepository { db });
    Ok(routes::build_router(ServerState::new(repo), build_cors()))
}

/// Public entry: build the app and serve until `shutdown` resolves
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg.server).await?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "maintenance api listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("server drained");
    Ok(())
}
