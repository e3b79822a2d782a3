use std::future::Future;

use axum::Router;
use configs::{AppConfig, ContactConfig};
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{routes, state::AppState};

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the pool, bind, and serve until Ctrl+C.
pub async fn run_with_config(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    serve(listener, db, cfg.contact, shutdown_signal()).await
}

/// Serve on `listener` until `shutdown` resolves, then close the pool once
/// in-flight requests have drained.
pub async fn serve<F>(
    listener: TcpListener,
    db: DatabaseConnection,
    contact: ContactConfig,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = AppState::new(db.clone(), contact);
    let app: Router = routes::build_router(state, build_cors());

    let addr = listener.local_addr()?;
    info!(%addr, "starting bestcake api");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("http server stopped, closing database pool");
    db.close().await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; serving until the process is killed");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}
