//! HTTP server assembly and lifecycle
//!
//! Router construction is separated from `main` so the integration tests
//! can stand up the exact middleware stack. Requests flow through,
//! outermost first: panic catcher, trace layer, CORS, compression, then the
//! bearer gate on the catalog routes only.

use crate::error::PanicResponder;
use crate::handlers;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};
use std::net::SocketAddr;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Build the application router with the full middleware stack.
pub fn build_router(state: AppState) -> Router {
    let environment = state.environment;

    // Catalog endpoints sit behind the bearer gate.
    let catalog_routes = Router::new()
        .route("/types", get(handlers::list_types))
        .route("/pokemon", get(handlers::list_pokemon))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::auth::require_bearer,
        ));

    // Operational endpoints stay reachable without a credential.
    let operational_routes = Router::new()
        .route("/health/live", get(handlers::health_live))
        .route("/health/ready", get(handlers::health_ready))
        .route("/metrics", get(handlers::metrics));

    Router::new()
        .merge(catalog_routes)
        .merge(operational_routes)
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(PanicResponder::new(environment)))
}

/// Serve the router until a shutdown signal arrives.
pub async fn serve(router: Router, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for CTRL+C (SIGINT) or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received CTRL+C, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}
