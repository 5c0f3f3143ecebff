//! Pokedex HTTP server binary

use anyhow::Context;
use pokedex_core::Catalog;
use pokedex_server::{server, AppState, ServerConfig};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,pokedex_core=debug,pokedex_server=debug")),
        )
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting pokedex HTTP server v{}", env!("CARGO_PKG_VERSION"));

    // Initialize Prometheus metrics
    pokedex_server::metrics::init_prometheus()?;
    pokedex_server::metrics::init_metrics();

    let config = ServerConfig::from_env()?;

    let catalog = match &config.dataset_path {
        Some(path) => Catalog::from_path(path)
            .with_context(|| format!("failed to load dataset from {}", path.display()))?,
        None => Catalog::builtin().context("embedded dataset failed to load")?,
    };

    info!("Catalog loaded: {} entries", catalog.len());
    pokedex_server::metrics::record_catalog_size(catalog.len());

    let state = AppState::new(
        Arc::new(catalog),
        config.credential.clone(),
        config.environment,
    );
    let router = server::build_router(state);

    server::serve(router, config.addr).await
}
