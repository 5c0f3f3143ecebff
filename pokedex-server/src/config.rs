//! Process configuration
//!
//! Every knob is read from the environment exactly once at startup into an
//! explicit `ServerConfig` value; nothing downstream consults the
//! environment again.

use anyhow::Context;
use pokedex_core::Credential;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::warn;

/// Default listen port when `PORT` is not set.
const DEFAULT_PORT: u16 = 8000;

/// Environment mode controlling error verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Hide failure detail behind a generic 500 body.
    Production,
    /// Echo failure detail for debuggability.
    #[default]
    Development,
}

impl Environment {
    /// Parse an `APP_ENV` value; only the exact string `production`
    /// selects production mode.
    pub fn from_app_env(value: &str) -> Self {
        if value == "production" {
            Environment::Production
        } else {
            Environment::Development
        }
    }

    /// True in production mode.
    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// Server configuration assembled from the process environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub addr: SocketAddr,

    /// Shared-secret credential for the catalog endpoints.
    pub credential: Credential,

    /// Error-verbosity mode.
    pub environment: Environment,

    /// Optional dataset override; the embedded dataset is used when absent.
    pub dataset_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// Recognized variables: `PORT` (default 8000), `API_TOKEN`,
    /// `APP_ENV`, `POKEDEX_PATH`.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {}", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let credential = Credential::from_config(std::env::var("API_TOKEN").ok());
        if !credential.is_configured() {
            warn!("API_TOKEN is not set; every catalog request will be rejected");
        }

        let environment = std::env::var("APP_ENV")
            .map(|value| Environment::from_app_env(&value))
            .unwrap_or_default();

        let dataset_path = std::env::var("POKEDEX_PATH").ok().map(PathBuf::from);

        Ok(ServerConfig {
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
            credential,
            environment,
            dataset_path,
        })
    }
}
