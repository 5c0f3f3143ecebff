//! Application state

use crate::config::Environment;
use pokedex_core::{Catalog, Credential};
use std::sync::Arc;
use std::time::Instant;

/// Application state shared across handlers
///
/// Everything in here is read-only after startup, so handlers can run
/// concurrently without coordination.
#[derive(Clone)]
pub struct AppState {
    /// The immutable catalog served by the API
    pub catalog: Arc<Catalog>,

    /// Shared-secret credential checked by the auth gate
    pub credential: Arc<Credential>,

    /// Error-verbosity mode
    pub environment: Environment,

    /// Server start time
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(catalog: Arc<Catalog>, credential: Credential, environment: Environment) -> Self {
        Self {
            catalog,
            credential: Arc::new(credential),
            environment,
            start_time: Instant::now(),
        }
    }

    /// Get uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
