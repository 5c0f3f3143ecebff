//! Pokedex HTTP Server - read-only catalog lookup API
//!
//! Serves the static pokemon catalog over two bearer-gated endpoints
//! (`/types`, `/pokemon`) plus unauthenticated health and metrics routes.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod server;
pub mod state;

pub use api::{HealthResponse, HealthStatus, ListParams};
pub use config::{Environment, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
