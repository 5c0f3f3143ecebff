//! API request and response types

use pokedex_core::CatalogQuery;
use serde::{Deserialize, Serialize};

/// Query parameters accepted by the pokemon listing endpoint.
///
/// Absent parameters pass every entry through. The transport distinguishes
/// absent from empty: `?name=` arrives as `Some("")` and is a real filter.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Case-insensitive substring filter on the entry name.
    #[serde(default)]
    pub name: Option<String>,

    /// Exact membership filter against the entry's type tags.
    #[serde(default, rename = "type")]
    pub type_tag: Option<String>,
}

impl ListParams {
    /// Convert into the core query representation.
    pub fn into_query(self) -> CatalogQuery {
        CatalogQuery {
            name: self.name,
            type_tag: self.type_tag,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Service status
    pub status: HealthStatus,

    /// Service version
    pub version: String,

    /// Uptime in seconds
    pub uptime_seconds: u64,

    /// Number of entries in the loaded catalog
    pub catalog_entries: usize,

    /// Number of tags in the type enumeration
    pub known_types: usize,
}

/// Health status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// Service is healthy
    Healthy,
    /// Service is up but serving an empty catalog
    Degraded,
    /// Service is unhealthy
    Unhealthy,
}
