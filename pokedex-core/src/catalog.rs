//! In-memory catalog and query filtering
//!
//! The catalog is loaded and validated once at startup and never mutated
//! afterwards; every query derives a fresh result vector, so a shared
//! reference can serve concurrent readers without coordination.

use crate::error::{PokedexError, Result};
use crate::types::{is_valid_type, Pokemon};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Dataset document shape: `{"pokemon": [...]}`
#[derive(Debug, Deserialize)]
struct Dataset {
    pokemon: Vec<Pokemon>,
}

/// Dataset embedded in the binary, used when no override path is configured.
const BUILTIN_DATASET: &str = include_str!("../data/pokedex.json");

/// Immutable, validated catalog of pokemon entries.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Pokemon>,
}

impl Catalog {
    /// Validate entries and build a catalog.
    ///
    /// Every name must be non-empty and every tag must belong to the type
    /// enumeration; the first violation aborts the load.
    pub fn from_entries(entries: Vec<Pokemon>) -> Result<Self> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.name.is_empty() {
                return Err(PokedexError::EmptyName { index });
            }
            for tag in &entry.types {
                if !is_valid_type(tag) {
                    return Err(PokedexError::UnknownType {
                        name: entry.name.clone(),
                        tag: tag.clone(),
                    });
                }
            }
        }

        debug!("catalog loaded: {} entries", entries.len());

        Ok(Catalog { entries })
    }

    /// Load and validate a catalog from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        Self::from_entries(dataset.pokemon)
    }

    /// Load and validate a catalog from a dataset file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Load the dataset embedded in the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_DATASET)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in source order.
    pub fn entries(&self) -> &[Pokemon] {
        &self.entries
    }

    /// Evaluate a query, returning matching entries in source order.
    ///
    /// Filters are conjunctive; the result is a stable subsequence of the
    /// source list and an empty vector when nothing matches.
    pub fn query(&self, query: &CatalogQuery) -> Vec<Pokemon> {
        let name_needle = query.name.as_deref().map(str::to_lowercase);

        self.entries
            .iter()
            .filter(|entry| {
                let name_ok = name_needle
                    .as_deref()
                    .map_or(true, |needle| entry.name.to_lowercase().contains(needle));
                let type_ok = query
                    .type_tag
                    .as_deref()
                    .map_or(true, |tag| entry.types.iter().any(|t| t == tag));
                name_ok && type_ok
            })
            .cloned()
            .collect()
    }
}

/// Optional filters applied conjunctively to the catalog.
///
/// An absent filter passes every entry through. An empty string is a real
/// filter: an empty name needle matches every entry (the empty string is a
/// substring of everything) while an empty type tag matches none (no tag in
/// the enumeration is empty).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    /// Case-insensitive substring match on the entry name.
    pub name: Option<String>,
    /// Exact, case-sensitive membership match against the entry's type tags.
    pub type_tag: Option<String>,
}

impl CatalogQuery {
    /// Query with no filters; matches every entry.
    pub fn unfiltered() -> Self {
        Self::default()
    }

    /// Restrict to entries whose name contains `needle`, case-insensitively.
    pub fn with_name(mut self, needle: impl Into<String>) -> Self {
        self.name = Some(needle.into());
        self
    }

    /// Restrict to entries whose tags contain `tag` verbatim.
    pub fn with_type(mut self, tag: impl Into<String>) -> Self {
        self.type_tag = Some(tag.into());
        self
    }
}
