//! Error types for the pokedex catalog

use thiserror::Error;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Dataset file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset was not a JSON document of the expected shape
    #[error("Malformed dataset: {0}")]
    Malformed(#[from] serde_json::Error),

    /// An entry carries a tag outside the type enumeration
    #[error("Entry \"{name}\" has unknown type tag \"{tag}\"")]
    UnknownType {
        /// Name of the offending entry
        name: String,
        /// The tag that failed validation
        tag: String,
    },

    /// An entry has an empty name
    #[error("Entry at index {index} has an empty name")]
    EmptyName {
        /// Position of the offending entry in the dataset
        index: usize,
    },
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, PokedexError>;
