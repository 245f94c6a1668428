//! Error types for catalog loading

use std::path::PathBuf;

use thiserror::Error;

use crate::types::ModalKey;

/// Errors raised while loading or validating a catalog.
///
/// Once a [`Catalog`](crate::Catalog) exists nothing else in this crate can
/// fail; view transitions and rendering are total.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog text is not valid TOML or does not match the schema
    #[error("Invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// Catalog has no cards
    #[error("Catalog has no cards")]
    Empty,

    /// Two cards share a title (titles are the card identity)
    #[error("Duplicate card title: {0}")]
    DuplicateTitle(String),

    /// A card opens a demo overlay that has no `[demos.<key>]` entry
    #[error("Card '{card}' opens '{key}' but no demo content is defined for it")]
    MissingDemo { card: String, key: ModalKey },

    /// A card opens the side-project overlay but the list is empty
    #[error("Card '{0}' opens 'side' but no side projects are defined")]
    NoSideProjects(String),

    /// A `[demos]` table key that is not a demo modal
    #[error("Invalid demo key: {0}")]
    InvalidDemoKey(String),
}

/// Error returned when parsing an unknown modal identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown modal: {0} (expected one of: side, casino, punch)")]
pub struct ParseModalKeyError(pub String);

/// Result alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
