//! Error types for start-up and catalog construction
//!
//! Catalog lookups themselves are total and never produce errors; everything
//! here surfaces before the TUI is entered (bad config, duplicate titles,
//! logging setup) or while the terminal is being driven.

use thiserror::Error;

/// Errors raised while assembling a [`CatalogStore`](crate::catalog::CatalogStore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The same category was populated by two `section` calls
    #[error("category '{category}' is populated more than once")]
    DuplicateCategory { category: String },

    /// Two entries share a title, which would make the route table ambiguous
    #[error("entry title '{title}' appears in both '{first}' and '{second}'")]
    DuplicateTitle {
        title: String,
        first: String,
        second: String,
    },
}

/// Top-level application error
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
