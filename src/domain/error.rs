//! Error types for the catalog browser.
//!
//! This module defines the centralized error type [`CatalogError`] and a type alias
//! [`Result`] used throughout the crate. Errors are implemented with `thiserror`.
//!
//! Filtering and render-plan construction have no error path at all: a query is
//! plain data and can never be "invalid". Errors only arise at the edges, when a
//! catalog or theme is loaded from disk or the plugin configuration is malformed.

use thiserror::Error;

/// The main error type for catalog browser operations.
///
/// # Examples
///
/// ```
/// use catalog_browser::CatalogError;
///
/// fn validate() -> Result<(), CatalogError> {
///     Err(CatalogError::Config("unsupported catalog format '.yaml'".to_string()))
/// }
///
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from reading catalog or theme files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML catalog could not be parsed.
    #[error("Catalog TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A JSON catalog could not be parsed.
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The same category name appeared twice in one catalog.
    ///
    /// Category names identify sections, so they must be unique.
    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for catalog browser operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
