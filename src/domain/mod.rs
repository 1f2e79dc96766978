//! Domain layer for the catalog browser.
//!
//! This module contains the immutable browsing data and the crate error type,
//! independent of Zellij-specific APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: A single catalog entry
//! - [`catalog`]: Named, ordered categories of items and catalog loading
//!
//! # Examples
//!
//! ```
//! use catalog_browser::domain::{Item, Result, SectionedCatalog};
//!
//! fn load() -> Result<SectionedCatalog> {
//!     SectionedCatalog::from_toml_str(
//!         "[[categories]]\nname = \"components\"\n\n[[categories.items]]\ntitle = \"Button\"\n",
//!     )
//! }
//!
//! let catalog = load().unwrap();
//! assert_eq!(catalog.find("Button"), Some(&Item::keyless("Button", "")));
//! ```

pub mod catalog;
pub mod error;
pub mod item;

pub use catalog::{Category, SectionedCatalog, APIS, COMPONENTS};
pub use error::{CatalogError, Result};
pub use item::Item;
