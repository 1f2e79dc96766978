//! Sectioned catalog model and loading.
//!
//! A [`SectionedCatalog`] is an ordered list of named [`Category`] values, each an
//! ordered list of [`Item`]s. Both orders are rendering-significant: sections
//! appear in category order and rows in item order. The catalog is immutable
//! once built; every render cycle borrows it whole.
//!
//! # File Format
//!
//! Catalogs can be written in TOML (or the equivalent JSON shape):
//!
//! ```toml
//! [[categories]]
//! name = "components"
//!
//! [[categories.items]]
//! key = "btn"
//! title = "Button"
//! description = "tap target"
//!
//! [[categories]]
//! name = "apis"
//! items = []
//! ```

use super::error::{CatalogError, Result};
use super::item::Item;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the category holding composable building blocks.
pub const COMPONENTS: &str = "components";

/// Name of the category holding API demonstrations.
pub const APIS: &str = "apis";

/// A named, ordered group of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Category {
    #[must_use]
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}

/// On-disk shape of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<Category>,
}

/// The immutable browsing data: categories in their fixed order.
///
/// Construction validates only structure. An empty category is legal and is
/// rendered as an empty, still labeled, section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionedCatalog {
    categories: Vec<Category>,
}

impl SectionedCatalog {
    /// Builds a catalog from categories in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateCategory`] if two categories share a name.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        for (idx, category) in categories.iter().enumerate() {
            if categories[..idx].iter().any(|c| c.name == category.name) {
                return Err(CatalogError::DuplicateCategory(category.name.clone()));
            }
        }
        Ok(Self { categories })
    }

    /// Builds the standard two-section catalog: `components` then `apis`.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_browser::{Item, SectionedCatalog};
    ///
    /// let catalog = SectionedCatalog::standard(
    ///     vec![Item::new("btn", "Button", "tap target")],
    ///     vec![Item::new("net", "NetInfo", "network state")],
    /// );
    /// let names: Vec<&str> = catalog.category_names().collect();
    /// assert_eq!(names, ["components", "apis"]);
    /// ```
    #[must_use]
    pub fn standard(components: Vec<Item>, apis: Vec<Item>) -> Self {
        Self {
            categories: vec![Category::new(COMPONENTS, components), Category::new(APIS, apis)],
        }
    }

    /// Returns the catalog shipped with the plugin.
    ///
    /// # Panics
    ///
    /// Panics if the embedded catalog fails to parse (covered by tests).
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_toml_str(include_str!("../../catalogs/default.toml"))
            .expect("built-in catalog should always parse")
    }

    /// Parses a TOML catalog, keeping category and item order.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or category names repeat.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents)?;
        Self::new(file.categories)
    }

    /// Parses a JSON catalog with the same shape as the TOML format.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or category names repeat.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(contents)?;
        Self::new(file.categories)
    }

    /// Loads a catalog file, choosing the parser from the extension.
    ///
    /// `.json` files are parsed as JSON; `.toml` files and files without an
    /// extension as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] for any other extension, and an I/O or
    /// parse error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let catalog = match extension.as_deref() {
            Some("json") => Self::from_json_str(&fs::read_to_string(path)?)?,
            Some("toml") | None => Self::from_toml_str(&fs::read_to_string(path)?)?,
            Some(other) => {
                return Err(CatalogError::Config(format!(
                    "unsupported catalog format '.{other}' (expected .toml or .json)"
                )))
            }
        };

        tracing::debug!(
            path = %path.display(),
            categories = catalog.categories.len(),
            items = catalog.item_count(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    /// Categories in their fixed order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a category by name.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    /// Finds the item whose row key equals `key`.
    ///
    /// Row keys are unique across the whole catalog, not per category. If a
    /// key is shared anyway, the first category in order wins.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Item> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|item| item.row_key() == key)
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }
}

impl Default for SectionedCatalog {
    /// Two empty standard categories.
    fn default() -> Self {
        Self::standard(vec![], vec![])
    }
}
