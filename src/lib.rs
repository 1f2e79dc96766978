//! Catalog Browser: a searchable, sectioned catalog list for Zellij.
//!
//! Shows a catalog of example entries grouped into named sections
//! ("components" and "apis" for the built-in catalog). Typing into the search
//! row narrows every section to entries whose title contains the typed text,
//! case-insensitively. Selecting an entry opens its detail page.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, cursor, routes                   │
//! │  - Navigation dispatcher                            │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ filter        │   │ plan          │   │ ui/           │
//! │ - Predicate   │ → │ - DataSource  │ → │ - ListRenderer│
//! │ - Memo cache  │   │   builder     │   │ - AnsiList    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Catalog, items, errors (domain/)                 │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a rotating JSON file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is never changed by filtering. Every keystroke re-runs the
//! pipeline against the full catalog, so widening the query (Backspace)
//! brings entries back.
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/catalog-browser.wasm" {
//!         catalog_file "~/.config/catalog-browser/catalog.toml"
//!         filter "view"
//!         show_title_row "yes"
//!         hide_empty_sections "no"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use catalog_browser::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//!
//! for event in [Event::StartSearch, Event::Char('s'), Event::Char('w')] {
//!     handle_event(&mut state, &event)?;
//! }
//! assert!(state.tree().row_count() > 0);
//! # Ok::<(), catalog_browser::CatalogError>(())
//! ```

pub mod app;
pub mod domain;
pub mod filter;
pub mod infrastructure;
pub mod navigation;
pub mod plan;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, Route};
pub use domain::{CatalogError, Category, Item, Result, SectionedCatalog};
pub use filter::{FilterCache, FilterPredicate};
pub use navigation::{NavigationDispatcher, NavigationEvent};
pub use plan::{DataSourceBuilder, PlanSection, RenderPlan};
pub use ui::{ListOptions, ListRenderer, ListWidget, RenderTree, Theme};

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Catalog file (`.toml` or `.json`). The built-in catalog is used when
    /// unset or unreadable.
    pub catalog_file: Option<String>,

    /// Filter text applied on start.
    pub filter: String,

    /// Display options handed to the list renderer.
    pub list: ListOptions,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Tracing filter directive, e.g. `"debug"`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored. Booleans accept `true/false`, `yes/no` and
    /// `1/0`; anything else keeps the default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use catalog_browser::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("filter".to_string(), "view".to_string());
    /// map.insert("show_title_row".to_string(), "yes".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.filter, "view");
    /// assert!(config.list.show_title_row);
    /// assert!(config.list.show_search);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = ListOptions::default();
        let flag = |key: &str, default: bool| {
            config.get(key).and_then(|v| parse_bool(v)).unwrap_or(default)
        };
        let text = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            catalog_file: text("catalog_file"),
            filter: config.get("filter").cloned().unwrap_or_default(),
            list: ListOptions {
                show_title_row: flag("show_title_row", defaults.show_title_row),
                show_search: flag("show_search", defaults.show_search),
                hide_empty_sections: flag("hide_empty_sections", defaults.hide_empty_sections),
                container_style: text("container_style"),
                search_input_style: text("search_input_style"),
            },
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// Builds the application state from configuration.
///
/// Loads the catalog and theme, falling back to the built-in ones (with a
/// log line) when a configured file can't be read, then applies the initial
/// filter.
///
/// # Example
///
/// ```rust
/// use catalog_browser::{initialize, Config};
///
/// let config = Config {
///     filter: "VIEW".to_string(),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.filter_text, "VIEW");
/// assert!(state.tree().row_count() > 0);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing catalog browser");

    let catalog = config.catalog_file.as_ref().map_or_else(SectionedCatalog::builtin, |file| {
        let path = infrastructure::expand_tilde(file);
        SectionedCatalog::from_file(&path).unwrap_or_else(|e| {
            tracing::warn!(catalog_file = %path, error = %e, "failed to load catalog, using built-in");
            SectionedCatalog::builtin()
        })
    });

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let mut state = AppState::new(catalog, config.list.clone(), theme);
    if !config.filter.is_empty() {
        state.dispatch(NavigationEvent::FilterChanged(config.filter.clone()));
    }

    tracing::info!(
        items = state.catalog.item_count(),
        sections = state.catalog.categories().len(),
        "catalog browser ready"
    );

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.catalog_file, None);
        assert!(config.filter.is_empty());
        assert_eq!(config.list, ListOptions::default());
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn booleans_accept_common_spellings() {
        let config = Config::from_zellij(&map(&[
            ("show_title_row", "1"),
            ("show_search", "No"),
            ("hide_empty_sections", "TRUE"),
        ]));
        assert!(config.list.show_title_row);
        assert!(!config.list.show_search);
        assert!(config.list.hide_empty_sections);
    }

    #[test]
    fn unparseable_boolean_keeps_default() {
        let config = Config::from_zellij(&map(&[("show_search", "maybe")]));
        assert!(config.list.show_search);
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        let config = Config::from_zellij(&map(&[("catalog_file", "  "), ("theme", "")]));
        assert_eq!(config.catalog_file, None);
        assert_eq!(config.theme_name, None);
    }

    #[test]
    fn filter_is_kept_verbatim() {
        let config = Config::from_zellij(&map(&[("filter", " a.b ")]));
        assert_eq!(config.filter, " a.b ");
    }

    #[test]
    fn missing_catalog_file_falls_back_to_builtin() {
        let config = Config {
            catalog_file: Some("/definitely/not/here.toml".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.catalog, SectionedCatalog::builtin());
    }

    #[test]
    fn catalog_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.toml");
        std::fs::write(
            &path,
            "[[categories]]\nname = \"components\"\n[[categories.items]]\nkey = \"a\"\ntitle = \"Alpha\"\n",
        )
        .unwrap();

        let config = Config {
            catalog_file: Some(path.to_string_lossy().into_owned()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.catalog.item_count(), 1);
        assert!(state.catalog.find("a").is_some());
    }
}
