//! Application state and screen computation.
//!
//! [`AppState`] owns everything the browser needs between events: the catalog,
//! the filter text (the single source of truth for what is searched), display
//! options, cursor, input mode and route. The current [`RenderTree`] is derived
//! state, rebuilt by [`AppState::refresh`] whenever the filter or catalog
//! changes.
//!
//! `AppState` is also the [`NavigationDispatcher`] for its own list: events
//! emitted by rows and by the search input come back here and are applied.
//!
//! # Example
//!
//! ```rust
//! use catalog_browser::{AppState, Item, ListOptions, NavigationDispatcher, NavigationEvent, SectionedCatalog, Theme};
//!
//! let catalog = SectionedCatalog::standard(vec![Item::new("btn", "Button", "tap target")], vec![]);
//! let mut state = AppState::new(catalog, ListOptions::default(), Theme::default());
//!
//! state.dispatch(NavigationEvent::FilterChanged("zzz".into()));
//! assert_eq!(state.tree().row_count(), 0);
//! ```

use super::modes::{InputMode, Route};
use crate::domain::SectionedCatalog;
use crate::filter::FilterCache;
use crate::navigation::{NavigationDispatcher, NavigationEvent};
use crate::plan::DataSourceBuilder;
use crate::ui::list::{ListOptions, ListRenderer};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailView, EmptyState, RenderTree, RowTarget, Screen, UIViewModel};

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog being browsed. Never modified by filtering.
    pub catalog: SectionedCatalog,

    /// Current filter text; empty means unfiltered.
    pub filter_text: String,

    /// Color scheme used by the terminal painters.
    pub theme: Theme,

    pub input_mode: InputMode,

    pub route: Route,

    /// Index into [`RenderTree::activatable`] of the row under the cursor.
    ///
    /// Clamped by [`AppState::refresh`]; wraps around when moved.
    pub cursor: usize,

    renderer: ListRenderer,
    filter_cache: FilterCache,
    tree: RenderTree,
}

impl AppState {
    /// Creates the state and renders the unfiltered list.
    #[must_use]
    pub fn new(catalog: SectionedCatalog, options: ListOptions, theme: Theme) -> Self {
        let mut state = Self {
            catalog,
            filter_text: String::new(),
            theme,
            input_mode: InputMode::Browsing,
            route: Route::List,
            cursor: 0,
            renderer: ListRenderer::new(options),
            filter_cache: FilterCache::default(),
            tree: RenderTree::default(),
        };
        state.refresh();
        state.cursor = state.first_item_cursor();
        state
    }

    #[must_use]
    pub const fn options(&self) -> &ListOptions {
        self.renderer.options()
    }

    /// The list as rendered for the current filter.
    #[must_use]
    pub const fn tree(&self) -> &RenderTree {
        &self.tree
    }

    /// Rebuilds the render tree from catalog and filter text.
    ///
    /// Runs the full filter → plan → render pipeline. Predicate compilation is
    /// memoized, everything else is recomputed.
    pub fn refresh(&mut self) {
        let _span = tracing::debug_span!(
            "refresh_list",
            total_items = self.catalog.item_count(),
            filter_len = self.filter_text.len()
        )
        .entered();

        let predicate = self.filter_cache.predicate(&self.filter_text);
        let plan = DataSourceBuilder::build(&self.catalog, predicate);
        self.tree = self.renderer.render(&plan, &self.filter_text, predicate);

        let rows = self.tree.activatable().len();
        self.cursor = if rows == 0 { 0 } else { self.cursor.min(rows - 1) };

        tracing::debug!(rows = self.tree.row_count(), cursor = self.cursor, "list refreshed");
    }

    /// Cursor position of the first item row, skipping the title row.
    fn first_item_cursor(&self) -> usize {
        self.tree
            .activatable()
            .iter()
            .position(|target| matches!(target, RowTarget::Item { .. }))
            .unwrap_or(0)
    }

    /// Row under the cursor, if the list has any activatable rows.
    #[must_use]
    pub fn selected_target(&self) -> Option<RowTarget> {
        self.tree.activatable().get(self.cursor).copied()
    }

    pub fn move_cursor_down(&mut self) {
        let rows = self.tree.activatable().len();
        if rows == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % rows;
    }

    pub fn move_cursor_up(&mut self) {
        let rows = self.tree.activatable().len();
        if rows == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 { rows - 1 } else { self.cursor - 1 };
    }

    /// Computes what to show for the current route.
    #[must_use]
    pub fn compute_screen(&self) -> Screen {
        match &self.route {
            Route::Detail { key } => Screen::Detail(self.compute_detail(key)),
            Route::List => Screen::List(UIViewModel {
                tree: self.tree.clone(),
                selected: self.selected_target().map(|_| self.cursor),
                search_focused: self.input_mode == InputMode::Searching,
                footer: self.compute_footer(),
                empty_state: self.compute_empty_state(),
            }),
        }
    }

    fn compute_detail(&self, key: &str) -> DetailView {
        self.catalog.find(key).map_or_else(
            || DetailView {
                key: key.to_string(),
                title: key.to_string(),
                description: "This entry is not in the catalog.".to_string(),
            },
            |item| DetailView {
                key: key.to_string(),
                title: item.title.clone(),
                description: item.description.clone(),
            },
        )
    }

    fn compute_footer(&self) -> String {
        match self.input_mode {
            InputMode::Searching => "Type to filter  ↑/↓: move  Enter: open  Esc: clear".to_string(),
            InputMode::Browsing if self.options().show_search => {
                "j/k: move  Enter: open  /: search  Esc: clear filter  q: quit".to_string()
            }
            InputMode::Browsing => "j/k: move  Enter: open  q: quit".to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if self.tree.row_count() > 0 {
            return None;
        }

        Some(if self.filter_text.is_empty() {
            EmptyState {
                message: "The catalog is empty".to_string(),
                subtitle: "Point catalog_file at a catalog with entries".to_string(),
            }
        } else {
            EmptyState {
                message: format!("No entries match \"{}\"", self.filter_text),
                subtitle: "Esc clears the search, Backspace edits it".to_string(),
            }
        })
    }
}

impl NavigationDispatcher for AppState {
    /// Applies an event emitted by the list.
    ///
    /// `FilterChanged` replaces the filter text and re-renders with the cursor
    /// on the first result. `ItemSelected` opens the detail route.
    fn dispatch(&mut self, event: NavigationEvent) {
        tracing::debug!(?event, "navigation event");

        match event {
            NavigationEvent::FilterChanged(text) => {
                if text != self.filter_text {
                    self.filter_text = text;
                    self.refresh();
                    self.cursor = self.first_item_cursor();
                }
                self.route = Route::List;
            }
            NavigationEvent::ItemSelected(key) => {
                self.input_mode = InputMode::Browsing;
                self.route = Route::Detail { key };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;

    fn make_state(options: ListOptions) -> AppState {
        let catalog = SectionedCatalog::standard(
            vec![
                Item::new("btn", "Button", "tap target"),
                Item::new("sw", "Switch", "boolean input"),
            ],
            vec![Item::new("net", "NetInfo", "network state")],
        );
        AppState::new(catalog, options, Theme::default())
    }

    #[test]
    fn cursor_starts_on_first_item_even_with_title_row() {
        let state = make_state(ListOptions { show_title_row: true, ..ListOptions::default() });
        assert_eq!(state.cursor, 1);
        assert_eq!(state.selected_target(), Some(RowTarget::Item { section: 0, row: 0 }));
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut state = make_state(ListOptions::default());
        state.move_cursor_up();
        assert_eq!(state.cursor, 2);
        state.move_cursor_down();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn filter_change_rebuilds_tree_and_resets_cursor() {
        let mut state = make_state(ListOptions::default());
        state.cursor = 2;

        state.dispatch(NavigationEvent::FilterChanged("sw".to_string()));

        assert_eq!(state.filter_text, "sw");
        assert_eq!(state.tree().row_count(), 1);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.tree().sections.len(), 2);
    }

    #[test]
    fn empty_state_only_without_rows() {
        let mut state = make_state(ListOptions::default());
        assert!(state.compute_empty_state().is_none());

        state.dispatch(NavigationEvent::FilterChanged("zzz".to_string()));
        let empty = state.compute_empty_state().unwrap();
        assert!(empty.message.contains("zzz"));
        assert_eq!(state.selected_target(), None);
    }

    #[test]
    fn item_selection_opens_detail() {
        let mut state = make_state(ListOptions::default());
        state.input_mode = InputMode::Searching;

        state.dispatch(NavigationEvent::ItemSelected("net".to_string()));

        assert_eq!(state.route, Route::Detail { key: "net".to_string() });
        assert_eq!(state.input_mode, InputMode::Browsing);
        match state.compute_screen() {
            Screen::Detail(detail) => assert_eq!(detail.title, "NetInfo"),
            Screen::List(_) => panic!("expected detail screen"),
        }
    }

    #[test]
    fn unknown_key_still_gets_a_detail_page() {
        let mut state = make_state(ListOptions::default());
        state.dispatch(NavigationEvent::ItemSelected("ghost".to_string()));
        match state.compute_screen() {
            Screen::Detail(detail) => assert_eq!(detail.title, "ghost"),
            Screen::List(_) => panic!("expected detail screen"),
        }
    }
}
