//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for user input. It mutates
//! [`AppState`] and returns whether a re-render is needed together with the
//! actions the plugin runtime has to execute.
//!
//! Row activation and search typing go through the current [`RenderTree`]:
//! the tree emits [`NavigationEvent`]s into a buffer, and the buffer is then
//! applied to the state. The tree is borrowed from the state, so events can't
//! be dispatched into it directly.
//!
//! [`RenderTree`]: crate::ui::RenderTree
//!
//! # Example
//!
//! ```rust
//! use catalog_browser::app::{handle_event, Event};
//! use catalog_browser::{initialize, Config};
//!
//! let mut state = initialize(&Config::default());
//! let (render, actions) = handle_event(&mut state, &Event::CursorDown)?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), catalog_browser::CatalogError>(())
//! ```

use crate::app::modes::{InputMode, Route};
use crate::app::{Action, AppState};
use crate::domain::Result;
use crate::navigation::{NavigationDispatcher, NavigationEvent};

/// Pane title shown while the list is on screen.
pub const LIST_PANE_NAME: &str = "Catalog";

/// Input events, already decoded from raw keys by the plugin shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the cursor down one row (wraps to top).
    CursorDown,
    /// Moves the cursor up one row (wraps to bottom).
    CursorUp,
    /// Presses the row under the cursor.
    Activate,
    /// Focuses the search row.
    StartSearch,
    /// Appends a character to the filter text.
    Char(char),
    /// Removes the last character of the filter text.
    Backspace,
    /// Clears the filter text and leaves search.
    ClearSearch,
    /// Leaves the detail page.
    Back,
    /// Hides the plugin.
    Close,
}

/// Processes an event, mutates state, and returns `(needs_render, actions)`.
///
/// # Errors
///
/// None of the current events fail.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if let Route::Detail { .. } = state.route {
        return Ok(handle_detail_event(state, event));
    }

    match event {
        Event::CursorDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::Activate => {
            let Some(target) = state.selected_target() else {
                tracing::debug!("nothing under the cursor");
                return Ok((false, vec![]));
            };

            let mut events = Vec::new();
            state.tree().activate(target, &mut events);
            Ok((true, apply_events(state, events)))
        }
        Event::StartSearch => {
            if state.tree().search_row.is_none() {
                tracing::debug!("search row disabled, ignoring");
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Searching;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Searching {
                return Ok((false, vec![]));
            }

            let mut text = state.filter_text.clone();
            text.push(*c);
            tracing::trace!(query = %text, char = %c, "search query updated");

            Ok((true, change_search_text(state, &text)))
        }
        Event::Backspace => {
            if state.filter_text.is_empty() {
                return Ok((false, vec![]));
            }

            let mut text = state.filter_text.clone();
            text.pop();
            Ok((true, change_search_text(state, &text)))
        }
        Event::ClearSearch => {
            if state.filter_text.is_empty() && state.input_mode == InputMode::Browsing {
                return Ok((false, vec![]));
            }

            tracing::debug!(query = %state.filter_text, "clearing search");
            state.input_mode = InputMode::Browsing;
            Ok((true, change_search_text(state, "")))
        }
        Event::Back => Ok((false, vec![])),
        Event::Close => Ok((false, vec![Action::CloseFocus])),
    }
}

fn handle_detail_event(state: &mut AppState, event: &Event) -> (bool, Vec<Action>) {
    match event {
        Event::Back | Event::ClearSearch | Event::Backspace => {
            tracing::debug!("leaving detail page");
            state.route = Route::List;
            (
                true,
                vec![Action::RenamePane {
                    name: LIST_PANE_NAME.to_string(),
                }],
            )
        }
        Event::Close => (false, vec![Action::CloseFocus]),
        _ => (false, vec![]),
    }
}

/// Sends `text` through the search row, falling back to a direct filter
/// change when the search row is hidden (e.g. Backspace on a preset filter).
fn change_search_text(state: &mut AppState, text: &str) -> Vec<Action> {
    let mut events = Vec::new();
    if !state.tree().change_search_text(text, &mut events) {
        events.push(NavigationEvent::FilterChanged(text.to_string()));
    }
    apply_events(state, events)
}

fn apply_events(state: &mut AppState, events: Vec<NavigationEvent>) -> Vec<Action> {
    let mut actions = Vec::new();

    for event in events {
        if let NavigationEvent::ItemSelected(key) = &event {
            let name = state
                .catalog
                .find(key)
                .map_or_else(|| key.clone(), |item| item.title.clone());
            actions.push(Action::RenamePane { name });
        }
        state.dispatch(event);
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Item, SectionedCatalog};
    use crate::ui::list::ListOptions;
    use crate::ui::theme::Theme;

    fn make_state(options: ListOptions) -> AppState {
        let catalog = SectionedCatalog::standard(
            vec![
                Item::new("ButtonExample", "Button", "tap target"),
                Item::new("SwitchExample", "Switch", "boolean input"),
            ],
            vec![Item::new("NetInfoExample", "NetInfo", "network state")],
        );
        AppState::new(catalog, options, Theme::default())
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn chars_are_ignored_outside_search() {
        let mut state = make_state(ListOptions::default());
        let (render, _) = handle_event(&mut state, &Event::Char('s')).unwrap();
        assert!(!render);
        assert!(state.filter_text.is_empty());
    }

    #[test]
    fn typing_filters_the_list() {
        let mut state = make_state(ListOptions::default());
        handle_event(&mut state, &Event::StartSearch).unwrap();
        type_text(&mut state, "NET");

        assert_eq!(state.filter_text, "NET");
        assert_eq!(state.tree().row_count(), 1);
        assert_eq!(state.tree().sections[1].rows[0].key, "NetInfoExample");
    }

    #[test]
    fn backspace_widens_the_result() {
        let mut state = make_state(ListOptions::default());
        handle_event(&mut state, &Event::StartSearch).unwrap();
        type_text(&mut state, "sx");
        assert_eq!(state.tree().row_count(), 0);

        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.filter_text, "s");
        assert_eq!(state.tree().row_count(), 2);
    }

    #[test]
    fn activate_opens_detail_and_renames_pane() {
        let mut state = make_state(ListOptions::default());
        handle_event(&mut state, &Event::CursorDown).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Activate).unwrap();

        assert_eq!(actions, vec![Action::RenamePane { name: "Switch".to_string() }]);
        assert_eq!(state.route, Route::Detail { key: "SwitchExample".to_string() });

        let (_, actions) = handle_event(&mut state, &Event::Back).unwrap();
        assert_eq!(actions, vec![Action::RenamePane { name: LIST_PANE_NAME.to_string() }]);
        assert_eq!(state.route, Route::List);
    }

    #[test]
    fn activate_works_while_searching() {
        let mut state = make_state(ListOptions::default());
        handle_event(&mut state, &Event::StartSearch).unwrap();
        type_text(&mut state, "info");

        handle_event(&mut state, &Event::Activate).unwrap();

        assert_eq!(state.route, Route::Detail { key: "NetInfoExample".to_string() });
        assert_eq!(state.input_mode, InputMode::Browsing);
    }

    #[test]
    fn title_row_clears_the_filter() {
        let mut state = make_state(ListOptions { show_title_row: true, ..ListOptions::default() });
        handle_event(&mut state, &Event::StartSearch).unwrap();
        type_text(&mut state, "button");
        assert_eq!(state.tree().row_count(), 1);

        state.cursor = 0;
        let (_, actions) = handle_event(&mut state, &Event::Activate).unwrap();

        assert!(actions.is_empty());
        assert!(state.filter_text.is_empty());
        assert_eq!(state.tree().row_count(), 3);
    }

    #[test]
    fn clear_search_resets_mode_and_filter() {
        let mut state = make_state(ListOptions::default());
        handle_event(&mut state, &Event::StartSearch).unwrap();
        type_text(&mut state, "zz");

        handle_event(&mut state, &Event::ClearSearch).unwrap();

        assert_eq!(state.input_mode, InputMode::Browsing);
        assert!(state.filter_text.is_empty());
        assert_eq!(state.tree().row_count(), 3);
    }

    #[test]
    fn start_search_needs_a_search_row() {
        let mut state = make_state(ListOptions { show_search: false, ..ListOptions::default() });
        let (render, _) = handle_event(&mut state, &Event::StartSearch).unwrap();
        assert!(!render);
        assert_eq!(state.input_mode, InputMode::Browsing);
    }

    #[test]
    fn activate_on_empty_result_does_nothing() {
        let mut state = make_state(ListOptions::default());
        handle_event(&mut state, &Event::StartSearch).unwrap();
        type_text(&mut state, "nothing matches this");

        let (render, actions) = handle_event(&mut state, &Event::Activate).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn close_hides_plugin_from_any_route() {
        let mut state = make_state(ListOptions::default());
        let (_, actions) = handle_event(&mut state, &Event::Close).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);

        handle_event(&mut state, &Event::Activate).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Close).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
