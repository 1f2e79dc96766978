//! Zellij plugin wrapper and entry point.
//!
//! On `wasm32` this is the thin layer between the library and Zellij: it
//! parses configuration, maps key presses to library [`Event`]s, executes the
//! resulting actions, and prints rendered frames. On other targets the binary
//! prints one frame of the catalog to stdout, which is handy for checking a
//! catalog file without loading the plugin.
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Down`: Move down
//! - `Ctrl+p` / `Up`: Move up
//! - `Enter`: Open the entry under the cursor (also while typing)
//! - `Backspace`: Delete a search character, or leave the detail page
//!
//! While browsing:
//! - `j` / `k`: Move down / up
//! - `/`: Focus the search row
//! - `Esc`: Clear the filter
//! - `q`: Close plugin
//!
//! While searching every printable key is typed; `Esc` clears the search.
//!
//! # Preview
//!
//! ```text
//! catalog-browser [FILTER] [CATALOG_FILE]
//! ```

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_arch = "wasm32")]
use {plugin::State, zellij_tile::prelude::*};

#[cfg(target_arch = "wasm32")]
register_plugin!(State);

#[cfg(target_arch = "wasm32")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use catalog_browser::{handle_event, Action, AppState, Config, Event, InputMode, Route};

    /// Plugin state wrapper around the library's `AppState`.
    pub struct State {
        app: AppState,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: catalog_browser::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            catalog_browser::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();

            tracing::debug!(
                catalog_file = ?config.catalog_file,
                filter = %config.filter,
                "parsed configuration"
            );
            self.app = catalog_browser::initialize(&config);

            request_permission(&[PermissionType::ChangeApplicationState]);
            subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

            tracing::debug!("plugin load complete");
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Denied) => {
                    tracing::warn!("permissions denied - pane renaming disabled");
                    return false;
                }
                _ => return false,
            };

            match handle_event(&mut self.app, &our_event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(
                        action_count = actions.len(),
                        should_render = should_render,
                        "event handled"
                    );
                    for action in &actions {
                        Self::execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::warn!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            print!("{}", catalog_browser::ui::render(&self.app, rows, cols));
        }
    }

    impl State {
        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            tracing::trace!(bare_key = ?key.bare_key, "key event");

            if key.has_modifiers(&[KeyModifier::Ctrl]) {
                return match key.bare_key {
                    BareKey::Char('n') => Some(Event::CursorDown),
                    BareKey::Char('p') => Some(Event::CursorUp),
                    _ => None,
                };
            }

            let browsing = self.app.input_mode == InputMode::Browsing;
            let in_detail = matches!(self.app.route, Route::Detail { .. });

            Some(match key.bare_key {
                BareKey::Down => Event::CursorDown,
                BareKey::Up => Event::CursorUp,
                BareKey::Enter => Event::Activate,
                BareKey::Backspace => Event::Backspace,
                BareKey::Esc if in_detail => Event::Back,
                BareKey::Esc => Event::ClearSearch,
                BareKey::Char('j') if browsing => Event::CursorDown,
                BareKey::Char('k') if browsing => Event::CursorUp,
                BareKey::Char('/') if browsing => Event::StartSearch,
                BareKey::Char('q') if browsing => Event::Close,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            })
        }

        fn execute_action(action: &Action) {
            tracing::debug!(?action, "executing action");
            match action {
                Action::CloseFocus => hide_self(),
                Action::RenamePane { name } => rename_plugin_pane(get_plugin_ids().plugin_id, name),
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use catalog_browser::{initialize, ui, Config};

    let mut args = std::env::args().skip(1);
    let config = Config {
        filter: args.next().unwrap_or_default(),
        catalog_file: args.next(),
        ..Config::default()
    };

    let state = initialize(&config);
    println!("{}", ui::render(&state, 40, 100));
}
