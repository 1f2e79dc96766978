//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **Screen computation**: `AppState` → [`Screen`] (render plan, render
//!    tree, cursor, footer)
//! 2. **Painting**: the list screen drives an [`AnsiList`] with the render
//!    tree and paints it; the detail screen is painted directly
//!
//! The result is a single ANSI string; the caller decides where it goes.

use crate::app::AppState;
use crate::ui::components::{render_detail, AnsiList};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::Screen;

/// Renders the current screen of `state` into an ANSI frame.
///
/// # Example
///
/// ```rust
/// use catalog_browser::{initialize, ui, Config};
///
/// let state = initialize(&Config::default());
/// let frame = ui::render(&state, 24, 80);
/// assert!(frame.contains("COMPONENTS"));
/// ```
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    let screen = state.compute_screen();
    render_screen(&screen, &state.theme, rows, cols)
}

/// Paints a precomputed screen.
#[must_use]
pub fn render_screen(screen: &Screen, theme: &Theme, rows: usize, cols: usize) -> String {
    match screen {
        Screen::List(vm) => {
            let mut list = AnsiList::new(vm.selected);
            vm.tree.drive(&mut list);
            list.paint(vm, theme, rows, cols)
        }
        Screen::Detail(detail) => {
            let mut out = String::new();
            render_detail(&mut out, detail, theme, rows, cols);
            out
        }
    }
}
