//! Empty state component renderer.
//!
//! Shown under the (still labeled) section headers when the filter matched
//! nothing, or when the catalog itself has no items.

use crate::ui::helpers::{char_len, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Paints the two-line centered notice starting at `row`.
///
/// ```text
///        No entries match "zzz"
///    Esc clears the search, Backspace edits it
/// ```
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let lines = [
        (truncate(&empty.message, cols), Theme::fg(&theme.colors.empty_state_fg)),
        (truncate(&empty.subtitle, cols), format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))),
    ];

    for (offset, (text, style)) in lines.iter().enumerate() {
        let len = char_len(text);
        let padding = cols.saturating_sub(len) / 2;

        position_cursor(out, row + offset, 1);
        out.push_str(style);
        pad(out, padding);
        out.push_str(text);
        pad(out, cols.saturating_sub(padding + len));
        out.push_str(Theme::reset());
    }

    row + 2
}
