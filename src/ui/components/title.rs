//! Title row renderer.
//!
//! Two lines: the bold title, then a dimmed subtitle. When the cursor is on
//! the title row both lines take the selection colors.

use crate::ui::helpers::{char_len, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TitleRowView;

/// Paints the title row at `row` and returns the next free row.
///
/// ```text
///  Catalog
///  Browse all entries
/// ```
pub fn render_title_row(out: &mut String, row: usize, title: &TitleRowView, theme: &Theme, selected: bool, cols: usize) -> usize {
    let lines = [(&title.title, true), (&title.subtitle, false)];

    for (offset, (text, is_heading)) in lines.into_iter().enumerate() {
        let text = truncate(text, cols.saturating_sub(2));

        position_cursor(out, row + offset, 1);
        if selected {
            out.push_str(&Theme::fg(&theme.colors.selection_fg));
            out.push_str(&Theme::bg(&theme.colors.selection_bg));
        } else if is_heading {
            out.push_str(&Theme::fg(&theme.colors.header_fg));
            if let Some(bg) = &theme.colors.header_bg {
                out.push_str(&Theme::bg(bg));
            }
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_dim));
        }
        if is_heading {
            out.push_str(Theme::bold());
        }

        out.push(' ');
        out.push_str(&text);
        pad(out, cols.saturating_sub(char_len(&text) + 1));
        out.push_str(Theme::reset());
    }

    row + 2
}
