//! Search bar component renderer.
//!
//! Renders the search input as a bordered box. An empty query shows the
//! placeholder dimmed; a focused box ends the text with a cursor bar.

use crate::ui::helpers::{char_len, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchRowView;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Paints the search box at `row` and returns the next free row (`row + 3`).
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ / query▏    │ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
pub fn render_search_bar(out: &mut String, row: usize, search: &SearchRowView, theme: &Theme, focused: bool, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    position_cursor(out, row, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    let (text, color) = if search.query.is_empty() && !focused {
        (search.placeholder.clone(), &theme.colors.text_dim)
    } else if focused {
        (format!("{}▏", search.query), &theme.colors.text_normal)
    } else {
        (search.query.clone(), &theme.colors.text_normal)
    };
    let text = truncate(&format!(" / {text}"), inner_width);

    position_cursor(out, row + 1, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push('│');
    out.push_str(&Theme::fg(color));
    out.push_str(&text);
    pad(out, inner_width.saturating_sub(char_len(&text)));
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    pad(out, SEARCH_BOX_MARGIN);
    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    row + 3
}
