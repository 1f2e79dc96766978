//! Item row renderer.
//!
//! Each matched item is one line with a fixed-width TITLE column followed by
//! the description. The literal match inside the title is highlighted.

use crate::ui::helpers::{self, char_len, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ItemRowView;

/// Width reserved for the title column, including its indent and gap.
const TITLE_COLUMN_WIDTH: usize = 32;

/// Indent before the title.
const ROW_INDENT: usize = 3;

/// Paints one item row and returns the next free row.
///
/// ```text
///    Button                       Simple tap target with a label.
/// ```
///
/// # Styling Precedence
///
/// 1. Selection colors across the full line (if `selected`)
/// 2. Match highlight inside the title
/// 3. Normal title color and dimmed description
pub fn render_item_row(out: &mut String, row: usize, item: &ItemRowView, theme: &Theme, selected: bool, cols: usize) -> usize {
    let title_width = TITLE_COLUMN_WIDTH - ROW_INDENT - 2;
    let title = truncate(&item.title, title_width);
    // Truncation may cut through the match; helpers clamp the range.
    let highlight = item.highlight.filter(|&(start, _)| start < char_len(&title));

    position_cursor(out, row, 1);
    if selected {
        out.push_str(&Theme::fg(&theme.colors.selection_fg));
        out.push_str(&Theme::bg(&theme.colors.selection_bg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }

    pad(out, ROW_INDENT);
    helpers::render_highlighted_text(out, &title, highlight, theme, selected);
    pad(out, TITLE_COLUMN_WIDTH.saturating_sub(ROW_INDENT + char_len(&title)));

    let description = truncate(&item.description, cols.saturating_sub(TITLE_COLUMN_WIDTH));
    if !selected {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
    }
    out.push_str(&description);

    let line_len = TITLE_COLUMN_WIDTH + char_len(&description);
    pad(out, cols.saturating_sub(line_len));
    out.push_str(Theme::reset());

    row + 1
}
