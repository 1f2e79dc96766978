//! Footer component renderer.

use crate::ui::helpers::{char_len, pad, position_cursor, truncate};
use crate::ui::theme::Theme;

/// Paints the centered, dimmed key hint line at `row`.
///
/// Hints wider than the terminal are truncated to keep the layout intact.
pub fn render_footer(out: &mut String, row: usize, hints: &str, theme: &Theme, cols: usize) -> usize {
    let text = truncate(hints, cols);
    let text_len = char_len(&text);
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    pad(out, padding);
    out.push_str(&text);
    pad(out, cols.saturating_sub(padding + text_len));
    out.push_str(Theme::reset());

    row + 1
}
