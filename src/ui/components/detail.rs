//! Minimal detail view for a selected item.
//!
//! The browser only decides *which* item to open; this is the plugin's own
//! placeholder page for it: title, key and description, plus a way back.

use crate::ui::helpers::{char_len, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

/// Paints the detail page filling `rows` × `cols`.
pub fn render_detail(out: &mut String, detail: &DetailView, theme: &Theme, rows: usize, cols: usize) {
    let mut row = 2;

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    let title = truncate(&format!(" {}", detail.title), cols);
    out.push_str(&title);
    pad(out, cols.saturating_sub(char_len(&title)));
    out.push_str(Theme::reset());
    row += 1;

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    let key = truncate(&format!(" {}", detail.key), cols);
    out.push_str(&key);
    pad(out, cols.saturating_sub(char_len(&key)));
    out.push_str(Theme::reset());
    row += 1;

    row = super::render_border(out, row, &theme.colors.border, cols);

    let body = if detail.description.is_empty() {
        "(no description)".to_string()
    } else {
        detail.description.clone()
    };
    position_cursor(out, row + 1, 1);
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    let body = truncate(&format!(" {body}"), cols);
    out.push_str(&body);
    pad(out, cols.saturating_sub(char_len(&body)));
    out.push_str(Theme::reset());

    let footer_row = rows.max(row + 3);
    super::render_border(out, footer_row - 1, &theme.colors.border, cols);
    super::footer::render_footer(out, footer_row, "Esc/Backspace: back  q: quit", theme, cols);
}
