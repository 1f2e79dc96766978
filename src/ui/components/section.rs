//! Section header renderer.

use crate::ui::helpers::{char_len, pad, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SectionHeaderView;

/// Paints a section header line: the upper-cased label and the row count.
///
/// ```text
/// COMPONENTS (3)
/// ```
pub fn render_section_header(out: &mut String, row: usize, header: &SectionHeaderView, theme: &Theme, cols: usize) -> usize {
    let text = truncate(&format!(" {} ({})", header.label, header.count), cols);

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.section_fg));
    out.push_str(&text);
    pad(out, cols.saturating_sub(char_len(&text)));
    out.push_str(Theme::reset());

    row + 1
}
