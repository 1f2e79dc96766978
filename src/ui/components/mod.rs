//! Terminal painters for the list and its chrome.
//!
//! [`AnsiList`] is the terminal implementation of [`ListWidget`]: it is driven
//! by a [`RenderTree`](crate::ui::viewmodel::RenderTree), remembers every row it
//! was handed, and then paints a full frame with a scrolling body that keeps
//! the cursor row visible.
//!
//! # Components
//!
//! - `title`: Title row (heading + subtitle)
//! - `search`: Search input box
//! - `section`: Section header labels
//! - `row`: Item rows with match highlighting
//! - `empty`: Notice for zero matches
//! - `footer`: Key hints
//! - `detail`: Detail page for a selected item
//!
//! # Layout
//!
//! ```text
//! [Title row - 2 lines]      (optional)
//! [Search box - 3 lines]     (optional)
//! [Border]
//! [Headers and rows, windowed around the cursor]
//! [Empty notice]             (when nothing matched)
//! [Border]
//! [Footer]
//! ```

mod detail;
mod empty;
mod footer;
mod row;
mod search;
mod section;
mod title;

pub use detail::render_detail;

use crate::ui::helpers::position_cursor;
use crate::ui::list::ListWidget;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ItemRowView, SearchRowView, SectionHeaderView, TitleRowView, UIViewModel};

/// Paints a horizontal rule at `row` and returns the next row.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// One line of the scrolling body.
#[derive(Debug, Clone)]
enum BodyLine {
    Header(SectionHeaderView),
    Row { view: ItemRowView, selected: bool },
}

/// Terminal list widget collecting rows for painting.
#[derive(Debug, Clone, Default)]
pub struct AnsiList {
    selected: Option<usize>,
    next_ordinal: usize,
    title: Option<(TitleRowView, bool)>,
    search: Option<SearchRowView>,
    body: Vec<BodyLine>,
}

impl AnsiList {
    /// Creates a widget whose cursor sits on the `selected`-th activatable row.
    #[must_use]
    pub fn new(selected: Option<usize>) -> Self {
        Self {
            selected,
            ..Self::default()
        }
    }

    /// Consumes the next activatable ordinal, reporting whether it is selected.
    fn take_ordinal(&mut self) -> bool {
        let ordinal = self.next_ordinal;
        self.next_ordinal += 1;
        self.selected == Some(ordinal)
    }

    /// Index of the selected line within the body, if the cursor is there.
    fn selected_body_line(&self) -> Option<usize> {
        self.body
            .iter()
            .position(|line| matches!(line, BodyLine::Row { selected: true, .. }))
    }

    /// Paints the complete list frame.
    #[must_use]
    pub fn paint(&self, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
        let mut out = String::new();
        let mut current_row = 1;

        if let Some((title_row, selected)) = &self.title {
            current_row = title::render_title_row(&mut out, current_row, title_row, theme, *selected, cols);
        }
        if let Some(search_row) = &self.search {
            current_row = search::render_search_bar(&mut out, current_row, search_row, theme, vm.search_focused, cols);
        }
        current_row = render_border(&mut out, current_row, &theme.colors.border, cols);

        let footer_row = rows.max(current_row + 2);
        let bottom_border = footer_row - 1;
        let empty_lines = if vm.empty_state.is_some() { 2 } else { 0 };
        let available = bottom_border.saturating_sub(current_row + empty_lines);

        let (start, end) = visible_window(self.body.len(), self.selected_body_line(), available);
        for line in &self.body[start..end] {
            current_row = match line {
                BodyLine::Header(header) => section::render_section_header(&mut out, current_row, header, theme, cols),
                BodyLine::Row { view, selected } => row::render_item_row(&mut out, current_row, view, theme, *selected, cols),
            };
        }

        if let Some(empty_state) = &vm.empty_state {
            if current_row + 2 <= bottom_border {
                empty::render_empty_state(&mut out, current_row, empty_state, theme, cols);
            }
        }

        render_border(&mut out, bottom_border, &theme.colors.border, cols);
        footer::render_footer(&mut out, footer_row, &vm.footer, theme, cols);

        out
    }
}

/// Chooses `[start, end)` of `len` lines so that `selected` stays centered
/// when possible and the window is always as full as it can be.
fn visible_window(len: usize, selected: Option<usize>, available: usize) -> (usize, usize) {
    let mut start = selected.map_or(0, |s| s.saturating_sub(available / 2));
    let end = (start + available).min(len);
    if end - start.min(end) < available && len >= available {
        start = end.saturating_sub(available);
    }
    (start.min(end), end)
}

impl ListWidget for AnsiList {
    fn title_row(&mut self, row: &TitleRowView) {
        let selected = self.take_ordinal();
        self.title = Some((row.clone(), selected));
    }

    fn search_row(&mut self, row: &SearchRowView) {
        self.search = Some(row.clone());
    }

    fn section_header(&mut self, header: &SectionHeaderView) {
        self.body.push(BodyLine::Header(header.clone()));
    }

    fn item_row(&mut self, row: &ItemRowView) {
        let selected = self.take_ordinal();
        self.body.push(BodyLine::Row {
            view: row.clone(),
            selected,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_centers_selection() {
        assert_eq!(visible_window(100, Some(50), 10), (45, 55));
    }

    #[test]
    fn window_fills_from_end() {
        assert_eq!(visible_window(20, Some(19), 10), (10, 20));
    }

    #[test]
    fn window_shows_everything_when_it_fits() {
        assert_eq!(visible_window(4, Some(3), 10), (0, 4));
        assert_eq!(visible_window(4, None, 10), (0, 4));
        assert_eq!(visible_window(0, None, 0), (0, 0));
    }
}
