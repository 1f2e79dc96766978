//! Shared rendering utilities.
//!
//! Painters write ANSI output into a `String` frame instead of straight to
//! stdout, so a whole frame can be assembled, inspected in tests, and printed
//! in one go by the plugin shim.
//!
//! All widths and highlight ranges are counted in characters, never bytes.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `(row, col)`.
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` characters, ending in `...` when shortened.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if char_len(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Writes `count` spaces.
pub fn pad(out: &mut String, count: usize) {
    out.push_str(&" ".repeat(count));
}

/// Writes `text` with the char range `range` painted in the match colors.
///
/// When the row is selected, the selection colors are restored after the
/// highlighted part so the rest of the row keeps its background. A range that
/// falls outside `text` (for example after truncation) is clamped.
///
/// ```text
/// Net[Info]   ← range (3, 7)
/// ```
pub fn render_highlighted_text(
    out: &mut String,
    text: &str,
    range: Option<(usize, usize)>,
    theme: &Theme,
    is_selected: bool,
) {
    let Some((start, end)) = range else {
        out.push_str(text);
        return;
    };

    let chars: Vec<char> = text.chars().collect();
    let start = start.min(chars.len());
    let end = end.clamp(start, chars.len());

    out.extend(&chars[..start]);

    out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
    out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
    out.extend(&chars[start..end]);
    out.push_str(Theme::reset());

    if is_selected {
        out.push_str(&Theme::fg(&theme.colors.selection_fg));
        out.push_str(&Theme::bg(&theme.colors.selection_bg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }

    out.extend(&chars[end..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("Button", 10), "Button");
        assert_eq!(truncate("KeyboardAvoidingView", 10), "Keyboar...");
        assert_eq!(truncate("ééééé", 4), "é...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn highlight_wraps_only_the_range() {
        let theme = Theme::default();
        let mut out = String::new();
        render_highlighted_text(&mut out, "NetInfo", Some((3, 7)), &theme, false);

        let highlight_start = Theme::fg(&theme.colors.match_highlight_fg);
        assert!(out.starts_with(&format!("Net{highlight_start}")));
        assert!(out.contains(&format!("Info{}", Theme::reset())));
    }

    #[test]
    fn out_of_range_highlight_is_clamped() {
        let theme = Theme::default();
        let mut out = String::new();
        render_highlighted_text(&mut out, "abc", Some((2, 40)), &theme, true);
        assert!(out.starts_with("ab"));
        assert!(out.contains('c'));
    }
}
