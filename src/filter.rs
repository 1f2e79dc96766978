//! Literal, case-insensitive title matching.
//!
//! A [`FilterPredicate`] is compiled once per query and then tested against item
//! titles. The query is end-user free text and is treated purely as data: there
//! are no wildcards, no escapes, and no way for a query to be malformed. `"(a"`
//! matches exactly the titles containing the three characters `(`, `a` in that
//! order, ignoring case.
//!
//! Each character is folded by uppercasing and then lowercasing it, so `ß`,
//! `SS` and `ss` all compare equal. Every folded char remembers the original
//! char it came from, so match positions map back onto the title for
//! highlighting.

/// Compiled matcher for one query.
///
/// The empty query compiles to the constant-true predicate.
///
/// # Examples
///
/// ```
/// use catalog_browser::FilterPredicate;
///
/// let predicate = FilterPredicate::new("but");
/// assert!(predicate.matches("Button"));
/// assert!(!predicate.matches("NetInfo"));
///
/// let literal = FilterPredicate::new(".*");
/// assert!(!literal.matches("Button"));
/// assert!(literal.matches("Regex .* demo"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPredicate {
    /// Case-folded query characters.
    needle: Vec<char>,
}

impl FilterPredicate {
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            needle: fold(query).map(|(_, c)| c).collect(),
        }
    }

    /// Returns `true` when this predicate accepts every title.
    #[must_use]
    pub fn is_match_all(&self) -> bool {
        self.needle.is_empty()
    }

    /// Tests whether `title` contains the query, ignoring case.
    #[must_use]
    pub fn matches(&self, title: &str) -> bool {
        self.is_match_all() || self.find(title).is_some()
    }

    /// Returns the char range `(start, end)` of the first match in `title`.
    ///
    /// Indices count characters of the original title, end exclusive. The
    /// match-all predicate highlights nothing and returns `None`.
    #[must_use]
    pub fn match_range(&self, title: &str) -> Option<(usize, usize)> {
        if self.is_match_all() {
            return None;
        }
        self.find(title)
    }

    fn find(&self, title: &str) -> Option<(usize, usize)> {
        let folded: Vec<(usize, char)> = fold(title).collect();
        if folded.len() < self.needle.len() {
            return None;
        }

        folded
            .windows(self.needle.len())
            .find(|window| window.iter().map(|(_, c)| c).eq(self.needle.iter()))
            .map(|window| {
                let start = window[0].0;
                let end = window[window.len() - 1].0 + 1;
                (start, end)
            })
    }
}

/// Case-folds `text` one character at a time, tagging each folded char with
/// the index of the original char it came from.
fn fold(text: &str) -> impl Iterator<Item = (usize, char)> + '_ {
    text.chars().enumerate().flat_map(|(idx, c)| {
        c.to_uppercase()
            .flat_map(char::to_lowercase)
            .map(move |folded| (idx, folded))
    })
}

/// Memoizes predicate compilation across render cycles.
///
/// Every keystroke triggers a full rebuild of the render plan; the cache makes
/// sure the query is only folded again when it actually changed.
#[derive(Debug, Clone, Default)]
pub struct FilterCache {
    query: String,
    predicate: FilterPredicate,
}

impl FilterCache {
    /// Returns the predicate for `query`, recompiling only if it changed.
    pub fn predicate(&mut self, query: &str) -> &FilterPredicate {
        if self.query != query {
            tracing::trace!(query_len = query.len(), "compiling filter predicate");
            self.query = query.to_string();
            self.predicate = FilterPredicate::new(query);
        }
        &self.predicate
    }

    /// The query the cached predicate was compiled from.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        let predicate = FilterPredicate::new("");
        assert!(predicate.is_match_all());
        assert!(predicate.matches(""));
        assert!(predicate.matches("anything"));
        assert_eq!(predicate.match_range("anything"), None);
    }

    #[test]
    fn matching_ignores_case() {
        for query in ["net", "NET", "nEt"] {
            assert!(FilterPredicate::new(query).matches("NetInfo"), "query {query}");
        }
    }

    #[test]
    fn metacharacters_are_literal() {
        assert!(!FilterPredicate::new("(a").matches("alpha"));
        assert!(FilterPredicate::new("(a").matches("Touchable (android)"));
        assert!(!FilterPredicate::new("b.t").matches("Button"));
        assert!(!FilterPredicate::new("^B").matches("Button"));
        assert!(FilterPredicate::new("[").matches("a[b"));
        assert!(FilterPredicate::new("\\").matches("C:\\path"));
    }

    #[test]
    fn match_range_counts_original_chars() {
        let predicate = FilterPredicate::new("info");
        assert_eq!(predicate.match_range("NetInfo"), Some((3, 7)));
        assert_eq!(FilterPredicate::new("é").match_range("Café au lait"), Some((3, 4)));
        assert_eq!(predicate.match_range("Button"), None);
    }

    #[test]
    fn sharp_s_matches_its_uppercase_expansion() {
        for query in ["straße", "STRASSE", "strasse", "straße".to_uppercase().as_str()] {
            assert!(FilterPredicate::new(query).matches("Straße"), "query {query}");
        }
        assert!(FilterPredicate::new("ß").matches("STRASSE"));

        assert_eq!(FilterPredicate::new("STRASSE").match_range("Straße"), Some((0, 6)));
        assert_eq!(FilterPredicate::new("ss").match_range("Straße"), Some((4, 5)));
    }

    #[test]
    fn final_sigma_and_dotted_i_fold_with_their_uppercase() {
        assert!(FilterPredicate::new("ΟΔΟΣ").matches("οδος"));
        assert!(FilterPredicate::new("οδος").matches("ΟΔΟΣ"));
        assert!(FilterPredicate::new(&"İstanbul".to_lowercase()).matches("İSTANBUL"));
    }

    #[test]
    fn query_longer_than_title_never_matches() {
        assert!(!FilterPredicate::new("buttons").matches("Button"));
    }

    #[test]
    fn cache_recompiles_only_on_change() {
        let mut cache = FilterCache::default();
        assert!(cache.predicate("").is_match_all());

        assert!(cache.predicate("sw").matches("Switch"));
        assert_eq!(cache.query(), "sw");

        assert!(!cache.predicate("sl").matches("Switch"));
        assert_eq!(cache.query(), "sl");
    }
}
