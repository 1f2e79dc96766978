//! Catalog item model.
//!
//! An [`Item`] is one browsable entry: a title shown in bold, a one-line
//! description, and an optional stable key used for row identity and for the
//! `ItemSelected` navigation event.

use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Items are immutable once constructed. The `key` is expected to be unique
/// within the whole catalog; when it is absent the title stands in for it (see
/// [`Item::row_key`]). Key uniqueness is a caller invariant and is not checked.
///
/// A missing `title` or `description` deserializes as an empty string, so one
/// malformed entry renders as a blank row instead of failing the whole catalog.
///
/// # Examples
///
/// ```
/// use catalog_browser::Item;
///
/// let keyed = Item::new("btn", "Button", "tap target");
/// assert_eq!(keyed.row_key(), "btn");
///
/// let unkeyed = Item::keyless("Switch", "boolean toggle");
/// assert_eq!(unkeyed.row_key(), "Switch");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl Item {
    /// Creates an item with an explicit key.
    #[must_use]
    pub fn new(key: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            title: title.into(),
            description: description.into(),
        }
    }

    /// Creates an item without a key; its title doubles as its identity.
    #[must_use]
    pub fn keyless(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: None,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Returns the identity used for rows and selection events.
    ///
    /// The explicit key when present and non-empty, otherwise the title.
    #[must_use]
    pub fn row_key(&self) -> &str {
        match self.key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => &self.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_falls_back_to_title() {
        let item = Item {
            key: Some(String::new()),
            title: "Picker".to_string(),
            description: String::new(),
        };
        assert_eq!(item.row_key(), "Picker");
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let item: Item = serde_json::from_str(r#"{"key": "x"}"#).unwrap();
        assert_eq!(item.title, "");
        assert_eq!(item.description, "");
        assert_eq!(item.row_key(), "x");
    }
}
