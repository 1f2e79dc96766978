//! Input mode and route types.
//!
//! The input mode decides what a key means: in [`InputMode::Browsing`] letters
//! are commands, in [`InputMode::Searching`] they are typed into the search
//! row. The route decides which screen is shown.

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys navigate and trigger commands.
    #[default]
    Browsing,

    /// Keys edit the filter text. Enter and the arrow keys keep working on
    /// the list, so a result can be opened without leaving the search box.
    Searching,
}

/// Screen currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// The sectioned list.
    #[default]
    List,

    /// Detail page for the item with this row key.
    Detail { key: String },
}
