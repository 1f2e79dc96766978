//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler mutates [`AppState`](crate::app::AppState) and returns a
//! list of actions for the things it cannot do itself: talking to the
//! terminal multiplexer. The plugin shim executes them in order.

/// Commands for the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Renames the plugin pane, e.g. to the title of the opened item.
    RenamePane {
        /// New pane title.
        name: String,
    },
}
