//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the list pipeline. Data
//! flows one way:
//!
//! ```text
//! Key → Event → handle_event → RenderTree → NavigationEvent → AppState
//!                    ↓
//!                 Actions → plugin runtime
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input mode and route types
//! - [`state`]: Application state container and screen computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, Route};
pub use state::AppState;
