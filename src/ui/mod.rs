//! User interface layer: list rendering contract and terminal painting.
//!
//! ```text
//! RenderPlan → ListRenderer → RenderTree → ListWidget (AnsiList) → ANSI frame
//! ```
//!
//! # Modules
//!
//! - [`list`]: `ListRenderer`, display options, and the `ListWidget` contract
//! - [`viewmodel`]: View descriptors and the interaction entry points
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Terminal painters, including the `AnsiList` widget
//! - [`helpers`]: Shared rendering utilities (highlighting, truncation)
//! - [`theme`]: Color scheme definitions and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod list;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use list::{ListOptions, ListRenderer, ListWidget};
pub use renderer::{render, render_screen};
pub use theme::Theme;
pub use viewmodel::{
    DetailView, EmptyState, ItemRowView, RenderTree, RowTarget, Screen, SearchRowView, SectionHeaderView,
    SectionView, TitleRowView, UIViewModel,
};
