//! Infrastructure layer for filesystem and environment interactions.
//!
//! Inside the Zellij plugin sandbox the host filesystem is mounted under
//! `/host`; these helpers translate user-facing paths into sandbox paths.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
