//! Utility modules for DOM access and display formatting.
//!
//! Provides:
//! - [`truncate`] - char-safe shortening with a leading or trailing ellipsis
//! - [`dom`] - browser API helpers

pub mod dom;
pub mod format;

pub use format::{format_selection, truncate};
