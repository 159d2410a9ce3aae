//! UI components built with Leptos.
//!
//! - [`desktop`] - Desktop surface, windows, taskbar and dialogs
//! - [`explorer`] - File browser UI
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`virtualizer`] - Fixed-height virtual list

pub mod desktop;
pub mod explorer;
pub mod icons;
pub mod virtualizer;

pub use desktop::Desktop;
