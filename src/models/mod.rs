//! Data models for the desktop shell.
//!
//! - [`WindowManager`], [`DesktopWindow`], [`WindowGeometry`] - open windows and focus

mod window;

pub use window::{DesktopWindow, WindowContent, WindowGeometry, WindowId, WindowManager};
