//! Simulated desktop.
//!
//! Components:
//! - [`Desktop`] - Window layer and taskbar
//! - [`Taskbar`] - One button per open window
//! - [`WindowFrame`] - Positioned window hosting an app
//! - [`Dialog`] - Modal over the hosting window

#[allow(clippy::module_inception)]
mod desktop;
mod dialog;
mod taskbar;
mod window;

pub use desktop::Desktop;
pub use dialog::Dialog;
pub use taskbar::Taskbar;
pub use window::{use_window_details, use_window_title, WindowChrome, WindowFrame, WindowHandle};
