//! Application configuration.
//!
//! Centralizes the constants used throughout the desktop and explorer.

// =============================================================================
// Application Metadata
// =============================================================================

/// Name of the explorer app, used in window titles.
pub const EXPLORER_APP_NAME: &str = "File Explorer";

/// Name of the root directory of the shared file system.
pub const ROOT_NAME: &str = "root";

// =============================================================================
// Demo Content
// =============================================================================

/// Generated entries added to the root on startup, on top of the fixed skeleton.
pub const SEED_COUNT: usize = 1_000;

// =============================================================================
// Window Configuration
// =============================================================================

/// Desktop window sizing.
pub mod window {
    /// Title shown before the hosted app sets one.
    pub const DEFAULT_TITLE: &str = "New Window";
    /// Share of the desktop width a new window takes.
    pub const WIDTH_RATIO: f64 = 0.65;
    pub const MIN_WIDTH: f64 = 640.0;
    pub const MAX_WIDTH: f64 = 1042.0;
    /// Height as a fraction of width (4:3).
    pub const HEIGHT_RATIO: f64 = 0.75;
    /// Offset of a new window from the focused one.
    pub const CASCADE_OFFSET: f64 = 30.0;
    /// Fallback desktop size before the body has been measured.
    pub const FALLBACK_DESKTOP: (f64, f64) = (1280.0, 800.0);
    /// Taskbar button title length before truncation.
    pub const TASKBAR_TITLE_LEN: usize = 20;
}

// =============================================================================
// Explorer Configuration
// =============================================================================

/// Explorer layout.
pub mod explorer {
    /// Tree row height in pixels.
    pub const TREE_ROW_HEIGHT: f64 = 24.0;
    /// Tree indentation per nesting level, in rem.
    pub const TREE_INDENT_REM: f64 = 1.0;
    /// Directory view tile size in pixels.
    pub const ITEM_WIDTH: f64 = 72.0;
    pub const ITEM_HEIGHT: f64 = 75.0;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
