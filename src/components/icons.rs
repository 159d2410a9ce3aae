//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowUp as Up, LuBookOpen as FilePdf, LuChevronDown as ChevronDown,
        LuChevronRight as ChevronRight, LuFile as File, LuFilePlus as NewFile,
        LuFileText as FileText, LuFolder as Folder, LuFolderOpen as Explorer,
        LuFolderPlus as NewFolder, LuImage as FileImage, LuMinus as Minimize,
        LuSquare as Maximize, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowUp as Up, BsChevronDown as ChevronDown, BsChevronRight as ChevronRight,
        BsDashLg as Minimize, BsFileEarmark as File, BsFileEarmarkImage as FileImage,
        BsFileEarmarkPdf as FilePdf, BsFileEarmarkPlus as NewFile,
        BsFileEarmarkText as FileText, BsFolder2 as Explorer, BsFolderFill as Folder,
        BsFolderPlus as NewFolder, BsSquare as Maximize, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(UP, Up);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(NEW_FILE, NewFile);
themed_icon!(NEW_FOLDER, NewFolder);
themed_icon!(EXPLORER, Explorer);
themed_icon!(MINIMIZE, Minimize);
themed_icon!(MAXIMIZE, Maximize);
themed_icon!(CLOSE, Close);

// =============================================================================
// Entry Icons
// =============================================================================

/// Icon for a file system entry, picked by kind and extension.
pub fn entry_icon(is_directory: bool, ext: &str) -> Icon {
    if is_directory {
        return FOLDER;
    }
    match ext.to_ascii_lowercase().as_str() {
        "txt" | "md" | "rs" | "toml" | "json" | "csv" => FILE_TEXT,
        "png" | "jpg" | "jpeg" | "gif" | "svg" | "webp" => FILE_IMAGE,
        "pdf" => FILE_PDF,
        _ => FILE,
    }
}
