//! File explorer UI components.
//!
//! Components:
//! - [`FileExplorer`] - Main explorer view
//! - [`FileTree`] - Virtualized folder tree
//! - [`DirectoryView`] - Virtualized icon grid of the current directory
//! - [`NewItemDialog`] - Name prompt for new files and folders

mod directory_view;
#[allow(clippy::module_inception)]
mod explorer;
mod file_tree;
mod header;
mod new_item;
mod state;

pub use directory_view::DirectoryView;
pub use explorer::FileExplorer;
pub use file_tree::FileTree;
pub use header::Header;
pub use new_item::NewItemDialog;
pub use state::ExplorerState;
