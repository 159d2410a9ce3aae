//! Core model for the webdesk file explorer.
//!
//! This crate has no UI dependencies; the Leptos front end wraps these types
//! in signals. It provides:
//! - [`FileSystem`] - arena-backed tree of files and directories with soft delete
//! - [`Selection`] - ordered-source multi-select with click/keyboard intents
//! - [`flatten`] - expansion-aware linearization of a directory subtree
//! - [`Virtualizer`] - visible-window math for fixed-height virtual lists
//! - [`FsViewModel`] - per-view cwd, selection and expansion state
//! - [`seed_directory`] - demo data generator

pub mod error;
pub mod filesystem;
pub mod flatten;
pub mod seed;
pub mod selection;
pub mod view_model;
pub mod virtualizer;

pub use error::{Error, RangeError, StateError, ValidationError};
pub use filesystem::{extension, locale_cmp, Entry, EntryId, EntryKind, FileSystem, Node};
pub use flatten::{flat_ids, flatten, FlatItem};
pub use seed::{seed_directory, SeedReport};
pub use selection::{
    click_intent, keyboard_intent, KeyInput, PointerButton, PointerInput, Selection,
    SelectionIntent,
};
pub use view_model::FsViewModel;
pub use virtualizer::{
    available_columns, chunk_rows, RowPosition, Viewport, Virtualizer, VisibleWindow,
    DEFAULT_BUFFER,
};
