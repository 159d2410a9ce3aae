//! Per-view explorer state.
//!
//! An [`FsViewModel`] ties a current directory, a selection and a set of
//! expanded directories to a shared [`FileSystem`]. Selection and expansion
//! are view-local: two windows browsing the same tree each own a view model.

use std::collections::{BTreeMap, HashSet};

use crate::error::{Error, RangeError, ValidationError};
use crate::filesystem::{EntryId, EntryKind, FileSystem};
use crate::flatten::{flatten, FlatItem};
use crate::selection::{keyboard_intent, KeyInput, PointerInput, Selection, SelectionIntent};

#[derive(Clone, Debug)]
pub struct FsViewModel {
    cwd: EntryId,
    selection: Selection<EntryId>,
    expanded: HashSet<EntryId>,
}

impl FsViewModel {
    pub fn new(fs: &FileSystem, cwd: EntryId) -> Self {
        Self {
            cwd,
            selection: Selection::new(fs.children(cwd)),
            expanded: HashSet::new(),
        }
    }

    pub fn cwd(&self) -> EntryId {
        self.cwd
    }

    /// Change the directory being viewed. Clears the selection, since a
    /// selection only makes sense for the directory it was made in.
    ///
    /// Returns `false` (and changes nothing) if `dir` is not a directory.
    pub fn set_cwd(&mut self, fs: &FileSystem, dir: EntryId) -> bool {
        if !fs.is_directory(dir) {
            return false;
        }
        self.cwd = dir;
        self.selection = Selection::new(fs.children(dir));
        true
    }

    /// Enter `item` if it is a live directory.
    pub fn open(&mut self, fs: &FileSystem, item: EntryId) -> bool {
        if fs.is_deleted(item) || item == self.cwd {
            return false;
        }
        self.set_cwd(fs, item)
    }

    /// Move to the parent of the current directory.
    pub fn go_up(&mut self, fs: &FileSystem) -> bool {
        match fs.parent(self.cwd) {
            Some(parent) => self.set_cwd(fs, parent),
            None => false,
        }
    }

    pub fn selection(&self) -> &Selection<EntryId> {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut Selection<EntryId> {
        &mut self.selection
    }

    pub fn selected(&self, item: EntryId) -> bool {
        self.selection.has(&item)
    }

    /// Sorted live children of the current directory.
    pub fn children(&self, fs: &FileSystem) -> Vec<EntryId> {
        fs.children(self.cwd)
    }

    /// Flattened tree under the current directory, honoring expansion.
    pub fn flattened(&self, fs: &FileSystem) -> Vec<FlatItem> {
        flatten(fs, self.cwd, |id| self.expanded.contains(&id))
    }

    pub fn expanded(&self, fs: &FileSystem, item: EntryId) -> bool {
        fs.is_directory(item) && self.expanded.contains(&item)
    }

    /// Set expansion for `dir`; `None` flips it. Returns the new state.
    pub fn toggle_expanded(&mut self, dir: EntryId, expanded: Option<bool>) -> bool {
        let expanded = expanded.unwrap_or_else(|| !self.expanded.contains(&dir));
        if expanded {
            self.expanded.insert(dir);
        } else {
            self.expanded.remove(&dir);
        }
        expanded
    }

    /// Build a new, detached file or directory.
    ///
    /// The name is trimmed and must not be empty. The caller picks the
    /// parent and attaches with [`FileSystem::add`].
    pub fn create(
        &self,
        fs: &mut FileSystem,
        kind: EntryKind,
        name: &str,
    ) -> Result<EntryId, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(fs.create(kind, name))
    }

    /// Create an entry and attach it to the current directory.
    pub fn create_in_cwd(
        &self,
        fs: &mut FileSystem,
        kind: EntryKind,
        name: &str,
    ) -> Result<EntryId, Error> {
        let trimmed = name.trim();
        if !trimmed.is_empty() && !self.is_name_available(fs, trimmed) {
            return Err(ValidationError::NameUnavailable(trimmed.to_string()).into());
        }
        let item = self.create(fs, kind, name)?;
        Ok(fs.add(self.cwd, item)?)
    }

    /// Rename `item`, keeping names unique among its live siblings.
    pub fn rename(
        &self,
        fs: &mut FileSystem,
        item: EntryId,
        name: &str,
    ) -> Result<(), ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if fs.name(item) == name {
            return Ok(());
        }
        if let Some(parent) = fs.parent(item) {
            let taken = fs
                .children(parent)
                .into_iter()
                .any(|sibling| sibling != item && fs.name(sibling) == name);
            if taken {
                return Err(ValidationError::NameUnavailable(name.to_string()));
            }
        }
        fs.rename(item, name);
        Ok(())
    }

    /// True if no live direct child of the current directory is named
    /// exactly `name` (case-sensitive). Names of deleted entries are free.
    pub fn is_name_available(&self, fs: &FileSystem, name: &str) -> bool {
        !fs.children(self.cwd)
            .into_iter()
            .any(|child| fs.name(child) == name)
    }

    /// Remove every selected entry from its parent, then start a fresh
    /// selection over the current directory's children.
    ///
    /// Items are grouped by parent so each directory sees a single
    /// [`FileSystem::remove`] call. Returns the number of selected entries
    /// that are deleted afterwards, counting those removed by a selected
    /// ancestor's cascade.
    pub fn delete_selection(&mut self, fs: &mut FileSystem) -> usize {
        let mut groups: BTreeMap<EntryId, HashSet<EntryId>> = BTreeMap::new();
        let mut targets = Vec::new();
        for &item in self.selection.iter() {
            match fs.parent(item) {
                Some(parent) => {
                    groups.entry(parent).or_default().insert(item);
                    targets.push(item);
                }
                None => {
                    #[cfg(target_arch = "wasm32")]
                    web_sys::console::warn_1(
                        &format!("Skipping delete of detached entry '{}'", fs.name(item)).into(),
                    );
                }
            }
        }

        for (&parent, items) in &groups {
            fs.remove(parent, items);
        }
        let removed = targets.iter().filter(|&&item| fs.is_deleted(item)).count();

        self.selection = Selection::new(fs.children(self.cwd));
        removed
    }

    /// Apply a click on `item`, resolving ranges against `source`.
    pub fn handle_click(
        &mut self,
        source: &[EntryId],
        item: EntryId,
        input: &PointerInput,
    ) -> Result<Option<SelectionIntent>, RangeError> {
        self.selection.from_click_event(source, item, input)
    }

    /// Apply a key press: select-all over `source`, or delete the selection.
    ///
    /// Returns the intent that was handled so the caller can prevent the
    /// browser default.
    pub fn handle_key(
        &mut self,
        fs: &mut FileSystem,
        source: &[EntryId],
        input: &KeyInput,
    ) -> Option<SelectionIntent> {
        let intent = keyboard_intent(input)?;
        match intent {
            SelectionIntent::SelectAll => {
                self.selection.select_all(source);
            }
            SelectionIntent::Delete => {
                self.delete_selection(fs);
            }
            _ => {}
        }
        Some(intent)
    }
}
