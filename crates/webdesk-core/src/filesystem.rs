//! In-memory file system tree.
//!
//! All nodes live in a single arena owned by [`FileSystem`] and are addressed
//! by [`EntryId`]. A directory's `children` list is the only ownership edge;
//! `parent` is a back-reference used for path building and for the
//! cascading deleted check.

use std::cmp::Ordering;
use std::collections::HashSet;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::StateError;

// =============================================================================
// Entry
// =============================================================================

/// Handle to an entry in a [`FileSystem`].
///
/// Ids are only meaningful for the file system that created them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(usize);

impl EntryId {
    /// Position of the entry in its arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Discriminant used when creating entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
        }
    }
}

/// Type-specific payload of an entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    File,
    /// Unsorted storage; use [`FileSystem::children`] for display order.
    Directory { children: Vec<EntryId> },
}

/// A file or directory node.
#[derive(Clone, Debug)]
pub struct Entry {
    name: String,
    parent: Option<EntryId>,
    deleted: bool,
    node: Node,
}

impl Entry {
    fn new(kind: EntryKind, name: String) -> Self {
        let node = match kind {
            EntryKind::File => Node::File,
            EntryKind::Directory => Node::Directory {
                children: Vec::new(),
            },
        };
        Self {
            name,
            parent: None,
            deleted: false,
            node,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<EntryId> {
        self.parent
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn kind(&self) -> EntryKind {
        match self.node {
            Node::File => EntryKind::File,
            Node::Directory { .. } => EntryKind::Directory,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.node, Node::Directory { .. })
    }

    /// File extension without the dot. Always empty for directories.
    pub fn ext(&self) -> &str {
        match self.node {
            Node::File => extension(&self.name),
            Node::Directory { .. } => "",
        }
    }
}

/// Extract the extension from a file name.
///
/// Empty when the name has no dot, ends with a dot, or starts with one
/// (dotfiles such as `.profile`).
pub fn extension(name: &str) -> &str {
    if name.starts_with('.') {
        return "";
    }
    match name.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => "",
    }
}

/// Locale-style name ordering.
///
/// Compares accent- and case-insensitively first, then by accents, then
/// lowercase before uppercase, then by code point so distinct names never
/// compare equal.
///
/// Punctuation and symbols are not collated: they fall back to code point
/// order, so `_a` sorts after `1a`.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    fn base(s: &str) -> impl Iterator<Item = char> + '_ {
        s.nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
    }
    fn accented(s: &str) -> impl Iterator<Item = char> + '_ {
        s.nfd().flat_map(char::to_lowercase)
    }
    fn case(s: &str) -> impl Iterator<Item = bool> + '_ {
        s.chars().map(char::is_uppercase)
    }

    base(a)
        .cmp(base(b))
        .then_with(|| accented(a).cmp(accented(b)))
        .then_with(|| case(a).cmp(case(b)))
        .then_with(|| a.cmp(b))
}

// =============================================================================
// FileSystem
// =============================================================================

/// Arena-backed virtual file system.
///
/// Deletion is soft: a deleted directory keeps its arena slot but drops its
/// children list, and every descendant reports deleted through the ancestor
/// walk in [`FileSystem::is_deleted`].
#[derive(Clone, Debug)]
pub struct FileSystem {
    entries: Vec<Entry>,
    root: EntryId,
}

impl FileSystem {
    /// Create a file system containing only an empty root directory.
    pub fn new(root_name: &str) -> Self {
        Self {
            entries: vec![Entry::new(EntryKind::Directory, root_name.to_string())],
            root: EntryId(0),
        }
    }

    pub fn root(&self) -> EntryId {
        self.root
    }

    /// Number of allocated entries, including deleted and detached ones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id.0)
    }

    fn entry(&self, id: EntryId) -> &Entry {
        &self.entries[id.0]
    }

    fn entry_mut(&mut self, id: EntryId) -> &mut Entry {
        &mut self.entries[id.0]
    }

    /// Allocate a detached entry. Attach it with [`FileSystem::add`].
    pub fn create(&mut self, kind: EntryKind, name: &str) -> EntryId {
        let id = EntryId(self.entries.len());
        self.entries.push(Entry::new(kind, name.to_string()));
        id
    }

    pub fn create_file(&mut self, name: &str) -> EntryId {
        self.create(EntryKind::File, name)
    }

    pub fn create_directory(&mut self, name: &str) -> EntryId {
        self.create(EntryKind::Directory, name)
    }

    pub fn name(&self, id: EntryId) -> &str {
        &self.entry(id).name
    }

    pub fn parent(&self, id: EntryId) -> Option<EntryId> {
        self.entry(id).parent
    }

    pub fn ext(&self, id: EntryId) -> &str {
        self.entry(id).ext()
    }

    pub fn kind(&self, id: EntryId) -> EntryKind {
        self.entry(id).kind()
    }

    pub fn is_directory(&self, id: EntryId) -> bool {
        self.entry(id).is_directory()
    }

    /// Rename an entry. Validation is the caller's job.
    pub fn rename(&mut self, id: EntryId, name: &str) {
        self.entry_mut(id).name = name.to_string();
    }

    /// True if the entry or any of its ancestors has been deleted.
    pub fn is_deleted(&self, id: EntryId) -> bool {
        let mut current = Some(id);
        while let Some(cur) = current {
            let entry = self.entry(cur);
            if entry.deleted {
                return true;
            }
            current = entry.parent;
        }
        false
    }

    /// True if `ancestor` is `id` or appears on its parent chain.
    pub fn is_ancestor(&self, ancestor: EntryId, id: EntryId) -> bool {
        let mut current = Some(id);
        while let Some(cur) = current {
            if cur == ancestor {
                return true;
            }
            current = self.entry(cur).parent;
        }
        false
    }

    /// Slash-joined names from the root down to `id`.
    pub fn path(&self, id: EntryId) -> String {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(cur) = current {
            let entry = self.entry(cur);
            names.push(entry.name.as_str());
            current = entry.parent;
        }
        names.reverse();
        names.join("/")
    }

    /// Attach `item` to `dir` and return it.
    ///
    /// An item already attached elsewhere is detached from its previous
    /// parent first, so an entry is never listed under two directories.
    /// The root can't be attached anywhere.
    pub fn add(&mut self, dir: EntryId, item: EntryId) -> Result<EntryId, StateError> {
        if !self.is_directory(dir) {
            return Err(StateError::NotADirectory {
                name: self.name(dir).to_string(),
            });
        }
        if self.is_deleted(dir) {
            return Err(StateError::Deleted {
                name: self.name(dir).to_string(),
            });
        }
        if item == self.root {
            return Err(StateError::RootNotMovable {
                name: self.name(item).to_string(),
            });
        }
        if self.is_ancestor(item, dir) {
            return Err(StateError::WouldCycle {
                name: self.name(item).to_string(),
            });
        }

        if let Some(previous) = self.entry(item).parent
            && let Node::Directory { children } = &mut self.entry_mut(previous).node
        {
            children.retain(|&child| child != item);
        }

        let entry = self.entry_mut(item);
        entry.parent = Some(dir);
        entry.deleted = false;

        if let Node::Directory { children } = &mut self.entry_mut(dir).node {
            children.push(item);
        }
        Ok(item)
    }

    /// Live children of `dir` sorted by name. Empty for files.
    ///
    /// Sorting happens on every call and never reorders storage. That's fine
    /// for directories a person can browse; past ~10^4 children, keeping the
    /// storage sorted on insert would be the better trade.
    pub fn children(&self, dir: EntryId) -> Vec<EntryId> {
        let Node::Directory { children } = &self.entry(dir).node else {
            return Vec::new();
        };
        let mut sorted: Vec<EntryId> = children
            .iter()
            .copied()
            .filter(|&id| !self.entry(id).deleted)
            .collect();
        sorted.sort_by(|&a, &b| locale_cmp(self.name(a), self.name(b)));
        sorted
    }

    /// Number of live direct children.
    pub fn child_count(&self, dir: EntryId) -> usize {
        match &self.entry(dir).node {
            Node::Directory { children } => children
                .iter()
                .filter(|&&id| !self.entry(id).deleted)
                .count(),
            Node::File => 0,
        }
    }

    /// Remove every target that is a direct child of `dir`.
    ///
    /// Removed directories are deleted (which orphans their subtree);
    /// removed files get their own deleted flag. Returns how many entries
    /// were removed.
    pub fn remove(&mut self, dir: EntryId, targets: &HashSet<EntryId>) -> usize {
        let Node::Directory { children } = &mut self.entry_mut(dir).node else {
            return 0;
        };

        let mut removed = Vec::new();
        children.retain(|child| {
            if targets.contains(child) {
                removed.push(*child);
                false
            } else {
                true
            }
        });

        for &id in &removed {
            self.delete(id);
        }
        removed.len()
    }

    /// Mark an entry deleted. Directories also drop their children list.
    pub fn delete(&mut self, id: EntryId) {
        let entry = self.entry_mut(id);
        entry.deleted = true;
        if let Node::Directory { children } = &mut entry.node {
            children.clear();
        }
    }
}

impl Default for FileSystem {
    fn default() -> Self {
        Self::new("root")
    }
}
