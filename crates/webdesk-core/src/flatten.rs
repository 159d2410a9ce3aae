//! Expansion-aware linearization of a directory subtree.
//!
//! The flattened sequence is the ordering contract shared by the tree view's
//! renderer and by shift-range selection. It is rebuilt from scratch on every
//! read; trees here are bounded by what a person can usefully browse.

use crate::filesystem::{EntryId, FileSystem};

/// One row of the flattened tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlatItem {
    pub item: EntryId,
    /// Nesting level below the flattened root, starting at 0.
    pub depth: usize,
    /// Number of live siblings, including this item.
    pub set_size: usize,
    /// 1-based position among siblings (matches `aria-posinset`).
    pub pos_in_set: usize,
    /// 0-based position in the whole flattened sequence.
    pub index: usize,
}

/// Flatten the children of `cwd` in pre-order.
///
/// Siblings appear in sorted order. When `is_expanded` returns true for a
/// directory, its children follow it immediately at `depth + 1` before the
/// next sibling.
pub fn flatten(
    fs: &FileSystem,
    cwd: EntryId,
    is_expanded: impl Fn(EntryId) -> bool,
) -> Vec<FlatItem> {
    let mut items = Vec::new();
    // Walk with an explicit stack: each frame is a directory's sorted
    // children and the position of the next one to emit.
    let mut stack: Vec<(Vec<EntryId>, usize)> = vec![(fs.children(cwd), 0)];

    loop {
        let depth = stack.len().saturating_sub(1);
        let Some((siblings, next)) = stack.last_mut() else {
            break;
        };
        let Some(&item) = siblings.get(*next) else {
            stack.pop();
            continue;
        };
        *next += 1;

        items.push(FlatItem {
            item,
            depth,
            set_size: siblings.len(),
            pos_in_set: *next,
            index: items.len(),
        });

        if fs.is_directory(item) && is_expanded(item) {
            stack.push((fs.children(item), 0));
        }
    }

    items
}

/// The entry ids of a flattened sequence, in order.
pub fn flat_ids(items: &[FlatItem]) -> Vec<EntryId> {
    items.iter().map(|flat| flat.item).collect()
}
