//! Reactive state of one explorer view.

use leptos::prelude::*;
use webdesk_core::{
    flat_ids, EntryId, EntryKind, Error, FileSystem, FlatItem, FsViewModel, KeyInput,
    PointerInput, SelectionIntent,
};

use crate::app::AppContext;

/// Signals shared by the components of a single explorer.
///
/// The file system is shared app-wide; the view model (cwd, selection,
/// expansion) belongs to this explorer alone.
#[derive(Clone, Copy)]
pub struct ExplorerState {
    fs: RwSignal<FileSystem>,
    pub view: RwSignal<FsViewModel>,
    /// Kind of entry the new-item dialog is creating, if open.
    pub new_item: RwSignal<Option<EntryKind>>,
    pub cwd: Memo<EntryId>,
    /// Sorted live children of the cwd; the directory view's ordering.
    pub children: Memo<Vec<EntryId>>,
    /// Expansion-aware tree rows; the tree view's ordering.
    pub flattened: Memo<Vec<FlatItem>>,
}

impl ExplorerState {
    pub fn new(ctx: AppContext, root: EntryId) -> Self {
        let fs = ctx.fs;
        let view = RwSignal::new(fs.with_untracked(|fs| FsViewModel::new(fs, root)));
        let cwd = Memo::new(move |_| view.with(|v| v.cwd()));
        let children = Memo::new(move |_| fs.with(|fs| view.with(|v| v.children(fs))));
        let flattened = Memo::new(move |_| fs.with(|fs| view.with(|v| v.flattened(fs))));

        Self {
            fs,
            view,
            new_item: RwSignal::new(None),
            cwd,
            children,
            flattened,
        }
    }

    pub fn selected(&self, item: EntryId) -> bool {
        self.view.with(|v| v.selected(item))
    }

    pub fn selection_len(&self) -> usize {
        self.view.with(|v| v.selection().len())
    }

    /// Resolve a click against `source`, the ordering the user clicked in.
    pub fn click(&self, source: &[EntryId], item: EntryId, input: PointerInput) {
        self.view.update(|v| {
            if let Err(_e) = v.handle_click(source, item, &input) {
                #[cfg(target_arch = "wasm32")]
                web_sys::console::error_1(&format!("Selection failed: {}", _e).into());
            }
        });
    }

    /// Click on a tree row; ranges follow the flattened tree order.
    pub fn click_tree(&self, item: EntryId, input: PointerInput) {
        let source = self.flattened.with_untracked(|items| flat_ids(items));
        self.click(&source, item, input);
    }

    /// Click on a directory view tile; ranges follow the cwd children order.
    pub fn click_directory(&self, item: EntryId, input: PointerInput) {
        let source = self.children.get_untracked();
        self.click(&source, item, input);
    }

    pub fn clear_selection(&self) {
        self.view.update(|v| v.selection_mut().clear());
    }

    pub fn toggle_expanded(&self, dir: EntryId) {
        self.view.update(|v| {
            v.toggle_expanded(dir, None);
        });
    }

    pub fn open(&self, item: EntryId) {
        let fs = self.fs;
        self.view.update(|v| {
            fs.with_untracked(|fs| v.open(fs, item));
        });
    }

    pub fn go_up(&self) {
        let fs = self.fs;
        self.view.update(|v| {
            fs.with_untracked(|fs| v.go_up(fs));
        });
    }

    pub fn can_go_up(&self) -> bool {
        let cwd = self.cwd.get();
        self.fs.with(|fs| fs.parent(cwd).is_some())
    }

    /// Apply a directory view key press. Returns the handled intent.
    pub fn handle_key(&self, input: &KeyInput) -> Option<SelectionIntent> {
        let source = self.children.get_untracked();
        match webdesk_core::keyboard_intent(input)? {
            SelectionIntent::SelectAll => {
                self.view.update(|v| {
                    v.selection_mut().select_all(&source);
                });
                Some(SelectionIntent::SelectAll)
            }
            SelectionIntent::Delete => {
                // A single write per signal, so dependents see the batch once.
                self.view
                    .write()
                    .handle_key(&mut self.fs.write(), &source, input)
            }
            _ => None,
        }
    }

    /// Create an entry in the cwd and select it.
    pub fn create(&self, kind: EntryKind, name: &str) -> Result<EntryId, Error> {
        let id = self
            .view
            .with_untracked(|v| v.create_in_cwd(&mut self.fs.write(), kind, name))?;
        self.view.update(|v| v.selection_mut().select_one(id));

        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&format!("Created {} '{}'", kind.label(), name.trim()).into());
        Ok(id)
    }

    /// Move to the nearest live ancestor if the cwd was deleted elsewhere.
    pub fn follow_deleted_cwd(&self) {
        let cwd = self.cwd.get();
        let target = self.fs.with(|fs| {
            if !fs.is_deleted(cwd) {
                return None;
            }
            let mut dir = fs.parent(cwd);
            while let Some(d) = dir {
                if !fs.is_deleted(d) {
                    return Some(d);
                }
                dir = fs.parent(d);
            }
            Some(fs.root())
        });
        if let Some(target) = target {
            let fs = self.fs;
            self.view.update(|v| {
                fs.with_untracked(|fs| v.set_cwd(fs, target));
            });
        }
    }
}
