//! Main explorer component.
//!
//! Header on top, the folder tree on the left and the contents of the
//! current directory on the right. Tree and directory view share one
//! [`ExplorerState`], so a selection made in either shows in both.

use leptos::prelude::*;
use webdesk_core::{EntryId, StateError};

use super::{DirectoryView, ExplorerState, FileTree, Header, NewItemDialog};
use crate::app::AppContext;
use crate::components::desktop::{use_window_details, use_window_title};
use crate::config::EXPLORER_APP_NAME;
use crate::utils::format_selection;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// File explorer rooted at `root`.
///
/// Fails into the nearest error boundary if `root` is not a live directory.
#[component]
pub fn FileExplorer(root: EntryId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let checked = ctx.fs.with_untracked(|fs| {
        let name = fs.name(root).to_string();
        if !fs.is_directory(root) {
            Err(StateError::NotADirectory { name })
        } else if fs.is_deleted(root) {
            Err(StateError::Deleted { name })
        } else {
            Ok(())
        }
    });

    checked.map(|()| view! { <ExplorerBody root=root /> })
}

#[component]
fn ExplorerBody(root: EntryId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = ExplorerState::new(ctx, root);
    provide_context(state);

    let title = Signal::derive(move || {
        let cwd = state.cwd.get();
        ctx.fs.with(|fs| Some(fs.name(cwd).to_string()))
    });
    let details = Signal::derive(move || format_selection(state.selection_len()));
    use_window_title(EXPLORER_APP_NAME, title);
    use_window_details(details);

    // Another window may delete the directory this one is showing.
    Effect::new(move |_| state.follow_deleted_cwd());

    view! {
        <div class=css::explorer>
            <Header />
            <div class=css::body>
                <div class=css::treePane>
                    <FileTree />
                </div>
                <div class=css::contentPane>
                    <DirectoryView />
                </div>
            </div>
            {move || state.new_item.get().map(|kind| view! { <NewItemDialog kind=kind /> })}
        </div>
    }
}
