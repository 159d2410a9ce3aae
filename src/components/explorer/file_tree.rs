//! Folder tree for the explorer's left pane.
//!
//! Renders the flattened, expansion-aware subtree of the cwd through the
//! virtual list. Shift-click ranges run over the flattened order, so a range
//! can span nested levels.

use leptos::prelude::*;
use leptos_icons::Icon;
use webdesk_core::{FlatItem, RowPosition};

use super::ExplorerState;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::virtualizer::{row_style, Virtualizer};
use crate::config::explorer::{TREE_INDENT_REM, TREE_ROW_HEIGHT};
use crate::utils::dom::pointer_input;

stylance::import_crate_style!(css, "src/components/explorer/file_tree.module.css");

#[component]
pub fn FileTree() -> impl IntoView {
    let state = use_context::<ExplorerState>().expect("ExplorerState must be provided");

    view! {
        <div class=css::tree role="tree" aria-label="Folders" aria-multiselectable="true">
            <Virtualizer
                items=state.flattened
                item_height=TREE_ROW_HEIGHT
                render_item=|flat, position| view! { <FileTreeItem flat=flat position=position /> }
            />
        </div>
    }
}

#[component]
fn FileTreeItem(flat: FlatItem, position: RowPosition) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = use_context::<ExplorerState>().expect("ExplorerState must be provided");

    let id = flat.item;
    let (name, is_dir, ext) = ctx.fs.with_untracked(|fs| {
        (fs.name(id).to_string(), fs.is_directory(id), fs.ext(id).to_string())
    });
    let icon = ic::entry_icon(is_dir, &ext);

    let is_selected = Signal::derive(move || state.selected(id));
    let is_expanded = Signal::derive(move || {
        ctx.fs
            .with_untracked(|fs| state.view.with(|v| v.expanded(fs, id)))
    });

    let handle_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        state.click_tree(id, pointer_input(&ev));
    };

    let handle_toggle = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        state.toggle_expanded(id);
    };

    let item_class = move || {
        if is_selected.get() {
            format!("{} {}", css::item, css::selected)
        } else {
            css::item.to_string()
        }
    };

    let style = format!(
        "{} padding-left: {}rem;",
        row_style(position),
        flat.depth as f64 * TREE_INDENT_REM
    );

    view! {
        <div
            class=item_class
            style=style
            role="treeitem"
            attr:aria-level=(flat.depth + 1).to_string()
            aria-posinset=flat.pos_in_set.to_string()
            aria-setsize=flat.set_size.to_string()
            aria-selected=move || is_selected.get().to_string()
            aria-expanded=move || is_dir.then(|| is_expanded.get().to_string())
            on:click=handle_click
        >
            <span class=css::chevron aria-hidden="true">
                {is_dir.then(|| view! {
                    <button class=css::toggle tabindex="-1" on:click=handle_toggle>
                        {move || if is_expanded.get() {
                            view! { <Icon icon=ic::CHEVRON_DOWN /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::CHEVRON_RIGHT /> }.into_any()
                        }}
                    </button>
                })}
            </span>
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=css::name>{name}</span>
        </div>
    }
}
