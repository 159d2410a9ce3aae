//! Icon grid of the current directory.
//!
//! Children are chunked into rows by how many tiles fit the pane's width,
//! then the rows go through the virtual list.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_resize_observer;
use webdesk_core::{available_columns, chunk_rows, EntryId, SelectionIntent};

use super::ExplorerState;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::virtualizer::{row_style, Virtualizer};
use crate::config::explorer::{ITEM_HEIGHT, ITEM_WIDTH};
use crate::utils::dom::{key_input, pointer_input};

stylance::import_crate_style!(css, "src/components/explorer/directory_view.module.css");

#[component]
pub fn DirectoryView() -> impl IntoView {
    let state = use_context::<ExplorerState>().expect("ExplorerState must be provided");

    let pane = NodeRef::<Div>::new();
    let columns = RwSignal::new(1usize);

    use_resize_observer(pane, move |entries, _observer| {
        if let Some(entry) = entries.first() {
            let cols = available_columns(entry.content_rect().width(), ITEM_WIDTH);
            if columns.get_untracked() != cols {
                columns.set(cols);
            }
        }
    });

    let rows = Memo::new(move |_| {
        let cols = columns.get();
        state.children.with(|children| chunk_rows(children, cols))
    });

    // Clicking the background clears the selection. Modifier clicks are
    // left alone since they're likely a missed tile.
    let on_background_click = move |ev: leptos::ev::MouseEvent| {
        if !ev.ctrl_key() && !ev.shift_key() {
            state.clear_selection();
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let input = key_input(&ev);
        if state.handle_key(&input) == Some(SelectionIntent::SelectAll) {
            ev.prevent_default();
        }
    };

    view! {
        <div
            class=css::directoryView
            node_ref=pane
            tabindex="0"
            role="grid"
            aria-label="Directory contents"
            aria-multiselectable="true"
            on:click=on_background_click
            on:keydown=on_keydown
        >
            <Virtualizer
                items=rows
                item_height=ITEM_HEIGHT
                render_item={|row: Vec<EntryId>, position| view! {
                    <div class=css::row style=row_style(position) role="row">
                        {row
                            .into_iter()
                            .map(|id| view! { <DirectoryItem id=id /> })
                            .collect_view()}
                    </div>
                }}
            />
        </div>
    }
}

#[component]
fn DirectoryItem(id: EntryId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = use_context::<ExplorerState>().expect("ExplorerState must be provided");

    let (name, is_dir, ext) = ctx.fs.with_untracked(|fs| {
        (fs.name(id).to_string(), fs.is_directory(id), fs.ext(id).to_string())
    });
    let icon = ic::entry_icon(is_dir, &ext);
    let is_selected = Signal::derive(move || state.selected(id));

    let handle_click = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        state.click_directory(id, pointer_input(&ev));
    };

    let handle_dblclick = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if is_dir {
            state.open(id);
        }
    };

    let item_class = move || {
        if is_selected.get() {
            format!("{} {}", css::item, css::selected)
        } else {
            css::item.to_string()
        }
    };

    let aria_label = if is_dir {
        format!("Folder: {}", name)
    } else {
        format!("File: {}", name)
    };

    view! {
        <div
            class=item_class
            on:click=handle_click
            on:dblclick=handle_dblclick
            role="gridcell"
            tabindex="-1"
            aria-label=aria_label
            aria-selected=move || is_selected.get().to_string()
        >
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=css::name title=name.clone()>{name.clone()}</span>
        </div>
    }
}
