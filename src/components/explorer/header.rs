//! Explorer header component.
//!
//! Contains the up button, the current path and the create buttons.

use leptos::prelude::*;
use leptos_icons::Icon;
use webdesk_core::EntryKind;

use super::ExplorerState;
use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Explorer header with navigation and actions.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = use_context::<ExplorerState>().expect("ExplorerState must be provided");

    let is_root = Signal::derive(move || !state.can_go_up());
    let path = Memo::new(move |_| {
        let cwd = state.cwd.get();
        ctx.fs.with(|fs| fs.path(cwd))
    });

    let on_up = move |_: leptos::ev::MouseEvent| state.go_up();
    let on_new_file = move |_: leptos::ev::MouseEvent| state.new_item.set(Some(EntryKind::File));
    let on_new_folder =
        move |_: leptos::ev::MouseEvent| state.new_item.set(Some(EntryKind::Directory));

    view! {
        <header class=css::header>
            <button
                class=move || {
                    if is_root.get() {
                        format!("{} {}", css::navButton, css::navButtonDisabled)
                    } else {
                        css::navButton.to_string()
                    }
                }
                on:click=on_up
                disabled=move || is_root.get()
                title="Go to parent directory"
            >
                <Icon icon=ic::UP />
            </button>

            <div class=css::path title=move || path.get()>
                <span class=css::pathIcon><Icon icon=ic::FOLDER /></span>
                <span class=css::pathLabel>{move || path.get()}</span>
            </div>

            <div class=css::actionButtons>
                <button class=css::actionButton on:click=on_new_file title="New file">
                    <Icon icon=ic::NEW_FILE />
                </button>
                <button class=css::actionButton on:click=on_new_folder title="New folder">
                    <Icon icon=ic::NEW_FOLDER />
                </button>
            </div>
        </header>
    }
}
