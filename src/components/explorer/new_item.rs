//! Dialog for naming a new file or folder.

use leptos::html::Input;
use leptos::prelude::*;
use webdesk_core::EntryKind;

use super::ExplorerState;
use crate::components::desktop::Dialog;

stylance::import_crate_style!(css, "src/components/explorer/new_item.module.css");

#[component]
pub fn NewItemDialog(kind: EntryKind) -> impl IntoView {
    let state = use_context::<ExplorerState>().expect("ExplorerState must be provided");

    let input = NodeRef::<Input>::new();
    let error = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        if let Some(input) = input.get() {
            let _ = input.focus();
        }
    });

    let title = match kind {
        EntryKind::File => "New File",
        EntryKind::Directory => "New Folder",
    };

    let close = move |_: ()| state.new_item.set(None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = input.get().map(|el| el.value()).unwrap_or_default();
        match state.create(kind, &name) {
            Ok(_) => state.new_item.set(None),
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <Dialog title=title on_close=close>
            <form class=css::form on:submit=on_submit>
                <label class=css::label>
                    "Name"
                    <input
                        class=css::input
                        type="text"
                        node_ref=input
                        autocomplete="off"
                        spellcheck="false"
                        on:input=move |_| error.set(None)
                    />
                </label>
                {move || error.get().map(|message| view! {
                    <p class=css::error role="alert">{message}</p>
                })}
                <div class=css::actions>
                    <button type="button" class=css::button on:click=move |_| close(())>
                        "Cancel"
                    </button>
                    <button type="submit" class=format!("{} {}", css::button, css::primary)>
                        "Create"
                    </button>
                </div>
            </form>
        </Dialog>
    }
}
