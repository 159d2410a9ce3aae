//! Taskbar listing open windows.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::window::TASKBAR_TITLE_LEN;
use crate::models::WindowId;
use crate::utils::truncate;

stylance::import_crate_style!(css, "src/components/desktop/desktop.module.css");

#[component]
pub fn Taskbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let buttons = Memo::new(move |_| {
        ctx.windows.with(|wm| {
            wm.windows()
                .iter()
                .map(|w| (w.id, w.title.clone(), wm.is_focused(w.id)))
                .collect::<Vec<_>>()
        })
    });

    let on_launch = move |_: leptos::ev::MouseEvent| {
        let root = ctx.fs.with_untracked(|fs| fs.root());
        ctx.open_explorer(root);
    };

    view! {
        <nav class=css::taskbar aria-label="Open windows">
            <button class=css::launcher on:click=on_launch title="Open a new file explorer">
                <Icon icon=ic::EXPLORER />
            </button>
            <For
                each=move || buttons.get()
                key=|button| button.clone()
                children=move |(id, title, focused)| {
                    view! { <TaskbarButton id=id title=title focused=focused /> }
                }
            />
        </nav>
    }
}

#[component]
fn TaskbarButton(id: WindowId, title: String, focused: bool) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_click = move |_: leptos::ev::MouseEvent| {
        ctx.windows.update(|wm| {
            wm.focus(id);
        });
    };

    let class = if focused {
        format!("{} {}", css::taskbarButton, css::taskbarButtonActive)
    } else {
        css::taskbarButton.to_string()
    };

    view! {
        <button class=class on:click=on_click aria-selected=focused.to_string() title=title.clone()>
            <span class=css::taskbarIcon><Icon icon=ic::EXPLORER /></span>
            {truncate(&title, TASKBAR_TITLE_LEN, true)}
        </button>
    }
}
