//! Window chrome and per-window context.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::explorer::FileExplorer;
use crate::components::icons as ic;
use crate::models::{WindowContent, WindowId};

stylance::import_crate_style!(css, "src/components/desktop/window.module.css");

/// Handle to the window hosting the current component tree.
///
/// Provided by [`WindowFrame`]; hosted apps use it to set the title and
/// footer of their window. Absent when an app is rendered outside a window.
#[derive(Clone, Copy)]
pub struct WindowHandle {
    pub id: WindowId,
}

/// Keep the host window's title in sync with `title`.
pub fn use_window_title(app: &'static str, title: Signal<Option<String>>) {
    let Some(handle) = use_context::<WindowHandle>() else {
        return;
    };
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    Effect::new(move |_| {
        let title = title.get();
        ctx.windows
            .update(|wm| wm.set_title(handle.id, app, title.as_deref()));
    });
}

/// Keep the host window's footer details in sync with `details`.
pub fn use_window_details(details: Signal<Option<String>>) {
    let Some(handle) = use_context::<WindowHandle>() else {
        return;
    };
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    Effect::new(move |_| {
        let details = details.get();
        ctx.windows.update(|wm| wm.set_details(handle.id, details));
    });
}

/// Title bar, body and optional footer shared by windows and dialogs.
///
/// Minimize and maximize are rendered for familiarity but do nothing.
#[component]
pub fn WindowChrome(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(optional, into)] details: Signal<Option<String>>,
    #[prop(default = true)] can_minimize: bool,
    #[prop(default = true)] can_maximize: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <header class=css::titlebar>
            <span class=css::title>{move || title.get()}</span>
            <div class=css::buttons>
                {can_minimize.then(|| view! {
                    <button class=css::button title="inop" tabindex="-1">
                        <Icon icon=ic::MINIMIZE />
                    </button>
                })}
                {can_maximize.then(|| view! {
                    <button class=css::button title="inop" tabindex="-1">
                        <Icon icon=ic::MAXIMIZE />
                    </button>
                })}
                <button
                    class=css::button
                    title="Close"
                    on:click=move |_| on_close.run(())
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </div>
        </header>
        <div class=css::body>{children()}</div>
        {move || details.get().map(|details| view! {
            <footer class=css::footer>"Details: " {details}</footer>
        })}
    }
}

/// A desktop window hosting one app.
#[component]
pub fn WindowFrame(id: WindowId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    provide_context(WindowHandle { id });

    let title = Memo::new(move |_| {
        ctx.windows
            .with(|wm| wm.get(id).map(|w| w.title.clone()).unwrap_or_default())
    });
    let details = Memo::new(move |_| {
        ctx.windows
            .with(|wm| wm.get(id).and_then(|w| w.details.clone()))
    });
    let focused = Memo::new(move |_| ctx.windows.with(|wm| wm.is_focused(id)));
    let style = Memo::new(move |_| {
        ctx.windows.with(|wm| {
            wm.get(id)
                .map(|w| format!("{} z-index: {};", w.geometry.style(), w.z_index))
                .unwrap_or_default()
        })
    });

    let content = ctx
        .windows
        .with_untracked(|wm| wm.get(id).map(|w| w.content));

    let on_mousedown = move |_: leptos::ev::MouseEvent| {
        if !focused.get_untracked() {
            ctx.windows.update(|wm| {
                wm.focus(id);
            });
        }
    };

    let on_close = move |_: ()| {
        ctx.windows.update(|wm| {
            wm.close(id);
        });
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&"Window closed".into());
    };

    let class = move || {
        if focused.get() {
            format!("{} {}", css::window, css::focused)
        } else {
            css::window.to_string()
        }
    };

    view! {
        <div class=class style=move || style.get() on:mousedown=on_mousedown>
            <WindowChrome title=title on_close=on_close details=details>
                {match content {
                    Some(WindowContent::FileExplorer { root }) => {
                        view! { <FileExplorer root=root /> }.into_any()
                    }
                    None => ().into_any(),
                }}
            </WindowChrome>
        </div>
    }
}
