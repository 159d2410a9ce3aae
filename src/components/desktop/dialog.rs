//! Modal dialog over the hosting window.

use leptos::prelude::*;

use super::window::WindowChrome;
use crate::utils::dom::is_self_target;

stylance::import_crate_style!(css, "src/components/desktop/dialog.module.css");

/// Masks the content behind it until closed.
///
/// Closes on a click on the mask itself or on Escape from anywhere inside.
#[component]
pub fn Dialog(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let on_mask_click = move |ev: leptos::ev::MouseEvent| {
        if is_self_target(&ev) {
            on_close.run(());
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.stop_propagation();
            on_close.run(());
        }
    };

    let label = title.clone();

    view! {
        <div class=css::mask on:click=on_mask_click on:keydown=on_keydown>
            <div class=css::dialog role="dialog" aria-label=label>
                <WindowChrome
                    title=title
                    on_close=on_close
                    can_minimize=false
                    can_maximize=false
                >
                    {children()}
                </WindowChrome>
            </div>
        </div>
    }
}
