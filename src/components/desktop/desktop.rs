//! Desktop surface: window layer plus taskbar.

use leptos::prelude::*;

use super::{Taskbar, WindowFrame};
use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/desktop/desktop.module.css");

#[component]
pub fn Desktop() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let ids = Memo::new(move |_| ctx.windows.with(|wm| wm.ids()));

    view! {
        <div class=css::desktop>
            <div class=css::body>
                <For
                    each=move || ids.get()
                    key=|id| *id
                    children=move |id| view! { <WindowFrame id=id /> }
                />
            </div>
            <Taskbar />
        </div>
    }
}
