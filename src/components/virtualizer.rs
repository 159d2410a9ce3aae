//! Virtual list component.
//!
//! Renders only the rows of `items` that intersect the scrolled viewport,
//! padded by a buffer. The viewport size comes from a `ResizeObserver`
//! that is disconnected when the component is cleaned up.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_use::use_resize_observer;
use webdesk_core::{RowPosition, Viewport, Virtualizer as WindowState};

stylance::import_crate_style!(css, "src/components/virtualizer.module.css");

/// Inline style placing a row at its virtual offset.
pub fn row_style(position: RowPosition) -> String {
    format!(
        "top: {}px; height: {}px;",
        position.top, position.height
    )
}

/// Fixed-height virtual list.
///
/// `render_item` receives each visible item with its placement and must
/// apply [`row_style`] (or equivalent absolute positioning) to its root.
#[component]
pub fn Virtualizer<T, F, V>(
    #[prop(into)] items: Signal<Vec<T>>,
    item_height: f64,
    render_item: F,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T, RowPosition) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let container = NodeRef::<Div>::new();
    let state = RwSignal::new(WindowState::new(item_height));

    use_resize_observer(container, move |entries, _observer| {
        if let Some(entry) = entries.first() {
            let rect = entry.content_rect();
            state.update(|s| s.set_viewport(Viewport::new(rect.width(), rect.height())));
        }
    });

    let window = Memo::new(move |_| {
        let len = items.with(Vec::len);
        state.with(|s| s.window(len))
    });

    let total_height = move || {
        let len = items.with(Vec::len);
        state.with(|s| s.total_height(len))
    };

    let on_scroll = move |ev: leptos::ev::Event| {
        let target = event_target::<web_sys::Element>(&ev);
        state.update(|s| s.set_scroll_top(f64::from(target.scroll_top())));
    };

    let rows = move || {
        let Some(window) = window.get() else {
            return Vec::new();
        };
        items.with(|items| {
            window
                .positions()
                .filter_map(|position| {
                    items
                        .get(position.index)
                        .cloned()
                        .map(|item| render_item(item, position))
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class=css::viewport node_ref=container on:scroll=on_scroll>
            <div
                class=css::content
                style=move || format!("height: {}px;", total_height())
            >
                {rows}
            </div>
        </div>
    }
}
