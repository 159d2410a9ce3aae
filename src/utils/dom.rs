//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{KeyboardEvent, MouseEvent, Window};
use webdesk_core::{KeyInput, PointerButton, PointerInput};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Size of the document body, the area windows are laid out in.
pub fn body_size() -> Option<(f64, f64)> {
    let body = window()?.document()?.body()?;
    let rect = body.get_bounding_client_rect();
    Some((rect.width(), rect.height()))
}

/// Whether the event target is the element the handler is attached to.
///
/// Used for "click on the background" checks, where clicks bubbling up from
/// children must be ignored.
pub fn is_self_target(event: &web_sys::Event) -> bool {
    match (event.target(), event.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

// =============================================================================
// Event Conversion
// =============================================================================

/// Read the button and modifier state of a mouse event.
pub fn pointer_input(event: &MouseEvent) -> PointerInput {
    PointerInput {
        button: PointerButton::from_dom(event.button()),
        shift: event.shift_key(),
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
    }
}

/// Read the key and modifier state of a keyboard event.
pub fn key_input(event: &KeyboardEvent) -> KeyInput {
    KeyInput {
        key: event.key(),
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
    }
}
