//! WASM scroll handler for the landing page's decorative sections.
//!
//! Browser-native counterpart of the inline script emitted by the layout
//! shell. Both read the speed and marker class from
//! `parallax_pages::effects`, so they move sections identically.
//!
//! ```js
//! import init, { install_scroll_effect } from './parallax_wasm.js';
//! await init();
//! install_scroll_effect();
//! ```

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

// Re-export canonical effect definitions from parallax-pages
pub use parallax_pages::effects::{
    PARALLAX_SECTION_CLASS, PARALLAX_SPEED, parallax_offset, parallax_selector,
    parallax_transform,
};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global `window`"))
}

fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("window has no document"))
}

/// Set the parallax transform for scroll offset `scrolled` on every
/// decorative section of the document.
///
/// # Returns
/// Number of elements updated (0 when the page has none).
#[wasm_bindgen]
pub fn apply_parallax(scrolled: f64) -> Result<u32, JsValue> {
    apply_to(&document()?, scrolled)
}

fn apply_to(document: &Document, scrolled: f64) -> Result<u32, JsValue> {
    let nodes = document.query_selector_all(&parallax_selector())?;
    let transform = parallax_transform(scrolled);

    let mut updated = 0;
    for idx in 0..nodes.length() {
        let Some(node) = nodes.item(idx) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<HtmlElement>() else {
            continue;
        };
        element.style().set_property("transform", &transform)?;
        updated += 1;
    }
    Ok(updated)
}

/// Register a `scroll` listener on `window` that applies the effect with
/// the current `pageYOffset`.
///
/// The listener is never removed; it lives as long as the page.
#[wasm_bindgen]
pub fn install_scroll_effect() -> Result<(), JsValue> {
    let window = window()?;
    let handler = Closure::<dyn FnMut()>::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let scrolled = window.page_y_offset().unwrap_or(0.0);
        if let Err(err) = apply_parallax(scrolled) {
            web_sys::console::error_1(&err);
        }
    });

    window.add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}
