//! Browser tests for the scroll handler.
//!
//! Run with: `wasm-pack test --headless --firefox pages/wasm`

#![cfg(target_arch = "wasm32")]

use parallax_wasm::{PARALLAX_SECTION_CLASS, apply_parallax};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Mounts `count` decorative sections plus one plain section under a fresh
/// container. Returns (container, decorative sections, plain section).
fn mount(count: usize) -> (HtmlElement, Vec<HtmlElement>, HtmlElement) {
    let doc = document();
    let container: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
    doc.body().unwrap().append_child(&container).unwrap();

    let sections = (0..count)
        .map(|_| {
            let section: HtmlElement = doc.create_element("section").unwrap().dyn_into().unwrap();
            section.set_class_name(PARALLAX_SECTION_CLASS);
            container.append_child(&section).unwrap();
            section
        })
        .collect();

    let plain: HtmlElement = doc.create_element("section").unwrap().dyn_into().unwrap();
    plain.set_class_name("content-section");
    container.append_child(&plain).unwrap();

    (container, sections, plain)
}

fn transform(el: &HtmlElement) -> String {
    el.style().get_property_value("transform").unwrap()
}

#[wasm_bindgen_test]
fn sets_half_the_scroll_offset_on_every_section() {
    let (container, sections, plain) = mount(2);

    let updated = apply_parallax(300.0).unwrap();

    assert_eq!(updated, 2);
    for section in &sections {
        assert_eq!(transform(section), "translateY(150px)");
    }
    assert_eq!(transform(&plain), "");
    container.remove();
}

#[wasm_bindgen_test]
fn repeated_calls_overwrite_instead_of_accumulating() {
    let (container, sections, _) = mount(1);

    apply_parallax(200.0).unwrap();
    apply_parallax(60.0).unwrap();
    assert_eq!(transform(&sections[0]), "translateY(30px)");

    apply_parallax(200.0).unwrap();
    assert_eq!(transform(&sections[0]), "translateY(100px)");
    container.remove();
}

#[wasm_bindgen_test]
fn no_sections_is_a_silent_no_op() {
    let (container, _, plain) = mount(0);

    assert_eq!(apply_parallax(500.0).unwrap(), 0);
    assert_eq!(transform(&plain), "");
    container.remove();
}
