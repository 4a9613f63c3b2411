//! Thin helpers over `web_sys` used by the browser-side components

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::core::SectionBounds;

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

/// Current viewport width, read at call time.
///
/// Falls back to infinity (desktop behavior) when the window is unavailable.
pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(f64::INFINITY)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// All elements matching `selector` that are `HtmlElement`s, in document order
pub fn query_all_html(selector: &str) -> Vec<HtmlElement> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Height of the fixed navbar
pub fn header_height() -> f64 {
    query("nav")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|el| f64::from(el.offset_height()))
        .unwrap_or(0.0)
}

/// Top of an element relative to the document
pub fn document_top(element: &Element) -> f64 {
    element.get_bounding_client_rect().top() + scroll_y()
}

/// Measure every `section[id]` in document order
pub fn section_bounds() -> Vec<SectionBounds> {
    query_all_html("section[id]")
        .into_iter()
        .map(|section| {
            SectionBounds::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.client_height()),
            )
        })
        .collect()
}

pub fn set_class(element: &Element, class_name: &str, enabled: bool) {
    let _ = element.class_list().toggle_with_force(class_name, enabled);
}

pub fn set_styles(element: &HtmlElement, properties: &[(&str, &str)]) {
    let style = element.style();
    for (property, value) in properties {
        let _ = style.set_property(property, value);
    }
}

/// Whether the event target sits inside an element matching `selector`
pub fn target_within(target: Option<web_sys::EventTarget>, selector: &str) -> bool {
    target
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}
