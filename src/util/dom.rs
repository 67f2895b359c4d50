//! Thin web-sys wrappers returning [`BehaviorError`] instead of `JsValue`.

use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList, Window};

use crate::error::BehaviorError;

pub fn window() -> Result<Window, BehaviorError> {
    web_sys::window().ok_or(BehaviorError::MissingWindow)
}

pub fn document() -> Result<Document, BehaviorError> {
    window()?.document().ok_or(BehaviorError::MissingDocument)
}

/// Elements matching `selector` anywhere in `document`.
pub fn select_all(document: &Document, selector: &str) -> Result<Vec<Element>, BehaviorError> {
    let list = document
        .query_selector_all(selector)
        .map_err(BehaviorError::dom("querySelectorAll"))?;
    Ok(elements(&list))
}

/// Elements matching `selector` below `root`.
pub fn select_within(root: &Element, selector: &str) -> Result<Vec<Element>, BehaviorError> {
    let list = root
        .query_selector_all(selector)
        .map_err(BehaviorError::dom("querySelectorAll"))?;
    Ok(elements(&list))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn create(document: &Document, tag: &str, class: &str) -> Result<Element, BehaviorError> {
    let el = document
        .create_element(tag)
        .map_err(BehaviorError::dom("createElement"))?;
    el.set_class_name(class);
    Ok(el)
}

pub fn as_html(el: Element) -> Result<HtmlElement, BehaviorError> {
    el.dyn_into::<HtmlElement>().map_err(|el| BehaviorError::Dom {
        op: "cast to HTMLElement",
        detail: el.tag_name(),
    })
}

/// Current `value` of a form control, empty when it has none.
pub fn control_value(el: &Element) -> String {
    js_sys::Reflect::get(el, &JsValue::from_str("value"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

pub fn set_style(el: &Element, property: &str, value: Option<&str>) {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    let style = html.style();
    let _ = match value {
        Some(v) => style.set_property(property, v),
        None => style.remove_property(property).map(|_| ()),
    };
}

/// Attach `handler` for the page lifetime.
///
/// The closure is leaked; listeners installed here are never removed.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), BehaviorError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(BehaviorError::dom("addEventListener"))?;
    closure.forget();
    Ok(())
}
