use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("missing window"))
}

pub(crate) fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("missing document"))
}

/// Looks up `id` and casts it; `None` when absent or of another element type.
pub(crate) fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    let element = document().ok()?.get_element_by_id(id)?;
    element.dyn_into::<T>().ok()
}

pub(crate) fn query_all(selector: &str) -> Vec<Element> {
    let Ok(document) = document() else {
        return Vec::new();
    };
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn media_matches(query: &str) -> bool {
    window()
        .ok()
        .and_then(|window| window.match_media(query).ok().flatten())
        .map(|list| list.matches())
        .unwrap_or(false)
}

pub(crate) fn alert(message: &str) {
    let Ok(window) = window() else {
        return;
    };
    if window.alert_with_message(message).is_err() {
        gloo::console::warn!("alert unavailable", message.to_string());
    }
}

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Some(err) = error.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}
