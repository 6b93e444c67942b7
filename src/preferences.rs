use gloo::events::EventListener;
use web_sys::{HtmlInputElement, Storage};

use rccar_site_core::{normalize_controller_url, CONTROLLER_URL_KEY};

use crate::clipboard::IP_INPUT_ID;
use crate::dom;

fn local_storage() -> Option<Storage> {
    dom::window().ok()?.local_storage().ok().flatten()
}

pub(crate) fn load_controller_url() -> Option<String> {
    let storage = local_storage()?;
    let raw = storage.get_item(CONTROLLER_URL_KEY).ok()??;
    match normalize_controller_url(&raw) {
        Ok(url) => Some(url),
        Err(err) => {
            gloo::console::log!("preferences: ignoring stored controller url", err.to_string());
            None
        }
    }
}

/// Saves the normalized URL; an empty value clears the preference.
pub(crate) fn save_controller_url(raw: &str) -> Option<String> {
    let Some(storage) = local_storage() else {
        gloo::console::log!("preferences: storage unavailable");
        return None;
    };
    if raw.trim().is_empty() {
        let _ = storage.remove_item(CONTROLLER_URL_KEY);
        return None;
    }
    match normalize_controller_url(raw) {
        Ok(url) => {
            if storage.set_item(CONTROLLER_URL_KEY, &url).is_err() {
                gloo::console::log!("preferences: storage set failed");
            }
            Some(url)
        }
        Err(err) => {
            gloo::console::warn!("preferences: invalid controller url", err.to_string());
            None
        }
    }
}

pub(crate) fn listen(input: &HtmlInputElement) -> EventListener {
    if let Some(url) = load_controller_url() {
        input.set_value(&url);
    }
    let field = input.clone();
    EventListener::new(input, "change", move |_| {
        if let Some(url) = save_controller_url(&field.value()) {
            field.set_value(&url);
        }
    })
}

pub(crate) fn install() -> Vec<EventListener> {
    let Some(input) = dom::element_by_id::<HtmlInputElement>(IP_INPUT_ID) else {
        return Vec::new();
    };
    vec![listen(&input)]
}
