use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::future::TimeoutFuture;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlButtonElement, HtmlDocument, HtmlInputElement};

use rccar_site_core::clipboard::{copy_failed_message, resolve_copy_text, ButtonFace, CopyFeedback};
use rccar_site_core::SiteConfig;

use crate::dom::{self, js_err};

pub(crate) const COPY_BUTTON_ID: &str = "copyIpBtn";
pub(crate) const IP_INPUT_ID: &str = "espIp";

pub(crate) fn copy_text_from(input: &HtmlInputElement, default: &str) -> String {
    let value = input.value();
    let value_attr = input.get_attribute("value");
    let text_content = input.text_content();
    resolve_copy_text(
        Some(value.as_str()),
        value_attr.as_deref(),
        text_content.as_deref(),
        default,
    )
}

/// `navigator.clipboard.writeText`, when the page context exposes it.
fn clipboard_write_text() -> Option<(JsValue, Function)> {
    let navigator = dom::window().ok()?.navigator();
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
    if clipboard.is_null() || clipboard.is_undefined() {
        return None;
    }
    let write = Reflect::get(&clipboard, &JsValue::from_str("writeText")).ok()?;
    let write = write.dyn_into::<Function>().ok()?;
    Some((clipboard, write))
}

async fn write_with_clipboard_api(
    clipboard: &JsValue,
    write: &Function,
    text: &str,
) -> Result<(), JsValue> {
    let promise = write
        .call1(clipboard, &JsValue::from_str(text))?
        .dyn_into::<Promise>()?;
    JsFuture::from(promise).await?;
    Ok(())
}

fn write_with_selection(input: &HtmlInputElement) -> Result<(), JsValue> {
    input.select();
    let document = dom::document()?.dyn_into::<HtmlDocument>()?;
    let copied = document.exec_command("copy")?;
    if let Some(selection) = dom::window()?.get_selection()? {
        let _ = selection.remove_all_ranges();
    }
    if copied {
        Ok(())
    } else {
        Err(JsValue::from_str("copy command rejected"))
    }
}

pub(crate) async fn copy_to_clipboard(text: &str, input: &HtmlInputElement) -> Result<(), JsValue> {
    match clipboard_write_text() {
        Some((clipboard, write)) => write_with_clipboard_api(&clipboard, &write, text).await,
        None => write_with_selection(input),
    }
}

fn show_face(button: &HtmlButtonElement, face: &ButtonFace) {
    button.set_text_content(Some(&face.label));
    button.set_disabled(face.disabled);
}

pub(crate) async fn flash_copied(button: &HtmlButtonElement, duration_ms: u32) {
    let previous = button.text_content().unwrap_or_default();
    let feedback = CopyFeedback::new(&previous);
    show_face(button, &feedback.confirming());
    TimeoutFuture::new(duration_ms).await;
    show_face(button, &feedback.restored());
}

async fn copy_clicked(button: HtmlButtonElement, input: HtmlInputElement, config: Rc<SiteConfig>) {
    let text = copy_text_from(&input, &config.default_controller_url);
    match copy_to_clipboard(&text, &input).await {
        Ok(()) => flash_copied(&button, config.copy_feedback_ms).await,
        Err(err) => {
            gloo::console::warn!("clipboard: copy failed", js_err(err));
            dom::alert(&copy_failed_message(&text));
        }
    }
}

pub(crate) fn install(config: Rc<SiteConfig>) -> Vec<EventListener> {
    let (Some(button), Some(input)) = (
        dom::element_by_id::<HtmlButtonElement>(COPY_BUTTON_ID),
        dom::element_by_id::<HtmlInputElement>(IP_INPUT_ID),
    ) else {
        gloo::console::log!("clipboard: elements missing, skipped");
        return Vec::new();
    };
    let target = button.clone();
    vec![EventListener::new(&target, "click", move |_| {
        spawn_local(copy_clicked(button.clone(), input.clone(), config.clone()));
    })]
}
