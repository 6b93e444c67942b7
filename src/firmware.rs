use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Blob, Element, HtmlAnchorElement, Url};

use rccar_site_core::firmware::DOWNLOAD_FAILED_MESSAGE;
use rccar_site_core::{FirmwareSource, SiteConfig, SiteError};

use crate::dom;
use crate::fetch::{fetch_blob, fetch_text};

pub(crate) const CODE_VIEW_ID: &str = "codeView";
pub(crate) const LOAD_BUTTON_ID: &str = "loadCodeBtn";
pub(crate) const DOWNLOAD_BUTTON_ID: &str = "downloadCodeBtn";

const OBJECT_URL_REVOKE_DELAY_MS: u32 = 1_000;

/// Replaces the view's text with the sketch, or with the failure notice.
pub(crate) async fn load_source_into(view: &Element, source: &FirmwareSource) {
    match fetch_text(source.path()).await {
        Ok(text) => view.set_text_content(Some(&text)),
        Err(err) => {
            view.set_text_content(Some(&source.load_failed_text()));
            gloo::console::error!("firmware: load failed", err.to_string());
        }
    }
}

fn save_blob(blob: &Blob, file_name: &str) -> Result<(), JsValue> {
    let document = dom::document()?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("missing body"))?;
    let url = Url::create_object_url_with_blob(blob)?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();
    spawn_local(async move {
        TimeoutFuture::new(OBJECT_URL_REVOKE_DELAY_MS).await;
        let _ = Url::revoke_object_url(&url);
    });
    Ok(())
}

pub(crate) async fn download_source(source: &FirmwareSource) -> Result<(), SiteError> {
    let blob = fetch_blob(source.path()).await?;
    save_blob(&blob, source.file_name()).map_err(|err| SiteError::Body {
        url: source.path().to_string(),
        message: dom::js_err(err),
    })
}

pub(crate) fn install(config: Rc<SiteConfig>) -> Vec<EventListener> {
    let source = Rc::new(FirmwareSource::new(&config.source_path));
    let mut listeners = Vec::new();

    match (
        dom::element_by_id::<Element>(LOAD_BUTTON_ID),
        dom::element_by_id::<Element>(CODE_VIEW_ID),
    ) {
        (Some(button), Some(view)) => {
            let source = source.clone();
            listeners.push(EventListener::new(&button, "click", move |_| {
                let view = view.clone();
                let source = source.clone();
                spawn_local(async move {
                    load_source_into(&view, &source).await;
                });
            }));
        }
        _ => gloo::console::log!("firmware: viewer elements missing, skipped"),
    }

    if let Some(button) = dom::element_by_id::<Element>(DOWNLOAD_BUTTON_ID) {
        listeners.push(EventListener::new(&button, "click", move |_| {
            let source = source.clone();
            spawn_local(async move {
                if let Err(err) = download_source(&source).await {
                    gloo::console::warn!("firmware: download failed", err.to_string());
                    dom::alert(DOWNLOAD_FAILED_MESSAGE);
                }
            });
        }));
    }
    listeners
}

#[cfg(test)]
mod tests {
    use super::*;
    use js_sys::{Array, Function, Object, Reflect};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn code_view() -> Element {
        dom::document()
            .expect("document available")
            .create_element("pre")
            .expect("create pre")
    }

    #[wasm_bindgen_test(async)]
    async fn loaded_source_is_shown_verbatim() {
        let sketch = "void setup() {\n  Serial.begin(115200);\n}\n";
        let path = format!(
            "data:text/plain,{}",
            String::from(js_sys::encode_uri_component(sketch))
        );
        let view = code_view();
        load_source_into(&view, &FirmwareSource::new(&path)).await;
        assert_eq!(view.text_content().as_deref(), Some(sketch));
    }

    #[wasm_bindgen_test(async)]
    async fn missing_source_shows_notice() {
        let source = FirmwareSource::new("missing/RC-Car.ino");
        let view = code_view();
        view.set_text_content(Some("stale"));
        load_source_into(&view, &source).await;
        assert_eq!(
            view.text_content().as_deref(),
            Some("// Unable to load Arduino source. Ensure the file exists at: missing/RC-Car.ino")
        );
    }

    #[wasm_bindgen_test(async)]
    async fn missing_download_reports_status() {
        let source = FirmwareSource::new("missing/RC-Car.ino");
        let result = download_source(&source).await;
        assert!(matches!(result, Err(SiteError::Status { status: 404, .. })));
    }

    fn anchor_prototype() -> JsValue {
        let window = dom::window().expect("window available");
        let class = Reflect::get(&window, &JsValue::from_str("HTMLAnchorElement"))
            .expect("anchor class");
        Reflect::get(&class, &JsValue::from_str("prototype")).expect("anchor prototype")
    }

    fn clicked_field(name: &str) -> JsValue {
        let window = dom::window().expect("window available");
        let clicked = Reflect::get(&window, &JsValue::from_str("__clickedAnchor"))
            .expect("clicked anchor recorded");
        Reflect::get(&clicked, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED)
    }

    #[wasm_bindgen_test(async)]
    async fn saved_blob_uses_temporary_anchor() {
        let prototype = anchor_prototype();
        let record = Function::new_no_args(
            "window.__clickedAnchor = { download: this.download, href: this.href, connected: this.isConnected };",
        );
        Reflect::set(&prototype, &JsValue::from_str("click"), &record).expect("stub click");

        let parts = Array::of1(&JsValue::from_str("void loop() {}\n"));
        let blob = Blob::new_with_str_sequence(&parts).expect("create blob");
        let source = FirmwareSource::new(rccar_site_core::config::DEFAULT_SOURCE_PATH);
        let saved = save_blob(&blob, source.file_name());
        Reflect::delete_property(prototype.unchecked_ref::<Object>(), &JsValue::from_str("click"))
            .expect("restore click");
        saved.expect("save succeeds");

        assert_eq!(
            clicked_field("download").as_string().as_deref(),
            Some("RC-Car-WiFi-wAxis.ino")
        );
        let href = clicked_field("href").as_string().expect("href recorded");
        assert!(href.starts_with("blob:"), "unexpected href {href}");
        assert_eq!(clicked_field("connected").as_bool(), Some(true));
        let leftover = dom::document()
            .expect("document available")
            .query_selector("a[download]")
            .expect("query anchors");
        assert!(leftover.is_none());

        assert_eq!(fetch_text(&href).await.as_deref(), Ok("void loop() {}\n"));
        TimeoutFuture::new(OBJECT_URL_REVOKE_DELAY_MS + 200).await;
        assert!(matches!(fetch_text(&href).await, Err(SiteError::Network { .. })));
    }
}
