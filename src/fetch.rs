use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, Response};

use rccar_site_core::SiteError;

use crate::dom::{self, js_err};

async fn fetch_ok(url: &str) -> Result<Response, SiteError> {
    let network = |error: JsValue| SiteError::Network {
        url: url.to_string(),
        message: js_err(error),
    };
    let window = dom::window().map_err(network)?;
    let value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(network)?;
    let response = value.dyn_into::<Response>().map_err(network)?;
    if !response.ok() {
        return Err(SiteError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }
    Ok(response)
}

fn body_error(url: &str) -> impl Fn(JsValue) -> SiteError + '_ {
    move |error| SiteError::Body {
        url: url.to_string(),
        message: js_err(error),
    }
}

pub(crate) async fn fetch_text(url: &str) -> Result<String, SiteError> {
    let response = fetch_ok(url).await?;
    let promise = response.text().map_err(body_error(url))?;
    let value = JsFuture::from(promise).await.map_err(body_error(url))?;
    value.as_string().ok_or_else(|| SiteError::Body {
        url: url.to_string(),
        message: "body is not text".to_string(),
    })
}

pub(crate) async fn fetch_blob(url: &str) -> Result<Blob, SiteError> {
    let response = fetch_ok(url).await?;
    let promise = response.blob().map_err(body_error(url))?;
    let value = JsFuture::from(promise).await.map_err(body_error(url))?;
    value.dyn_into::<Blob>().map_err(body_error(url))
}
