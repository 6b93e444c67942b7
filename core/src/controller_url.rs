use url::Url;

use crate::error::ControllerUrlError;

pub const CONTROLLER_URL_KEY: &str = "rccar.controller_base_url";

/// Accepts a bare host (`192.168.4.1`, `car.local:8080`) or an http(s) URL.
/// A bare root path loses its `/`; anything else is kept as serialized.
pub fn normalize_controller_url(raw: &str) -> Result<String, ControllerUrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ControllerUrlError::Empty);
    }
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };
    let url = Url::parse(&candidate).map_err(|err| ControllerUrlError::Invalid(err.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(ControllerUrlError::UnsupportedScheme(other.to_string())),
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(ControllerUrlError::Invalid(format!("missing host in '{trimmed}'")));
    }
    let mut normalized = url.as_str().to_string();
    if url.path() == "/" && url.query().is_none() && url.fragment().is_none() {
        normalized.pop();
    }
    Ok(normalized)
}
