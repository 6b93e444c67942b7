use rccar_site_core::SiteConfig;

use crate::dom;

/// Optional `<script type="application/json" id="siteConfig">` overrides.
pub(crate) const SITE_CONFIG_ID: &str = "siteConfig";

pub(crate) fn load_site_config() -> SiteConfig {
    let Some(script) = dom::document()
        .ok()
        .and_then(|document| document.get_element_by_id(SITE_CONFIG_ID))
    else {
        return SiteConfig::from_build_env();
    };
    let raw = script.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return SiteConfig::from_build_env();
    }
    match SiteConfig::from_json(&raw) {
        Ok(config) => {
            gloo::console::log!("config: page overrides applied");
            config
        }
        Err(err) => {
            gloo::console::warn!("config: ignoring page overrides", err.to_string());
            SiteConfig::from_build_env()
        }
    }
}
