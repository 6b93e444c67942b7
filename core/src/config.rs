use serde::{Deserialize, Serialize};

use crate::error::SiteError;

pub const DEFAULT_IMAGE_DIR: &str = "images/";
pub const DEFAULT_SOURCE_PATH: &str = "../RC-Car-WiFi-wAxis/RC-Car-WiFi-wAxis.ino";
pub const DEFAULT_CONTROLLER_URL: &str = "http://192.168.4.1";
pub const NARROW_VIEWPORT_QUERY: &str = "(max-width:800px)";
pub const COPY_FEEDBACK_MS: u32 = 1400;
pub const SCROLL_STEP_RATIO: f64 = 0.7;

/// Filenames relative to the image folder, used when the server does not
/// expose a directory listing. Curated by hand, e.g. `"front.jpg"`.
pub const FALLBACK_IMAGES: &[&str] = &[];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub image_dir: String,
    pub fallback_images: Vec<String>,
    pub source_path: String,
    pub default_controller_url: String,
    pub narrow_viewport_query: String,
    pub copy_feedback_ms: u32,
    pub scroll_step_ratio: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            image_dir: DEFAULT_IMAGE_DIR.to_string(),
            fallback_images: FALLBACK_IMAGES.iter().map(|name| name.to_string()).collect(),
            source_path: DEFAULT_SOURCE_PATH.to_string(),
            default_controller_url: DEFAULT_CONTROLLER_URL.to_string(),
            narrow_viewport_query: NARROW_VIEWPORT_QUERY.to_string(),
            copy_feedback_ms: COPY_FEEDBACK_MS,
            scroll_step_ratio: SCROLL_STEP_RATIO,
        }
    }
}

impl SiteConfig {
    /// Defaults with the build-time overrides baked in by the bundler.
    pub fn from_build_env() -> Self {
        Self::with_overrides(
            option_env!("RCCAR_SITE_IMAGE_DIR"),
            option_env!("RCCAR_SITE_SOURCE_PATH"),
            option_env!("RCCAR_SITE_DEFAULT_CONTROLLER"),
        )
    }

    pub fn with_overrides(
        image_dir: Option<&str>,
        source_path: Option<&str>,
        default_controller_url: Option<&str>,
    ) -> Self {
        let mut config = Self::default();
        if let Some(dir) = non_empty(image_dir) {
            config.image_dir = dir.to_string();
        }
        if let Some(path) = non_empty(source_path) {
            config.source_path = path.to_string();
        }
        if let Some(url) = non_empty(default_controller_url) {
            config.default_controller_url = url.to_string();
        }
        config.normalized()
    }

    /// Parses a JSON object of overrides; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: SiteConfig =
            serde_json::from_str(raw).map_err(|err| SiteError::Config(err.to_string()))?;
        Ok(config.normalized())
    }

    /// The URL fetched for the directory listing.
    pub fn listing_url(&self) -> &str {
        &self.image_dir
    }

    pub fn image_url(&self, file_name: &str) -> String {
        format!("{}{}", self.image_dir, file_name.trim_start_matches('/'))
    }

    pub fn fallback_image_urls(&self) -> Vec<String> {
        self.fallback_images
            .iter()
            .map(|name| name.trim())
            .filter(|name| !name.is_empty())
            .map(|name| self.image_url(name))
            .collect()
    }

    fn normalized(mut self) -> Self {
        let dir = self.image_dir.trim();
        self.image_dir = if dir.is_empty() {
            DEFAULT_IMAGE_DIR.to_string()
        } else if dir.ends_with('/') {
            dir.to_string()
        } else {
            format!("{dir}/")
        };
        if !(self.scroll_step_ratio.is_finite() && self.scroll_step_ratio > 0.0) {
            self.scroll_step_ratio = SCROLL_STEP_RATIO;
        }
        self
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}
