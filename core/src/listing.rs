//! Best-effort parsing of the HTML index a static file server generates for
//! a folder.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use crate::error::SiteError;

static IMAGE_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(jpe?g|png|gif|webp)$").expect("extension pattern compiles"));

static ABSOLUTE_HTTP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://").expect("scheme pattern compiles"));

/// Every non-empty `href` of an `<a>` element, in document order, with
/// entities decoded by the HTML parser.
pub fn anchor_hrefs(html: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };
    let document = Html::parse_document(html);
    document
        .select(&selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn is_image_href(href: &str) -> bool {
    IMAGE_EXTENSION.is_match(href)
}

/// Absolute http(s) URLs are kept; anything else is re-rooted in `image_dir`
/// by its last path segment.
pub fn normalize_image_href(href: &str, image_dir: &str) -> Option<String> {
    if ABSOLUTE_HTTP.is_match(href) {
        return Some(href.to_string());
    }
    let file_name = href.split('/').filter(|part| !part.is_empty()).last()?;
    Some(format!("{image_dir}{file_name}"))
}

/// Image URLs linked from a directory listing, in listing order.
pub fn listing_images(html: &str, image_dir: &str) -> Result<Vec<String>, SiteError> {
    let images: Vec<String> = anchor_hrefs(html)
        .iter()
        .filter(|href| is_image_href(href))
        .filter_map(|href| normalize_image_href(href, image_dir))
        .collect();
    if images.is_empty() {
        return Err(SiteError::EmptyListing);
    }
    Ok(images)
}
