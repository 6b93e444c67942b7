use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::listing::listing_images;

pub const NO_IMAGES_MESSAGE: &str =
    "No images found in site/images. Add files to that folder or update the fallback image list.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GallerySource {
    Listing,
    Fallback { reason: SiteError },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImages {
    pub source: GallerySource,
    pub urls: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

impl GalleryImage {
    pub fn from_url(url: &str) -> Self {
        let alt = url.rsplit('/').next().filter(|name| !name.is_empty()).unwrap_or(url);
        Self {
            src: url.to_string(),
            alt: alt.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GalleryView {
    Placeholder(&'static str),
    Images(Vec<GalleryImage>),
}

/// Picks the listing images when the fetch produced any, else the configured
/// fallback list.
pub fn resolve_gallery(listing: Result<String, SiteError>, config: &SiteConfig) -> GalleryImages {
    match listing.and_then(|html| listing_images(&html, &config.image_dir)) {
        Ok(urls) => GalleryImages {
            source: GallerySource::Listing,
            urls,
        },
        Err(reason) => GalleryImages {
            source: GallerySource::Fallback { reason },
            urls: config.fallback_image_urls(),
        },
    }
}

pub fn gallery_view(images: &GalleryImages) -> GalleryView {
    if images.urls.is_empty() {
        return GalleryView::Placeholder(NO_IMAGES_MESSAGE);
    }
    GalleryView::Images(images.urls.iter().map(|url| GalleryImage::from_url(url)).collect())
}

/// Horizontal scroll distance for one prev/next step.
pub fn scroll_step(client_width: f64, ratio: f64, forward: bool) -> f64 {
    let step = client_width.max(0.0) * ratio;
    if forward {
        step
    } else {
        -step
    }
}
