pub mod clipboard;
pub mod config;
pub mod controller_url;
pub mod error;
pub mod firmware;
pub mod gallery;
pub mod listing;
pub mod nav;

pub use config::SiteConfig;
pub use controller_url::{normalize_controller_url, CONTROLLER_URL_KEY};
pub use error::{ControllerUrlError, SiteError};
pub use firmware::FirmwareSource;
pub use gallery::{gallery_view, resolve_gallery, GalleryImage, GalleryImages, GallerySource, GalleryView};
pub use nav::{NavEvent, NavFlags, NavState};
