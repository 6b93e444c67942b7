use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use rccar_site_core::gallery::scroll_step;
use rccar_site_core::{gallery_view, resolve_gallery, GalleryImages, GallerySource, GalleryView, SiteConfig};

use crate::dom;
use crate::fetch::fetch_text;

pub(crate) const CAROUSEL_ID: &str = "carousel";
pub(crate) const PREV_BUTTON_ID: &str = "prevBtn";
pub(crate) const NEXT_BUTTON_ID: &str = "nextBtn";

pub(crate) async fn load_gallery_images(listing_url: &str, config: &SiteConfig) -> GalleryImages {
    let listing = fetch_text(listing_url).await;
    let images = resolve_gallery(listing, config);
    match &images.source {
        GallerySource::Listing => {
            gloo::console::log!("gallery: listing", images.urls.len());
        }
        GallerySource::Fallback { reason } => {
            gloo::console::log!(
                "gallery: fallback list",
                reason.to_string(),
                images.urls.len()
            );
        }
    }
    images
}

#[derive(Properties, PartialEq)]
pub(crate) struct GalleryFrameProps {
    pub(crate) view: GalleryView,
}

#[function_component(GalleryFrame)]
pub(crate) fn gallery_frame(props: &GalleryFrameProps) -> Html {
    match &props.view {
        GalleryView::Placeholder(message) => html! {
            <p class="muted">{ *message }</p>
        },
        GalleryView::Images(images) => images
            .iter()
            .map(|image| {
                html! {
                    <img
                        key={image.src.clone()}
                        src={image.src.clone()}
                        alt={image.alt.clone()}
                        loading="lazy"
                    />
                }
            })
            .collect::<Html>(),
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct GalleryProps {
    pub(crate) config: Rc<SiteConfig>,
}

/// Loads the image list once on mount, then renders it.
#[function_component(Gallery)]
pub(crate) fn gallery(props: &GalleryProps) -> Html {
    let view = use_state(|| None::<GalleryView>);
    {
        let view = view.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let images = load_gallery_images(config.listing_url(), &config).await;
                view.set(Some(gallery_view(&images)));
            });
            || ()
        });
    }
    match (*view).clone() {
        Some(view) => html! { <GalleryFrame {view} /> },
        None => html! {},
    }
}

pub(crate) fn mount(root: Element, config: Rc<SiteConfig>) {
    root.set_inner_html("");
    let _handle = yew::Renderer::<Gallery>::with_root_and_props(root, GalleryProps { config }).render();
}

fn scroll_carousel(carousel: &Element, ratio: f64, forward: bool) {
    let left = scroll_step(f64::from(carousel.client_width()), ratio, forward);
    let options = ScrollToOptions::new();
    options.set_left(left);
    options.set_behavior(ScrollBehavior::Smooth);
    carousel.scroll_by_with_scroll_to_options(&options);
}

pub(crate) fn install(config: Rc<SiteConfig>) -> Vec<EventListener> {
    let Some(carousel) = dom::element_by_id::<Element>(CAROUSEL_ID) else {
        gloo::console::log!("gallery: carousel missing, skipped");
        return Vec::new();
    };
    let mut listeners = Vec::new();
    let ratio = config.scroll_step_ratio;
    for (id, forward) in [(PREV_BUTTON_ID, false), (NEXT_BUTTON_ID, true)] {
        let Some(button) = dom::element_by_id::<Element>(id) else {
            continue;
        };
        let carousel = carousel.clone();
        listeners.push(EventListener::new(&button, "click", move |_| {
            scroll_carousel(&carousel, ratio, forward);
        }));
    }
    mount(carousel, config);
    listeners
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use rccar_site_core::gallery::NO_IMAGES_MESSAGE;
    use rccar_site_core::GalleryImage;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn test_root() -> Element {
        let document = dom::document().expect("document available");
        let root = document.create_element("div").expect("create root");
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append root");
        root
    }

    fn data_url(mime: &str, body: &str) -> String {
        format!("data:{mime},{}", String::from(js_sys::encode_uri_component(body)))
    }

    #[wasm_bindgen_test(async)]
    async fn frame_renders_lazy_images_in_order() {
        let root = test_root();
        let view = GalleryView::Images(vec![
            GalleryImage::from_url("images/a.jpg"),
            GalleryImage::from_url("images/b.png"),
        ]);
        let _handle =
            yew::Renderer::<GalleryFrame>::with_root_and_props(root.clone(), GalleryFrameProps { view })
                .render();
        TimeoutFuture::new(10).await;

        let images = root.query_selector_all("img").expect("query images");
        assert_eq!(images.length(), 2);
        let first = root.query_selector("img").expect("query").expect("first image");
        assert_eq!(first.get_attribute("src").as_deref(), Some("images/a.jpg"));
        assert_eq!(first.get_attribute("alt").as_deref(), Some("a.jpg"));
        assert_eq!(first.get_attribute("loading").as_deref(), Some("lazy"));
        root.remove();
    }

    #[wasm_bindgen_test(async)]
    async fn frame_renders_placeholder() {
        let root = test_root();
        let view = GalleryView::Placeholder(NO_IMAGES_MESSAGE);
        let _handle =
            yew::Renderer::<GalleryFrame>::with_root_and_props(root.clone(), GalleryFrameProps { view })
                .render();
        TimeoutFuture::new(10).await;

        let paragraph = root.query_selector("p.muted").expect("query").expect("placeholder");
        assert_eq!(paragraph.text_content().as_deref(), Some(NO_IMAGES_MESSAGE));
        assert!(root.query_selector("img").expect("query").is_none());
        root.remove();
    }

    #[wasm_bindgen_test(async)]
    async fn listing_fetch_filters_non_images() {
        let listing = data_url(
            "text/html",
            r#"<a href="a.jpg">a</a><a href="b.png">b</a><a href="index.html">i</a>"#,
        );
        let images = load_gallery_images(&listing, &SiteConfig::default()).await;
        assert_eq!(images.source, GallerySource::Listing);
        assert_eq!(images.urls, vec!["images/a.jpg", "images/b.png"]);
    }

    #[wasm_bindgen_test(async)]
    async fn missing_listing_falls_back() {
        let config = SiteConfig {
            fallback_images: vec!["front.jpg".to_string()],
            ..SiteConfig::default()
        };
        let images = load_gallery_images("does-not-exist/", &config).await;
        assert!(matches!(images.source, GallerySource::Fallback { .. }));
        assert_eq!(images.urls, vec!["images/front.jpg"]);
    }
}
