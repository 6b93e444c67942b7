use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent};

use rccar_site_core::nav::{NAV_OPEN_CLASS, OVERLAY_SHOW_CLASS};
use rccar_site_core::{NavEvent, NavFlags, NavState};

use crate::dom;

pub(crate) const MENU_TOGGLE_ID: &str = "menuToggle";
pub(crate) const TOP_NAV_ID: &str = "topNav";
pub(crate) const MOBILE_OVERLAY_ID: &str = "mobileOverlay";
const NAV_LINK_SELECTOR: &str = "#topNav a";

#[derive(Clone)]
pub(crate) struct MobileNav {
    nav: Element,
    toggle: Element,
    overlay: HtmlElement,
}

impl MobileNav {
    pub(crate) fn new(nav: Element, toggle: Element, overlay: HtmlElement) -> Self {
        Self {
            nav,
            toggle,
            overlay,
        }
    }

    pub(crate) fn from_document() -> Option<Self> {
        let nav = dom::element_by_id::<Element>(TOP_NAV_ID)?;
        let toggle = dom::element_by_id::<Element>(MENU_TOGGLE_ID)?;
        let overlay = dom::element_by_id::<HtmlElement>(MOBILE_OVERLAY_ID)?;
        Some(Self::new(nav, toggle, overlay))
    }

    /// Read from the nav's live class list, which other page code may change.
    pub(crate) fn state(&self) -> NavState {
        if self.nav.class_list().contains(NAV_OPEN_CLASS) {
            NavState::Open
        } else {
            NavState::Closed
        }
    }

    pub(crate) fn handle(&self, event: NavEvent<'_>) {
        if let Some(next) = self.state().next(event) {
            self.apply(next);
        }
    }

    pub(crate) fn apply(&self, next: NavState) {
        let flags = next.flags();
        self.write_flags(&flags);
    }

    fn write_flags(&self, flags: &NavFlags) {
        let _ = self
            .nav
            .class_list()
            .toggle_with_force(NAV_OPEN_CLASS, flags.nav_open);
        let _ = self
            .toggle
            .set_attribute("aria-expanded", flags.aria_expanded_value());
        let _ = self
            .overlay
            .class_list()
            .toggle_with_force(OVERLAY_SHOW_CLASS, flags.overlay_shown);
        self.overlay.set_hidden(flags.overlay_hidden);
        if let Some(root) = dom::document()
            .ok()
            .and_then(|document| document.document_element())
            .and_then(|root| root.dyn_into::<HtmlElement>().ok())
        {
            let _ = root.style().set_property("overflow", flags.root_overflow());
        }
    }

    /// Wires toggle, overlay, Escape and narrow-viewport link clicks.
    pub(crate) fn listen(&self, links: &[Element], narrow_query: &str) -> Vec<EventListener> {
        let mut listeners = Vec::with_capacity(links.len() + 3);

        let nav = self.clone();
        listeners.push(EventListener::new(&self.toggle, "click", move |_| {
            nav.handle(NavEvent::ToggleClicked);
        }));

        let nav = self.clone();
        listeners.push(EventListener::new(&self.overlay, "click", move |_| {
            nav.handle(NavEvent::OverlayClicked);
        }));

        if let Ok(window) = dom::window() {
            let nav = self.clone();
            listeners.push(EventListener::new(&window, "keydown", move |event: &Event| {
                if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                    nav.handle(NavEvent::KeyDown(&event.key()));
                }
            }));
        }

        for link in links {
            let nav = self.clone();
            let query = narrow_query.to_string();
            listeners.push(EventListener::new(link, "click", move |_| {
                nav.handle(NavEvent::LinkClicked {
                    narrow_viewport: dom::media_matches(&query),
                });
            }));
        }
        listeners
    }
}

pub(crate) fn install(narrow_query: &str) -> Vec<EventListener> {
    let Some(nav) = MobileNav::from_document() else {
        gloo::console::log!("nav: elements missing, skipped");
        return Vec::new();
    };
    let links = dom::query_all(NAV_LINK_SELECTOR);
    nav.listen(&links, narrow_query)
}
