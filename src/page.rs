use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;

use crate::site_config::load_site_config;
use crate::{clipboard, firmware, gallery, nav, preferences};

thread_local! {
    static PAGE_LISTENERS: RefCell<Vec<EventListener>> = RefCell::new(Vec::new());
}

fn retain(listeners: Vec<EventListener>) {
    PAGE_LISTENERS.with(|slot| slot.borrow_mut().extend(listeners));
}

/// Wires every page component; each one skips itself when its elements are
/// missing.
pub(crate) fn start() {
    let config = Rc::new(load_site_config());
    retain(nav::install(&config.narrow_viewport_query));
    retain(preferences::install());
    retain(clipboard::install(config.clone()));
    retain(firmware::install(config.clone()));
    retain(gallery::install(config));
    let count = PAGE_LISTENERS.with(|slot| slot.borrow().len());
    gloo::console::log!("page: ready", count);
}
