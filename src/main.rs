mod clipboard;
mod dom;
mod fetch;
mod firmware;
mod gallery;
mod nav;
mod page;
mod preferences;
mod site_config;

fn main() {
    console_error_panic_hook::set_once();
    page::start();
}
