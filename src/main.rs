mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::utils::console;

fn main() {
    console_error_panic_hook::set_once();

    // A host page without #app is an integration fault: log it and stop
    let Some(root) = document()
        .get_element_by_id("app")
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        console::error("Mount element #app not found; aborting setup");
        return;
    };

    mount_to(root, App).forget();
}
