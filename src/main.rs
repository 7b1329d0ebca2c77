#![allow(non_snake_case)]

use dioxus::prelude::*;
use std::rc::Rc;

// Modules
mod components;
mod hooks;
mod routes;
mod services;
mod stores;
mod utils;

use hooks::SharedPlatform;
use services::BrowserNotifications;

fn main() {
    // Initialize panic hook for better error messages in browser console
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    }

    log::info!("Starting Mind Weather");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Every panel talks to the browser's Notification API through this handle
    use_context_provider(|| -> SharedPlatform { Rc::new(BrowserNotifications) });

    rsx! {
        Router::<routes::Route> {}
    }
}
