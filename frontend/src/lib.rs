#![recursion_limit = "256"]

//! WASM entry point of the documentation site.
//!
//! Hydrates the server-rendered pages so the header's menu and dropdown toggles
//! react to clicks and keyboard activation.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the page body with `app::component`.
///
/// Installs `console_log` and `console_error_panic_hook` first so client-side
/// warnings (such as a repeated navigation group label) reach the browser console.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(component);
}
