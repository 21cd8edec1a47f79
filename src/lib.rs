/// Site Launcher - Chrome Extension for launching saved websites
/// Built with Rust + WASM + Yew

pub mod chrome;
pub mod config;
pub mod error;
pub mod notifier;
pub mod registry;
pub mod site_data;
pub mod storage;
pub mod ui;
pub mod validator;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the key derivation for JavaScript access
#[wasm_bindgen]
pub fn derive_key(url: &str) -> String {
    site_data::derive_key(url).to_string()
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}
