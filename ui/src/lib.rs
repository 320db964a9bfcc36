pub mod api;
pub mod app;
pub mod components;
pub mod log;
pub mod nav;
pub mod pages;
pub mod state;
pub mod theme;

pub use app::App;

#[cfg(target_arch = "wasm32")]
use leptos::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| view! { <App/> });
}
