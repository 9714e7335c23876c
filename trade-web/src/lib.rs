//! TetherDesk web client.
//!
//! A client-side rendered Leptos app. The session gate in [`session`] decides
//! whether protected routes render at all; pages fetch their own data through
//! the typed API layer once admitted.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
pub mod session;
pub mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("TetherDesk client starting");

    leptos::mount::mount_to_body(|| view! { <App/> });
}
