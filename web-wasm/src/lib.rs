//! Affiliate Reader Web App (Leptos + WASM)

mod api;
mod components;
mod dom;
mod events;
mod runtime;

use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use affiliate_reader_common::LoaderConfig;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let document = gloo::utils::document();
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| boot()).forget();
    } else {
        boot();
    }
}

fn boot() {
    if let Err(e) = runtime::start(LoaderConfig::default()) {
        log::error!("Affiliate Reader failed to start: {}", e);
    }
}
