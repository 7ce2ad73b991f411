//! Browser front end for the PPD calculator.

mod app;
mod components;
mod config;
mod hooks;
mod rendering;

use leptos::*;
use wasm_bindgen::prelude::*;

fn init() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}

/// Mount the calculator with its viewing diagram.
#[wasm_bindgen]
pub fn hydrate() {
    init();
    log::info!("Mounting PPD calculator");
    leptos::mount_to_body(app::App);
}

/// Mount the calculator without the diagram canvas.
#[wasm_bindgen]
pub fn hydrate_without_diagram() {
    init();
    log::info!("Mounting PPD calculator (no diagram)");
    leptos::mount_to_body(|| view! { <app::PpdCalculator show_diagram=false /> });
}
