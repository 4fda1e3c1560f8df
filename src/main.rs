//! Parking Admin Frontend Entry Point

mod api;
mod app;
mod charts;
mod collections;
mod components;
mod config;
mod context;
mod feedback;
mod load;
mod models;
mod pages;
mod store;
mod table;
mod validation;

use app::App;
use config::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init(log::LevelFilter::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }

    let config = Config::load();
    log::info!("[App] Starting, backend {}", config.api_url);
    api::configure(&config.api_url);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
