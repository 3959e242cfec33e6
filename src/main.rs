//! PlacementPro Console Entry Point

mod api;
mod config;
mod error;
mod session;
mod models;
mod login;
mod drive_form;
mod typewriter;
mod schedule;
mod filters;
mod sequence;
mod inflight;
mod format;
mod dialog;
mod context;
mod store;
mod components;
mod pages;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();
    if console_logger::init(config.log_level).is_err() {
        web_sys::console::warn_1(&"logger already installed".into());
    }
    mount_to_body(move || view! { <App config=config.clone() /> });
}
