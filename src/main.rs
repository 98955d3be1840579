//! Microfinance Mini App Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod controller;
mod error;
mod flow;
mod models;
mod store;
mod telegram;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
    }
    log::info!("[BOOT] Mini app starting");
    mount_to_body(App);
}
