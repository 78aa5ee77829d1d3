//! Todo Lists Frontend Entry Point

mod app;
mod auth;
mod commands;
mod components;
mod config;
mod context;
mod editor;
mod errors;
mod hooks;
mod logging;
mod models;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init_logging(&config::AppConfig::load().log_level);
    tracing::info!("starting todo lists frontend");
    mount_to_body(App);
}
