//! OctoFit Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod fetch;
mod pages;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    rolling_logger::init(config::log_level(), rolling_logger::DEFAULT_CAPACITY);
    mount_to_body(App);
}
