#![allow(warnings)]
//! Ecoleta Frontend Entry Point

mod api;
mod app;
mod cities;
mod components;
mod config;
mod context;
mod form;
mod loaders;
mod models;
mod position;
mod selection;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("Ecoleta", rolling_logger::DEFAULT_CAPACITY) {
        web_sys::console::error_1(&e.into());
    }
    mount_to_body(App);
}
