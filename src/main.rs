#![allow(warnings)]
//! Item Ledger Frontend Entry Point

mod api;
mod app;
mod banner;
mod components;
mod config;
mod context;
mod controller;
mod form;
mod models;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = console_logger::init(level) {
        web_sys::console::warn_1(&format!("[APP] Logger already installed: {}", e).into());
    }

    mount_to_body(App);
}
