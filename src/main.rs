//! Stocklist Frontend Entry Point

mod app;
mod catalog;
mod categories;
mod clock;
mod commands;
mod components;
mod context;
mod models;
mod report;
mod store;
mod upload;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
