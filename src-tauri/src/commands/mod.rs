//! Tauri command handlers

mod image_cmd;

pub use image_cmd::*;
