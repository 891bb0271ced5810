//! Stocklist Backend
//!
//! Thin host shell for the Leptos frontend. Inventory state never
//! reaches this side; the backend only owns uploaded images:
//! - storage: the ImageStore abstraction (local filesystem or hosted
//!   object store)
//! - commands: Tauri command handlers
//! - a custom `asset` protocol that serves stored images back to the
//!   webview

use std::path::PathBuf;
use std::sync::Arc;

use percent_encoding::percent_decode_str;
use tauri::Manager;

mod commands;
mod storage;

use storage::{ImageStore, LocalImageStore, RemoteImageStore, StorageConfig};

/// Application state shared across commands
pub struct AppState {
    pub images: Arc<dyn ImageStore>,
}

/// Directory uploaded images land in for the local store
fn images_dir(app_handle: &tauri::AppHandle) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let dir = app_handle.path().app_data_dir()?.join("images");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .register_asynchronous_uri_scheme_protocol("asset", |_ctx, request, responder| {
            std::thread::spawn(move || {
                let path = percent_decode_str(request.uri().path())
                    .decode_utf8_lossy()
                    .to_string();

                // Handle Windows paths: /C:/Users... -> C:/Users...
                let path = if path.starts_with('/') && path.chars().nth(2) == Some(':') {
                    path[1..].to_string()
                } else {
                    path
                };
                let path = PathBuf::from(&path);

                // only stored images go back to the webview
                let is_image = path
                    .file_name()
                    .map(|name| storage::is_image_file(&name.to_string_lossy()))
                    .unwrap_or(false);
                if !is_image || !path.exists() {
                    let response = tauri::http::Response::builder()
                        .status(404)
                        .body(Vec::new())
                        .expect("Failed to build 404 response");
                    responder.respond(response);
                    return;
                }

                match std::fs::read(&path) {
                    Ok(content) => {
                        let mime_type = mime_guess::from_path(&path).first_or_octet_stream();
                        let response = tauri::http::Response::builder()
                            .header("Content-Type", mime_type.as_ref())
                            .header("Access-Control-Allow-Origin", "*")
                            .body(content)
                            .expect("Failed to build response");
                        responder.respond(response);
                    }
                    Err(_) => {
                        let response = tauri::http::Response::builder()
                            .status(500)
                            .body(Vec::new())
                            .expect("Failed to build 500 response");
                        responder.respond(response);
                    }
                }
            });
        })
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle()
                .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                    // Focus the existing window when a new instance tries to start
                    if let Some(window) = app.get_webview_window("main") {
                        let _ = window.set_focus();
                    }
                }))?;

            let _ = tracing_subscriber::fmt().try_init();

            let images: Arc<dyn ImageStore> = match StorageConfig::from_env() {
                StorageConfig::Local => {
                    let dir = images_dir(app.handle())?;
                    log::info!("using local image store at {}", dir.display());
                    Arc::new(LocalImageStore::new(dir))
                }
                StorageConfig::Remote {
                    endpoint,
                    public_base,
                    token,
                } => {
                    log::info!("using remote image store at {}", endpoint);
                    Arc::new(RemoteImageStore::new(endpoint, public_base, token))
                }
            };
            app.manage(AppState { images });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::upload_image,
            commands::list_images,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
