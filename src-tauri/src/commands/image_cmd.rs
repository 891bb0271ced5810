//! Image Commands
//!
//! The upload path shared by file picks and camera captures, plus the
//! gallery listing.

use tauri::State;

use crate::storage::{decode_image_payload, unique_key};
use crate::AppState;

/// Store an uploaded image; `data` is base64, with or without a
/// data-URL prefix. Returns the durable retrieval URL.
#[tauri::command]
pub async fn upload_image(
    state: State<'_, AppState>,
    filename: String,
    data: String,
) -> Result<String, String> {
    let bytes = decode_image_payload(&data).map_err(|e| e.to_string())?;
    let key = unique_key(chrono::Utc::now().timestamp_millis() as u64, &filename);
    state
        .images
        .store(&key, &bytes)
        .await
        .map_err(|e| e.to_string())
}

/// URLs of every currently stored image, for the gallery picker
#[tauri::command]
pub async fn list_images(state: State<'_, AppState>) -> Result<Vec<String>, String> {
    state.images.list().await.map_err(|e| e.to_string())
}
