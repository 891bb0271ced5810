//! Image Acquisition Adapter
//!
//! Wraps the "pick a file" and "capture from camera" flows into one
//! upload path. Both yield the stored image's URL on success; on
//! failure the caller leaves the draft's image untouched.

use base64::Engine as _;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::clock;
use crate::commands;

#[derive(Debug, Clone, PartialEq)]
pub enum UploadError {
    /// The picked file is not an image
    NotAnImage,
    /// Reading the file's bytes failed
    Read(String),
    /// The backend store rejected the upload
    Upload(String),
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UploadError::NotAnImage => write!(f, "הקובץ שנבחר אינו תמונה"),
            UploadError::Read(_) => write!(f, "קריאת הקובץ נכשלה"),
            UploadError::Upload(_) => write!(f, "העלאת התמונה נכשלה"),
        }
    }
}

impl std::error::Error for UploadError {}

/// Upload a user-picked file. Rejects non-image MIME types before
/// touching the network.
pub async fn upload_from_file(file: web_sys::File) -> Result<String, UploadError> {
    if !file.type_().starts_with("image/") {
        return Err(UploadError::NotAnImage);
    }

    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| UploadError::Read(format_js(&e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);

    commands::upload_image(&file.name(), &encoded)
        .await
        .map_err(UploadError::Upload)
}

/// Upload a still frame captured from the camera, already packaged as
/// a JPEG data URL by the camera dialog.
pub async fn upload_capture_frame(data_url: &str) -> Result<String, UploadError> {
    let filename = format!("camera-{}.jpg", clock::now_millis());
    commands::upload_image(&filename, data_url)
        .await
        .map_err(UploadError::Upload)
}

fn format_js(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
