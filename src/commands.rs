//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Serialize)]
pub struct UploadImageArgs<'a> {
    pub filename: &'a str,
    /// Base64-encoded bytes, with or without a data-URL prefix
    pub data: &'a str,
}

/// Push image bytes to the backend store; returns the retrieval URL
pub async fn upload_image(filename: &str, data: &str) -> Result<String, String> {
    let js_args =
        serde_wasm_bindgen::to_value(&UploadImageArgs { filename, data }).map_err(|e| e.to_string())?;
    let result = invoke("upload_image", js_args).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// List the URLs of all currently stored images
pub async fn list_images() -> Result<Vec<String>, String> {
    let result = invoke("list_images", JsValue::NULL).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
