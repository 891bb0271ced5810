//! Image Storage Layer
//!
//! The only persistent concern in the app: store uploaded image bytes
//! under a collision-resistant key and hand back a durable retrieval
//! URL. Implementations cover the local filesystem (current
//! deployment) and a hosted object store.

use std::sync::OnceLock;

use async_trait::async_trait;
use base64::Engine as _;
use regex::Regex;

mod config;
mod local;
mod remote;

pub use config::StorageConfig;
pub use local::LocalImageStore;
pub use remote::RemoteImageStore;

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-level errors
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Http(reqwest::Error),
    InvalidPayload(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(err) => write!(f, "storage I/O error: {}", err),
            StorageError::Http(err) => write!(f, "storage request failed: {}", err),
            StorageError::InvalidPayload(msg) => write!(f, "invalid image payload: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err)
    }
}

impl From<reqwest::Error> for StorageError {
    fn from(err: reqwest::Error) -> Self {
        StorageError::Http(err)
    }
}

/// Contract with the object store: push bytes under a key, get back a
/// durable URL; list what is currently stored.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn store(&self, key: &str, bytes: &[u8]) -> StorageResult<String>;
    async fn list(&self) -> StorageResult<Vec<String>>;
}

/// Collision-resistant storage key: upload timestamp plus the original
/// filename, reduced to a filesystem- and URL-safe form.
pub fn unique_key(millis: u64, original_name: &str) -> String {
    let mut sanitized: String = original_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if sanitized.trim_matches(|c| c == '_' || c == '.').is_empty() {
        sanitized = "image".to_string();
    }
    format!("{}-{}", millis, sanitized)
}

/// Decode an upload payload: base64 bytes, with or without a
/// `data:image/...;base64,` prefix.
pub fn decode_image_payload(data: &str) -> StorageResult<Vec<u8>> {
    let encoded = match data.find(',') {
        Some(index) => &data[index + 1..],
        None => data,
    };
    base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|err| StorageError::InvalidPayload(err.to_string()))
}

/// Whether a filename looks like a stored image (same extension filter
/// as the public listing endpoint)
pub fn is_image_file(name: &str) -> bool {
    static IMAGE_EXT: OnceLock<Regex> = OnceLock::new();
    IMAGE_EXT
        .get_or_init(|| Regex::new(r"(?i)\.(jpe?g|png|gif)$").expect("valid regex"))
        .is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_key_keeps_safe_names() {
        assert_eq!(unique_key(1700000000000, "photo.jpg"), "1700000000000-photo.jpg");
    }

    #[test]
    fn unique_key_sanitizes_unsafe_names() {
        assert_eq!(unique_key(5, "my photo (1).png"), "5-my_photo__1_.png");
        assert_eq!(unique_key(5, "../../etc/passwd"), "5-.._.._etc_passwd");
    }

    #[test]
    fn unique_key_falls_back_for_empty_names() {
        assert_eq!(unique_key(5, ""), "5-image");
        assert_eq!(unique_key(5, "///"), "5-image");
    }

    #[test]
    fn decode_accepts_plain_base64() {
        let decoded = decode_image_payload("aGVsbG8=").unwrap();
        assert_eq!(decoded, b"hello");
    }

    #[test]
    fn decode_strips_data_url_prefix() {
        let decoded = decode_image_payload("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(decoded, b"hello");
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(
            decode_image_payload("data:image/png;base64,???"),
            Err(StorageError::InvalidPayload(_))
        ));
    }

    #[test]
    fn image_extension_filter() {
        assert!(is_image_file("a.jpg"));
        assert!(is_image_file("b.JPEG"));
        assert!(is_image_file("c.Png"));
        assert!(is_image_file("d.gif"));
        assert!(!is_image_file("e.txt"));
        assert!(!is_image_file("f.jpg.bak"));
        assert!(!is_image_file("png"));
    }
}
