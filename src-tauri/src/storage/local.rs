//! Filesystem-backed image store
//!
//! Writes uploads into the app data directory and serves them back to
//! the webview through the custom `asset` protocol.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::{is_image_file, ImageStore, StorageResult};

/// Characters escaped in asset URL paths; '/' stays so the path keeps
/// its shape.
const ASSET_PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'%');

pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// asset:// URL resolved by the custom protocol handler
    fn asset_url(path: &Path) -> String {
        let path = path.to_string_lossy().replace('\\', "/");
        let separator = if path.starts_with('/') { "" } else { "/" };
        format!(
            "asset://localhost{}{}",
            separator,
            utf8_percent_encode(&path, ASSET_PATH)
        )
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn store(&self, key: &str, bytes: &[u8]) -> StorageResult<String> {
        tokio::fs::create_dir_all(&self.root).await?;
        let path = self.root.join(key);
        tokio::fs::write(&path, bytes).await?;
        log::info!("stored image {} ({} bytes)", path.display(), bytes.len());
        Ok(Self::asset_url(&path))
    }

    async fn list(&self) -> StorageResult<Vec<String>> {
        tokio::fs::create_dir_all(&self.root).await?;

        let mut urls = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name();
            if is_image_file(&name.to_string_lossy()) {
                urls.push(Self::asset_url(&entry.path()));
            }
        }
        // read_dir order is platform-dependent
        urls.sort();
        Ok(urls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> LocalImageStore {
        LocalImageStore::new(dir.path().join("images"))
    }

    #[tokio::test]
    async fn store_writes_bytes_and_returns_asset_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let url = store.store("1-photo.jpg", b"fake-jpeg").await.unwrap();

        assert!(url.starts_with("asset://localhost/"));
        assert!(url.ends_with("1-photo.jpg"));
        let on_disk = std::fs::read(dir.path().join("images").join("1-photo.jpg")).unwrap();
        assert_eq!(on_disk, b"fake-jpeg");
    }

    #[tokio::test]
    async fn list_returns_only_images() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.store("2-a.png", b"a").await.unwrap();
        store.store("1-b.jpg", b"b").await.unwrap();
        store.store("3-notes.txt", b"c").await.unwrap();

        let urls = store.list().await.unwrap();
        assert_eq!(urls.len(), 2);
        assert!(urls[0].ends_with("1-b.jpg"));
        assert!(urls[1].ends_with("2-a.png"));
    }

    #[tokio::test]
    async fn list_on_fresh_store_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.list().await.unwrap().is_empty());
    }

    #[test]
    fn asset_urls_escape_reserved_characters() {
        let url = LocalImageStore::asset_url(Path::new("/data/images/a b#c.png"));
        assert_eq!(url, "asset://localhost/data/images/a%20b%23c.png");
    }
}
