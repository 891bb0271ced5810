//! Hosted object-store client
//!
//! Talks to an external object-storage service over HTTP: PUT bytes
//! under a key, GET the listing. Credentials come from the
//! environment, never from source.

use async_trait::async_trait;
use serde::Deserialize;

use super::{ImageStore, StorageResult};

#[derive(Debug, Deserialize)]
struct ImageListing {
    images: Vec<String>,
}

pub struct RemoteImageStore {
    client: reqwest::Client,
    endpoint: String,
    public_base: String,
    token: Option<String>,
}

impl RemoteImageStore {
    /// `public_base` defaults to the endpoint itself when the service
    /// serves objects from the same prefix it accepts uploads on.
    pub fn new(endpoint: String, public_base: Option<String>, token: Option<String>) -> Self {
        let public_base = public_base.unwrap_or_else(|| endpoint.clone());
        Self {
            client: reqwest::Client::new(),
            endpoint,
            public_base,
            token,
        }
    }

    fn object_url(base: &str, key: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), key)
    }
}

#[async_trait]
impl ImageStore for RemoteImageStore {
    async fn store(&self, key: &str, bytes: &[u8]) -> StorageResult<String> {
        let mut request = self
            .client
            .put(Self::object_url(&self.endpoint, key))
            .body(bytes.to_vec());
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        request.send().await?.error_for_status()?;

        log::info!("uploaded image {} ({} bytes)", key, bytes.len());
        Ok(Self::object_url(&self.public_base, key))
    }

    async fn list(&self) -> StorageResult<Vec<String>> {
        let mut request = self.client.get(&self.endpoint);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let listing: ImageListing = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(listing.images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_urls_join_without_double_slashes() {
        assert_eq!(
            RemoteImageStore::object_url("https://cdn.example.com/uploads/", "1-a.png"),
            "https://cdn.example.com/uploads/1-a.png"
        );
        assert_eq!(
            RemoteImageStore::object_url("https://cdn.example.com/uploads", "1-a.png"),
            "https://cdn.example.com/uploads/1-a.png"
        );
    }

    #[test]
    fn listing_shape_matches_the_endpoint() {
        let listing: ImageListing =
            serde_json::from_str(r#"{"images": ["/uploads/a.png", "/uploads/b.jpg"]}"#).unwrap();
        assert_eq!(listing.images.len(), 2);
    }
}
