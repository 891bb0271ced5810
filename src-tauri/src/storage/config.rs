//! Storage configuration
//!
//! Chooses the image store backend from the environment. With no
//! endpoint configured the app stays on the local filesystem store.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageConfig {
    Local,
    Remote {
        endpoint: String,
        public_base: Option<String>,
        token: Option<String>,
    },
}

impl StorageConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup("STOCKLIST_STORAGE_ENDPOINT") {
            Some(endpoint) if !endpoint.trim().is_empty() => StorageConfig::Remote {
                endpoint,
                public_base: lookup("STOCKLIST_STORAGE_PUBLIC_BASE"),
                token: lookup("STOCKLIST_STORAGE_TOKEN"),
            },
            _ => StorageConfig::Local,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + '_ {
        let map: HashMap<&str, &str> = vars.iter().copied().collect();
        move |key| map.get(key).map(|v| v.to_string())
    }

    #[test]
    fn defaults_to_local() {
        assert_eq!(StorageConfig::from_lookup(lookup_from(&[])), StorageConfig::Local);
        assert_eq!(
            StorageConfig::from_lookup(lookup_from(&[("STOCKLIST_STORAGE_ENDPOINT", "  ")])),
            StorageConfig::Local
        );
    }

    #[test]
    fn endpoint_selects_remote() {
        let config = StorageConfig::from_lookup(lookup_from(&[
            ("STOCKLIST_STORAGE_ENDPOINT", "https://store.example.com/images"),
            ("STOCKLIST_STORAGE_TOKEN", "secret"),
        ]));
        assert_eq!(
            config,
            StorageConfig::Remote {
                endpoint: "https://store.example.com/images".to_string(),
                public_base: None,
                token: Some("secret".to_string()),
            }
        );
    }
}
