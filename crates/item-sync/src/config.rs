//! Client configuration

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::domain::ItemId;
use crate::error::ConfigError;

pub const DEFAULT_API_BASE: &str = "http://localhost:50010";
pub const DEFAULT_STATUS_CLEAR_MS: u32 = 4000;

/// Characters left alone in an id path segment (RFC 3986 unreserved)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Where the items API lives and how long transient statuses stay visible
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and authority of the API, without trailing slash
    pub api_base: String,
    /// Delay before a success or error status is cleared
    pub status_clear_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            status_clear_ms: DEFAULT_STATUS_CLEAR_MS,
        }
    }
}

impl ClientConfig {
    /// Apply overrides from a key lookup (`api-base`, `status-clear-ms`)
    /// on top of the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(base) = lookup("api-base") {
            let base = base.trim().trim_end_matches('/');
            if base.is_empty() {
                return Err(ConfigError::Empty("api-base".to_string()));
            }
            config.api_base = base.to_string();
        }

        if let Some(raw) = lookup("status-clear-ms") {
            config.status_clear_ms = raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                key: "status-clear-ms".to_string(),
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }

    /// Collection endpoint, `<api_base>/api/items`
    pub fn items_url(&self) -> String {
        format!("{}/api/items", self.api_base.trim_end_matches('/'))
    }

    /// Member endpoint, `<api_base>/api/items/<id>` with the id percent-encoded
    pub fn item_url(&self, id: &ItemId) -> String {
        let segment = id.to_string();
        format!("{}/{}", self.items_url(), utf8_percent_encode(&segment, PATH_SEGMENT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.items_url(), "http://localhost:50010/api/items");
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("api-base", "https://items.example.org/"),
            ("status-clear-ms", " 2500 "),
        ]))
        .unwrap();
        assert_eq!(config.api_base, "https://items.example.org");
        assert_eq!(config.status_clear_ms, 2500);
        assert_eq!(config.items_url(), "https://items.example.org/api/items");
    }

    #[test]
    fn test_invalid_overrides() {
        let err = ClientConfig::from_lookup(lookup(&[("status-clear-ms", "soon")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));

        let err = ClientConfig::from_lookup(lookup(&[("api-base", " / ")])).unwrap_err();
        assert_eq!(err, ConfigError::Empty("api-base".to_string()));
    }

    #[test]
    fn test_item_url_encodes_id() {
        let config = ClientConfig::default();
        assert_eq!(
            config.item_url(&ItemId::from(7u64)),
            "http://localhost:50010/api/items/7"
        );
        assert_eq!(
            config.item_url(&ItemId::from("a/b c")),
            "http://localhost:50010/api/items/a%2Fb%20c"
        );
        assert_eq!(
            config.item_url(&ItemId::from("x-1_y.z~")),
            "http://localhost:50010/api/items/x-1_y.z~"
        );
    }
}
