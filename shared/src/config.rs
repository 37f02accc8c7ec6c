use serde::{Deserialize, Serialize};

use crate::capabilities::{join_path, HttpHeaders, ValidatedUrl};
use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://visitmyjoburg.co.za";
pub const DEFAULT_STORAGE_PATH: &str = "storage";

/// Client configuration injected into every list fetch.
///
/// Shells send this through `Event::Configure`; until then the defaults
/// point at the production content API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Host serving post and article images at `<asset_host>/<path>`.
    pub asset_host: String,
    /// Prefix for profile images, served at `<asset_host>/<storage_path>/<path>`.
    pub storage_path: String,
    pub default_headers: Vec<(String, String)>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            asset_host: DEFAULT_BASE_URL.to_string(),
            storage_path: DEFAULT_STORAGE_PATH.to_string(),
            default_headers: vec![("Accept".to_string(), "application/json".to_string())],
        }
    }
}

/// An `ApiConfig` whose URLs and headers passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    base_url: ValidatedUrl,
    asset_host: ValidatedUrl,
    storage_path: String,
    headers: HttpHeaders,
}

impl ClientConfig {
    pub fn new(config: &ApiConfig) -> Result<Self, ConfigError> {
        let base_url = ValidatedUrl::new(config.base_url.as_str()).map_err(|source| {
            ConfigError::Url {
                field: "base_url",
                source,
            }
        })?;
        let asset_host = ValidatedUrl::new(config.asset_host.as_str()).map_err(|source| {
            ConfigError::Url {
                field: "asset_host",
                source,
            }
        })?;

        let mut headers = HttpHeaders::new();
        for (name, value) in &config.default_headers {
            headers.insert(name.as_str(), value.as_str())?;
        }

        Ok(Self {
            base_url,
            asset_host,
            storage_path: config.storage_path.trim_matches('/').to_string(),
            headers,
        })
    }

    pub fn endpoint(&self, path: &str) -> Result<ValidatedUrl, ConfigError> {
        self.base_url.join(path).map_err(|source| ConfigError::Url {
            field: "endpoint",
            source,
        })
    }

    pub fn asset_host(&self) -> &str {
        self.asset_host.as_str()
    }

    pub fn storage_root(&self) -> String {
        join_path(self.asset_host.as_str(), &self.storage_path)
    }

    pub fn headers(&self) -> &HttpHeaders {
        &self.headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = ClientConfig::new(&ApiConfig::default()).unwrap();
        assert_eq!(
            config.endpoint("/api/users").unwrap().as_str(),
            "https://visitmyjoburg.co.za/api/users"
        );
        assert_eq!(config.headers().get("accept"), Some("application/json"));
        assert_eq!(config.storage_root(), "https://visitmyjoburg.co.za/storage");
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let api = ApiConfig {
            base_url: "ftp://files.example.com".into(),
            ..ApiConfig::default()
        };
        assert!(matches!(
            ClientConfig::new(&api),
            Err(ConfigError::Url {
                field: "base_url",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_header_injection() {
        let api = ApiConfig {
            default_headers: vec![("X-Trace".into(), "a\r\nb".into())],
            ..ApiConfig::default()
        };
        assert!(matches!(ClientConfig::new(&api), Err(ConfigError::Header(_))));
    }

    #[test]
    fn test_storage_path_slashes_are_normalised() {
        let api = ApiConfig {
            asset_host: "https://cdn.example.com/".into(),
            storage_path: "/storage/".into(),
            ..ApiConfig::default()
        };
        let config = ClientConfig::new(&api).unwrap();
        assert_eq!(config.storage_root(), "https://cdn.example.com/storage");
    }
}
