//! Client configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8009/api/v1";

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "CATALOG_API_URL";

/// Catalog backend client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend base URL, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Page size for the full catalog listing
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Page size for server-side search
    #[serde(default = "default_search_page_size")]
    pub search_page_size: u32,

    /// Page size of the lookup made before creating a document
    #[serde(default = "default_duplicate_check_size")]
    pub duplicate_check_size: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            search_page_size: default_search_page_size(),
            duplicate_check_size: default_duplicate_check_size(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Defaults pointed at a specific backend.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

fn default_base_url() -> String {
    std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

fn default_page_size() -> u32 {
    100
}

fn default_search_page_size() -> u32 {
    50
}

fn default_duplicate_check_size() -> u32 {
    5
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

/// Load configuration from a file.
///
/// Later sources win: the file, then `CATALOG_<FIELD>` variables (for
/// example `CATALOG_PAGE_SIZE` or `CATALOG_BASE_URL`), then
/// `CATALOG_API_URL`, which sets `base_url` the same way it does for
/// [`ClientConfig::default`].
pub fn load_config(path: &Path) -> Result<ClientConfig, config::ConfigError> {
    build_config(path, std::env::var(BASE_URL_ENV).ok())
}

fn build_config(
    path: &Path,
    base_url_override: Option<String>,
) -> Result<ClientConfig, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(config::Environment::with_prefix("CATALOG"))
        .set_override_option("base_url", base_url_override)?
        .build()?;

    settings.try_deserialize()
}
