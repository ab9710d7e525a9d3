//! Inventory API connection settings.
//!
//! The backend has shipped two delete conventions, so the one to use is a setting rather
//! than a constant. The base URL can be overridden with `INVENTORY_API_URL`.

use serde::Deserialize;

/// Default backend location used when neither config.toml nor the environment sets one.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// How `DELETE /product` identifies the product to remove.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeleteStyle {
    /// `DELETE /product/{id}`
    #[default]
    Path,
    /// `DELETE /product` with `{"id": ...}` as the JSON body
    Body,
}

/// `[api]` section of config.toml.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the inventory backend, without a trailing slash
    pub base_url: String,
    /// Delete convention the backend expects
    pub delete_style: DeleteStyle,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            delete_style: DeleteStyle::default(),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Base URL with any trailing slashes removed.
    #[must_use]
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Gets the API base URL from the `INVENTORY_API_URL` environment variable, if set.
#[must_use]
pub fn api_url_from_env() -> Option<String> {
    std::env::var("INVENTORY_API_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
}
