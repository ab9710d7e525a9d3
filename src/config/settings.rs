//! Settings loading from config.toml
//!
//! Settings come from a TOML file with three optional sections (`[api]`, `[stock]`,
//! `[catalog]`). A missing file is not an error: the defaults are used and the environment
//! can still override the API URL and the low-stock threshold.

use super::api::{self, ApiConfig};
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Default low-stock threshold; quantities at or below it (and above zero) are "low".
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 5;

/// Default settings path, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Complete application settings.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Backend connection
    pub api: ApiConfig,
    /// Stock classification
    pub stock: StockConfig,
    /// Curated catalog values
    pub catalog: CatalogConfig,
}

/// `[stock]` section of config.toml.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct StockConfig {
    /// Upper bound (inclusive) of the "low" bucket
    pub low_threshold: u64,
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            low_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

/// `[catalog]` section of config.toml.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Manually curated categories offered when adding products
    pub categories: Vec<String>,
}

impl Settings {
    /// Parses settings from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config {
            message: format!("Failed to parse config.toml: {e}"),
        })
    }

    /// Applies environment-style overrides on top of the file values.
    ///
    /// `threshold` must parse as a non-negative integer.
    pub fn apply_overrides(
        &mut self,
        api_url: Option<String>,
        threshold: Option<String>,
    ) -> Result<()> {
        if let Some(url) = api_url {
            debug!("Overriding API base URL from environment: {}", url);
            self.api.base_url = url;
        }

        if let Some(raw) = threshold {
            self.stock.low_threshold = raw.trim().parse().map_err(|e| Error::Config {
                message: format!("LOW_STOCK_THRESHOLD must be a non-negative integer, got '{raw}': {e}"),
            })?;
        }

        if self.api.trimmed_base_url().is_empty() {
            return Err(Error::Config {
                message: "API base URL cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Loads settings from a TOML file, then applies environment overrides.
///
/// # Errors
/// Returns an error if:
/// - The file exists but cannot be read
/// - The TOML syntax is invalid or a field has the wrong type
/// - `LOW_STOCK_THRESHOLD` is set but not a non-negative integer
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let mut settings = read_settings_file(path.as_ref())?;
    settings.apply_overrides(
        api::api_url_from_env(),
        std::env::var("LOW_STOCK_THRESHOLD").ok(),
    )?;

    info!(
        "Settings loaded: api = {}, low stock threshold = {}, {} curated categories",
        settings.api.trimmed_base_url(),
        settings.stock.low_threshold,
        settings.catalog.categories.len()
    );
    Ok(settings)
}

/// Reads the TOML file alone. A missing file yields the defaults.
fn read_settings_file(path: &Path) -> Result<Settings> {
    debug!("Attempting to load settings from: {:?}", path);
    if !path.exists() {
        info!("No config file at {:?}, using defaults.", path);
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path:?}: {e}"),
    })?;
    Settings::from_toml_str(&contents)
}

/// Loads settings from `GODOWN_BUDDY_CONFIG`, falling back to `./config.toml`.
pub fn load_default_settings() -> Result<Settings> {
    let path =
        std::env::var("GODOWN_BUDDY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    load_settings(path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::DeleteStyle;

    #[test]
    fn test_parse_full_settings() {
        let toml_str = r#"
            [api]
            base_url = "https://inventory.example.com"
            delete_style = "body"

            [stock]
            low_threshold = 10

            [catalog]
            categories = ["Tank", "Sink", "PVC Pipe"]
        "#;

        let settings = Settings::from_toml_str(toml_str).unwrap();
        assert_eq!(settings.api.base_url, "https://inventory.example.com");
        assert_eq!(settings.api.delete_style, DeleteStyle::Body);
        assert_eq!(settings.stock.low_threshold, 10);
        assert_eq!(settings.catalog.categories.len(), 3);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings.stock.low_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
        assert_eq!(settings.api.delete_style, DeleteStyle::Path);
        assert!(settings.catalog.categories.is_empty());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = Settings::from_toml_str("[stock]\nlow_threshold = \"many\"");
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }

    #[test]
    fn test_overrides() {
        let mut settings = Settings::default();
        settings
            .apply_overrides(
                Some("https://other.example.com".to_string()),
                Some(" 10 ".to_string()),
            )
            .unwrap();
        assert_eq!(settings.api.base_url, "https://other.example.com");
        assert_eq!(settings.stock.low_threshold, 10);
    }

    #[test]
    fn test_bad_threshold_override_is_rejected() {
        let mut settings = Settings::default();
        let result = settings.apply_overrides(None, Some("-1".to_string()));
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let mut settings = read_settings_file(Path::new("definitely/not/here/config.toml")).unwrap();
        assert_eq!(settings.stock.low_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
        assert_eq!(settings.api.delete_style, DeleteStyle::Path);

        settings.apply_overrides(None, None).unwrap();
        assert_eq!(settings.api.trimmed_base_url(), "http://localhost:8000");
        assert_eq!(settings.stock.low_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
    }
}
