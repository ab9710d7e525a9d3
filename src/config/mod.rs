/// Inventory API connection settings and environment lookups
pub mod api;

/// Settings loading from config.toml
pub mod settings;

pub use api::{ApiConfig, DeleteStyle};
pub use settings::{CatalogConfig, Settings, StockConfig, load_default_settings, load_settings};
