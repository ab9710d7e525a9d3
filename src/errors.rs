//! Unified error type for Godown Buddy.
//!
//! Errors fall into two groups. Validation errors are raised locally before any request
//! reaches the inventory backend and carry a message meant for the user. Service errors
//! come from the HTTP layer and are reported with a generic notice.

use thiserror::Error;

/// Generic notice shown when the inventory service fails.
pub const SERVICE_FAILURE_NOTICE: &str =
    "Something went wrong talking to the inventory service. Please try again.";

/// All errors produced by the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was missing or malformed.
    #[error("{message}")]
    Validation {
        /// What was wrong with the input
        message: String,
    },

    /// The requested stock delta is not a positive whole number.
    #[error("Invalid quantity '{raw}': enter a whole number greater than zero")]
    InvalidQuantity {
        /// The raw value the user entered
        raw: String,
    },

    /// A subtraction would drive the stock below zero.
    #[error("Quantity cannot go below 0: only {current} in stock, tried to remove {requested}")]
    InsufficientStock {
        /// Quantity currently on hand
        current: u64,
        /// Quantity the user asked to remove
        requested: u64,
    },

    /// No product with this id in the loaded collection.
    #[error("Product '{id}' not found")]
    ProductNotFound {
        /// Canonical product id
        id: String,
    },

    /// No godown with this id.
    #[error("Godown '{id}' not found")]
    GodownNotFound {
        /// Canonical godown id
        id: String,
    },

    /// Settings could not be loaded.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// The HTTP request could not be completed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Inventory API returned {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message extracted from the response body
        message: String,
    },

    /// A response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A required environment variable is missing or not valid Unicode.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Discord gateway or HTTP failure reported by serenity.
    #[error("Serenity/Poise framework error: {0}")]
    #[allow(clippy::enum_variant_names)]
    FrameworkError(Box<poise::serenity_prelude::Error>),
}

impl Error {
    /// Shorthand for a [`Error::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// True for errors raised before any network call was attempted.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. }
                | Self::InvalidQuantity { .. }
                | Self::InsufficientStock { .. }
                | Self::ProductNotFound { .. }
                | Self::GodownNotFound { .. }
        )
    }

    /// Message suitable for showing to the user.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.is_validation() {
            format!("❌ {self}")
        } else {
            format!("❌ {SERVICE_FAILURE_NOTICE}")
        }
    }
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::FrameworkError(Box::new(value))
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_surface_their_message() {
        let err = Error::InsufficientStock {
            current: 3,
            requested: 5,
        };
        assert!(err.is_validation());
        assert!(err.user_message().contains("only 3 in stock"));
    }

    #[test]
    fn test_service_errors_use_generic_notice() {
        let err = Error::Api {
            status: 500,
            message: "mongo exploded".to_string(),
        };
        assert!(!err.is_validation());
        let shown = err.user_message();
        assert!(shown.contains(SERVICE_FAILURE_NOTICE));
        assert!(!shown.contains("mongo"));
    }

    #[test]
    fn test_missing_env_var_is_not_a_validation_error() {
        let err = Error::from(std::env::VarError::NotPresent);
        assert!(matches!(err, Error::EnvVar(_)));
        assert!(!err.is_validation());
        assert_eq!(err.user_message(), format!("❌ {SERVICE_FAILURE_NOTICE}"));
    }
}
