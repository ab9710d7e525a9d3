//! Discord interaction handlers
//!
//! This module provides handlers for Discord interactions that are not commands
//! themselves, such as parameter autocomplete.

/// Autocomplete handlers for products, godowns, categories, colors and sizes
pub mod autocomplete;
