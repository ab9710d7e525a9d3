//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// General utility commands
pub mod general;

/// Godown listing and creation commands
pub mod godown;

/// Product listing, editing and history commands
pub mod product;

/// Stock movement commands and the inventory summary
pub mod stock;

// Export commands
pub use general::*;
pub use godown::*;
pub use product::*;
pub use stock::*;
