//! Core business logic - framework-agnostic inventory operations.
//!
//! The filter engine and the report are pure functions over loaded data. The product,
//! godown and stock modules validate user input and then delegate to an [`InventoryApi`].
//!
//! [`InventoryApi`]: crate::client::InventoryApi

pub mod filter;
pub mod godown;
pub mod history;
pub mod product;
pub mod report;
pub mod stock;
pub mod view;

pub use filter::{FilterCriteria, Selection, StockFilter, filter_godowns, filter_products};
pub use history::{RecentMovement, RecentMovements};
pub use report::{InventorySummary, summarize};
pub use stock::{StockOperation, StockStatus, validate_stock_delta};
pub use view::{ProductScope, ProductView};
