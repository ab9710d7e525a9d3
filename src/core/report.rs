//! Inventory summary for the dashboard landing view.
//!
//! This module condenses a loaded product list into the figures shown on the summary page:
//! product and unit totals, how many products sit in each stock bucket, and how many
//! products each category holds. Like the filter engine it is framework-agnostic and pure.

use crate::{core::stock::StockStatus, entities::Product};

/// Number of products in one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryCount {
    /// Category name, or `"Uncategorized"`
    pub category: String,
    /// Products carrying it
    pub products: usize,
    /// Units across those products
    pub units: u64,
}

/// Figures shown on the summary page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InventorySummary {
    /// Number of distinct products
    pub total_products: usize,
    /// Sum of all quantities
    pub total_units: u64,
    /// Products above the low-stock threshold
    pub in_stock: usize,
    /// Products at or below the threshold, but not empty
    pub low_stock: usize,
    /// Products with zero quantity
    pub out_of_stock: usize,
    /// Per-category breakdown in first-seen order
    pub categories: Vec<CategoryCount>,
}

/// Label used for products with no category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Builds the summary for a loaded product list.
#[must_use]
pub fn summarize(products: &[Product], low_threshold: u64) -> InventorySummary {
    let mut summary = InventorySummary {
        total_products: products.len(),
        ..InventorySummary::default()
    };

    for product in products {
        summary.total_units = summary.total_units.saturating_add(product.quantity);
        match StockStatus::classify(product.quantity, low_threshold) {
            StockStatus::In => summary.in_stock += 1,
            StockStatus::Low => summary.low_stock += 1,
            StockStatus::Out => summary.out_of_stock += 1,
        }

        let category = product.category.as_deref().unwrap_or(UNCATEGORIZED);
        if let Some(entry) = summary
            .categories
            .iter_mut()
            .find(|entry| entry.category == category)
        {
            entry.products += 1;
            entry.units = entry.units.saturating_add(product.quantity);
        } else {
            summary.categories.push(CategoryCount {
                category: category.to_string(),
                products: 1,
                units: product.quantity,
            });
        }
    }

    summary
}
