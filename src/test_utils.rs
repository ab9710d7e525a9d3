//! Shared test utilities for Godown Buddy.
//!
//! This module provides fixture builders for products and godowns with sensible defaults,
//! plus the small catalogs most filter and view tests run against.

use crate::entities::{Godown, NewProduct, Product};

/// Creates a product with only a name, optional category and quantity set.
///
/// # Defaults
/// * `size`, `color`, `godown_id`: None
/// * `transactions`: empty
pub fn test_product(id: &str, name: &str, category: Option<&str>, quantity: u64) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        category: category.map(ToString::to_string),
        size: None,
        color: None,
        quantity,
        godown_id: None,
        transactions: Vec::new(),
    }
}

/// Creates a product with every descriptive attribute set.
pub fn styled_product(
    id: &str,
    name: &str,
    category: &str,
    color: &str,
    size: &str,
    quantity: u64,
) -> Product {
    Product {
        color: Some(color.to_string()),
        size: Some(size.to_string()),
        ..test_product(id, name, Some(category), quantity)
    }
}

/// The three-product catalog: an empty tank, a low sink, a well-stocked pipe.
pub fn plumbing_products() -> Vec<Product> {
    vec![
        test_product("p1", "Tank", Some("Tank"), 0),
        test_product("p2", "Sink", Some("Sink"), 3),
        test_product("p3", "Pipe", Some("PVC Pipe"), 50),
    ]
}

/// A catalog with colors and sizes for attribute filters.
pub fn styled_catalog() -> Vec<Product> {
    vec![
        styled_product("t1", "Basin Tap", "Tap", "White", "1 inch", 4),
        styled_product("t2", "Steel Tap", "Tap", "Steel", "1 inch", 20),
        styled_product("s1", "Wash Sink", "Sink", "White", "Large", 0),
        styled_product("s2", "Bar Sink", "Sink", "Steel", "Small", 7),
        styled_product("t3", "Garden Tap", "Tap", "White", "Large", 12),
    ]
}

/// Creates a godown with no embedded products.
pub fn test_godown(id: &str, name: &str, address: Option<&str>) -> Godown {
    Godown {
        id: id.to_string(),
        name: name.to_string(),
        address: address.map(ToString::to_string),
        products: Vec::new(),
    }
}

/// A valid new-product form for the given godown.
///
/// # Defaults
/// * `name`, `category`: "Tank"
/// * `quantity`: 1
pub fn test_new_product(godown_id: &str) -> NewProduct {
    NewProduct {
        name: "Tank".to_string(),
        category: "Tank".to_string(),
        size: "500L".to_string(),
        color: "Black".to_string(),
        quantity: 1,
        godown_id: godown_id.to_string(),
    }
}
