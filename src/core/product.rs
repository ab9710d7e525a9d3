//! Product business logic - Handles all product-related operations.
//!
//! This module provides functions for listing, creating, editing and deleting products
//! through the inventory backend. Required fields are checked locally so that an invalid
//! form never produces a request. All functions are async and return Result types.

use crate::{
    client::InventoryApi,
    entities::{NewProduct, Product, ProductDetails},
    errors::{Error, Result},
};
use tracing::info;

/// Retrieves every product across all godowns, in backend order.
///
/// # Errors
/// Returns an error if the request fails or the response cannot be decoded.
pub async fn list_products(api: &dyn InventoryApi) -> Result<Vec<Product>> {
    api.list_products().await
}

/// Finds a product by canonical id in an already loaded collection.
#[must_use]
pub fn find_product<'a>(products: &'a [Product], id: &str) -> Option<&'a Product> {
    products.iter().find(|product| product.id == id)
}

/// Finds a product by canonical id, reporting [`Error::ProductNotFound`] when absent.
pub fn require_product<'a>(products: &'a [Product], id: &str) -> Result<&'a Product> {
    find_product(products, id).ok_or_else(|| Error::ProductNotFound { id: id.to_string() })
}

/// Resolves what a user typed to one loaded product.
///
/// An exact id wins. Otherwise the key is matched case-insensitively against names, and
/// only a single match is accepted.
pub fn resolve_product<'a>(products: &'a [Product], key: &str) -> Result<&'a Product> {
    let key = key.trim();
    if let Some(product) = find_product(products, key) {
        return Ok(product);
    }

    let wanted = key.to_lowercase();
    let mut named = products
        .iter()
        .filter(|product| product.name.to_lowercase() == wanted);
    match (named.next(), named.next()) {
        (Some(product), None) => Ok(product),
        (Some(_), Some(_)) => Err(Error::validation(format!(
            "Several products are named '{key}', pick one from the suggestions"
        ))),
        (None, _) => Err(Error::ProductNotFound {
            id: key.to_string(),
        }),
    }
}

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

/// Creates a new product under its godown after validating the form.
///
/// Name, category and godown are required. Text fields are trimmed.
///
/// # Errors
/// Returns an error if:
/// - The name, category or godown id is empty or whitespace-only
/// - The backend rejects the request
pub async fn create_product(api: &dyn InventoryApi, product: NewProduct) -> Result<NewProduct> {
    if product.name.trim().is_empty() || product.category.trim().is_empty() {
        return Err(Error::validation("Please enter product name and category"));
    }
    if product.godown_id.trim().is_empty() {
        return Err(Error::validation("Please choose a godown for the product"));
    }

    let product = NewProduct {
        name: trimmed(&product.name),
        category: trimmed(&product.category),
        size: trimmed(&product.size),
        color: trimmed(&product.color),
        quantity: product.quantity,
        godown_id: trimmed(&product.godown_id),
    };

    api.add_product(product.clone()).await?;
    info!(
        "Added product '{}' ({}) to godown {}",
        product.name, product.category, product.godown_id
    );
    Ok(product)
}

/// Updates a product's descriptive fields.
///
/// # Errors
/// Returns an error if:
/// - The id or name is empty or whitespace-only
/// - The backend rejects the request
pub async fn update_product_details(
    api: &dyn InventoryApi,
    details: ProductDetails,
) -> Result<ProductDetails> {
    if details.id.trim().is_empty() {
        return Err(Error::validation("No product selected"));
    }
    if details.name.trim().is_empty() {
        return Err(Error::validation("Product name cannot be empty"));
    }

    let details = ProductDetails {
        id: details.id,
        name: trimmed(&details.name),
        category: trimmed(&details.category),
        size: trimmed(&details.size),
        color: trimmed(&details.color),
    };

    api.update_product(details.clone()).await?;
    info!("Updated details of product {}", details.id);
    Ok(details)
}

/// Deletes a product.
///
/// Callers are expected to have obtained the user's confirmation first.
///
/// # Errors
/// Returns an error if the id is blank or the backend rejects the request.
pub async fn delete_product(api: &dyn InventoryApi, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(Error::validation("No product selected"));
    }
    api.delete_product(id).await?;
    info!("Deleted product {}", id);
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{client::MockInventoryApi, test_utils::*};

    #[tokio::test]
    async fn test_create_product_validation() {
        let mut api = MockInventoryApi::new();
        api.expect_add_product().times(0);

        let missing_name = NewProduct {
            name: "   ".to_string(),
            ..test_new_product("g1")
        };
        let result = create_product(&api, missing_name).await;
        assert!(matches!(result, Err(Error::Validation { message: _ })));

        let missing_category = NewProduct {
            category: String::new(),
            ..test_new_product("g1")
        };
        let result = create_product(&api, missing_category).await;
        assert!(matches!(result, Err(Error::Validation { message: _ })));

        let missing_godown = test_new_product(" ");
        let result = create_product(&api, missing_godown).await;
        assert!(matches!(result, Err(Error::Validation { message: _ })));
    }

    #[tokio::test]
    async fn test_create_product_trims_and_submits() -> Result<()> {
        let mut api = MockInventoryApi::new();
        api.expect_add_product()
            .withf(|p| p.name == "Tank" && p.category == "Tank" && p.godown_id == "g1")
            .times(1)
            .returning(|_| Ok(()));

        let form = NewProduct {
            name: "  Tank ".to_string(),
            category: " Tank".to_string(),
            ..test_new_product("g1")
        };
        let created = create_product(&api, form).await?;
        assert_eq!(created.name, "Tank");
        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_details() -> Result<()> {
        let mut api = MockInventoryApi::new();
        api.expect_update_product()
            .withf(|d| d.id == "p3" && d.name == "Pipe 2in" && d.color == "Grey")
            .times(1)
            .returning(|_| Ok(()));

        let pipe = test_product("p3", "Pipe", Some("PVC Pipe"), 50);
        let mut details = ProductDetails::from_product(&pipe);
        details.name = "Pipe 2in ".to_string();
        details.color = "Grey".to_string();

        let updated = update_product_details(&api, details).await?;
        assert_eq!(updated.category, "PVC Pipe");
        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_requires_name() {
        let mut api = MockInventoryApi::new();
        api.expect_update_product().times(0);

        let details = ProductDetails {
            id: "p1".to_string(),
            ..ProductDetails::default()
        };
        let result = update_product_details(&api, details).await;
        assert!(matches!(result, Err(Error::Validation { message: _ })));
    }

    #[tokio::test]
    async fn test_delete_product() -> Result<()> {
        let mut api = MockInventoryApi::new();
        api.expect_delete_product().times(1).returning(|_| Ok(()));

        delete_product(&api, "p1").await?;

        let result = delete_product(&api, "").await;
        assert!(matches!(result, Err(Error::Validation { message: _ })));
        Ok(())
    }

    #[test]
    fn test_find_product_by_id() {
        let records = plumbing_products();
        assert_eq!(find_product(&records, "p3").unwrap().name, "Pipe");
        assert!(find_product(&records, "nope").is_none());
        assert!(matches!(
            require_product(&records, "nope"),
            Err(Error::ProductNotFound { id: _ })
        ));
    }

    #[test]
    fn test_resolve_product_by_id_or_unique_name() {
        let mut records = plumbing_products();
        assert_eq!(resolve_product(&records, "p2").unwrap().name, "Sink");
        assert_eq!(resolve_product(&records, " pipe ").unwrap().id, "p3");
        assert!(matches!(
            resolve_product(&records, "Boiler"),
            Err(Error::ProductNotFound { id: _ })
        ));

        records.push(test_product("p4", "Sink", Some("Sink"), 9));
        assert!(matches!(
            resolve_product(&records, "sink"),
            Err(Error::Validation { message: _ })
        ));
    }
}
