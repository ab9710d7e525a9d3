//! Data access for the inventory REST backend.
//!
//! [`InventoryApi`] is the seam between the core flows and the network. The production
//! implementation is [`HttpInventoryClient`]; tests use the generated `MockInventoryApi`.

mod http;

pub use http::HttpInventoryClient;

use crate::{
    entities::{Godown, NewGodown, NewProduct, Product, ProductDetails, StockAdjustment},
    errors::Result,
};
use async_trait::async_trait;

/// Operations the inventory backend exposes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// `GET /product`
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// `GET /godown`
    async fn list_godowns(&self) -> Result<Vec<Godown>>;

    /// `GET /godown/{id}`, with embedded products
    async fn get_godown(&self, id: &str) -> Result<Godown>;

    /// `POST /godown`
    async fn create_godown(&self, godown: NewGodown) -> Result<()>;

    /// `POST /godown/{id}/add-product`
    async fn add_product(&self, product: NewProduct) -> Result<()>;

    /// `PATCH /product/update`
    async fn update_product(&self, details: ProductDetails) -> Result<()>;

    /// `POST /product/update-quantity`
    async fn update_quantity(&self, adjustment: StockAdjustment) -> Result<()>;

    /// `DELETE /product` or `DELETE /product/{id}`, depending on configuration
    async fn delete_product(&self, id: &str) -> Result<()>;
}
