//! Product entity - Represents one inventory item stored in a godown.
//!
//! Products carry free-text descriptive attributes (category, size, color), a stock
//! quantity, and the log of stock movements that produced that quantity.

use super::{transaction::Transaction, wire};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// An inventory item as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProduct")]
pub struct Product {
    /// Canonical identifier, taken from `_id` or `id`
    pub id: String,
    /// Display name (e.g., "Water Tank 500L")
    pub name: String,
    /// Free-text classification tag (e.g., "Tank", "PVC Pipe")
    pub category: Option<String>,
    /// Free-text size (e.g., "1 inch")
    pub size: Option<String>,
    /// Free-text color
    pub color: Option<String>,
    /// Units on hand; never negative
    pub quantity: u64,
    /// Owning godown, when the backend includes it
    pub godown_id: Option<String>,
    /// Stock movements, oldest first
    pub transactions: Vec<Transaction>,
}

#[derive(Deserialize)]
struct RawProduct {
    #[serde(rename = "_id")]
    mongo_id: Option<Value>,
    id: Option<Value>,
    name: Option<Value>,
    category: Option<Value>,
    size: Option<Value>,
    color: Option<Value>,
    quantity: Option<Value>,
    #[serde(rename = "godownId")]
    godown_id_camel: Option<Value>,
    godown_id: Option<Value>,
    godown: Option<Value>,
    transactions: Option<Vec<Value>>,
    transitions: Option<Vec<Value>>,
}

/// Decodes a transaction log entry by entry. Entries that do not decode, such as a movement
/// type other than added/subtracted, are dropped so the rest of the product still loads.
fn decode_transactions(product_id: &str, entries: Vec<Value>) -> Vec<Transaction> {
    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<Transaction>(entry) {
            Ok(transaction) => Some(transaction),
            Err(e) => {
                debug!("Skipping transaction of product {}: {}", product_id, e);
                None
            }
        })
        .collect()
}

impl TryFrom<RawProduct> for Product {
    type Error = String;

    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        let id = wire::canonical_id(raw.mongo_id.as_ref(), raw.id.as_ref())
            .ok_or_else(|| "product is missing both `_id` and `id`".to_string())?;
        let godown_id = [&raw.godown_id_camel, &raw.godown_id, &raw.godown]
            .into_iter()
            .flatten()
            .find_map(wire::id_text);

        let transactions = decode_transactions(
            &id,
            raw.transactions.or(raw.transitions).unwrap_or_default(),
        );

        Ok(Self {
            id,
            name: wire::text(raw.name.as_ref()).unwrap_or_default(),
            category: wire::text(raw.category.as_ref()),
            size: wire::text(raw.size.as_ref()),
            color: wire::text(raw.color.as_ref()),
            quantity: wire::coerce_quantity(raw.quantity.as_ref()),
            godown_id,
            transactions,
        })
    }
}

/// Fields for a product created under a godown via `POST /godown/{id}/add-product`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Display name (required)
    pub name: String,
    /// Category (required)
    pub category: String,
    /// Size, empty when not given
    pub size: String,
    /// Color, empty when not given
    pub color: String,
    /// Opening stock
    pub quantity: u64,
    /// Godown the product is created in
    pub godown_id: String,
}

/// Editable product fields sent to `PATCH /product/update`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProductDetails {
    /// Canonical id of the product being edited
    pub id: String,
    /// New name
    pub name: String,
    /// New category
    pub category: String,
    /// New size
    pub size: String,
    /// New color
    pub color: String,
}

impl ProductDetails {
    /// Starts an edit from the product's current values.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone().unwrap_or_default(),
            size: product.size.clone().unwrap_or_default(),
            color: product.color.clone().unwrap_or_default(),
        }
    }
}
