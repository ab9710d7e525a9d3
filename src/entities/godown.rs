//! Godown entity - A storage location that owns zero or more products.

use super::{product::Product, wire};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A storage location as returned by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGodown")]
pub struct Godown {
    /// Canonical identifier, taken from `_id` or `id`
    pub id: String,
    /// Display name
    pub name: String,
    /// Street address or location note
    pub address: Option<String>,
    /// Products stored here; empty when the backend does not embed them
    pub products: Vec<Product>,
}

#[derive(Deserialize)]
struct RawGodown {
    #[serde(rename = "_id")]
    mongo_id: Option<Value>,
    id: Option<Value>,
    name: Option<Value>,
    address: Option<Value>,
    products: Option<Vec<Product>>,
}

impl TryFrom<RawGodown> for Godown {
    type Error = String;

    fn try_from(raw: RawGodown) -> Result<Self, Self::Error> {
        let id = wire::canonical_id(raw.mongo_id.as_ref(), raw.id.as_ref())
            .ok_or_else(|| "godown is missing both `_id` and `id`".to_string())?;

        Ok(Self {
            id,
            name: wire::text(raw.name.as_ref()).unwrap_or_default(),
            address: wire::text(raw.address.as_ref()),
            products: raw.products.unwrap_or_default(),
        })
    }
}

/// Fields for `POST /godown`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewGodown {
    /// Display name (required)
    pub name: String,
    /// Optional address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
