//! Transaction entity - One entry in a product's append-only stock-movement log.
//!
//! Each movement is tagged `added` or `subtracted`, carries the quantity delta and, when the
//! backend provides one, the time it was applied.

use super::wire;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Direction of a stock movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Movement {
    /// Stock received
    #[serde(alias = "add")]
    Added,
    /// Stock removed
    #[serde(alias = "subtract")]
    Subtracted,
}

impl Movement {
    /// Wire name of the movement.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Added => "added",
            Self::Subtracted => "subtracted",
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded stock movement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTransaction")]
pub struct Transaction {
    /// Whether stock was added or removed
    #[serde(rename = "type")]
    pub movement: Movement,
    /// Size of the movement
    pub quantity: u64,
    /// When the movement was applied, if the backend reported it
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct RawTransaction {
    #[serde(rename = "type")]
    movement: Movement,
    quantity: Option<Value>,
    val: Option<Value>,
    value: Option<Value>,
    timestamp: Option<Value>,
    at: Option<Value>,
    date: Option<Value>,
    #[serde(rename = "createdAt")]
    created_at_camel: Option<Value>,
    created_at: Option<Value>,
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = String;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        let quantity = raw.quantity.as_ref().or(raw.val.as_ref()).or(raw.value.as_ref());
        let when = raw
            .timestamp
            .as_ref()
            .or(raw.at.as_ref())
            .or(raw.date.as_ref())
            .or(raw.created_at.as_ref())
            .or(raw.created_at_camel.as_ref());

        Ok(Self {
            movement: raw.movement,
            quantity: wire::coerce_quantity(quantity),
            timestamp: wire::timestamp(when),
        })
    }
}

/// A validated request to move stock, as sent to `POST /product/update-quantity`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StockAdjustment {
    /// Canonical id of the product to adjust
    pub id: String,
    /// Direction of the movement
    #[serde(rename = "type")]
    pub movement: Movement,
    /// Positive delta
    #[serde(rename = "val")]
    pub value: u64,
}
