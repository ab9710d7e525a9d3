//! Stock business logic - classification and quantity adjustments.
//!
//! A product's stock status is derived from its quantity and the configured low-stock
//! threshold. Quantity changes are validated locally before anything is sent: the delta must
//! be a positive whole number and a subtraction may not take the quantity below zero.

use crate::{
    client::InventoryApi,
    entities::{Movement, Product, StockAdjustment},
    errors::{Error, Result},
};
use std::fmt;
use tracing::{info, warn};

/// Derived stock bucket for a product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StockStatus {
    /// Quantity above the threshold
    In,
    /// Quantity in `1..=threshold`
    Low,
    /// Quantity is zero
    Out,
}

impl StockStatus {
    /// Classifies a quantity against the low-stock threshold.
    #[must_use]
    pub const fn classify(quantity: u64, low_threshold: u64) -> Self {
        if quantity == 0 {
            Self::Out
        } else if quantity <= low_threshold {
            Self::Low
        } else {
            Self::In
        }
    }

    /// Label shown next to a product.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::In => "In Stock",
            Self::Low => "Low Stock",
            Self::Out => "Out of Stock",
        }
    }

    /// Marker emoji used in listings.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::In => "🟢",
            Self::Low => "🟡",
            Self::Out => "🔴",
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two quantity operations a user can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StockOperation {
    /// Receive stock
    Add,
    /// Remove stock
    Subtract,
}

impl StockOperation {
    /// Movement recorded for this operation.
    #[must_use]
    pub const fn movement(self) -> Movement {
        match self {
            Self::Add => Movement::Added,
            Self::Subtract => Movement::Subtracted,
        }
    }
}

/// Parses a user-entered delta. It must be a finite whole number greater than zero.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn parse_delta(raw: &str) -> Result<u64> {
    let invalid = || Error::InvalidQuantity {
        raw: raw.to_string(),
    };
    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;

    if !value.is_finite() || value <= 0.0 || value.fract() != 0.0 || value > u64::MAX as f64 {
        return Err(invalid());
    }
    Ok(value as u64)
}

/// Validates a requested quantity change and produces the adjustment to submit.
///
/// # Errors
/// Returns an error if:
/// - `raw_delta` is not a positive whole number
/// - the operation is a subtraction larger than `current`
pub fn validate_stock_delta(
    product_id: &str,
    current: u64,
    raw_delta: &str,
    operation: StockOperation,
) -> Result<StockAdjustment> {
    let value = parse_delta(raw_delta)?;

    if operation == StockOperation::Subtract && value > current {
        return Err(Error::InsufficientStock {
            current,
            requested: value,
        });
    }

    Ok(StockAdjustment {
        id: product_id.to_string(),
        movement: operation.movement(),
        value,
    })
}

/// Validates a change against the product's current quantity and submits it.
///
/// Nothing is sent when validation fails.
pub async fn adjust_stock(
    api: &dyn InventoryApi,
    product: &Product,
    raw_delta: &str,
    operation: StockOperation,
) -> Result<StockAdjustment> {
    let adjustment = validate_stock_delta(&product.id, product.quantity, raw_delta, operation)
        .inspect_err(|e| warn!("Rejected stock change for '{}': {}", product.name, e))?;

    api.update_quantity(adjustment.clone()).await?;
    info!(
        "Stock {} by {} for '{}' ({})",
        adjustment.movement, adjustment.value, product.name, product.id
    );
    Ok(adjustment)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{client::MockInventoryApi, test_utils::*};

    #[test]
    fn test_classify() {
        assert_eq!(StockStatus::classify(0, 5), StockStatus::Out);
        assert_eq!(StockStatus::classify(1, 5), StockStatus::Low);
        assert_eq!(StockStatus::classify(5, 5), StockStatus::Low);
        assert_eq!(StockStatus::classify(6, 5), StockStatus::In);
        assert_eq!(StockStatus::classify(10, 10), StockStatus::Low);
        assert_eq!(StockStatus::classify(0, 0), StockStatus::Out);
        assert_eq!(StockStatus::classify(1, 0), StockStatus::In);
    }

    #[test]
    fn test_subtract_below_zero_is_rejected() {
        let result = validate_stock_delta("p1", 3, "5", StockOperation::Subtract);
        assert!(matches!(
            result,
            Err(Error::InsufficientStock {
                current: 3,
                requested: 5
            })
        ));
    }

    #[test]
    fn test_subtract_within_stock_is_accepted() {
        let adjustment = validate_stock_delta("p1", 3, "2", StockOperation::Subtract).unwrap();
        assert_eq!(
            adjustment,
            StockAdjustment {
                id: "p1".to_string(),
                movement: Movement::Subtracted,
                value: 2,
            }
        );

        let exact = validate_stock_delta("p1", 3, "3", StockOperation::Subtract).unwrap();
        assert_eq!(exact.value, 3);
    }

    #[test]
    fn test_add_has_no_upper_bound_from_current() {
        let adjustment = validate_stock_delta("p1", 0, "250", StockOperation::Add).unwrap();
        assert_eq!(adjustment.movement, Movement::Added);
        assert_eq!(adjustment.value, 250);
    }

    #[test]
    fn test_invalid_deltas() {
        for raw in ["", "abc", "0", "-4", "2.5", "NaN", "inf", "1e400"] {
            let result = validate_stock_delta("p1", 10, raw, StockOperation::Add);
            assert!(
                matches!(result, Err(Error::InvalidQuantity { .. })),
                "expected '{raw}' to be rejected"
            );
        }
    }

    #[test]
    fn test_delta_tolerates_whitespace_and_decimal_point() {
        assert_eq!(parse_delta(" 7 ").unwrap(), 7);
        assert_eq!(parse_delta("4.0").unwrap(), 4);
    }

    #[tokio::test]
    async fn test_adjust_stock_submits_validated_adjustment() -> Result<()> {
        let mut api = MockInventoryApi::new();
        api.expect_update_quantity()
            .withf(|adj| adj.id == "p2" && adj.movement == Movement::Subtracted && adj.value == 2)
            .times(1)
            .returning(|_| Ok(()));

        let sink = test_product("p2", "Sink", Some("Sink"), 3);
        let adjustment = adjust_stock(&api, &sink, "2", StockOperation::Subtract).await?;
        assert_eq!(adjustment.value, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_adjust_stock_rejects_without_network_call() {
        let mut api = MockInventoryApi::new();
        api.expect_update_quantity().times(0);

        let sink = test_product("p2", "Sink", Some("Sink"), 3);
        let result = adjust_stock(&api, &sink, "5", StockOperation::Subtract).await;
        assert!(matches!(result, Err(Error::InsufficientStock { .. })));
    }

    #[tokio::test]
    async fn test_adjust_stock_propagates_service_failure() {
        let mut api = MockInventoryApi::new();
        api.expect_update_quantity().times(1).returning(|_| {
            Err(Error::Api {
                status: 500,
                message: "boom".to_string(),
            })
        });

        let pipe = test_product("p3", "Pipe", Some("PVC Pipe"), 50);
        let result = adjust_stock(&api, &pipe, "1", StockOperation::Add).await;
        assert!(matches!(result, Err(Error::Api { status: 500, .. })));
    }
}
