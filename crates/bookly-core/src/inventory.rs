//! # Inventory Valuation
//!
//! Stock-level read-models for the inventory view: total value of stock on
//! hand (at cost and at retail) and the low-stock list.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

/// Value of all stock on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InventoryValue {
    /// What the stock cost to acquire, in minor units.
    pub cost_minor: i64,
    /// What the stock would sell for, in minor units.
    pub retail_minor: i64,
}

impl InventoryValue {
    pub fn cost(&self) -> Money {
        Money::from_minor(self.cost_minor)
    }

    pub fn retail(&self) -> Money {
        Money::from_minor(self.retail_minor)
    }
}

/// Sums stock value across all products.
///
/// Stock can go negative through external bugs; negative stock counts as
/// zero here so a data glitch never shows negative inventory value.
pub fn compute_inventory_value(products: &[Product]) -> InventoryValue {
    let mut value = InventoryValue::default();

    for product in products {
        let stock = product.stock.max(0);
        value.cost_minor += product.cost_price_minor * stock;
        value.retail_minor += product.selling_price_minor * stock;
    }

    value
}

/// Products whose stock has fallen to their alert threshold, in input order.
pub fn low_stock(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.is_low_stock()).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
