//! # Order Draft Builder
//!
//! Validates and normalizes a draft (typed in manually or suggested by the
//! extraction service) into a well-formed [`Order`].
//!
//! ## Two Paths
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Order Draft Builder                                │
//! │                                                                         │
//! │  Itemized path (items non-empty)                                        │
//! │    ├── every item: name non-empty, 1 <= qty <= 999, price >= 0         │
//! │    ├── total = Σ qty × price  (computed here, NEVER taken from input)  │
//! │    └── total must be > 0                                               │
//! │                                                                         │
//! │  Quick-sale path (items empty)                                          │
//! │    ├── flat_amount must be present and > 0                             │
//! │    └── order keeps an empty item list, total = flat_amount             │
//! │                                                                         │
//! │  Both: fresh UUID id, current timestamp, "Guest" when no name,         │
//! │  source/payment/status defaults from DraftDefaults                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Extraction output is untrusted input: whatever total the service claims
//! is dropped before the draft reaches this builder, and every field is
//! re-validated exactly like manual entry.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::{Order, OrderItem, OrderStatus, PaymentMethod, SalesSource};
use crate::validation::{
    validate_customer_name, validate_flat_amount_minor, validate_item_count,
    validate_item_name, validate_price_minor, validate_quantity,
};
use crate::{CoreError, GUEST_CUSTOMER};

// =============================================================================
// Draft Input
// =============================================================================

/// A line item as entered or extracted, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DraftItem {
    pub name: String,
    pub quantity: i64,
    pub price_minor: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// An unvalidated, unpersisted order candidate pending confirmation.
///
/// There is deliberately no `total` field: the builder computes the
/// authoritative total itself and would ignore one anyway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    #[serde(default)]
    pub items: Vec<DraftItem>,

    /// Quick-sale flat amount; only consulted when `items` is empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat_amount_minor: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SalesSource>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

// =============================================================================
// Defaults
// =============================================================================

/// Configured fallbacks applied when a draft leaves fields unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DraftDefaults {
    pub customer_name: String,
    pub source: SalesSource,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
}

impl Default for DraftDefaults {
    fn default() -> Self {
        DraftDefaults {
            customer_name: GUEST_CUSTOMER.to_string(),
            source: SalesSource::WalkIn,
            payment_method: PaymentMethod::Cash,
            status: OrderStatus::Paid,
        }
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builds a well-formed [`Order`] from a draft, or rejects it.
///
/// ## Errors
/// - [`CoreError::Validation`] for bad fields (empty item name, quantity
///   out of range, negative price, non-positive flat amount)
/// - [`CoreError::ZeroValueOrder`] when the computed total is zero; a
///   zero-value order is never silently produced
pub fn build_order(draft: OrderDraft, defaults: &DraftDefaults) -> CoreResult<Order> {
    let customer_name = match draft.customer_name.as_deref() {
        Some(name) if !name.trim().is_empty() => validate_customer_name(name)?,
        _ => defaults.customer_name.clone(),
    };

    validate_item_count(draft.items.len())?;

    let (items, total) = if draft.items.is_empty() {
        // Quick-sale path: a flat amount stands in for line items
        let flat = draft.flat_amount_minor.ok_or(CoreError::ZeroValueOrder)?;
        validate_flat_amount_minor(flat)?;
        (Vec::new(), Money::from_minor(flat))
    } else {
        // Itemized path: the line-item sum is the only accepted total
        let mut items = Vec::with_capacity(draft.items.len());
        let mut total = Money::zero();

        for raw in draft.items {
            let name = validate_item_name(&raw.name)?;
            validate_quantity(raw.quantity)?;
            validate_price_minor(raw.price_minor)?;

            let item = OrderItem {
                id: Uuid::new_v4().to_string(),
                name,
                quantity: raw.quantity,
                price_minor: raw.price_minor,
                variant: raw.variant,
            };
            total += item.line_total();
            items.push(item);
        }

        if total.is_zero() {
            return Err(CoreError::ZeroValueOrder);
        }

        (items, total)
    };

    Ok(Order {
        id: Uuid::new_v4().to_string(),
        customer_id: None,
        customer_name,
        items,
        total_minor: total.minor(),
        date: Utc::now(),
        status: draft.status.unwrap_or(defaults.status),
        source: draft.source.unwrap_or(defaults.source),
        payment_method: draft.payment_method.unwrap_or(defaults.payment_method),
        note: draft.note.filter(|n| !n.trim().is_empty()),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
