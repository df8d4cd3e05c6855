//! # Extraction Contract
//!
//! The capability trait every extractor implements, and the wire shape the
//! service returns.
//!
//! ## Trust Boundary
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  free text ──► OrderExtractor ──► ExtractedOrder ──► into_draft()      │
//! │                                                           │             │
//! │                UNTRUSTED SUGGESTION                       ▼             │
//! │                                          bookly-core build_order()      │
//! │                                          re-validates, re-totals        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The claimed `totalAmount` never survives the conversion when line items
//! are present: the draft builder computes the authoritative total itself.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use bookly_core::draft::{DraftItem, OrderDraft};
use bookly_core::SalesSource;

use crate::error::ExtractionResult;

// =============================================================================
// Wire Shape
// =============================================================================

/// A line item as suggested by the extraction service.
///
/// Amounts are minor currency units throughout, same as the domain model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedItem {
    pub name: String,
    pub quantity: i64,
    #[serde(rename = "price")]
    pub price_minor: i64,
}

/// An order suggestion produced from free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    #[serde(default)]
    pub items: Vec<ExtractedItem>,

    /// The service's claimed order total, in minor units. Only trusted as
    /// a quick-sale amount when no items were extracted.
    #[serde(rename = "totalAmount")]
    pub total_amount_minor: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SalesSource>,
}

impl ExtractedOrder {
    /// Converts the suggestion into a draft for the core builder.
    ///
    /// With items present the claimed total is dropped: the builder sums
    /// the lines itself. With no items the claimed total becomes the
    /// quick-sale flat amount, where the builder still enforces > 0.
    pub fn into_draft(self) -> OrderDraft {
        let flat_amount_minor = self
            .items
            .is_empty()
            .then_some(self.total_amount_minor);

        OrderDraft {
            customer_name: self.customer_name,
            items: self
                .items
                .into_iter()
                .map(|i| DraftItem {
                    name: i.name,
                    quantity: i.quantity,
                    price_minor: i.price_minor,
                    variant: None,
                })
                .collect(),
            flat_amount_minor,
            source: self.source,
            payment_method: None,
            status: None,
            note: None,
        }
    }
}

// =============================================================================
// Capability Trait
// =============================================================================

/// The extraction capability.
///
/// Implementations are swapped by dependency injection: the deterministic
/// [`crate::HeuristicExtractor`] in tests and offline mode, the
/// [`crate::GeminiExtractor`] in production, usually wrapped in a
/// [`crate::FallbackExtractor`].
#[async_trait]
pub trait OrderExtractor: Send + Sync {
    /// Extracts an order suggestion from free text.
    async fn extract_order(&self, text: &str) -> ExtractionResult<ExtractedOrder>;
}

// =============================================================================
// Unit Tests
// =============================================================================
