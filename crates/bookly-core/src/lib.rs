//! # bookly-core: Pure Business Logic for Bookly
//!
//! This crate is the **heart** of Bookly, a small-business sales and
//! bookkeeping tool. It contains all business logic as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Bookly Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Frontend (web UI)                          │   │
//! │  │    Dashboard ──► Sales Hub ──► Inventory ──► CRM ──► Settings   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ bookly-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌───────┐ │   │
//! │  │  │financials│ │ channels │ │customers │ │  draft   │ │report │ │   │
//! │  │  │ revenue  │ │  counts  │ │  tiers   │ │ validate │ │ CSV   │ │   │
//! │  │  │ COGS     │ │  revenue │ │  stats   │ │ totals   │ │receipt│ │   │
//! │  │  └──────────┘ └──────────┘ └──────────┘ └──────────┘ └───────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └───────────────┬─────────────────────────────┬───────────────────┘   │
//! │                  │                             │                        │
//! │  ┌───────────────▼──────────────┐ ┌────────────▼────────────────────┐  │
//! │  │  bookly-store                │ │  bookly-extract                 │  │
//! │  │  snapshot load/save          │ │  free-text → OrderDraft         │  │
//! │  └──────────────────────────────┘ └─────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, Customer, Snapshot, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Draft input validation
//! - [`financials`] - Revenue / expenses / COGS / profit aggregation
//! - [`channels`] - Per-channel order and revenue distribution
//! - [`customers`] - Customer stats and tier classification
//! - [`inventory`] - Stock valuation and low-stock listing
//! - [`draft`] - Order draft builder
//! - [`report`] - CSV / report / receipt text formatting
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same snapshot in, same read-model out; the
//!    aggregators own no state and never mutate their inputs
//! 2. **No I/O**: persistence and the extraction service are collaborators
//!    in sibling crates, never dependencies of this one
//! 3. **Integer Money**: all monetary values are minor units (i64)
//! 4. **Explicit Errors**: typed errors, never strings or panics; lookup
//!    misses are data, not errors
//!
//! ## Example Usage
//!
//! ```rust
//! use bookly_core::financials::compute_financials;
//!
//! // An empty snapshot aggregates to all zeros, not an error
//! let summary = compute_financials(&[], &[], &[]);
//! assert_eq!(summary.profit_minor, 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod channels;
pub mod customers;
pub mod draft;
pub mod error;
pub mod financials;
pub mod inventory;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use bookly_core::Money` instead of
// `use bookly_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sentinel customer name for anonymous walk-in/quick sales.
///
/// Orders without a buyer name all group under this label, which means the
/// Guest "customer" accumulates stats like anyone else. Callers that want
/// anonymous sales excluded filter before aggregating.
pub const GUEST_CUSTOMER: &str = "Guest";

/// Default VIP threshold for a fresh business profile.
pub const DEFAULT_VIP_THRESHOLD: i64 = 5;

/// Maximum line items allowed on a single order.
///
/// ## Business Reason
/// Prevents runaway drafts and keeps receipts printable.
pub const MAX_ORDER_ITEMS: usize = 100;

/// Maximum quantity of a single line item.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum length of customer and item names.
pub const MAX_NAME_LEN: usize = 100;
