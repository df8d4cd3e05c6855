//! # Domain Types
//!
//! Core domain types used throughout Bookly.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │    Customer     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  cost_price     │   │  items[]        │   │  tier           │       │
//! │  │  selling_price  │   │  total_minor    │   │  total_spent    │       │
//! │  │  stock          │   │  source/status  │   │  order_count    │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   SalesSource   │   │   OrderStatus   │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  WhatsApp       │   │  Paid           │   │  Cash           │       │
//! │  │  Instagram      │   │  Pending        │   │  Wallet         │       │
//! │  │  Walk-in, ...   │   └─────────────────┘   │  Transfer       │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! `OrderItem.price_minor` is frozen at sale time. Later edits to the
//! product's selling price never change historical orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Sales Source (Channel)
// =============================================================================

/// The marketing/sales channel an order originated from.
///
/// This is a closed set: channel analytics iterate [`SalesSource::ALL`] so a
/// revenue breakdown always has one row per channel, zeros included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SalesSource {
    WhatsApp,
    Instagram,
    Facebook,
    TikTok,
    #[serde(rename = "Walk-in")]
    WalkIn,
    #[serde(rename = "Phone Call")]
    PhoneCall,
    Other,
}

impl SalesSource {
    /// Every channel, in declaration order.
    pub const ALL: [SalesSource; 7] = [
        SalesSource::WhatsApp,
        SalesSource::Instagram,
        SalesSource::Facebook,
        SalesSource::TikTok,
        SalesSource::WalkIn,
        SalesSource::PhoneCall,
        SalesSource::Other,
    ];

    /// Human-readable label, identical to the serialized form.
    pub const fn label(&self) -> &'static str {
        match self {
            SalesSource::WhatsApp => "WhatsApp",
            SalesSource::Instagram => "Instagram",
            SalesSource::Facebook => "Facebook",
            SalesSource::TikTok => "TikTok",
            SalesSource::WalkIn => "Walk-in",
            SalesSource::PhoneCall => "Phone Call",
            SalesSource::Other => "Other",
        }
    }
}

impl std::fmt::Display for SalesSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// Settlement state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum OrderStatus {
    /// Payment received.
    Paid,
    /// Recorded but awaiting payment.
    Pending,
}

impl OrderStatus {
    /// Human-readable label, identical to the serialized form.
    pub const fn label(&self) -> &'static str {
        match self {
            OrderStatus::Paid => "Paid",
            OrderStatus::Pending => "Pending",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Paid
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Payment Method
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentMethod {
    /// Physical cash payment.
    Cash,
    /// Mobile wallet payment.
    Wallet,
    /// Bank transfer.
    Transfer,
}

impl PaymentMethod {
    /// Human-readable label, identical to the serialized form.
    pub const fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Wallet => "Wallet",
            PaymentMethod::Transfer => "Transfer",
        }
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cash
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Customer Tier
// =============================================================================

/// Customer segment derived from order frequency.
///
/// Never set directly: [`crate::customers::classify_tier`] is the single
/// source of truth for the mapping from order count to tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CustomerTier {
    New,
    Returning,
    #[serde(rename = "VIP")]
    Vip,
}

impl CustomerTier {
    /// Human-readable label, identical to the serialized form.
    pub const fn label(&self) -> &'static str {
        match self {
            CustomerTier::New => "New",
            CustomerTier::Returning => "Returning",
            CustomerTier::Vip => "VIP",
        }
    }
}

impl Default for CustomerTier {
    fn default() -> Self {
        CustomerTier::New
    }
}

impl std::fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the inventory.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: String,

    /// Display name shown in the inventory and on receipts.
    pub name: String,

    /// Acquisition cost per unit, in minor currency units.
    pub cost_price_minor: i64,

    /// Selling price per unit, in minor currency units.
    /// Expected (not enforced) to be >= cost_price_minor.
    pub selling_price_minor: i64,

    /// Units currently in stock. May briefly go negative through external
    /// bugs; aggregations treat negative stock as zero.
    pub stock: i64,

    /// Stock level at or below which the product counts as low-stock.
    pub low_stock_threshold: i64,
}

impl Product {
    /// Returns the cost price as Money.
    #[inline]
    pub fn cost_price(&self) -> Money {
        Money::from_minor(self.cost_price_minor)
    }

    /// Returns the selling price as Money.
    #[inline]
    pub fn selling_price(&self) -> Money {
        Money::from_minor(self.selling_price_minor)
    }

    /// Checks whether stock has fallen to the alert threshold.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.low_stock_threshold
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// A line item in an order.
///
/// Uses the snapshot pattern: `price_minor` is the product's selling price
/// at sale time, frozen thereafter.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderItem {
    pub id: String,

    /// Product name at time of sale (frozen).
    pub name: String,

    /// Units sold. Always >= 1 for orders built by the draft builder.
    pub quantity: i64,

    /// Unit price in minor units at time of sale (frozen).
    pub price_minor: i64,

    /// Optional variant label ("Red / 42").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

impl OrderItem {
    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_minor(self.price_minor)
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A recorded sale.
///
/// ## Invariants
/// - `total_minor` equals the line-item sum whenever `items` is non-empty
/// - An order with an empty item list is a *quick sale*: the total was
///   entered directly as a flat amount
/// - Immutable after creation in this core (status changes are external)
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Order {
    pub id: String,

    /// Link to a cached customer record, when one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// Display name of the buyer; "Guest" for anonymous sales.
    pub customer_name: String,

    pub items: Vec<OrderItem>,

    /// Order total in minor units.
    pub total_minor: i64,

    #[ts(as = "String")]
    pub date: DateTime<Utc>,

    pub status: OrderStatus,

    pub source: SalesSource,

    pub payment_method: PaymentMethod,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Order {
    /// Returns the order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_minor(self.total_minor)
    }

    /// A quick sale is a flat-amount order with no itemized lines.
    #[inline]
    pub fn is_quick_sale(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Expense
// =============================================================================

/// Suggested expense categories. `Expense.category` is free-form; the UI
/// offers these as defaults.
pub const EXPENSE_CATEGORIES: [&str; 8] = [
    "Rent",
    "Utilities",
    "Inventory",
    "Data",
    "Transport",
    "Marketing",
    "Salaries",
    "Other",
];

/// A logged business expense.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Expense {
    pub id: String,

    /// Free-form category, usually one of [`EXPENSE_CATEGORIES`].
    pub category: String,

    /// Amount in minor units. Always >= 0.
    pub amount_minor: i64,

    #[ts(as = "String")]
    pub date: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Expense {
    /// Returns the expense amount as Money.
    #[inline]
    pub fn amount(&self) -> Money {
        Money::from_minor(self.amount_minor)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A cached customer record.
///
/// Customers are derived from order history by
/// [`crate::customers::rebuild_customers`]; the persisted list is a cache,
/// not a source of truth. Only `phone` and `email` carry information that
/// cannot be recomputed.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Customer {
    pub id: String,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    pub tier: CustomerTier,

    /// Lifetime spend in minor units.
    pub total_spent_minor: i64,

    pub order_count: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub last_order_date: Option<DateTime<Utc>>,
}

impl Customer {
    /// Returns the lifetime spend as Money.
    #[inline]
    pub fn total_spent(&self) -> Money {
        Money::from_minor(self.total_spent_minor)
    }
}

// =============================================================================
// Business Profile
// =============================================================================

/// Business identity and settings edited on the settings page.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BusinessProfile {
    pub name: String,

    /// ISO-ish currency code used for display ("NGN", "USD", ...).
    pub currency: String,

    pub phone: String,

    pub email: String,

    /// Printed at the bottom of receipts.
    pub footer_note: String,

    /// Order count at which a customer becomes VIP. Values below 1 are
    /// treated as 1 by [`BusinessProfile::effective_vip_threshold`].
    pub vip_threshold: i64,
}

impl BusinessProfile {
    /// The VIP threshold with the >= 1 floor applied.
    #[inline]
    pub fn effective_vip_threshold(&self) -> i64 {
        self.vip_threshold.max(1)
    }
}

impl Default for BusinessProfile {
    fn default() -> Self {
        BusinessProfile {
            name: "My Business".to_string(),
            currency: "NGN".to_string(),
            phone: String::new(),
            email: String::new(),
            footer_note: "Thank you for shopping with us!".to_string(),
            vip_threshold: crate::DEFAULT_VIP_THRESHOLD,
        }
    }
}

// =============================================================================
// App Settings
// =============================================================================

/// UI preferences carried opaquely through the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AppSettings {
    #[serde(default = "default_true")]
    pub show_fab: bool,

    #[serde(default)]
    pub sound_enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            show_fab: true,
            sound_enabled: false,
        }
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// The complete persisted application state.
///
/// This is the state-snapshot contract between the persistence collaborator
/// and the core: the store exclusively owns the canonical collections, the
/// core only reads snapshots and returns derived values.
///
/// Every field has a serde default so blobs written by older versions (with
/// fields missing) still deserialize. That is the full extent of schema
/// migration in this system.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Snapshot {
    #[serde(default)]
    pub profile: BusinessProfile,

    #[serde(default)]
    pub orders: Vec<Order>,

    #[serde(default)]
    pub products: Vec<Product>,

    #[serde(default)]
    pub customers: Vec<Customer>,

    #[serde(default)]
    pub expenses: Vec<Expense>,

    #[serde(default)]
    pub settings: AppSettings,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_sales_source_labels_match_serde() {
        for source in SalesSource::ALL {
            let json = serde_json::to_string(&source).unwrap();
            assert_eq!(json, format!("\"{}\"", source.label()));
        }
    }

    #[test]
    fn test_sales_source_deserializes_original_strings() {
        let source: SalesSource = serde_json::from_str("\"Walk-in\"").unwrap();
        assert_eq!(source, SalesSource::WalkIn);
        let source: SalesSource = serde_json::from_str("\"Phone Call\"").unwrap();
        assert_eq!(source, SalesSource::PhoneCall);
    }

    #[test]
    fn test_tier_serializes_as_vip() {
        assert_eq!(serde_json::to_string(&CustomerTier::Vip).unwrap(), "\"VIP\"");
    }

    #[test]
    fn test_order_item_line_total() {
        let item = OrderItem {
            id: "i1".to_string(),
            name: "Ankara Heels Red".to_string(),
            quantity: 2,
            price_minor: 1_800_000,
            variant: None,
        };
        assert_eq!(item.line_total().minor(), 3_600_000);
    }

    #[test]
    fn test_quick_sale_detection() {
        let order = Order {
            id: "ord_001".to_string(),
            customer_id: None,
            customer_name: "Guest".to_string(),
            items: vec![],
            total_minor: 500_000,
            date: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            status: OrderStatus::Paid,
            source: SalesSource::WalkIn,
            payment_method: PaymentMethod::Cash,
            note: None,
        };
        assert!(order.is_quick_sale());
    }

    #[test]
    fn test_low_stock() {
        let product = Product {
            id: "p3".to_string(),
            name: "Native Cap (Fila)".to_string(),
            cost_price_minor: 250_000,
            selling_price_minor: 650_000,
            stock: 2,
            low_stock_threshold: 5,
        };
        assert!(product.is_low_stock());
    }

    #[test]
    fn test_vip_threshold_floor() {
        let mut profile = BusinessProfile::default();
        profile.vip_threshold = 0;
        assert_eq!(profile.effective_vip_threshold(), 1);
        profile.vip_threshold = -3;
        assert_eq!(profile.effective_vip_threshold(), 1);
        profile.vip_threshold = 5;
        assert_eq!(profile.effective_vip_threshold(), 5);
    }

    #[test]
    fn test_snapshot_tolerates_missing_fields() {
        // A legacy blob with only a profile still loads; collections default
        // to empty and settings to their defaults.
        let snapshot: Snapshot =
            serde_json::from_str(r#"{"profile":{"name":"Lagos Urban Styles","currency":"NGN","phone":"","email":"","footerNote":"","vipThreshold":5}}"#)
                .unwrap();
        assert_eq!(snapshot.profile.name, "Lagos Urban Styles");
        assert!(snapshot.orders.is_empty());
        assert!(snapshot.settings.show_fab);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let snapshot = Snapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.profile.vip_threshold, snapshot.profile.vip_threshold);
    }
}
