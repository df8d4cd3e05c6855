//! # Customer Tiering Engine
//!
//! Derives per-customer aggregates from the order history and classifies
//! each customer into a tier (New / Returning / VIP).
//!
//! ## Known Limitation: Name-Based Identity
//! Orders are grouped by exact, case-sensitive `customer_name`. There is no
//! stable customer-id reconciliation and no fuzzy matching: "Chidi" and
//! "chidi" are two customers, and anonymous sales all pool under the
//! "Guest" sentinel. This mirrors how the data is actually captured (a
//! free-typed name per sale) and is preserved deliberately.
//!
//! ## Tier Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │   order_count >= vip_threshold  ──►  VIP                                │
//! │   order_count >= 2              ──►  Returning                          │
//! │   otherwise                     ──►  New                                │
//! │                                                                         │
//! │   vip_threshold comes from BusinessProfile and is clamped to >= 1      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is a full recompute per call: O(orders), no incremental
//! state. Fine for the hundreds of orders this tool is built for.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;
use crate::types::{Customer, CustomerTier, Order};

// =============================================================================
// Customer Stats
// =============================================================================

/// Aggregates for a single customer name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CustomerStats {
    /// Lifetime spend in minor units.
    pub total_spent_minor: i64,
    /// Number of orders placed.
    pub order_count: i64,
    /// Most recent order date in the group.
    #[ts(as = "Option<String>")]
    pub last_order_date: Option<DateTime<Utc>>,
    pub tier: CustomerTier,
}

impl CustomerStats {
    pub fn total_spent(&self) -> Money {
        Money::from_minor(self.total_spent_minor)
    }
}

// =============================================================================
// Tier Classification
// =============================================================================

/// Maps an order count to a tier given the profile's VIP threshold.
///
/// The threshold is clamped to a minimum of 1 so a misconfigured profile
/// (zero or negative threshold) cannot make every single-order customer VIP.
pub fn classify_tier(order_count: i64, vip_threshold: i64) -> CustomerTier {
    let threshold = vip_threshold.max(1);

    if order_count >= threshold {
        CustomerTier::Vip
    } else if order_count >= 2 {
        CustomerTier::Returning
    } else {
        CustomerTier::New
    }
}

// =============================================================================
// Derivation
// =============================================================================

/// Derives per-customer statistics from the full order history.
///
/// Returns a `BTreeMap` keyed by customer name so iteration order (and the
/// serialized form) is identical across calls on identical input; the
/// output is a derived read-model, recomputed in full every time.
pub fn derive_customer_stats(
    orders: &[Order],
    vip_threshold: i64,
) -> BTreeMap<String, CustomerStats> {
    let mut stats: BTreeMap<String, CustomerStats> = BTreeMap::new();

    for order in orders {
        let entry = stats
            .entry(order.customer_name.clone())
            .or_insert(CustomerStats {
                total_spent_minor: 0,
                order_count: 0,
                last_order_date: None,
                tier: CustomerTier::New,
            });

        entry.total_spent_minor += order.total_minor;
        entry.order_count += 1;
        entry.last_order_date = match entry.last_order_date {
            Some(existing) => Some(existing.max(order.date)),
            None => Some(order.date),
        };
    }

    for stat in stats.values_mut() {
        stat.tier = classify_tier(stat.order_count, vip_threshold);
    }

    stats
}

/// Rebuilds the cached customer list from the order history.
///
/// The persisted `customers` collection is a cache of this derivation:
/// ids, phone numbers and email addresses survive from existing records
/// (matched by name), everything else is recomputed. Names never seen
/// before get a fresh UUID. Sorted by lifetime spend descending, ties by
/// name ascending.
pub fn rebuild_customers(
    orders: &[Order],
    existing: &[Customer],
    vip_threshold: i64,
) -> Vec<Customer> {
    let stats = derive_customer_stats(orders, vip_threshold);

    let mut customers: Vec<Customer> = stats
        .into_iter()
        .map(|(name, s)| {
            let known = existing.iter().find(|c| c.name == name);
            Customer {
                id: known
                    .map(|c| c.id.clone())
                    .unwrap_or_else(|| Uuid::new_v4().to_string()),
                phone: known.and_then(|c| c.phone.clone()),
                email: known.and_then(|c| c.email.clone()),
                name,
                tier: s.tier,
                total_spent_minor: s.total_spent_minor,
                order_count: s.order_count,
                last_order_date: s.last_order_date,
            }
        })
        .collect();

    customers.sort_by(|a, b| {
        b.total_spent_minor
            .cmp(&a.total_spent_minor)
            .then_with(|| a.name.cmp(&b.name))
    });
    customers
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderStatus, PaymentMethod, SalesSource};
    use chrono::TimeZone;

    fn order(customer: &str, total_minor: i64, day: u32) -> Order {
        Order {
            id: format!("ord_{customer}_{day}"),
            customer_id: None,
            customer_name: customer.to_string(),
            items: vec![],
            total_minor,
            date: Utc.with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap(),
            status: OrderStatus::Paid,
            source: SalesSource::WhatsApp,
            payment_method: PaymentMethod::Transfer,
            note: None,
        }
    }

    #[test]
    fn test_classify_tier_boundaries() {
        // Exactly at the threshold is VIP
        assert_eq!(classify_tier(5, 5), CustomerTier::Vip);
        assert_eq!(classify_tier(4, 5), CustomerTier::Returning);
        assert_eq!(classify_tier(2, 5), CustomerTier::Returning);
        assert_eq!(classify_tier(1, 5), CustomerTier::New);
        assert_eq!(classify_tier(0, 5), CustomerTier::New);
    }

    #[test]
    fn test_classify_tier_clamps_threshold() {
        // threshold <= 0 behaves as 1
        assert_eq!(classify_tier(1, 0), CustomerTier::Vip);
        assert_eq!(classify_tier(1, -7), CustomerTier::Vip);
    }

    #[test]
    fn test_derive_groups_by_exact_name() {
        let orders = vec![
            order("Chidi Okafor", 3_500_000, 1),
            order("Chidi Okafor", 500_000, 3),
            order("chidi okafor", 100_000, 2),
        ];

        let stats = derive_customer_stats(&orders, 5);
        assert_eq!(stats.len(), 2);

        let chidi = &stats["Chidi Okafor"];
        assert_eq!(chidi.total_spent_minor, 4_000_000);
        assert_eq!(chidi.order_count, 2);
        assert_eq!(chidi.tier, CustomerTier::Returning);
        assert_eq!(
            chidi.last_order_date,
            Some(Utc.with_ymd_and_hms(2024, 6, 3, 12, 0, 0).unwrap())
        );

        // Case matters: the lowercase spelling is a separate customer
        assert_eq!(stats["chidi okafor"].tier, CustomerTier::New);
    }

    #[test]
    fn test_last_order_date_is_max_not_last_seen() {
        // Orders arrive out of chronological order
        let orders = vec![
            order("Amaka", 100, 20),
            order("Amaka", 100, 5),
            order("Amaka", 100, 12),
        ];
        let stats = derive_customer_stats(&orders, 5);
        assert_eq!(
            stats["Amaka"].last_order_date,
            Some(Utc.with_ymd_and_hms(2024, 6, 20, 12, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_vip_at_threshold() {
        let orders: Vec<Order> = (1..=5).map(|d| order("Ngozi", 100_000, d)).collect();
        let stats = derive_customer_stats(&orders, 5);
        assert_eq!(stats["Ngozi"].tier, CustomerTier::Vip);
    }

    #[test]
    fn test_idempotent_output() {
        let orders = vec![
            order("Chidi Okafor", 3_500_000, 1),
            order("Amaka", 500_000, 2),
            order("Guest", 50_000, 3),
        ];

        let first = derive_customer_stats(&orders, 5);
        let second = derive_customer_stats(&orders, 5);

        // Byte-identical serialized output across identical calls
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_rebuild_preserves_contact_info_and_id() {
        let orders = vec![order("Chidi Okafor", 3_500_000, 1), order("Amaka", 500_000, 2)];
        let existing = vec![Customer {
            id: "c-001".to_string(),
            name: "Chidi Okafor".to_string(),
            phone: Some("+234 812 345 6789".to_string()),
            email: None,
            tier: CustomerTier::New,
            total_spent_minor: 0,
            order_count: 0,
            last_order_date: None,
        }];

        let rebuilt = rebuild_customers(&orders, &existing, 5);
        assert_eq!(rebuilt.len(), 2);

        // Highest spend first
        assert_eq!(rebuilt[0].name, "Chidi Okafor");
        assert_eq!(rebuilt[0].id, "c-001");
        assert_eq!(rebuilt[0].phone.as_deref(), Some("+234 812 345 6789"));
        assert_eq!(rebuilt[0].total_spent_minor, 3_500_000);

        // Unknown name got a fresh id
        assert_eq!(rebuilt[1].name, "Amaka");
        assert!(!rebuilt[1].id.is_empty());
    }

    #[test]
    fn test_rebuild_sort_tie_breaks_by_name() {
        let orders = vec![order("Zainab", 100_000, 1), order("Amaka", 100_000, 2)];
        let rebuilt = rebuild_customers(&orders, &[], 5);
        assert_eq!(rebuilt[0].name, "Amaka");
        assert_eq!(rebuilt[1].name, "Zainab");
    }
}
