//! # Channel Distribution Calculator
//!
//! Buckets orders by acquisition source and derives per-channel counts,
//! percentages and revenue for the dashboard and sales-hub views.
//!
//! ## Two Views, Two Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  compute_channel_distribution (dashboard pie/bars)                      │
//! │    • one row per channel PRESENT in the data                           │
//! │    • zero orders overall → empty vec (no division by zero)             │
//! │                                                                         │
//! │  compute_channel_revenue (sales hub breakdown)                          │
//! │    • one row for EVERY channel of the fixed set, zeros allowed         │
//! │                                                                         │
//! │  Both: sorted descending by value, ties broken by channel label        │
//! │  ascending so repeated runs render identically.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Order, SalesSource};

// =============================================================================
// Output Shapes
// =============================================================================

/// Share of order *count* captured by one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChannelShare {
    pub source: SalesSource,
    /// Orders attributed to this channel.
    pub count: usize,
    /// Integer percentage of all orders, rounded to nearest for display.
    pub percent: u32,
}

/// Revenue captured by one channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChannelRevenue {
    pub source: SalesSource,
    /// Orders attributed to this channel.
    pub count: usize,
    /// Revenue in minor units.
    pub revenue_minor: i64,
    /// Integer percentage of total revenue; 0 when there is no revenue.
    pub percent: u32,
}

impl ChannelRevenue {
    pub fn revenue(&self) -> Money {
        Money::from_minor(self.revenue_minor)
    }
}

// =============================================================================
// Calculators
// =============================================================================

/// Integer percentage of `part` in `whole`, rounded to nearest.
///
/// `whole` must be > 0; callers guard the zero case explicitly.
fn percent_of(part: i64, whole: i64) -> u32 {
    ((part * 100 + whole / 2) / whole) as u32
}

/// Computes the order-count distribution across channels.
///
/// Channels with zero orders are omitted. With no orders at all the result
/// is an empty vec, never NaN or a division by zero. Sorted by count
/// descending, then channel label ascending.
pub fn compute_channel_distribution(orders: &[Order]) -> Vec<ChannelShare> {
    let total = orders.len();
    if total == 0 {
        return Vec::new();
    }

    let mut shares: Vec<ChannelShare> = SalesSource::ALL
        .iter()
        .filter_map(|&source| {
            let count = orders.iter().filter(|o| o.source == source).count();
            (count > 0).then(|| ChannelShare {
                source,
                count,
                percent: percent_of(count as i64, total as i64),
            })
        })
        .collect();

    shares.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.source.label().cmp(b.source.label()))
    });
    shares
}

/// Computes the revenue breakdown across the full fixed channel set.
///
/// Every channel reports, zero values allowed, so the sales hub can render
/// a stable grid. Percentages are shares of total revenue and fall back to
/// 0 when there is no revenue. Sorted by revenue descending, then channel
/// label ascending.
pub fn compute_channel_revenue(orders: &[Order]) -> Vec<ChannelRevenue> {
    let total_revenue: i64 = orders.iter().map(|o| o.total_minor).sum();

    let mut rows: Vec<ChannelRevenue> = SalesSource::ALL
        .iter()
        .map(|&source| {
            let mut count = 0usize;
            let mut revenue_minor = 0i64;
            for order in orders.iter().filter(|o| o.source == source) {
                count += 1;
                revenue_minor += order.total_minor;
            }

            let percent = if total_revenue > 0 {
                percent_of(revenue_minor, total_revenue)
            } else {
                0
            };

            ChannelRevenue {
                source,
                count,
                revenue_minor,
                percent,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.revenue_minor
            .cmp(&a.revenue_minor)
            .then_with(|| a.source.label().cmp(b.source.label()))
    });
    rows
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderStatus, PaymentMethod};
    use chrono::{TimeZone, Utc};

    fn order(source: SalesSource, total_minor: i64) -> Order {
        Order {
            id: format!("ord_{}_{}", source.label(), total_minor),
            customer_id: None,
            customer_name: "Guest".to_string(),
            items: vec![],
            total_minor,
            date: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            status: OrderStatus::Paid,
            source,
            payment_method: PaymentMethod::Cash,
            note: None,
        }
    }

    #[test]
    fn test_empty_orders_yield_empty_distribution() {
        assert!(compute_channel_distribution(&[]).is_empty());
    }

    #[test]
    fn test_three_to_one_split() {
        let orders = vec![
            order(SalesSource::WhatsApp, 100),
            order(SalesSource::WhatsApp, 100),
            order(SalesSource::WhatsApp, 100),
            order(SalesSource::Instagram, 100),
        ];

        let shares = compute_channel_distribution(&orders);
        assert_eq!(shares.len(), 2);

        assert_eq!(shares[0].source, SalesSource::WhatsApp);
        assert_eq!(shares[0].count, 3);
        assert_eq!(shares[0].percent, 75);

        assert_eq!(shares[1].source, SalesSource::Instagram);
        assert_eq!(shares[1].count, 1);
        assert_eq!(shares[1].percent, 25);
    }

    #[test]
    fn test_zero_count_channels_omitted() {
        let orders = vec![order(SalesSource::TikTok, 100)];
        let shares = compute_channel_distribution(&orders);
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].source, SalesSource::TikTok);
        assert_eq!(shares[0].percent, 100);
    }

    #[test]
    fn test_tie_break_is_label_ascending() {
        let orders = vec![
            order(SalesSource::WalkIn, 100),
            order(SalesSource::Facebook, 100),
            order(SalesSource::Instagram, 100),
        ];

        let shares = compute_channel_distribution(&orders);
        let labels: Vec<&str> = shares.iter().map(|s| s.source.label()).collect();
        // Equal counts resolve lexicographically for a stable render order
        assert_eq!(labels, vec!["Facebook", "Instagram", "Walk-in"]);
    }

    #[test]
    fn test_percent_rounding() {
        // 1 of 3 orders = 33.33% → 33; 2 of 3 = 66.67% → 67
        let orders = vec![
            order(SalesSource::WhatsApp, 100),
            order(SalesSource::WhatsApp, 100),
            order(SalesSource::Instagram, 100),
        ];
        let shares = compute_channel_distribution(&orders);
        assert_eq!(shares[0].percent, 67);
        assert_eq!(shares[1].percent, 33);
    }

    #[test]
    fn test_revenue_breakdown_reports_every_channel() {
        let orders = vec![order(SalesSource::WhatsApp, 3_500_000)];
        let rows = compute_channel_revenue(&orders);

        assert_eq!(rows.len(), SalesSource::ALL.len());
        assert_eq!(rows[0].source, SalesSource::WhatsApp);
        assert_eq!(rows[0].revenue_minor, 3_500_000);
        assert_eq!(rows[0].percent, 100);

        // Absent channels still report, with zeros
        assert!(rows[1..].iter().all(|r| r.revenue_minor == 0 && r.count == 0));
    }

    #[test]
    fn test_revenue_breakdown_zero_revenue_has_zero_percent() {
        let rows = compute_channel_revenue(&[]);
        assert_eq!(rows.len(), SalesSource::ALL.len());
        assert!(rows.iter().all(|r| r.percent == 0));
        // All-zero rows fall back to the label ordering
        assert_eq!(rows[0].source, SalesSource::Facebook);
    }

    #[test]
    fn test_revenue_sort_descending() {
        let orders = vec![
            order(SalesSource::Instagram, 500_000),
            order(SalesSource::WhatsApp, 3_500_000),
            order(SalesSource::Instagram, 400_000),
        ];
        let rows = compute_channel_revenue(&orders);
        assert_eq!(rows[0].source, SalesSource::WhatsApp);
        assert_eq!(rows[1].source, SalesSource::Instagram);
        assert_eq!(rows[1].count, 2);
        assert_eq!(rows[1].revenue_minor, 900_000);
    }
}
