//! # Financial Aggregator
//!
//! Turns a snapshot of orders, products and expenses into the headline
//! business numbers: revenue, expenses, cost of goods sold and net profit.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Financial Aggregation                               │
//! │                                                                         │
//! │  orders[] ──────┬──► revenue  = Σ order.total                          │
//! │                 │                                                       │
//! │                 └──► cogs     = Σ matched cost_price × quantity        │
//! │  products[] ────────►              (id match first, then exact name;   │
//! │                                     no match → zero cost, no error)    │
//! │                                                                         │
//! │  expenses[] ────────► expenses = Σ expense.amount                      │
//! │                                                                         │
//! │  profit = revenue - expenses - cogs   (may be negative)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure and deterministic: no mutation of inputs, no side effects, identical
//! snapshots produce identical summaries.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Expense, Order, OrderStatus, Product};

// =============================================================================
// Revenue Scope
// =============================================================================

/// Which orders count toward revenue (and COGS).
///
/// Historically every order counted regardless of settlement status, so
/// `AllOrders` is the default. `PaidOnly` exists as a named option rather
/// than a hardcoded assumption; flipping the default is a product decision,
/// not a code change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum RevenueScope {
    /// Include every order, Paid and Pending alike (current behavior).
    #[default]
    AllOrders,
    /// Include only orders with status Paid.
    PaidOnly,
}

impl RevenueScope {
    fn includes(&self, order: &Order) -> bool {
        match self {
            RevenueScope::AllOrders => true,
            RevenueScope::PaidOnly => order.status == OrderStatus::Paid,
        }
    }
}

// =============================================================================
// Financial Summary
// =============================================================================

/// The derived read-model produced by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FinancialSummary {
    /// Total revenue in minor units.
    pub revenue_minor: i64,
    /// Total logged expenses in minor units.
    pub expenses_minor: i64,
    /// Cost of goods sold in minor units.
    pub cogs_minor: i64,
    /// Net profit in minor units: revenue - expenses - cogs. No clamping.
    pub profit_minor: i64,
}

impl FinancialSummary {
    pub fn revenue(&self) -> Money {
        Money::from_minor(self.revenue_minor)
    }

    pub fn expenses(&self) -> Money {
        Money::from_minor(self.expenses_minor)
    }

    pub fn cogs(&self) -> Money {
        Money::from_minor(self.cogs_minor)
    }

    pub fn profit(&self) -> Money {
        Money::from_minor(self.profit_minor)
    }
}

// =============================================================================
// Aggregation
// =============================================================================

/// Computes the financial summary over a snapshot, counting every order.
///
/// Convenience wrapper for [`compute_financials_scoped`] with
/// [`RevenueScope::AllOrders`].
pub fn compute_financials(
    orders: &[Order],
    products: &[Product],
    expenses: &[Expense],
) -> FinancialSummary {
    compute_financials_scoped(orders, products, expenses, RevenueScope::default())
}

/// Computes the financial summary over a snapshot with an explicit scope.
///
/// ## COGS Matching
/// For every item of every in-scope order, a product is looked up by id
/// first, falling back to a case-sensitive exact name match. A match adds
/// `cost_price × quantity`; a miss adds nothing. Quick-sale orders have no
/// items and therefore no cost contribution, and items referencing deleted
/// products are silently zero-cost, never an error.
pub fn compute_financials_scoped(
    orders: &[Order],
    products: &[Product],
    expenses: &[Expense],
    scope: RevenueScope,
) -> FinancialSummary {
    let mut revenue = Money::zero();
    let mut cogs = Money::zero();

    for order in orders.iter().filter(|o| scope.includes(o)) {
        revenue += order.total();

        for item in &order.items {
            let matched = products
                .iter()
                .find(|p| p.id == item.id)
                .or_else(|| products.iter().find(|p| p.name == item.name));

            if let Some(product) = matched {
                cogs += product.cost_price().multiply_quantity(item.quantity);
            }
        }
    }

    let expenses_total: Money = expenses.iter().map(Expense::amount).sum();
    let profit = revenue - expenses_total - cogs;

    FinancialSummary {
        revenue_minor: revenue.minor(),
        expenses_minor: expenses_total.minor(),
        cogs_minor: cogs.minor(),
        profit_minor: profit.minor(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
