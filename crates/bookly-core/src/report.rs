//! # Text Exports
//!
//! String-formatting downstream of the aggregators: the customer CSV
//! export, the plain-text sales report and the receipt. These feed an
//! out-of-scope file/print collaborator; nothing here touches I/O.

use chrono::{DateTime, Utc};

use crate::money::Money;
use crate::types::{BusinessProfile, Customer, Order, SalesSource};

// =============================================================================
// Amount Formatting
// =============================================================================

/// Formats an amount with its currency code and thousands grouping:
/// `format_amount("NGN", Money::from_minor(3_500_000))` → `"NGN 35,000.00"`.
pub fn format_amount(currency: &str, amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!(
        "{currency} {sign}{}.{:02}",
        group_thousands(amount.major().abs()),
        amount.minor_part()
    )
}

/// Groups a non-negative integer into comma-separated thousands.
fn group_thousands(mut n: i64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut groups: Vec<String> = Vec::new();
    while n > 0 {
        groups.push(format!("{:03}", n % 1000));
        n /= 1000;
    }

    let mut out = groups.pop().unwrap_or_default();
    // Leading group keeps no zero padding
    out = out.trim_start_matches('0').to_string();
    for group in groups.iter().rev() {
        out.push(',');
        out.push_str(group);
    }
    out
}

// =============================================================================
// Customer CSV Export
// =============================================================================

/// Quotes a CSV field when it contains a delimiter, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Renders the customer list as comma-separated rows with a header.
///
/// Missing phone numbers and order dates show as `N/A`, matching the CRM
/// export this replaces.
pub fn customers_csv(customers: &[Customer]) -> String {
    let mut out = String::from("Name,Phone,Tier,Total Spent,Orders,Last Order\n");

    for customer in customers {
        let row = [
            csv_field(&customer.name),
            csv_field(customer.phone.as_deref().unwrap_or("N/A")),
            customer.tier.label().to_string(),
            customer.total_spent().to_string(),
            customer.order_count.to_string(),
            customer
                .last_order_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

// =============================================================================
// Sales Report
// =============================================================================

/// Renders the plain-text sales report, optionally filtered to one channel.
///
/// `generated_at` is passed in rather than read from a clock so the
/// function stays pure (and testable byte-for-byte).
pub fn sales_report(
    profile: &BusinessProfile,
    orders: &[Order],
    filter: Option<SalesSource>,
    generated_at: DateTime<Utc>,
) -> String {
    let filtered: Vec<&Order> = orders
        .iter()
        .filter(|o| filter.map_or(true, |f| o.source == f))
        .collect();
    let total_revenue: Money = filtered.iter().map(|o| o.total()).sum();

    let mut out = String::new();
    out.push_str("BOOKLY SALES REPORT\n");
    out.push_str("-------------------\n");
    out.push_str(&format!("Date: {}\n", generated_at.format("%Y-%m-%d")));
    out.push_str(&format!("Business: {}\n", profile.name));
    out.push_str(&format!(
        "Filter: {}\n",
        filter.map_or("All", |f| f.label())
    ));
    out.push('\n');
    out.push_str(&format!(
        "Total Revenue: {}\n",
        format_amount(&profile.currency, total_revenue)
    ));
    out.push_str(&format!("Total Orders: {}\n", filtered.len()));
    out.push('\n');
    out.push_str("ORDERS:\n");
    for order in &filtered {
        out.push_str(&format!(
            "[{}] {} - {} ({})\n",
            order.date.format("%Y-%m-%d"),
            order.customer_name,
            format_amount(&profile.currency, order.total()),
            order.source
        ));
    }

    out
}

// =============================================================================
// Receipt
// =============================================================================

/// Renders a plain-text receipt for one order.
pub fn receipt(profile: &BusinessProfile, order: &Order) -> String {
    let mut out = String::new();
    out.push_str(&format!("RECEIPT - {}\n", profile.name));
    out.push_str("------------------------------\n");
    out.push_str(&format!("Order ID: {}\n", order.id));
    out.push_str(&format!("Date: {}\n", order.date.format("%Y-%m-%d")));
    out.push_str(&format!("Customer: {}\n", order.customer_name));
    out.push('\n');
    out.push_str("ITEMS:\n");
    if order.is_quick_sale() {
        out.push_str("Quick sale\n");
    } else {
        for item in &order.items {
            out.push_str(&format!(
                "{}x {} - {}\n",
                item.quantity,
                item.name,
                format_amount(&profile.currency, item.price())
            ));
        }
    }
    out.push('\n');
    out.push_str("------------------------------\n");
    out.push_str(&format!(
        "TOTAL: {}\n",
        format_amount(&profile.currency, order.total())
    ));
    out.push_str(&format!("Payment: {}\n", order.payment_method));
    out.push('\n');
    out.push_str(&profile.footer_note);
    out.push('\n');

    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CustomerTier, OrderItem, OrderStatus, PaymentMethod};
    use chrono::TimeZone;

    fn profile() -> BusinessProfile {
        BusinessProfile {
            name: "Lagos Urban Styles".to_string(),
            currency: "NGN".to_string(),
            phone: "+234 812 345 6789".to_string(),
            email: "sales@lagosurban.com".to_string(),
            footer_note: "Thank you for shopping with us!".to_string(),
            vip_threshold: 5,
        }
    }

    fn order() -> Order {
        Order {
            id: "ord_001".to_string(),
            customer_id: None,
            customer_name: "Chidi Okafor".to_string(),
            items: vec![OrderItem {
                id: "i1".to_string(),
                name: "Agbada Classic Blue".to_string(),
                quantity: 1,
                price_minor: 3_500_000,
                variant: None,
            }],
            total_minor: 3_500_000,
            date: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            status: OrderStatus::Paid,
            source: SalesSource::WhatsApp,
            payment_method: PaymentMethod::Transfer,
            note: None,
        }
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("NGN", Money::from_minor(3_500_000)), "NGN 35,000.00");
        assert_eq!(format_amount("NGN", Money::from_minor(650)), "NGN 6.50");
        assert_eq!(format_amount("USD", Money::zero()), "USD 0.00");
        assert_eq!(
            format_amount("NGN", Money::from_minor(-150_000)),
            "NGN -1,500.00"
        );
        assert_eq!(
            format_amount("NGN", Money::from_minor(123_456_789_00)),
            "NGN 123,456,789.00"
        );
    }

    #[test]
    fn test_group_thousands_boundaries() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
        assert_eq!(group_thousands(100_500), "100,500");
    }

    #[test]
    fn test_customers_csv() {
        let customers = vec![
            Customer {
                id: "c1".to_string(),
                name: "Chidi Okafor".to_string(),
                phone: Some("+234 812 345 6789".to_string()),
                email: None,
                tier: CustomerTier::Vip,
                total_spent_minor: 3_500_000,
                order_count: 5,
                last_order_date: Some(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()),
            },
            Customer {
                id: "c2".to_string(),
                name: "Guest".to_string(),
                phone: None,
                email: None,
                tier: CustomerTier::New,
                total_spent_minor: 50_000,
                order_count: 1,
                last_order_date: None,
            },
        ];

        let csv = customers_csv(&customers);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Name,Phone,Tier,Total Spent,Orders,Last Order");
        assert_eq!(
            lines[1],
            "Chidi Okafor,+234 812 345 6789,VIP,35000.00,5,2024-06-01"
        );
        assert_eq!(lines[2], "Guest,N/A,New,500.00,1,N/A");
    }

    #[test]
    fn test_csv_quotes_delimiters() {
        let customers = vec![Customer {
            id: "c1".to_string(),
            name: "Okafor, Chidi".to_string(),
            phone: None,
            email: None,
            tier: CustomerTier::New,
            total_spent_minor: 0,
            order_count: 0,
            last_order_date: None,
        }];

        let csv = customers_csv(&customers);
        assert!(csv.contains("\"Okafor, Chidi\""));
    }

    #[test]
    fn test_sales_report_contents() {
        let generated_at = Utc.with_ymd_and_hms(2024, 6, 2, 9, 0, 0).unwrap();
        let report = sales_report(&profile(), &[order()], None, generated_at);

        assert!(report.starts_with("BOOKLY SALES REPORT\n"));
        assert!(report.contains("Date: 2024-06-02\n"));
        assert!(report.contains("Business: Lagos Urban Styles\n"));
        assert!(report.contains("Filter: All\n"));
        assert!(report.contains("Total Revenue: NGN 35,000.00\n"));
        assert!(report.contains("Total Orders: 1\n"));
        assert!(report.contains("[2024-06-01] Chidi Okafor - NGN 35,000.00 (WhatsApp)\n"));
    }

    #[test]
    fn test_sales_report_filter() {
        let generated_at = Utc.with_ymd_and_hms(2024, 6, 2, 9, 0, 0).unwrap();
        let report = sales_report(
            &profile(),
            &[order()],
            Some(SalesSource::Instagram),
            generated_at,
        );

        assert!(report.contains("Filter: Instagram\n"));
        assert!(report.contains("Total Revenue: NGN 0.00\n"));
        assert!(report.contains("Total Orders: 0\n"));
    }

    #[test]
    fn test_receipt_contents() {
        let text = receipt(&profile(), &order());

        assert!(text.starts_with("RECEIPT - Lagos Urban Styles\n"));
        assert!(text.contains("Order ID: ord_001\n"));
        assert!(text.contains("Customer: Chidi Okafor\n"));
        assert!(text.contains("1x Agbada Classic Blue - NGN 35,000.00\n"));
        assert!(text.contains("TOTAL: NGN 35,000.00\n"));
        assert!(text.contains("Payment: Transfer\n"));
        assert!(text.ends_with("Thank you for shopping with us!\n"));
    }

    #[test]
    fn test_receipt_quick_sale() {
        let mut quick = order();
        quick.items.clear();
        quick.total_minor = 500_000;

        let text = receipt(&profile(), &quick);
        assert!(text.contains("ITEMS:\nQuick sale\n"));
        assert!(text.contains("TOTAL: NGN 5,000.00\n"));
    }
}
