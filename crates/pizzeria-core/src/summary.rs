//! # Order Summary
//!
//! The read-only view shown after a successful submission.
//!
//! ## Layout
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Order summary for Ana                   │
//! │  Large pizza, Regular crust              │
//! │  ──────────────────────────────────────  │
//! │  Ham x3                          3.00€   │
//! │  ──────────────────────────────────────  │
//! │  Subtotal                        3.00€   │
//! │  Size (Large)                   15.00€   │
//! │  VAT (21%)                       3.78€   │
//! │  TOTAL                          21.78€   │
//! └──────────────────────────────────────────┘
//! ```
//!
//! Totals are recomputed from the order's line snapshot, never copied from
//! the entry screen.

use serde::Serialize;
use ts_rs::TS;

use crate::money::{Money, SymbolPosition};
use crate::order::Order;
use crate::pricing::{PricingResult, TAX_RATE};

const RULE_WIDTH: usize = 40;

/// One printed row of the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub line_total: Money,
}

/// Everything the summary stage displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_id: String,
    pub customer_name: String,
    pub size_label: String,
    pub crust_label: String,
    pub rows: Vec<SummaryRow>,
    pub total_units: i64,
    pub pricing: PricingResult,
}

impl OrderSummary {
    pub fn from_order(order: &Order) -> Self {
        let rows = order
            .lines
            .iter()
            .map(|line| SummaryRow {
                name: line.product().name.clone(),
                quantity: line.quantity(),
                unit_price: line.product().unit_price,
                line_total: line.line_total(),
            })
            .collect();

        OrderSummary {
            order_id: order.id.clone(),
            customer_name: order.customer_name.clone(),
            size_label: order.size_label().to_string(),
            crust_label: order.crust.label().to_string(),
            rows,
            total_units: order.total_units(),
            pricing: order.pricing(),
        }
    }

    /// Renders the summary as plain text.
    pub fn render(&self, symbol: &str, position: SymbolPosition) -> String {
        let fmt = |m: Money| m.format_with(symbol, position);
        let rule = "-".repeat(RULE_WIDTH);
        let mut out = String::new();

        out.push_str(&format!("Order summary for {}\n", self.customer_name));
        out.push_str(&format!(
            "{} pizza, {} crust\n",
            self.size_label, self.crust_label
        ));
        out.push_str(&rule);
        out.push('\n');

        if self.rows.is_empty() {
            out.push_str("No products in the order\n");
        }
        for row in &self.rows {
            let label = format!("{} x{}", row.name, row.quantity);
            out.push_str(&amount_line(&label, &fmt(row.line_total)));
        }

        out.push_str(&rule);
        out.push('\n');
        out.push_str(&amount_line("Subtotal", &fmt(self.pricing.subtotal)));
        out.push_str(&amount_line(
            &format!("Size ({})", self.size_label),
            &fmt(self.pricing.size_surcharge),
        ));
        out.push_str(&amount_line(
            &format!("VAT ({}%)", TAX_RATE.percentage()),
            &fmt(self.pricing.tax),
        ));
        out.push_str(&amount_line("TOTAL", &fmt(self.pricing.total_with_tax)));
        out
    }
}

/// `label` left-aligned, `amount` right-aligned, one line.
fn amount_line(label: &str, amount: &str) -> String {
    let width = RULE_WIDTH.saturating_sub(label.chars().count());
    format!("{label}{amount:>width$}\n")
}
