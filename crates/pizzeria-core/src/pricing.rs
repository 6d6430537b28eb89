//! # Pricing
//!
//! Pure, stateless price derivation over a cart snapshot and a size.
//!
//! ## Formula
//! ```text
//! subtotal        = Σ unit_price × quantity
//! size_surcharge  = Small 5.00 | Medium 10.00 | Large 15.00 | unset 0.00
//! total_with_tax  = (subtotal + size_surcharge) × 1.21
//! ```
//!
//! Nothing here is cached. Every call recomputes from its inputs, so the
//! entry screen and the summary screen cannot disagree as long as they
//! price the same lines and size.

use serde::Serialize;
use ts_rs::TS;

use crate::cart::OrderLine;
use crate::money::Money;
use crate::types::{PizzaSize, TaxRate};

/// VAT applied to extras plus size surcharge: 21%.
pub const TAX_RATE: TaxRate = TaxRate::from_bps(2100);

/// Sum of line totals. Exact: no rounding happens here.
pub fn subtotal(lines: &[OrderLine]) -> Money {
    lines.iter().map(OrderLine::line_total).sum()
}

/// Surcharge for the selected size. An unset size costs nothing.
pub fn size_surcharge(size: Option<PizzaSize>) -> Money {
    size.map(|s| s.surcharge()).unwrap_or_default()
}

/// Surcharge for a size given by label. Unrecognized labels cost nothing.
pub fn size_surcharge_for_label(label: &str) -> Money {
    size_surcharge(PizzaSize::from_label(label))
}

/// `(subtotal + surcharge) × (1 + TAX_RATE)`, rounded half-up to the cent.
pub fn total_with_tax(subtotal: Money, surcharge: Money) -> Money {
    (subtotal + surcharge).with_tax(TAX_RATE)
}

/// Derived totals for one cart snapshot and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    pub subtotal: Money,
    pub size_surcharge: Money,
    /// `total_with_tax - subtotal - size_surcharge`, for display.
    pub tax: Money,
    pub total_with_tax: Money,
}

impl PricingResult {
    pub fn compute(lines: &[OrderLine], size: Option<PizzaSize>) -> Self {
        let subtotal = subtotal(lines);
        let size_surcharge = size_surcharge(size);
        let total_with_tax = total_with_tax(subtotal, size_surcharge);

        PricingResult {
            subtotal,
            size_surcharge,
            tax: total_with_tax - subtotal - size_surcharge,
            total_with_tax,
        }
    }
}
