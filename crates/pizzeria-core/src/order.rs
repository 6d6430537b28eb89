//! # Order
//!
//! The submission payload handed from the entry stage to the summary stage.
//!
//! An `Order` carries an immutable snapshot of the cart lines, not totals.
//! The summary recomputes prices from the snapshot with the same functions
//! the entry stage uses.

use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

use crate::cart::{Cart, OrderLine};
use crate::pricing::PricingResult;
use crate::types::{CrustType, PizzaSize};

/// A validated order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// UUID v4, generated at submission.
    pub id: String,

    /// Trimmed customer name (never blank).
    pub customer_name: String,

    /// Selected size; `None` when the front end left it unset.
    pub size: Option<PizzaSize>,

    pub crust: CrustType,

    /// Cart lines at submission time (never empty).
    pub lines: Vec<OrderLine>,

    #[ts(as = "String")]
    pub submitted_at: DateTime<Utc>,
}

impl Order {
    /// Only the validator builds orders, after both checks have passed.
    pub(crate) fn from_snapshot(
        customer_name: &str,
        size: Option<PizzaSize>,
        crust: CrustType,
        cart: &Cart,
    ) -> Self {
        Order {
            id: Uuid::new_v4().to_string(),
            customer_name: customer_name.trim().to_string(),
            size,
            crust,
            lines: cart.lines().to_vec(),
            submitted_at: Utc::now(),
        }
    }

    /// Size label for display, `"None"` when unset.
    pub fn size_label(&self) -> &'static str {
        self.size.map(|s| s.label()).unwrap_or("None")
    }

    pub fn total_units(&self) -> i64 {
        self.lines.iter().map(OrderLine::quantity).sum()
    }

    /// Recomputes totals from the snapshot.
    pub fn pricing(&self) -> PricingResult {
        PricingResult::compute(&self.lines, self.size)
    }
}
