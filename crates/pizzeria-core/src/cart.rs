//! # Cart
//!
//! The ordered collection of order lines and the operations that mutate it.
//!
//! ## Invariants
//! - At most one line per `ProductId` (adding the same product merges)
//! - Every line has quantity > 0 (a line that would drop to 0 is removed)
//! - No line exceeds [`MAX_LINE_QUANTITY`] (larger results are clamped)
//! - Insertion order is display order
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action              Cart Method              Effect                 │
//! │  ─────────              ───────────              ──────                 │
//! │                                                                         │
//! │  Tap "+" on extra ─────► add_product() ────────► push qty 1, or        │
//! │                                                   replace with qty + 1  │
//! │                                                                         │
//! │  Tap "+"/"−" on line ──► adjust_quantity() ────► replace with qty + d,  │
//! │                                                   or remove if ≤ 0      │
//! │                                                                         │
//! │  Tap remove ───────────► remove_line() ────────► drop line (or no-op)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines are never mutated in place. Each change looks the line up by
//! product id, builds a replacement value and writes it back at the same
//! index.

use std::sync::Arc;

use serde::Serialize;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductId};

/// Largest quantity a single line can hold.
///
/// Keeps `unit_price × quantity` and the unit count far away from `i64`
/// limits whatever delta the caller passes.
pub const MAX_LINE_QUANTITY: i64 = 9_999;

// =============================================================================
// Order Line
// =============================================================================

/// One distinct product in the cart together with how many were ordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    product: Arc<Product>,
    quantity: i64,
}

impl OrderLine {
    /// First add of a product.
    fn first(product: Arc<Product>) -> Self {
        OrderLine {
            product,
            quantity: 1,
        }
    }

    /// Copy of this line with a different quantity.
    fn with_quantity(&self, quantity: i64) -> Self {
        debug_assert!(quantity > 0 && quantity <= MAX_LINE_QUANTITY);
        OrderLine {
            product: Arc::clone(&self.product),
            quantity,
        }
    }

    pub fn product(&self) -> &Arc<Product> {
        &self.product
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// unit price × quantity
    pub fn line_total(&self) -> Money {
        self.product.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart Events
// =============================================================================

/// What a cart mutation did. Handed to session observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    LineAdded { product_id: ProductId },
    LineUpdated { product_id: ProductId, quantity: i64 },
    LineRemoved { product_id: ProductId },
}

// =============================================================================
// Cart
// =============================================================================

/// The order's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Cart {
    lines: Vec<OrderLine>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds one unit of `product`.
    ///
    /// Merges with an existing line when one has the same product id, even
    /// if `product` is a different `Arc` than the one already in the cart.
    /// The line keeps the product it was created with.
    pub fn add_product(&mut self, product: Arc<Product>) -> CartEvent {
        match self.position(product.id) {
            Some(index) => {
                let quantity = (self.lines[index].quantity + 1).min(MAX_LINE_QUANTITY);
                self.lines[index] = self.lines[index].with_quantity(quantity);
                CartEvent::LineUpdated {
                    product_id: product.id,
                    quantity,
                }
            }
            None => {
                let product_id = product.id;
                self.lines.push(OrderLine::first(product));
                CartEvent::LineAdded { product_id }
            }
        }
    }

    /// Removes the line for `line`'s product. Absent lines are a no-op.
    pub fn remove_line(&mut self, line: &OrderLine) -> Option<CartEvent> {
        self.remove_product(line.product_id())
    }

    /// Removes the line for `product_id`, if present.
    pub fn remove_product(&mut self, product_id: ProductId) -> Option<CartEvent> {
        let index = self.position(product_id)?;
        self.lines.remove(index);
        Some(CartEvent::LineRemoved { product_id })
    }

    /// Changes the quantity of `line`'s product by `delta`.
    ///
    /// The result is based on the live line in the cart, not on
    /// `line.quantity()`, so a stale `line` value cannot resurrect an old
    /// quantity. Results above [`MAX_LINE_QUANTITY`] are clamped. Returns
    /// `None` when the product has no line.
    pub fn adjust_quantity(&mut self, line: &OrderLine, delta: i64) -> Option<CartEvent> {
        self.adjust_product(line.product_id(), delta)
    }

    /// [`Cart::adjust_quantity`] keyed by product id.
    pub fn adjust_product(&mut self, product_id: ProductId, delta: i64) -> Option<CartEvent> {
        let index = self.position(product_id)?;
        let quantity = self.lines[index]
            .quantity
            .saturating_add(delta)
            .min(MAX_LINE_QUANTITY);

        if quantity <= 0 {
            self.lines.remove(index);
            return Some(CartEvent::LineRemoved { product_id });
        }

        self.lines[index] = self.lines[index].with_quantity(quantity);
        Some(CartEvent::LineUpdated {
            product_id,
            quantity,
        })
    }

    /// Sum of quantities across all lines. Display only.
    pub fn total_units(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn line(&self, product_id: ProductId) -> Option<&OrderLine> {
        self.lines.iter().find(|l| l.product_id() == product_id)
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.lines.iter().position(|l| l.product_id() == product_id)
    }
}
