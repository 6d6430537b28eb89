//! # pizzeria-core: Pure Order-Entry Logic
//!
//! The cart, pricing and validation rules behind the pizza order form,
//! as pure code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pizzeria Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front end (CLI / UI)                         │   │
//! │  │     Order form ──► submit ──► Summary ──► back to form         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ method calls                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pizzeria-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │ catalog  │ │   cart   │ │ pricing  │ │   validation     │  │   │
//! │  │   │ Product  │ │ OrderLine│ │ subtotal │ │ OrderValidator   │  │   │
//! │  │   │          │ │ Cart     │ │ surcharge│ │ Order            │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                  session (OrderSession) ties them together      │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • SINGLE THREAD                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, sizes, crusts, tax rate
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The static list of extras
//! - [`cart`] - Order lines and merge/remove/adjust semantics
//! - [`pricing`] - Subtotal, size surcharge, tax-inclusive total
//! - [`validation`] - Submission checks
//! - [`order`] - The validated submission payload
//! - [`session`] - One customer's order-entry session
//! - [`summary`] - The summary view model
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pizzeria_core::{Catalog, OrderSession, PizzaSize, ProductId};
//!
//! let mut session = OrderSession::new(Catalog::extras());
//! for _ in 0..3 {
//!     session.add_product_by_id(ProductId(1)).unwrap(); // Ham, 1.00
//! }
//! session.set_size(Some(PizzaSize::Large));
//! assert_eq!(session.pricing().total_with_tax.cents(), 2178); // 21.78
//!
//! session.set_customer_name("Ana");
//! let order = session.submit().unwrap();
//! assert_eq!(order.lines[0].quantity(), 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod pricing;
pub mod session;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartEvent, OrderLine, MAX_LINE_QUANTITY};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, SymbolPosition};
pub use order::Order;
pub use pricing::{PricingResult, TAX_RATE};
pub use session::{OrderSession, Stage};
pub use summary::OrderSummary;
pub use types::*;
