//! # Order Session
//!
//! The single owner of everything a customer edits while building an order.
//!
//! ## Stages
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Lifecycle                                    │
//! │                                                                         │
//! │  ┌──────────┐   submit() ok    ┌──────────┐                            │
//! │  │  Entry   │─────────────────►│ Summary  │                            │
//! │  │          │◄─────────────────│ (Order)  │                            │
//! │  └──────────┘ return_to_entry()└──────────┘                            │
//! │     │   ▲                                                               │
//! │     │   │ add_product / adjust_quantity / remove_line                   │
//! │     └───┘ set_customer_name / set_size / set_crust                      │
//! │                                                                         │
//! │  submit() failing keeps the session in Entry with current_error set.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything runs on the caller's thread. Each call finishes before the
//! next one starts, so nothing here locks.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::cart::{Cart, CartEvent, OrderLine};
use crate::catalog::Catalog;
use crate::error::{CoreResult, ValidationError};
use crate::order::Order;
use crate::pricing::PricingResult;
use crate::types::{CrustType, PizzaSize, Product, ProductId};
use crate::validation::{OrderValidator, ValidationResult};

/// Callback invoked after every cart change.
pub type CartListener = Box<dyn FnMut(&CartEvent, &Cart)>;

/// Where the customer currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    /// Editing the order.
    Entry,
    /// Looking at the summary of a submitted order.
    Summary(Order),
}

/// One customer's order-entry session.
pub struct OrderSession {
    catalog: Catalog,
    cart: Cart,
    customer_name: String,
    size: Option<PizzaSize>,
    crust: CrustType,
    validator: OrderValidator,
    stage: Stage,
    listeners: Vec<CartListener>,
}

impl OrderSession {
    /// Starts a session with an empty cart, Medium size and Regular crust.
    pub fn new(catalog: Catalog) -> Self {
        OrderSession {
            catalog,
            cart: Cart::new(),
            customer_name: String::new(),
            size: Some(PizzaSize::Medium),
            crust: CrustType::default(),
            validator: OrderValidator::new(),
            stage: Stage::Entry,
            listeners: Vec::new(),
        }
    }

    // -------------------------------------------------------------------------
    // Observers
    // -------------------------------------------------------------------------

    /// Registers a callback that runs after each cart mutation.
    ///
    /// No-op mutations (removing an absent line) do not notify.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&CartEvent, &Cart) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn notify(&mut self, event: CartEvent) {
        for listener in &mut self.listeners {
            listener(&event, &self.cart);
        }
    }

    // -------------------------------------------------------------------------
    // Cart mutations
    // -------------------------------------------------------------------------

    pub fn add_product(&mut self, product: Arc<Product>) {
        debug!(product_id = %product.id, "add_product");
        let event = self.cart.add_product(product);
        self.notify(event);
    }

    /// Adds the catalog product with `id`.
    pub fn add_product_by_id(&mut self, id: ProductId) -> CoreResult<()> {
        let product = Arc::clone(self.catalog.get(id)?);
        self.add_product(product);
        Ok(())
    }

    /// Adds the catalog product called `name` (case-insensitive).
    pub fn add_product_by_name(&mut self, name: &str) -> CoreResult<()> {
        let product = Arc::clone(self.catalog.get_by_name(name)?);
        self.add_product(product);
        Ok(())
    }

    pub fn remove_line(&mut self, line: &OrderLine) {
        debug!(product_id = %line.product_id(), "remove_line");
        if let Some(event) = self.cart.remove_line(line) {
            self.notify(event);
        }
    }

    pub fn adjust_quantity(&mut self, line: &OrderLine, delta: i64) {
        debug!(product_id = %line.product_id(), delta, "adjust_quantity");
        if let Some(event) = self.cart.adjust_quantity(line, delta) {
            self.notify(event);
        }
    }

    // -------------------------------------------------------------------------
    // Form fields
    // -------------------------------------------------------------------------

    /// Updates the name field. Any shown error is cleared right away.
    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
        self.validator.clear();
    }

    /// `None` leaves the size unselected, which prices at 0.00.
    pub fn set_size(&mut self, size: Option<PizzaSize>) {
        debug!(?size, "set_size");
        self.size = size;
    }

    pub fn set_crust(&mut self, crust: CrustType) {
        debug!(?crust, "set_crust");
        self.crust = crust;
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn size(&self) -> Option<PizzaSize> {
        self.size
    }

    pub fn crust(&self) -> CrustType {
        self.crust
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// The error to display, if the last submission failed.
    pub fn current_error(&self) -> Option<ValidationError> {
        self.validator.current_error()
    }

    /// Recomputed on every call.
    pub fn pricing(&self) -> PricingResult {
        PricingResult::compute(self.cart.lines(), self.size)
    }

    pub fn total_units(&self) -> i64 {
        self.cart.total_units()
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Validates the form. Success moves to the summary stage; failure
    /// always lands back in `Entry`, dropping any earlier summary.
    pub fn submit(&mut self) -> ValidationResult<Order> {
        let result = self
            .validator
            .submit(&self.customer_name, self.size, self.crust, &self.cart);

        match &result {
            Ok(order) => {
                info!(
                    order_id = %order.id,
                    lines = order.lines.len(),
                    units = order.total_units(),
                    "order submitted"
                );
                self.stage = Stage::Summary(order.clone());
            }
            Err(err) => {
                warn!(error = %err, "order rejected");
                self.stage = Stage::Entry;
            }
        }

        result
    }

    /// Leaves the summary and goes back to editing. The cart is kept.
    pub fn return_to_entry(&mut self) {
        self.stage = Stage::Entry;
    }
}

impl fmt::Debug for OrderSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderSession")
            .field("cart", &self.cart)
            .field("customer_name", &self.customer_name)
            .field("size", &self.size)
            .field("crust", &self.crust)
            .field("error", &self.validator.current_error())
            .field("stage", &self.stage)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
