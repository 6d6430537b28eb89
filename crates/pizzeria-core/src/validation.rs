//! # Validation Module
//!
//! Submission checks that gate the move from order entry to the summary.
//!
//! ## Validation Chain
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Submit Pressed                                     │
//! │                           │                                             │
//! │                           ▼                                             │
//! │  1. customer name trimmed empty? ──► EmptyName  (stop here)            │
//! │                           │                                             │
//! │                           ▼                                             │
//! │  2. cart has no lines? ───────────► EmptyCart                          │
//! │                           │                                             │
//! │                           ▼                                             │
//! │  clear error, build Order ────────► summary stage                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Exactly one error is held at a time. A failed check never touches the
//! cart.
//!
//! ## Usage
//! ```rust
//! use pizzeria_core::validation::{validate_customer_name, OrderValidator};
//! use pizzeria_core::{Cart, CrustType, ValidationError};
//!
//! assert!(validate_customer_name("Ana").is_ok());
//!
//! let mut validator = OrderValidator::new();
//! let result = validator.submit("Ana", None, CrustType::Regular, &Cart::new());
//! assert_eq!(result.unwrap_err(), ValidationError::EmptyCart);
//! assert_eq!(validator.current_error(), Some(ValidationError::EmptyCart));
//! ```

use crate::cart::Cart;
use crate::error::ValidationError;
use crate::order::Order;
use crate::types::{CrustType, PizzaSize};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Individual Checks
// =============================================================================

/// The customer name must contain something other than whitespace.
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

/// The cart must have at least one line.
pub fn validate_cart(cart: &Cart) -> ValidationResult<()> {
    if cart.is_empty() {
        return Err(ValidationError::EmptyCart);
    }
    Ok(())
}

/// Runs both checks in order and reports the first failure.
pub fn validate_order(name: &str, cart: &Cart) -> ValidationResult<()> {
    validate_customer_name(name)?;
    validate_cart(cart)
}

// =============================================================================
// Order Validator
// =============================================================================

/// Holds the error currently shown to the customer, if any.
#[derive(Debug, Clone, Default)]
pub struct OrderValidator {
    error: Option<ValidationError>,
}

impl OrderValidator {
    pub fn new() -> Self {
        OrderValidator::default()
    }

    /// Validates a submission attempt and builds the order on success.
    ///
    /// Success clears the current error; failure replaces it with the first
    /// failing check.
    pub fn submit(
        &mut self,
        customer_name: &str,
        size: Option<PizzaSize>,
        crust: CrustType,
        cart: &Cart,
    ) -> ValidationResult<Order> {
        match validate_order(customer_name, cart) {
            Ok(()) => {
                self.error = None;
                Ok(Order::from_snapshot(customer_name, size, crust, cart))
            }
            Err(err) => {
                self.error = Some(err);
                Err(err)
            }
        }
    }

    pub fn current_error(&self) -> Option<ValidationError> {
        self.error
    }

    /// Drops the shown error without re-running any check.
    pub fn clear(&mut self) {
        self.error = None;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Product;
    use std::sync::Arc;

    fn ham() -> Arc<Product> {
        Arc::new(Product::new(1, "Ham", Money::from_cents(100)))
    }

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Ana").is_ok());
        assert!(validate_customer_name("  Ana  ").is_ok());
        assert_eq!(validate_customer_name(""), Err(ValidationError::EmptyName));
        assert_eq!(validate_customer_name(" \t\n"), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_validate_cart() {
        let mut cart = Cart::new();
        assert_eq!(validate_cart(&cart), Err(ValidationError::EmptyCart));
        cart.add_product(ham());
        assert!(validate_cart(&cart).is_ok());
    }

    #[test]
    fn test_name_checked_before_cart() {
        assert_eq!(
            validate_order("   ", &Cart::new()),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn test_submit_failure_sets_single_error() {
        let mut validator = OrderValidator::new();
        let cart = Cart::new();

        let _ = validator.submit("", None, CrustType::Regular, &cart);
        assert_eq!(validator.current_error(), Some(ValidationError::EmptyName));

        let _ = validator.submit("Ana", None, CrustType::Regular, &cart);
        assert_eq!(validator.current_error(), Some(ValidationError::EmptyCart));
    }

    #[test]
    fn test_submit_success_clears_error_and_snapshots_cart() {
        let mut validator = OrderValidator::new();
        let mut cart = Cart::new();
        let _ = validator.submit("Ana", None, CrustType::Thin, &cart);

        cart.add_product(ham());
        let order = validator
            .submit(" Ana ", Some(PizzaSize::Small), CrustType::Thin, &cart)
            .unwrap();

        assert_eq!(validator.current_error(), None);
        assert_eq!(order.customer_name, "Ana");
        assert_eq!(order.size, Some(PizzaSize::Small));
        assert_eq!(order.crust, CrustType::Thin);
        assert_eq!(order.lines, cart.lines().to_vec());

        // later cart changes do not leak into the submitted order
        cart.add_product(ham());
        assert_eq!(order.lines[0].quantity(), 1);
    }

    #[test]
    fn test_failed_submit_leaves_cart_untouched() {
        let mut validator = OrderValidator::new();
        let mut cart = Cart::new();
        cart.add_product(ham());
        let before = cart.clone();

        assert!(validator.submit("", None, CrustType::Regular, &cart).is_err());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear() {
        let mut validator = OrderValidator::new();
        let _ = validator.submit("", None, CrustType::Regular, &Cart::new());
        validator.clear();
        assert_eq!(validator.current_error(), None);
    }
}
