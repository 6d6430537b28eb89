//! # Error Types
//!
//! Domain-specific error types for pizzeria-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pizzeria-core errors (this file)                                      │
//! │  ├── CoreError        - Lookups and parsing at the session boundary    │
//! │  └── ValidationError  - Submission checks (empty name, empty cart)     │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── AppError         - What the user sees (code + message)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → terminal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart operations themselves are total and have no error type: adding,
//! removing and adjusting always succeed.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised when the outside world hands the core something it
/// cannot resolve.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product id does not exist in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Product name does not exist in the catalog.
    #[error("Product not found: {0}")]
    ProductNameNotFound(String),

    #[error("Unknown pizza size: {0}")]
    UnknownSize(String),

    #[error("Unknown crust type: {0}")]
    UnknownCrust(String),

    /// Submission was rejected (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Submission failures. Both are expected, user-correctable conditions.
///
/// Only one is ever reported at a time: the name check runs first, so a
/// blank name with an empty cart reports `EmptyName`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// Customer name missing or blank.
    #[error("Customer name cannot be empty")]
    EmptyName,

    /// No order lines present.
    #[error("Add at least one ingredient to the order")]
    EmptyCart,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound(ProductId(42));
        assert_eq!(err.to_string(), "Product not found: 42");

        let err = CoreError::UnknownSize("family".to_string());
        assert_eq!(err.to_string(), "Unknown pizza size: family");
    }

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(
            ValidationError::EmptyName.to_string(),
            "Customer name cannot be empty"
        );
        assert_eq!(
            ValidationError::EmptyCart.to_string(),
            "Add at least one ingredient to the order"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::EmptyCart.into();
        assert!(matches!(
            core_err,
            CoreError::Validation(ValidationError::EmptyCart)
        ));
    }
}
