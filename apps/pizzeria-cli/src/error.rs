//! # CLI Error Type
//!
//! Unified error type for CLI commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command function                                                       │
//! │  Result<String, AppError>                                               │
//! │         │                                                               │
//! │         ├── ValidationError ──► VALIDATION_ERROR, exit 2               │
//! │         ├── CoreError ────────► NOT_FOUND / INVALID_INPUT, exit 1      │
//! │         └── serde_json::Error ► INTERNAL, exit 1                       │
//! │                                                                         │
//! │  main() prints "error[CODE]: message" to stderr                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use pizzeria_core::{CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Error returned from CLI commands.
///
/// ## Serialization
/// With `--json` this is what is printed when a command fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Customer name cannot be empty"
/// }
/// ```
#[derive(Debug, Clone, Error, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("error[{code:?}]: {message}")]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable message
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Submission rejected: empty name or empty cart
    ValidationError,

    /// Unknown product
    NotFound,

    /// Unparseable size or crust
    InvalidInput,

    Internal,
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.code {
            ErrorCode::ValidationError => 2,
            _ => 1,
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::new(ErrorCode::ValidationError, err.to_string())
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(_) | CoreError::ProductNameNotFound(_) => {
                AppError::new(ErrorCode::NotFound, err.to_string())
            }
            CoreError::UnknownSize(_) | CoreError::UnknownCrust(_) => {
                AppError::new(ErrorCode::InvalidInput, err.to_string())
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON serialization failed: {}", err);
        AppError::new(ErrorCode::Internal, "Could not serialize output")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizzeria_core::ProductId;

    #[test]
    fn test_validation_maps_to_exit_code_two() {
        let err: AppError = ValidationError::EmptyName.into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.exit_code(), 2);
        assert_eq!(
            err.to_string(),
            "error[ValidationError]: Customer name cannot be empty"
        );
    }

    #[test]
    fn test_core_error_mapping() {
        let err: AppError = CoreError::ProductNotFound(ProductId(9)).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.exit_code(), 1);

        let err: AppError = CoreError::UnknownSize("xl".into()).into();
        assert_eq!(err.code, ErrorCode::InvalidInput);

        let err: AppError = CoreError::Validation(ValidationError::EmptyCart).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_serializes_code_in_screaming_case() {
        let err: AppError = ValidationError::EmptyCart.into();
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }
}
