//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront Host                    │
//! │                                                                         │
//! │  Client                      Rust Host                                  │
//! │  ──────                      ─────────                                  │
//! │                                                                         │
//! │  {"command":"add_to_cart","productId":"42"}                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Request parsing                                                 │  │
//! │  │  Malformed? ──── serde_json::Error ──────────────────┐          │  │
//! │  │         │                                            │          │  │
//! │  │         ▼                                            ▼          │  │
//! │  │  Command Function                                               │  │
//! │  │  Result<T, ApiError>                                            │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Catalog lookup? ── CoreError::ProductNotFound ──── ApiError ──►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Cart rule? ─────── CoreError::InsufficientStock ─── ApiError ─►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  {"ok":false,"error":{"code":"NOT_FOUND",                               │
//! │                       "message":"Product not found: 42"}}               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_catalog::CatalogError;
use storefront_core::CoreError;
use thiserror::Error;

use crate::state::ConfigError;

/// API error returned from storefront commands.
///
/// ## Serialization
/// This is what the client receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in a Front End
/// ```typescript
/// const reply = JSON.parse(line);
/// if (!reply.ok) {
///   switch (reply.error.code) {
///     case 'INSUFFICIENT_STOCK':
///       showToast(reply.error.message);
///       break;
///     case 'NOT_FOUND':
///       navigate('/products');
///       break;
///     default:
///       showError('Something went wrong');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product id unknown to the catalog
    NotFound,

    /// Argument failed validation (bad id, non-positive quantity)
    ValidationError,

    /// Stock policy refused the change
    InsufficientStock,

    /// Cart could not represent the result (amount overflow)
    CartError,

    /// Request line was not a valid command
    BadRequest,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a bad request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::BadRequest, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::InvalidArgument(e) => ApiError::validation(e.to_string()),
            err @ (CoreError::OutOfStock { .. } | CoreError::InsufficientStock { .. }) => {
                ApiError::new(ErrorCode::InsufficientStock, err.to_string())
            }
            err @ (CoreError::AmountOverflow { .. } | CoreError::QuoteOverflow { .. }) => {
                tracing::warn!("Cart amount overflow: {}", err);
                ApiError::new(ErrorCode::CartError, err.to_string())
            }
        }
    }
}

/// Malformed request lines.
impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::bad_request(format!("Invalid request: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Failures that stop the host before or while it serves requests.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ValidationError;

    #[test]
    fn test_core_error_codes() {
        let err = ApiError::from(CoreError::ProductNotFound("42".to_string()));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Product not found: 42");

        let err = ApiError::from(CoreError::InsufficientStock {
            product_id: "1".to_string(),
            available: 12,
            requested: 13,
        });
        assert_eq!(err.code, ErrorCode::InsufficientStock);
        assert_eq!(err.message, "Insufficient stock for 1: available 12, requested 13");

        let err = ApiError::from(CoreError::OutOfStock {
            product_id: "6".to_string(),
        });
        assert_eq!(err.code, ErrorCode::InsufficientStock);

        let err = ApiError::from(CoreError::InvalidArgument(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        }));
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = ApiError::from(CoreError::AmountOverflow {
            product_id: "1".to_string(),
        });
        assert_eq!(err.code, ErrorCode::CartError);

        let err = ApiError::from(CoreError::QuoteOverflow {
            subtotal_paise: i64::MAX - 1,
        });
        assert_eq!(err.code, ErrorCode::CartError);
        assert!(err.message.starts_with("Delivery quote overflow"));
    }

    #[test]
    fn test_parse_codes() {
        let parse = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let err = ApiError::from(parse);
        assert_eq!(err.code, ErrorCode::BadRequest);
        assert!(err.message.starts_with("Invalid request: "));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::not_found("Product", "7")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "NOT_FOUND", "message": "Product not found: 7" })
        );
    }
}
