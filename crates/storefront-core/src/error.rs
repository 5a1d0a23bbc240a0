//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Cart and domain rule violations                │
//! │  └── ValidationError  - Malformed input (wrapped as InvalidArgument)   │
//! │                                                                         │
//! │  storefront-catalog errors (separate crate)                            │
//! │  └── CatalogError     - Catalog load/parse failures                    │
//! │                                                                         │
//! │  App errors                                                            │
//! │  └── ApiError         - What the client sees (serialized)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Client                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed cart operation never leaves a half-applied change behind: every
//! error below is raised before the cart is touched.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Input did not have the required shape (empty id, bad quantity, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    /// Product referenced by id does not exist in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product is marked as not in stock.
    ///
    /// Only raised when the cart policy enforces stock limits.
    #[error("Product {product_id} is out of stock")]
    OutOfStock { product_id: String },

    /// Requested quantity is above the product's stock count.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart shows: MacBook Pro ×12 (stock 12)
    ///      │
    ///      ▼
    /// Click "+"  → update_quantity("1", 13)
    ///      │
    ///      ▼
    /// InsufficientStock { product_id: "1", available: 12, requested: 13 }
    ///      │
    ///      ▼
    /// UI shows: "Only 12 left"
    /// ```
    #[error("Insufficient stock for {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: String,
        available: i64,
        requested: i64,
    },

    /// A line quantity, the cart's unit count or its total would not fit
    /// in an `i64`.
    #[error("Amount overflow while pricing {product_id}")]
    AmountOverflow { product_id: String },

    /// Subtotal plus delivery fee does not fit in the money representation.
    #[error("Delivery quote overflow for subtotal {subtotal_paise} paise")]
    QuoteOverflow { subtotal_paise: i64 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., the same product id twice).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
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
        let err = CoreError::InsufficientStock {
            product_id: "1".to_string(),
            available: 12,
            requested: 13,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for 1: available 12, requested 13"
        );

        let err = CoreError::OutOfStock {
            product_id: "6".to_string(),
        };
        assert_eq!(err.to_string(), "Product 6 is out of stock");

        let err = CoreError::QuoteOverflow {
            subtotal_paise: 100,
        };
        assert_eq!(err.to_string(), "Delivery quote overflow for subtotal 100 paise");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "product id".to_string(),
        };
        assert_eq!(err.to_string(), "product id is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_invalid_argument() {
        let validation_err = ValidationError::Required {
            field: "product id".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::InvalidArgument(_)));
        assert_eq!(
            core_err.to_string(),
            "Invalid argument: product id is required"
        );
    }
}
