//! # Validation Module
//!
//! Input validation for cart commands and catalog records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end                                                    │
//! │  ├── Disables "Add to Cart" on sold-out products                       │
//! │  └── Quantity stepper never goes below 1                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command decoding (serde)                                     │
//! │  └── Types: quantity is an integer, id is a string                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE                                                  │
//! │  └── Shape rules: id format, name length, price/rating ranges          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_product_id, validate_add_quantity};
//!
//! assert!(validate_product_id("1").is_ok());
//! assert!(validate_add_quantity(3).is_ok());
//! assert!(validate_add_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted product id.
pub const MAX_PRODUCT_ID_LEN: usize = 64;

/// Longest accepted product name.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product id.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 64 characters
/// - Only letters, digits, hyphens and underscores
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_product_id;
///
/// assert!(validate_product_id("macbook-pro-16").is_ok());
/// assert!(validate_product_id("").is_err());
/// assert!(validate_product_id("has space").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    if id.len() > MAX_PRODUCT_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "product id".to_string(),
            max: MAX_PRODUCT_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "product id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name: non-empty after trimming, at most 200 characters.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity passed to a bulk add.
///
/// Unlike `update_quantity`, where zero or less means "remove", adding
/// zero units is a caller mistake.
pub fn validate_add_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price. Zero is allowed (free items), negative is not.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a rating in the 0.0 to 5.0 range.
pub fn validate_rating(rating: f64) -> ValidationResult<()> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: 5,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("1").is_ok());
        assert!(validate_product_id("SKU_42-b").is_ok());

        assert!(matches!(
            validate_product_id("   "),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_product_id(&"9".repeat(65)),
            Err(ValidationError::TooLong { .. })
        ));
        assert!(matches!(
            validate_product_id("a/b"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("iPad Pro 12.9\" M2").is_ok());
        assert!(validate_product_name(" ").is_err());
        assert!(validate_product_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_add_quantity() {
        assert!(validate_add_quantity(1).is_ok());
        assert!(validate_add_quantity(1_000).is_ok());
        assert!(validate_add_quantity(0).is_err());
        assert!(validate_add_quantity(-3).is_err());
    }

    #[test]
    fn test_validate_price_and_rating() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_paise(-1)).is_err());

        assert!(validate_rating(0.0).is_ok());
        assert!(validate_rating(5.0).is_ok());
        assert!(validate_rating(-0.1).is_err());
        assert!(validate_rating(f64::NAN).is_err());
    }
}
