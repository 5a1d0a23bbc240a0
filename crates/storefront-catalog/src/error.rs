//! # Catalog Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error / ValidationError                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module) ← Adds the offending product id            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in the app) ← Serialized for the client                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use storefront_core::ValidationError;
use thiserror::Error;

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog JSON is malformed or has the wrong shape.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share a product id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateId(String),

    /// A record breaks a product rule (empty name, negative price, ...).
    #[error("Invalid product '{id}': {source}")]
    InvalidProduct {
        id: String,
        #[source]
        source: ValidationError,
    },
}

/// Convenience type alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::DuplicateId("3".to_string());
        assert_eq!(err.to_string(), "Duplicate product id in catalog: 3");

        let err = CatalogError::InvalidProduct {
            id: "7".to_string(),
            source: ValidationError::Required {
                field: "name".to_string(),
            },
        };
        assert_eq!(err.to_string(), "Invalid product '7': name is required");
    }
}
