//! # storefront-core: Pure Business Logic for the Storefront
//!
//! This crate is the **heart** of the storefront. It contains the cart
//! aggregate and every price calculation as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Storefront UI (web front end)                   │   │
//! │  │   Product Grid ──► Product Detail ──► Cart ──► Checkout         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON commands                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  apps/storefront (commands)                     │   │
//! │  │    list_products, add_to_cart, update_cart_item, get_cart       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  pricing  │  │   │
//! │  │   │  Product  │  │   Money   │  │ CartState │  │ Delivery  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Availability, RatingStars)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The cart aggregate and its reducer
//! - [`pricing`] - Delivery fee policy and checkout quote
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{CartPolicy, CartState, DeliveryPolicy, Money, Product};
//!
//! let laptop = Product::new("1", "Laptop", Money::from_paise(80_000), "Laptops");
//! let policy = CartPolicy::default();
//!
//! let mut cart = CartState::new();
//! cart.add_item(&laptop, &policy).unwrap();
//!
//! let quote = DeliveryPolicy::default().quote(&cart).unwrap();
//! assert_eq!(quote.delivery_fee.paise(), 999);
//! assert_eq!(quote.total.paise(), 80_999);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartAction, CartLineItem, CartPolicy, CartState, CartSummary};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{DeliveryPolicy, DeliveryQuote};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Subtotal at or above which delivery is free: ₹999.00.
pub const FREE_DELIVERY_THRESHOLD_PAISE: i64 = 99_900;

/// Flat delivery fee charged below the free-delivery threshold: ₹9.99.
pub const DELIVERY_FEE_PAISE: i64 = 999;

/// Stock level at or below which a product is flagged as running low.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Number of related products shown on a product page.
pub const RELATED_PRODUCTS_LIMIT: usize = 4;
