//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │                        │
//! │  │  Cart    │     │          │     │ Summary  │                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │                        │                                                │
//! │                   add_to_cart                                           │
//! │                   update_cart_item                                      │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command answers with the full [`CartSummary`], so the client
//! redraws the cart page and header badge from one response.

use storefront_catalog::Catalog;
use storefront_core::validation::validate_product_id;
use storefront_core::{CartAction, CartSummary, CoreError, DeliveryPolicy};
use tracing::debug;

use crate::error::ApiError;
use crate::state::CartSession;

/// Gets the current cart contents.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart Page                                                              │
/// │                                                                         │
/// │  ┌────────────────────────────────────────────────────────────────┐    │
/// │  │  Shopping Cart                                     3 items     │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Sony WH-1000XM5 Headphones   x2            ₹599.80           │    │
/// │  │  Apple Watch Series 9         x1            ₹419.00           │    │
/// │  ├────────────────────────────────────────────────────────────────┤    │
/// │  │  Subtotal                                   ₹1018.80          │    │
/// │  │  Delivery                                   FREE              │    │
/// │  │  ──────────────────────────────────────────────────           │    │
/// │  │  Total                                      ₹1018.80          │    │
/// │  └────────────────────────────────────────────────────────────────┘    │
/// │                                                                         │
/// │  {"command":"get_cart"} → { items: [...], itemCount: 3, ... }          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(session: &CartSession, delivery: &DeliveryPolicy) -> Result<CartSummary, ApiError> {
    debug!("get_cart command");
    Ok(CartSummary::new(session.cart(), delivery)?)
}

/// Adds a product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases
/// - If product not in cart: added as a new line at the end
/// - Price is "frozen" at time of adding
///
/// ## Arguments
/// * `product_id` - Catalog id to add
/// * `quantity` - Units to add (default: 1)
///
/// ## Errors
/// - `VALIDATION_ERROR` for a blank id, checked before the catalog lookup
/// - `NOT_FOUND` if the catalog has no such product
///
/// ## Returns
/// Updated cart summary
pub fn add_to_cart(
    catalog: &Catalog,
    session: &mut CartSession,
    delivery: &DeliveryPolicy,
    product_id: &str,
    quantity: Option<i64>,
) -> Result<CartSummary, ApiError> {
    debug!(product_id = %product_id, ?quantity, "add_to_cart command");

    validate_product_id(product_id).map_err(CoreError::from)?;
    let product = catalog.require(product_id)?.clone();
    let action = match quantity {
        None => CartAction::Add { product },
        Some(quantity) => CartAction::AddMany { product, quantity },
    };

    Ok(session.dispatch(&action, delivery)?)
}

/// Sets the quantity of an item in the cart.
///
/// ## Behavior
/// - Quantity 0 or below: removes the item
/// - Product not in cart: nothing changes
///
/// ## Returns
/// Updated cart summary
pub fn update_cart_item(
    session: &mut CartSession,
    delivery: &DeliveryPolicy,
    product_id: &str,
    quantity: i64,
) -> Result<CartSummary, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    let action = CartAction::UpdateQuantity {
        product_id: product_id.to_string(),
        quantity,
    };
    Ok(session.dispatch(&action, delivery)?)
}

/// Removes an item from the cart. Removing an absent product is a no-op.
pub fn remove_from_cart(
    session: &mut CartSession,
    delivery: &DeliveryPolicy,
    product_id: &str,
) -> Result<CartSummary, ApiError> {
    debug!(product_id = %product_id, "remove_from_cart command");

    let action = CartAction::Remove {
        product_id: product_id.to_string(),
    };
    Ok(session.dispatch(&action, delivery)?)
}

/// Clears all items from the cart.
///
/// ## When Used
/// - User empties the cart
/// - After checkout completes
pub fn clear_cart(
    session: &mut CartSession,
    delivery: &DeliveryPolicy,
) -> Result<CartSummary, ApiError> {
    debug!("clear_cart command");

    Ok(session.dispatch(&CartAction::Clear, delivery)?)
}
