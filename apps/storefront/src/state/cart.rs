//! # Cart Session
//!
//! Owns the one cart of a storefront session.
//!
//! ## Ownership
//! The session is the cart's only owner. Command handlers borrow it
//! mutably for the length of one command, so there is no shared global cart
//! and no lock.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Session Operations                              │
//! │                                                                         │
//! │  Client Command           Handler                 Cart Change           │
//! │  ──────────────           ───────                 ───────────           │
//! │                                                                         │
//! │  add_to_cart ───────────► add_to_cart() ────────► CartAction::Add      │
//! │                                                                         │
//! │  update_cart_item ──────► update_cart_item() ───► CartAction::Update…  │
//! │                                                                         │
//! │  remove_from_cart ──────► remove_from_cart() ───► CartAction::Remove   │
//! │                                                                         │
//! │  clear_cart ────────────► clear_cart() ─────────► CartAction::Clear    │
//! │                                                                         │
//! │  get_cart ──────────────► get_cart() ───────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use storefront_core::{
    CartAction, CartPolicy, CartState, CartSummary, CoreResult, DeliveryPolicy,
};
use tracing::debug;

/// A shopping session: the cart plus the rules it runs under.
#[derive(Debug, Clone)]
pub struct CartSession {
    cart: CartState,
    policy: CartPolicy,
    started_at: DateTime<Utc>,
}

impl CartSession {
    /// Starts a session with an empty cart.
    pub fn new(policy: CartPolicy) -> Self {
        CartSession {
            cart: CartState::new(),
            policy,
            started_at: Utc::now(),
        }
    }

    /// Read access to the cart.
    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    /// When the session (and its cart) started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Runs an action through the cart reducer and keeps the result.
    ///
    /// The summary is priced before the new cart is kept, so on any error
    /// (reducer or delivery quote) the current cart stays as it was.
    pub fn dispatch(
        &mut self,
        action: &CartAction,
        delivery: &DeliveryPolicy,
    ) -> CoreResult<CartSummary> {
        let next = self.cart.apply(action, &self.policy)?;
        let summary = CartSummary::new(&next, delivery)?;
        self.cart = next;
        debug!(
            item_count = summary.item_count,
            total = %summary.delivery.total,
            "Cart updated"
        );
        Ok(summary)
    }
}

impl Default for CartSession {
    fn default() -> Self {
        Self::new(CartPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{CoreError, Money, Product};

    fn watch() -> Product {
        Product::new("6", "Apple Watch Series 9", Money::from_paise(41_900), "Wearables")
            .with_stock_count(0)
    }

    #[test]
    fn test_dispatch_keeps_result() {
        let mut session = CartSession::default();
        let product = Product::new("3", "Headphones", Money::from_paise(29_990), "Audio");

        session
            .dispatch(
                &CartAction::AddMany {
                    product,
                    quantity: 2,
                },
                &DeliveryPolicy::default(),
            )
            .unwrap();
        assert_eq!(session.cart().item_count(), 2);
        assert_eq!(session.cart().total(), Money::from_paise(59_980));
    }

    #[test]
    fn test_failed_dispatch_leaves_cart() {
        let mut session = CartSession::new(CartPolicy::enforcing_stock());
        let err = session
            .dispatch(&CartAction::Add { product: watch() }, &DeliveryPolicy::default())
            .unwrap_err();

        assert!(matches!(err, CoreError::OutOfStock { .. }));
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_sessions_do_not_share_carts() {
        let mut first = CartSession::default();
        let second = CartSession::default();

        first
            .dispatch(&CartAction::Add { product: watch() }, &DeliveryPolicy::default())
            .unwrap();
        assert_eq!(first.cart().item_count(), 1);
        assert!(second.cart().is_empty());
    }

    #[test]
    fn test_unpriceable_cart_is_not_kept() {
        let delivery = DeliveryPolicy {
            free_delivery_threshold: Money::from_paise(i64::MAX),
            delivery_fee: Money::from_paise(999),
        };
        let mut session = CartSession::default();
        let cheap = Product::new("a", "Cable", Money::from_paise(1), "Accessories");
        session
            .dispatch(&CartAction::Add { product: cheap }, &delivery)
            .unwrap();

        let err = session
            .dispatch(
                &CartAction::UpdateQuantity {
                    product_id: "a".to_string(),
                    quantity: i64::MAX - 1,
                },
                &delivery,
            )
            .unwrap_err();

        assert!(matches!(err, CoreError::QuoteOverflow { .. }));
        assert_eq!(session.cart().item_count(), 1);
    }
}
