//! # Delivery Pricing
//!
//! Turns a cart subtotal into the order summary shown at checkout.
//!
//! ## Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  subtotal >= threshold (₹999.00)  →  delivery free                      │
//! │  subtotal <  threshold            →  flat fee (₹9.99)                   │
//! │                                                                         │
//! │  total = subtotal + delivery fee                                        │
//! │                                                                         │
//! │  Below the threshold the summary also says how much more is needed:    │
//! │    "Add ₹199.00 more for free delivery"                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartState;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::{DELIVERY_FEE_PAISE, FREE_DELIVERY_THRESHOLD_PAISE};

/// Free-delivery threshold and flat fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPolicy {
    pub free_delivery_threshold: Money,
    pub delivery_fee: Money,
}

impl Default for DeliveryPolicy {
    /// ₹999.00 threshold, ₹9.99 fee.
    fn default() -> Self {
        DeliveryPolicy {
            free_delivery_threshold: Money::from_paise(FREE_DELIVERY_THRESHOLD_PAISE),
            delivery_fee: Money::from_paise(DELIVERY_FEE_PAISE),
        }
    }
}

impl DeliveryPolicy {
    /// Delivery fee for a subtotal.
    pub fn fee_for(&self, subtotal: Money) -> Money {
        if subtotal >= self.free_delivery_threshold {
            Money::zero()
        } else {
            self.delivery_fee
        }
    }

    /// Prices a subtotal.
    ///
    /// ## Errors
    /// - `QuoteOverflow` if the total or the amount still needed for free
    ///   delivery does not fit in an `i64`
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{DeliveryPolicy, Money};
    ///
    /// let quote = DeliveryPolicy::default()
    ///     .quote_subtotal(Money::from_paise(80_000))
    ///     .unwrap();
    /// assert_eq!(quote.delivery_fee, Money::from_paise(999));
    /// assert_eq!(quote.total, Money::from_paise(80_999));
    /// assert_eq!(quote.amount_to_free_delivery, Some(Money::from_paise(19_900)));
    /// ```
    pub fn quote_subtotal(&self, subtotal: Money) -> CoreResult<DeliveryQuote> {
        let overflow = || CoreError::QuoteOverflow {
            subtotal_paise: subtotal.paise(),
        };

        let delivery_fee = self.fee_for(subtotal);
        let amount_to_free_delivery = if delivery_fee.is_zero() {
            None
        } else {
            Some(
                self.free_delivery_threshold
                    .checked_sub(subtotal)
                    .ok_or_else(overflow)?,
            )
        };
        let total = subtotal.checked_add(delivery_fee).ok_or_else(overflow)?;

        Ok(DeliveryQuote {
            subtotal,
            delivery_fee,
            total,
            amount_to_free_delivery,
        })
    }

    /// Prices a cart.
    pub fn quote(&self, cart: &CartState) -> CoreResult<DeliveryQuote> {
        self.quote_subtotal(cart.total())
    }
}

/// Order summary figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DeliveryQuote {
    pub subtotal: Money,
    /// Zero when delivery is free.
    pub delivery_fee: Money,
    /// Subtotal plus delivery fee.
    pub total: Money,
    /// Still needed to reach free delivery; `None` once reached.
    pub amount_to_free_delivery: Option<Money>,
}

impl DeliveryQuote {
    pub fn is_free_delivery(&self) -> bool {
        self.delivery_fee.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartPolicy;
    use crate::types::Product;

    #[test]
    fn test_fee_below_threshold() {
        let quote = DeliveryPolicy::default()
            .quote_subtotal(Money::from_paise(80_000))
            .unwrap();
        assert_eq!(quote.delivery_fee.paise(), 999);
        assert_eq!(quote.total.paise(), 80_999);
        assert!(!quote.is_free_delivery());
    }

    #[test]
    fn test_free_at_and_above_threshold() {
        let policy = DeliveryPolicy::default();
        for subtotal in [99_900, 99_901, 239_900] {
            let quote = policy.quote_subtotal(Money::from_paise(subtotal)).unwrap();
            assert!(quote.is_free_delivery());
            assert_eq!(quote.total.paise(), subtotal);
            assert_eq!(quote.amount_to_free_delivery, None);
        }

        let just_below = policy.quote_subtotal(Money::from_paise(99_899)).unwrap();
        assert_eq!(just_below.amount_to_free_delivery, Some(Money::from_paise(1)));
    }

    #[test]
    fn test_empty_cart_pays_fee() {
        let quote = DeliveryPolicy::default().quote(&CartState::new()).unwrap();
        assert_eq!(quote.subtotal, Money::zero());
        assert_eq!(quote.delivery_fee.paise(), 999);
    }

    #[test]
    fn test_custom_policy_from_cart() {
        let policy = DeliveryPolicy {
            free_delivery_threshold: Money::from_paise(500),
            delivery_fee: Money::from_paise(50),
        };
        let mut cart = CartState::new();
        let pen = Product::new("pen", "Pen", Money::from_paise(250), "Stationery");
        cart.add_item(&pen, &CartPolicy::default()).unwrap();
        assert_eq!(policy.quote(&cart).unwrap().total.paise(), 300);

        cart.add_item(&pen, &CartPolicy::default()).unwrap();
        assert_eq!(policy.quote(&cart).unwrap().total.paise(), 500);
    }

    #[test]
    fn test_quote_overflow_at_max_threshold() {
        let policy = DeliveryPolicy {
            free_delivery_threshold: Money::from_paise(i64::MAX),
            delivery_fee: Money::from_paise(999),
        };

        let result = policy.quote_subtotal(Money::from_paise(i64::MAX - 1));
        assert!(matches!(
            result,
            Err(CoreError::QuoteOverflow { subtotal_paise }) if subtotal_paise == i64::MAX - 1
        ));

        // At the threshold delivery is free, so the subtotal itself is the total
        let at_max = policy.quote_subtotal(Money::from_paise(i64::MAX)).unwrap();
        assert_eq!(at_max.total.paise(), i64::MAX);
        assert!(at_max.is_free_delivery());

        let fits = policy
            .quote_subtotal(Money::from_paise(i64::MAX - 999))
            .unwrap();
        assert_eq!(fits.total.paise(), i64::MAX);
        assert_eq!(fits.amount_to_free_delivery, Some(Money::from_paise(999)));
    }

    #[test]
    fn test_quote_overflow_on_negative_threshold_gap() {
        let policy = DeliveryPolicy {
            free_delivery_threshold: Money::from_paise(i64::MAX),
            delivery_fee: Money::from_paise(1),
        };
        assert!(matches!(
            policy.quote_subtotal(Money::from_paise(-2)),
            Err(CoreError::QuoteOverflow { .. })
        ));
    }
}
