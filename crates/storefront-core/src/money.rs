//! # Money Module
//!
//! Prices, line totals and delivery figures as whole paise.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog JSON           Money                 Display (logs only)       │
//! │  ────────────           ─────                 ───────────────────       │
//! │  "price": 239900  ───►  Money(239900)  ───►   ₹2399.00                  │
//! │                                                                         │
//! │  Line totals and the cart total are integer sums, so a cart of any     │
//! │  size totals to the exact paisa. Overflow is reported, never wrapped.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_paise(29_990); // ₹299.90
//! assert_eq!(price.checked_mul_quantity(2), Some(Money::from_paise(59_980)));
//!
//! // Overflow-aware arithmetic for cart totals
//! assert!(Money::from_paise(i64::MAX).checked_add(price).is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (paise for INR).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for differences (savings, shortfalls)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Newtype serde**: Serialized as a bare integer, matching catalog JSON
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.price ──┬──► CartLineItem.line_total ──► CartState.total       │
/// │                  │                                      │               │
/// │                  └──► shown as "₹2,399.00" in UI        ▼               │
/// │                                                  DeliveryQuote.total    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_paise(1099); // ₹10.99
    /// assert_eq!(price.paise(), 1099);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Returns the value in paise (smallest currency unit).
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_paise(1099).rupees(), 10);
    /// assert_eq!(Money::from_paise(-550).rupees(), -5);
    /// ```
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// The product must fit in an `i64`. Callers that have not already checked
    /// it with [`Money::checked_mul_quantity`] should use that instead.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Multiplies money by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit = Money::from_paise(29_990);
    /// assert_eq!(unit.checked_mul_quantity(3), Some(Money::from_paise(89_970)));
    /// assert_eq!(unit.checked_mul_quantity(i64::MAX), None);
    /// ```
    #[inline]
    pub fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(qty).map(Money)
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtracts `other`, returning `None` on overflow.
    #[inline]
    pub fn checked_sub(&self, other: Money) -> Option<Self> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Expresses `part` as basis points of `self`, rounding half up.
    ///
    /// Returns `None` when `self` is not positive.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let original = Money::from_paise(34_990);
    /// let savings = Money::from_paise(5_000);
    /// assert_eq!(original.bps_of(savings), Some(1429)); // 14.29%
    /// ```
    pub fn bps_of(&self, part: Money) -> Option<u32> {
        if self.0 <= 0 {
            return None;
        }
        // i128 keeps part * 10000 from overflowing
        let whole = self.0 as i128;
        let bps = (part.0 as i128 * 10_000 + whole / 2) / whole;
        u32::try_from(bps).ok()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `₹rupees.paise`.
///
/// ## Note
/// This is for logs and debugging. Locale-aware formatting (lakh grouping,
/// fraction suppression) belongs to the front end.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}₹{}.{:02}",
            sign,
            self.rupees().abs(),
            self.paise_part()
        )
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(1099);
        assert_eq!(money.paise(), 1099);
        assert_eq!(money.rupees(), 10);
        assert_eq!(money.paise_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_paise(1099).to_string(), "₹10.99");
        assert_eq!(Money::from_paise(500).to_string(), "₹5.00");
        assert_eq!(Money::from_paise(-550).to_string(), "-₹5.50");
        assert_eq!(Money::zero().to_string(), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!(a.multiply_quantity(3).paise(), 3000);

        let total: Money = [a, b, b].into_iter().sum();
        assert_eq!(total.paise(), 2000);
    }

    #[test]
    fn test_checked_arithmetic() {
        let max = Money::from_paise(i64::MAX);
        assert!(max.checked_add(Money::from_paise(1)).is_none());
        assert!(max.checked_mul_quantity(2).is_none());
        assert!(Money::from_paise(i64::MIN).checked_sub(Money::from_paise(1)).is_none());
        assert_eq!(
            Money::from_paise(99_900).checked_sub(Money::from_paise(80_000)),
            Some(Money::from_paise(19_900))
        );
        assert_eq!(
            Money::from_paise(250).checked_mul_quantity(4),
            Some(Money::from_paise(1000))
        );
    }

    #[test]
    fn test_bps_of() {
        let original = Money::from_paise(259_900);
        let savings = Money::from_paise(20_000);
        // 20000 / 259900 = 7.695% → 770 bps
        assert_eq!(original.bps_of(savings), Some(770));
        assert_eq!(Money::zero().bps_of(savings), None);
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_negative());
        assert!(Money::from_paise(-1).is_negative());
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&Money::from_paise(99_900)).unwrap();
        assert_eq!(json, "99900");
        let back: Money = serde_json::from_str("999").unwrap();
        assert_eq!(back, Money::from_paise(999));
    }
}
