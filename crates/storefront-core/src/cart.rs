//! # Cart Aggregate
//!
//! The shopping cart: an ordered list of line items plus the totals derived
//! from it.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action              Operation                 State Change          │
//! │  ─────────              ─────────                 ────────────          │
//! │                                                                         │
//! │  "Add to Cart" ───────► add_item(product) ──────► qty += 1 or push     │
//! │                                                                         │
//! │  Detail page ×N ──────► add_items(product, n) ──► qty += n or push     │
//! │                                                                         │
//! │  "−" / "+" stepper ───► update_quantity(id, n) ─► qty = n (n ≤ 0: drop) │
//! │                                                                         │
//! │  "Remove" ────────────► remove_item(id) ────────► drop line (or no-op)  │
//! │                                                                         │
//! │  After checkout ──────► clear() ────────────────► items.clear()         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id; adding again increments the quantity
//! - Every line has quantity >= 1
//! - `item_count()` and `total()` are computed from the lines, never stored
//! - The total always fits in [`Money`]
//!
//! Every operation checks its input before touching the lines, so a failed
//! call leaves the cart exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::pricing::{DeliveryPolicy, DeliveryQuote};
use crate::types::Product;
use crate::validation::{validate_add_quantity, validate_product_id};

// =============================================================================
// Cart Policy
// =============================================================================

/// Rules the cart enforces beyond its structural invariants.
///
/// ## Stock Limits
/// The storefront only disables the "Add to Cart" button for sold-out
/// products; the cart itself accepts any quantity. Turning on
/// `enforce_stock_limit` makes the cart reject sold-out products and
/// quantities above the product's `stock_count`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartPolicy {
    pub enforce_stock_limit: bool,
}

impl CartPolicy {
    /// Policy that checks stock on every add and quantity change.
    pub const fn enforcing_stock() -> Self {
        CartPolicy {
            enforce_stock_limit: true,
        }
    }

    /// Checks that `requested` units of `product` may sit in the cart.
    pub fn check_stock(&self, product: &Product, requested: i64) -> CoreResult<()> {
        if !self.enforce_stock_limit {
            return Ok(());
        }

        if !product.in_stock {
            return Err(CoreError::OutOfStock {
                product_id: product.id.clone(),
            });
        }

        if let Some(available) = product.stock_count {
            let available = i64::from(available);
            if requested > available {
                return Err(CoreError::InsufficientStock {
                    product_id: product.id.clone(),
                    available,
                    requested,
                });
            }
        }

        Ok(())
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product in the cart with its quantity.
///
/// The product is a snapshot taken when the line was first added, so the
/// unit price of a line does not change while it sits in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", try_from = "LineRecord")]
#[ts(export)]
pub struct CartLineItem {
    product: Product,
    quantity: i64,
}

/// Unchecked wire form of a line.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LineRecord {
    product: Product,
    quantity: i64,
}

impl TryFrom<LineRecord> for CartLineItem {
    type Error = CoreError;

    fn try_from(record: LineRecord) -> CoreResult<Self> {
        CartLineItem::new(record.product, record.quantity)
    }
}

impl CartLineItem {
    /// Creates a line item.
    ///
    /// ## Errors
    /// - `InvalidArgument` if the quantity is below 1
    /// - `AmountOverflow` if unit price × quantity does not fit in an `i64`
    pub fn new(product: Product, quantity: i64) -> CoreResult<Self> {
        validate_add_quantity(quantity)?;
        if product.price.checked_mul_quantity(quantity).is_none() {
            return Err(CoreError::AmountOverflow {
                product_id: product.id,
            });
        }
        Ok(CartLineItem { product, quantity })
    }

    /// The product snapshot.
    #[inline]
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Product id; the identity of the line.
    #[inline]
    pub fn product_id(&self) -> &str {
        &self.product.id
    }

    /// Units of the product in the cart (always >= 1).
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price × quantity.
    ///
    /// Every constructor and quantity change checks this product with
    /// [`Money::checked_mul_quantity`] first, so the product always fits.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// The cart aggregate.
///
/// ## Usage
/// ```rust
/// use storefront_core::{CartPolicy, CartState, Money, Product};
///
/// let a = Product::new("a", "Cable", Money::from_paise(100), "Accessories");
/// let b = Product::new("b", "Charger", Money::from_paise(250), "Accessories");
/// let policy = CartPolicy::default();
///
/// let mut cart = CartState::new();
/// cart.add_item(&a, &policy)?;
/// cart.add_item(&b, &policy)?;
/// cart.add_item(&a, &policy)?;
///
/// assert_eq!(cart.item_count(), 3);
/// assert_eq!(cart.total(), Money::from_paise(450));
/// assert_eq!(cart.items()[0].quantity(), 2);
/// # Ok::<(), storefront_core::CoreError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CartSnapshot", into = "CartSnapshot")]
pub struct CartState {
    items: Vec<CartLineItem>,
}

/// Wire form of a cart; converted into a [`CartState`] only after the
/// invariants are checked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub items: Vec<CartLineItem>,
}

impl CartState {
    /// Creates an empty cart.
    pub fn new() -> Self {
        CartState { items: Vec::new() }
    }

    /// Rebuilds a cart from line items, checking every invariant.
    ///
    /// ## Errors
    /// - `InvalidArgument` for a malformed id, a duplicate id or a quantity below 1
    /// - `AmountOverflow` when the unit count or the total would not fit
    pub fn from_items(items: Vec<CartLineItem>) -> CoreResult<Self> {
        let mut count: i64 = 0;
        let mut total = Money::zero();
        for (index, line) in items.iter().enumerate() {
            validate_product_id(line.product_id())?;
            validate_add_quantity(line.quantity)?;
            if items[..index]
                .iter()
                .any(|earlier| earlier.product_id() == line.product_id())
            {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: line.product_id().to_string(),
                }
                .into());
            }
            let overflow = || CoreError::AmountOverflow {
                product_id: line.product_id().to_string(),
            };
            count = count.checked_add(line.quantity).ok_or_else(overflow)?;
            total = line
                .product
                .price
                .checked_mul_quantity(line.quantity)
                .and_then(|line_total| total.checked_add(line_total))
                .ok_or_else(overflow)?;
        }
        Ok(CartState { items })
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    /// Line items in the order they were first added.
    #[inline]
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of distinct products in the cart.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines.
    ///
    /// Every mutation checks the count with `checked_add` first, so the plain
    /// sum cannot overflow.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(CartLineItem::quantity).sum()
    }

    /// Sum of unit price × quantity over all lines (the subtotal).
    ///
    /// Same precondition as [`CartState::item_count`]: the total was checked
    /// before the change that produced it.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// The line for a product, if present.
    pub fn line(&self, product_id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|line| line.product_id() == product_id)
    }

    /// Units of a product in the cart (0 when absent).
    pub fn quantity_of(&self, product_id: &str) -> i64 {
        self.line(product_id).map_or(0, CartLineItem::quantity)
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity + 1, position unchanged
    /// - Product not in cart: new line with quantity 1 at the end
    pub fn add_item(&mut self, product: &Product, policy: &CartPolicy) -> CoreResult<()> {
        validate_product_id(&product.id)?;
        self.add_units(product, 1, policy)
    }

    /// Adds `quantity` units of a product at once.
    ///
    /// Same result as calling [`CartState::add_item`] `quantity` times, except
    /// that either every unit is added or none is.
    pub fn add_items(
        &mut self,
        product: &Product,
        quantity: i64,
        policy: &CartPolicy,
    ) -> CoreResult<()> {
        validate_product_id(&product.id)?;
        validate_add_quantity(quantity)?;
        self.add_units(product, quantity, policy)
    }

    fn add_units(&mut self, product: &Product, units: i64, policy: &CartPolicy) -> CoreResult<()> {
        let existing = self.position(&product.id);
        let current = existing.map_or(0, |i| self.items[i].quantity);
        let requested = current
            .checked_add(units)
            .ok_or_else(|| CoreError::AmountOverflow {
                product_id: product.id.clone(),
            })?;

        policy.check_stock(product, requested)?;

        let unit_price = existing.map_or(product.price, |i| self.items[i].product.price);
        self.ensure_line_fits(&product.id, unit_price, requested)?;

        match existing {
            Some(i) => self.items[i].quantity = requested,
            None => self.items.push(CartLineItem {
                product: product.clone(),
                quantity: requested,
            }),
        }

        debug!(product_id = %product.id, quantity = requested, "Cart line added");
        Ok(())
    }

    /// Removes the line for a product.
    ///
    /// Removing a product that is not in the cart is a no-op.
    /// Returns whether a line was removed.
    pub fn remove_item(&mut self, product_id: &str) -> CoreResult<bool> {
        validate_product_id(product_id)?;

        let before = self.items.len();
        self.items.retain(|line| line.product_id() != product_id);
        let removed = self.items.len() != before;

        debug!(product_id = %product_id, removed, "Cart line removed");
        Ok(removed)
    }

    /// Sets the quantity of a line (absolute, not a delta).
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the line
    /// - Product not in cart: no-op
    /// - Otherwise: line quantity becomes exactly `quantity`
    pub fn update_quantity(
        &mut self,
        product_id: &str,
        quantity: i64,
        policy: &CartPolicy,
    ) -> CoreResult<()> {
        if quantity <= 0 {
            return self.remove_item(product_id).map(|_| ());
        }

        validate_product_id(product_id)?;

        let Some(index) = self.position(product_id) else {
            debug!(product_id = %product_id, "Quantity update for product not in cart");
            return Ok(());
        };

        let line = &self.items[index];
        policy.check_stock(&line.product, quantity)?;
        self.ensure_line_fits(product_id, line.product.price, quantity)?;

        self.items[index].quantity = quantity;
        debug!(product_id = %product_id, quantity, "Cart quantity updated");
        Ok(())
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.items.clear();
        debug!("Cart cleared");
    }

    /// Applies an action to a copy of the cart and returns the new cart.
    ///
    /// `self` is never modified, which makes this the reducer form of the
    /// operations above.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{CartAction, CartPolicy, CartState, Money, Product};
    ///
    /// let cable = Product::new("a", "Cable", Money::from_paise(100), "Accessories");
    /// let empty = CartState::new();
    ///
    /// let next = empty.apply(&CartAction::Add { product: cable }, &CartPolicy::default())?;
    /// assert!(empty.is_empty());
    /// assert_eq!(next.item_count(), 1);
    /// # Ok::<(), storefront_core::CoreError>(())
    /// ```
    pub fn apply(&self, action: &CartAction, policy: &CartPolicy) -> CoreResult<CartState> {
        let mut next = self.clone();
        match action {
            CartAction::Add { product } => next.add_item(product, policy)?,
            CartAction::AddMany { product, quantity } => {
                next.add_items(product, *quantity, policy)?
            }
            CartAction::Remove { product_id } => {
                next.remove_item(product_id)?;
            }
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => next.update_quantity(product_id, *quantity, policy)?,
            CartAction::Clear => next.clear(),
        }
        Ok(next)
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|line| line.product_id() == product_id)
    }

    /// Checks that the unit count and the total both stay representable if
    /// `product_id` ends up with `quantity` units at `unit_price`.
    ///
    /// Zero-priced lines never move the total, so the count is checked on
    /// its own.
    fn ensure_line_fits(
        &self,
        product_id: &str,
        unit_price: Money,
        quantity: i64,
    ) -> CoreResult<()> {
        let overflow = || CoreError::AmountOverflow {
            product_id: product_id.to_string(),
        };

        let changed = unit_price.checked_mul_quantity(quantity).ok_or_else(overflow)?;
        self.items
            .iter()
            .filter(|line| line.product_id() != product_id)
            .try_fold((quantity, changed), |(count, total), line| {
                Some((
                    count.checked_add(line.quantity)?,
                    total.checked_add(line.line_total())?,
                ))
            })
            .map(|_| ())
            .ok_or_else(overflow)
    }
}

impl TryFrom<CartSnapshot> for CartState {
    type Error = CoreError;

    fn try_from(snapshot: CartSnapshot) -> CoreResult<Self> {
        CartState::from_items(snapshot.items)
    }
}

impl From<CartState> for CartSnapshot {
    fn from(cart: CartState) -> Self {
        CartSnapshot { items: cart.items }
    }
}

// =============================================================================
// Cart Action
// =============================================================================

/// A cart operation as data, for [`CartState::apply`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CartAction {
    Add { product: Product },
    AddMany { product: Product, quantity: i64 },
    Remove { product_id: String },
    UpdateQuantity { product_id: String, quantity: i64 },
    Clear,
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Read model of the cart for the cart page and header badge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSummary {
    pub items: Vec<CartLineItem>,
    /// Total units ("3 items in your cart").
    pub item_count: i64,
    /// Distinct products.
    pub line_count: usize,
    pub subtotal: Money,
    pub delivery: DeliveryQuote,
}

impl CartSummary {
    /// Snapshots a cart together with its delivery quote.
    ///
    /// ## Errors
    /// - `QuoteOverflow` if subtotal plus delivery fee does not fit
    pub fn new(cart: &CartState, delivery: &DeliveryPolicy) -> CoreResult<Self> {
        Ok(CartSummary {
            items: cart.items().to_vec(),
            item_count: cart.item_count(),
            line_count: cart.line_count(),
            subtotal: cart.total(),
            delivery: delivery.quote(cart)?,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
