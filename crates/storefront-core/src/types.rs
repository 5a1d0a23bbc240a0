//! # Domain Types
//!
//! Catalog-side domain types used throughout the storefront.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │  Availability   │   │  RatingStars    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (string)    │   │  InStock        │   │  full           │       │
//! │  │  name           │   │  LowStock(n)    │   │  half           │       │
//! │  │  price (Money)  │   │  SoldOut        │   │  empty          │       │
//! │  │  category       │   └─────────────────┘   └─────────────────┘       │
//! │  │  rating, stock  │                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are read-only reference data. The catalog supplies them; the
//! cart stores a snapshot of the product inside each line item.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_price, validate_product_id, validate_product_name, validate_rating};
use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Product
// =============================================================================

/// A product available in the storefront catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Unit price in paise.
    pub price: Money,

    /// Price before discount, shown struck through.
    #[serde(default)]
    pub original_price: Option<Money>,

    /// Image URL for cards and the detail page.
    #[serde(default)]
    pub image: String,

    /// Category name used for filtering ("Laptops", "Audio", ...).
    pub category: String,

    /// One-line description for product cards.
    #[serde(default)]
    pub description: String,

    /// Full description for the detail page.
    #[serde(default)]
    pub long_description: String,

    /// Average rating, 0.0 to 5.0.
    #[serde(default)]
    pub rating: f64,

    /// Number of reviews behind the rating.
    #[serde(default)]
    pub review_count: u32,

    /// Whether the product can currently be ordered.
    pub in_stock: bool,

    /// Units on hand, when known.
    #[serde(default)]
    pub stock_count: Option<u32>,

    /// Bullet-point feature list.
    #[serde(default)]
    pub features: Vec<String>,
}

impl Product {
    /// Creates an in-stock product with the required fields and empty display fields.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::{Money, Product};
    ///
    /// let product = Product::new("3", "Headphones", Money::from_paise(29_990), "Audio")
    ///     .with_stock_count(25);
    /// assert!(product.in_stock);
    /// assert_eq!(product.stock_count, Some(25));
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price,
            original_price: None,
            image: String::new(),
            category: category.into(),
            description: String::new(),
            long_description: String::new(),
            rating: 0.0,
            review_count: 0,
            in_stock: true,
            stock_count: None,
            features: Vec::new(),
        }
    }

    /// Sets the known stock count. A count of zero also clears `in_stock`.
    pub fn with_stock_count(mut self, count: u32) -> Self {
        self.stock_count = Some(count);
        self.in_stock = count > 0;
        self
    }

    /// Sets the pre-discount price.
    pub fn with_original_price(mut self, original: Money) -> Self {
        self.original_price = Some(original);
        self
    }

    /// Sets the average rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Checks the record against catalog rules (id, name, price, rating).
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_product_id(&self.id)?;
        validate_product_name(&self.name)?;
        validate_price(self.price)?;
        if let Some(original) = self.original_price {
            validate_price(original)?;
        }
        validate_rating(self.rating)?;
        Ok(())
    }

    /// Stock badge shown on product cards.
    ///
    /// ## Rules
    /// ```text
    /// in_stock == false              → SoldOut
    /// stock_count in 1..=5           → LowStock(n)  "Only n left"
    /// anything else                  → InStock
    /// ```
    pub fn availability(&self) -> Availability {
        if !self.in_stock {
            return Availability::SoldOut;
        }
        match self.stock_count {
            Some(n) if n > 0 && n <= LOW_STOCK_THRESHOLD => Availability::LowStock(n),
            _ => Availability::InStock,
        }
    }

    /// Amount saved against the original price, if discounted.
    pub fn savings(&self) -> Option<Money> {
        self.original_price
            .filter(|original| *original > self.price)
            .map(|original| original - self.price)
    }

    /// Discount as basis points of the original price (1000 = 10%).
    pub fn discount_bps(&self) -> Option<u32> {
        let savings = self.savings()?;
        self.original_price?.bps_of(savings)
    }

    /// Star breakdown for a five-star display.
    pub fn rating_stars(&self) -> RatingStars {
        RatingStars::from_rating(self.rating)
    }
}

// =============================================================================
// Availability
// =============================================================================

/// Stock badge for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "status", content = "remaining", rename_all = "camelCase")]
#[ts(export)]
pub enum Availability {
    /// Plenty of stock (or stock not tracked).
    InStock,
    /// In stock with only a few units left.
    LowStock(u32),
    /// Cannot be ordered.
    SoldOut,
}

// =============================================================================
// Rating Stars
// =============================================================================

/// Full, half and empty star counts for a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RatingStars {
    pub full: u8,
    pub half: u8,
    pub empty: u8,
}

impl RatingStars {
    /// Splits a rating into stars. Out-of-range ratings are clamped to 0..=5.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::RatingStars;
    ///
    /// let stars = RatingStars::from_rating(4.5);
    /// assert_eq!((stars.full, stars.half, stars.empty), (4, 1, 0));
    /// ```
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_nan() {
            0.0
        } else {
            rating.clamp(0.0, 5.0)
        };
        let full = rating.floor() as u8;
        let half = u8::from(rating.fract() != 0.0);
        let empty = 5 - rating.ceil() as u8;
        RatingStars { full, half, empty }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn headphones() -> Product {
        Product::new("3", "Sony WH-1000XM5 Headphones", Money::from_paise(29_990), "Audio")
            .with_original_price(Money::from_paise(34_990))
            .with_stock_count(25)
            .with_rating(4.7)
    }

    #[test]
    fn test_availability() {
        assert_eq!(headphones().availability(), Availability::InStock);
        assert_eq!(
            headphones().with_stock_count(5).availability(),
            Availability::LowStock(5)
        );
        assert_eq!(
            headphones().with_stock_count(0).availability(),
            Availability::SoldOut
        );

        let mut untracked = headphones();
        untracked.stock_count = None;
        assert_eq!(untracked.availability(), Availability::InStock);
    }

    #[test]
    fn test_savings_and_discount() {
        let product = headphones();
        assert_eq!(product.savings(), Some(Money::from_paise(5_000)));
        assert_eq!(product.discount_bps(), Some(1429));

        let full_price = Product::new("2", "Phone", Money::from_paise(134_900), "Smartphones");
        assert_eq!(full_price.savings(), None);
        assert_eq!(full_price.discount_bps(), None);

        // An "original" price below the price is not a discount
        let odd = full_price.with_original_price(Money::from_paise(100));
        assert_eq!(odd.savings(), None);
    }

    #[test]
    fn test_rating_stars() {
        let stars = headphones().rating_stars();
        assert_eq!((stars.full, stars.half, stars.empty), (4, 1, 0));

        let stars = RatingStars::from_rating(3.0);
        assert_eq!((stars.full, stars.half, stars.empty), (3, 0, 2));

        let stars = RatingStars::from_rating(0.0);
        assert_eq!((stars.full, stars.half, stars.empty), (0, 0, 5));

        let stars = RatingStars::from_rating(7.0);
        assert_eq!((stars.full, stars.half, stars.empty), (5, 0, 0));
    }

    #[test]
    fn test_validate() {
        assert!(headphones().validate().is_ok());

        let mut bad = headphones();
        bad.rating = 5.5;
        assert!(bad.validate().is_err());

        let mut bad = headphones();
        bad.id = String::new();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_deserialize_catalog_record() {
        let json = r#"{
            "id": "6",
            "name": "Apple Watch Series 9",
            "price": 41900,
            "category": "Wearables",
            "rating": 4.4,
            "reviewCount": 267,
            "inStock": false,
            "stockCount": 0
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Money::from_paise(41_900));
        assert_eq!(product.original_price, None);
        assert!(product.features.is_empty());
        assert_eq!(product.availability(), Availability::SoldOut);
    }
}
