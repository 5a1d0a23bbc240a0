//! # Browse Queries
//!
//! Category filter and sort order for the product listing page.
//!
//! ```text
//! Categories: [All] [Laptops] [Smartphones] [Audio] ...     Sort By: [Name ▾]
//!                                                                   Name
//!                                                                   Price: Low to High
//!                                                                   Price: High to Low
//!                                                                   Highest Rated
//! ```

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use storefront_core::Product;

/// Label of the pseudo-category that matches every product.
pub const ALL_CATEGORIES: &str = "All";

/// Which categories a listing shows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Whether a product passes the filter (exact category match).
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => product.category == *name,
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => ALL_CATEGORIES.to_string(),
            CategoryFilter::Named(name) => name,
        }
    }
}

/// Listing sort order. Wire names match the listing page's select values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Case-insensitive by name, A to Z.
    #[default]
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    #[serde(rename = "price-high")]
    PriceHighToLow,
    /// Highest rating first.
    #[serde(rename = "rating")]
    Rating,
}

impl SortOrder {
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOrder::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortOrder::PriceLowToHigh => a.price.cmp(&b.price),
            SortOrder::PriceHighToLow => b.price.cmp(&a.price),
            SortOrder::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

/// A product listing request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrowseQuery {
    pub category: CategoryFilter,
    pub sort: SortOrder,
}

impl BrowseQuery {
    pub fn in_category(category: impl Into<String>) -> Self {
        BrowseQuery {
            category: CategoryFilter::from(category.into()),
            sort: SortOrder::default(),
        }
    }

    pub fn sorted_by(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}
