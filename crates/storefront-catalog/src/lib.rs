//! # storefront-catalog: Product Catalog
//!
//! Supplies the read-only [`Product`](storefront_core::Product) records the
//! cart and the listing pages work from.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      storefront-catalog                                 │
//! │                                                                         │
//! │  ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐     │
//! │  │  data/          │    │    Catalog      │    │   BrowseQuery   │     │
//! │  │  catalog.json   │───►│  (in memory)    │◄───│  category/sort  │     │
//! │  │  or a file path │    │  id → product   │    └─────────────────┘     │
//! │  └─────────────────┘    └────────┬────────┘                            │
//! │                                  │                                      │
//! │                                  ▼                                      │
//! │                   get / browse / categories / related                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`catalog`] - The catalog store and its lookups
//! - [`query`] - Category filter and sort order
//! - [`error`] - Catalog error types

pub mod catalog;
pub mod error;
pub mod query;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use query::{BrowseQuery, CategoryFilter, SortOrder, ALL_CATEGORIES};
