//! # Product Commands
//!
//! Commands for catalog browsing and the product detail page.
//!
//! ## Browse Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Browse Flow                                  │
//! │                                                                         │
//! │  User picks "Smartphones" and "Price: Low to High"                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  {"command":"list_products","category":"Smartphones",                  │
//! │   "sort":"price-low"}                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  Filter: category == "Smartphones"        │                         │
//! │  │          ("All" keeps everything)         │                         │
//! │  │  Sort:   stable, by price ascending       │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Return Vec<ProductDto> (product + badges) to the client              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_catalog::{BrowseQuery, Catalog, ALL_CATEGORIES};
use storefront_core::{Availability, Money, Product, RatingStars, RELATED_PRODUCTS_LIMIT};
use tracing::debug;

use crate::error::ApiError;

/// Product DTO for product cards.
///
/// Carries the catalog record plus the figures cards display, so the client
/// never recomputes stock badges, discounts or stars.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    #[serde(flatten)]
    pub product: Product,
    pub availability: Availability,
    /// Amount off the original price, when discounted.
    pub savings: Option<Money>,
    /// Discount in basis points (1500 = 15%), when discounted.
    pub discount_bps: Option<u32>,
    pub rating_stars: RatingStars,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        ProductDto {
            product: p.clone(),
            availability: p.availability(),
            savings: p.savings(),
            discount_bps: p.discount_bps(),
            rating_stars: p.rating_stars(),
        }
    }
}

/// Product detail page: the product and its related products.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: ProductDto,
    pub related: Vec<ProductDto>,
}

/// Lists products for the products page.
///
/// ## Arguments
/// * `query` - Category filter and sort order (defaults: "All", by name)
///
/// ## Returns
/// Matching products in the requested order.
pub fn list_products(catalog: &Catalog, query: &BrowseQuery) -> Vec<ProductDto> {
    debug!(?query, "list_products command");
    catalog
        .browse(query)
        .into_iter()
        .map(ProductDto::from)
        .collect()
}

/// Gets one product with up to four related products.
///
/// ## Returns
/// The product detail, or `NOT_FOUND` for unknown ids.
pub fn get_product(catalog: &Catalog, id: &str) -> Result<ProductDetail, ApiError> {
    debug!(id = %id, "get_product command");
    let product = catalog.require(id)?;

    Ok(ProductDetail {
        product: ProductDto::from(product),
        related: related_products(catalog, id, None),
    })
}

/// Category tabs for the products page, "All" first.
pub fn list_categories(catalog: &Catalog) -> Vec<String> {
    debug!("list_categories command");
    std::iter::once(ALL_CATEGORIES)
        .chain(catalog.categories())
        .map(str::to_string)
        .collect()
}

/// Other products in the same category.
///
/// ## Arguments
/// * `id` - Product whose category is used
/// * `limit` - Maximum results (default: 4)
///
/// Unknown ids yield an empty list.
pub fn related_products(catalog: &Catalog, id: &str, limit: Option<usize>) -> Vec<ProductDto> {
    let limit = limit.unwrap_or(RELATED_PRODUCTS_LIMIT);
    debug!(id = %id, limit, "related_products command");

    catalog
        .related(id, limit)
        .into_iter()
        .map(ProductDto::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use storefront_catalog::SortOrder;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn test_list_products_filters_and_sorts() {
        let catalog = catalog();
        let query = BrowseQuery::in_category("Smartphones").sorted_by(SortOrder::PriceHighToLow);

        let products = list_products(&catalog, &query);
        let ids: Vec<&str> = products.iter().map(|p| p.product.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "5"]);
    }

    #[test]
    fn test_product_dto_badges() {
        let catalog = catalog();
        let products = list_products(&catalog, &BrowseQuery::default());
        let watch = products.iter().find(|p| p.product.id == "6").unwrap();
        assert_eq!(watch.availability, Availability::SoldOut);

        let laptop = products.iter().find(|p| p.product.id == "1").unwrap();
        assert_eq!(laptop.savings, Some(Money::from_paise(20_000)));
        assert!(laptop.discount_bps.is_some());
    }

    #[test]
    fn test_product_dto_serializes_flat() {
        let catalog = catalog();
        let json = serde_json::to_value(ProductDto::from(catalog.get("3").unwrap())).unwrap();

        assert_eq!(json["id"], "3");
        assert_eq!(json["inStock"], true);
        assert!(json.get("product").is_none());
        assert!(json.get("ratingStars").is_some());
    }

    #[test]
    fn test_get_product_with_related() {
        let catalog = catalog();
        let detail = get_product(&catalog, "2").unwrap();

        assert_eq!(detail.product.product.id, "2");
        let related: Vec<&str> = detail.related.iter().map(|p| p.product.id.as_str()).collect();
        assert_eq!(related, vec!["5"]);
    }

    #[test]
    fn test_get_product_not_found() {
        let err = get_product(&catalog(), "404").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_list_categories_starts_with_all() {
        let categories = list_categories(&catalog());
        assert_eq!(categories[0], "All");
        assert_eq!(categories.len(), 6);
    }

    #[test]
    fn test_related_products_limit() {
        let catalog = catalog();
        assert_eq!(related_products(&catalog, "2", Some(0)).len(), 0);
        assert!(related_products(&catalog, "missing", None).is_empty());
    }
}
