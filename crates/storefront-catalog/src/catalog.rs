//! # Product Catalog
//!
//! In-memory product store with the lookups the storefront screens need.
//!
//! ## Key Operations
//! - Lookup by id (product page, add to cart)
//! - Category listing and filtered/sorted browsing (products page)
//! - Related products (product page footer)
//!
//! Products keep the order they were loaded in; that order is the
//! "catalog order" used for categories and related products.

use std::collections::HashMap;
use std::path::Path;

use storefront_core::{CoreError, CoreResult, Product};
use tracing::{debug, info};

use crate::error::{CatalogError, CatalogResult};
use crate::query::BrowseQuery;

/// Catalog bundled with the crate (the demo storefront's six products).
const BUILTIN_CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Read-only product catalog.
///
/// ## Usage
/// ```rust
/// use storefront_catalog::{BrowseQuery, Catalog, SortOrder};
///
/// let catalog = Catalog::builtin()?;
/// let phones = catalog.browse(
///     &BrowseQuery::in_category("Smartphones").sorted_by(SortOrder::PriceLowToHigh),
/// );
/// assert_eq!(phones[0].name, "Samsung Galaxy S24 Ultra");
/// # Ok::<(), storefront_catalog::CatalogError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, validating every record.
    ///
    /// ## Errors
    /// - `InvalidProduct` if a record breaks a product rule
    /// - `DuplicateId` if two records share an id
    pub fn from_products(products: Vec<Product>) -> CatalogResult<Self> {
        let mut by_id = HashMap::with_capacity(products.len());

        for (index, product) in products.iter().enumerate() {
            product
                .validate()
                .map_err(|source| CatalogError::InvalidProduct {
                    id: product.id.clone(),
                    source,
                })?;

            if by_id.insert(product.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }

        debug!(count = products.len(), "Catalog built");
        Ok(Catalog { products, by_id })
    }

    /// Parses a JSON array of products.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// Loads a JSON catalog file.
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), count = catalog.len(), "Catalog loaded from file");
        Ok(catalog)
    }

    /// The bundled demo catalog.
    pub fn builtin() -> CatalogResult<Self> {
        Self::from_json_str(BUILTIN_CATALOG_JSON)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Gets a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.by_id.get(id).map(|&index| &self.products[index])
    }

    /// Gets a product by id, failing with `ProductNotFound`.
    pub fn require(&self, id: &str) -> CoreResult<&Product> {
        self.get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Filters and sorts products for a listing. The sort is stable, so ties
    /// keep catalog order.
    pub fn browse(&self, query: &BrowseQuery) -> Vec<&Product> {
        let mut products: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| query.category.matches(product))
            .collect();
        products.sort_by(|a, b| query.sort.compare(a, b));

        debug!(?query, count = products.len(), "Browse");
        products
    }

    /// Other products in the same category, catalog order, at most `limit`.
    ///
    /// Unknown ids yield an empty list.
    pub fn related(&self, id: &str, limit: usize) -> Vec<&Product> {
        let Some(product) = self.get(id) else {
            return Vec::new();
        };

        self.products
            .iter()
            .filter(|other| other.category == product.category && other.id != product.id)
            .take(limit)
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortOrder;
    use storefront_core::{Availability, Money, ValidationError, RELATED_PRODUCTS_LIMIT};

    fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 6);

        let laptop = catalog.get("1").unwrap();
        assert_eq!(laptop.price, Money::from_paise(239_900));
        assert_eq!(laptop.original_price, Some(Money::from_paise(259_900)));
        assert_eq!(laptop.features.len(), 5);

        let watch = catalog.get("6").unwrap();
        assert_eq!(watch.availability(), Availability::SoldOut);
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            catalog.categories(),
            vec!["Laptops", "Smartphones", "Audio", "Tablets", "Wearables"]
        );
    }

    #[test]
    fn test_browse_sort_orders() {
        let catalog = Catalog::builtin().unwrap();

        let by_name = catalog.browse(&BrowseQuery::default());
        assert_eq!(
            names(&by_name),
            vec![
                "Apple Watch Series 9",
                "iPad Pro 12.9\" M2",
                "iPhone 15 Pro Max",
                "MacBook Pro 16\" M3",
                "Samsung Galaxy S24 Ultra",
                "Sony WH-1000XM5 Headphones",
            ]
        );

        let cheapest = catalog.browse(&BrowseQuery::default().sorted_by(SortOrder::PriceLowToHigh));
        assert_eq!(cheapest[0].id, "3");
        assert_eq!(cheapest[5].id, "1");

        let priciest = catalog.browse(&BrowseQuery::default().sorted_by(SortOrder::PriceHighToLow));
        assert_eq!(priciest[0].id, "1");

        let rated = catalog.browse(&BrowseQuery::default().sorted_by(SortOrder::Rating));
        let ids: Vec<&str> = rated.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_browse_category_filter() {
        let catalog = Catalog::builtin().unwrap();

        let phones = catalog.browse(&BrowseQuery::in_category("Smartphones"));
        assert_eq!(names(&phones), vec!["iPhone 15 Pro Max", "Samsung Galaxy S24 Ultra"]);

        assert!(catalog.browse(&BrowseQuery::in_category("Cameras")).is_empty());
        assert_eq!(catalog.browse(&BrowseQuery::in_category("All")).len(), 6);
    }

    #[test]
    fn test_related_products() {
        let catalog = Catalog::builtin().unwrap();

        let related = catalog.related("2", RELATED_PRODUCTS_LIMIT);
        assert_eq!(names(&related), vec!["Samsung Galaxy S24 Ultra"]);

        assert!(catalog.related("1", RELATED_PRODUCTS_LIMIT).is_empty());
        assert!(catalog.related("missing", RELATED_PRODUCTS_LIMIT).is_empty());

        let many: Vec<Product> = (1..=7)
            .map(|i| Product::new(i.to_string(), format!("Cable {}", i), Money::from_paise(100), "Cables"))
            .collect();
        let catalog = Catalog::from_products(many).unwrap();
        let related = catalog.related("1", RELATED_PRODUCTS_LIMIT);
        let ids: Vec<&str> = related.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "4", "5"]);
    }

    #[test]
    fn test_require() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.require("4").is_ok());
        assert_eq!(
            catalog.require("99").unwrap_err(),
            CoreError::ProductNotFound("99".to_string())
        );
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let a = Product::new("1", "One", Money::from_paise(100), "X");
        let b = Product::new("1", "Also One", Money::from_paise(200), "X");
        assert!(matches!(
            Catalog::from_products(vec![a, b]),
            Err(CatalogError::DuplicateId(id)) if id == "1"
        ));
    }

    #[test]
    fn test_rejects_invalid_records() {
        let json = r#"[{"id":"1","name":"Bad","price":-5,"category":"X","inStock":true}]"#;
        assert!(matches!(
            Catalog::from_json_str(json),
            Err(CatalogError::InvalidProduct {
                source: ValidationError::OutOfRange { .. },
                ..
            })
        ));

        assert!(matches!(
            Catalog::from_json_str("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_from_missing_path() {
        assert!(matches!(
            Catalog::from_path("/definitely/not/here/catalog.json"),
            Err(CatalogError::Io(_))
        ));
    }
}
