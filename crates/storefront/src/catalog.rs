//! Product catalog and the category/search filter.
//!
//! The catalog is fixed once loaded. Browsing narrows it by category
//! selector and a case-insensitive name substring; an empty result is a
//! normal state that the view renders as "no products found".

use std::collections::HashSet;

use hista_core::{Category, CategoryFilter, Product, ProductId};
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::info;

const PLACEHOLDER_IMAGE: &str = "/api/placeholder/300/200";

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The input could not be parsed as a list of products.
    #[error("failed to parse catalog: {0}")]
    Parse(String),

    /// Two products share an id.
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),

    /// A product has a price below zero.
    #[error("product {0} has a negative price")]
    NegativePrice(ProductId),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// The fixed set of purchasable products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, checking that ids are unique and prices non-negative.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` or `CatalogError::NegativePrice`.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateId(product.id));
            }
            if product.unit_price().is_negative() {
                return Err(CatalogError::NegativePrice(product.id));
            }
        }

        Ok(Self::loaded(products))
    }

    /// Load a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Parse` for malformed JSON, or any validation
    /// error from [`Catalog::new`].
    pub fn from_json(input: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(input)?;
        Self::new(products)
    }

    /// The four products the store ships with.
    #[must_use]
    pub fn builtin() -> Self {
        let entry = |id: i32, name: &str, price: i64, category, description: &str| Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price: Decimal::new(price, 0),
            image: PLACEHOLDER_IMAGE.to_string(),
            category,
            description: description.to_string(),
        };

        Self::loaded(vec![
            entry(1, "FIFA 24", 144, Category::Games, "Latest FIFA football game"),
            entry(2, "Call of Duty", 168, Category::Games, "Action-packed shooter game"),
            entry(3, "Adobe Photoshop", 72, Category::Apps, "Professional photo editing software"),
            entry(4, "Microsoft Office", 360, Category::Apps, "Complete office suite"),
        ])
    }

    fn loaded(products: Vec<Product>) -> Self {
        info!(products = products.len(), "Catalog loaded");
        Self { products }
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in `selector` whose name contains `search`, ignoring case.
    ///
    /// Catalog order is preserved. An empty `search` matches every name.
    #[must_use]
    pub fn filter(&self, selector: CategoryFilter, search: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| selector.matches(product.category) && product.name_contains(search))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 4);
        let fifa = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(fifa.name, "FIFA 24");
        assert_eq!(fifa.unit_price().to_string(), "LYD 144.00");
        assert!(catalog.get(ProductId::new(99)).is_none());
    }

    #[test]
    fn test_builtin_passes_validation() {
        let catalog = Catalog::builtin();
        let rebuilt = Catalog::new(catalog.products().to_vec()).unwrap();
        assert_eq!(rebuilt, catalog);
    }

    #[test]
    fn test_filter_all_with_empty_search_returns_everything() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.filter(CategoryFilter::All, "").len(), 4);
    }

    #[test]
    fn test_filter_by_category_preserves_order() {
        let catalog = Catalog::builtin();
        let games = catalog.filter(CategoryFilter::Only(Category::Games), "");
        assert_eq!(names(&games), ["FIFA 24", "Call of Duty"]);
        let apps = catalog.filter(CategoryFilter::Only(Category::Apps), "");
        assert_eq!(names(&apps), ["Adobe Photoshop", "Microsoft Office"]);
    }

    #[test]
    fn test_filter_search_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let hits = catalog.filter(CategoryFilter::All, "OFF");
        assert_eq!(names(&hits), ["Microsoft Office"]);
    }

    #[test]
    fn test_filter_combines_category_and_search() {
        let catalog = Catalog::builtin();
        assert!(catalog.filter(CategoryFilter::Only(Category::Games), "office").is_empty());
        let hits = catalog.filter(CategoryFilter::Only(Category::Apps), "o");
        assert_eq!(names(&hits), ["Adobe Photoshop", "Microsoft Office"]);
    }

    #[test]
    fn test_filter_matches_iff_category_and_substring() {
        let catalog = Catalog::builtin();
        let selectors = [
            CategoryFilter::All,
            CategoryFilter::Only(Category::Games),
            CategoryFilter::Only(Category::Apps),
        ];
        for selector in selectors {
            for search in ["", "a", "FIFA", "duty", "soft", "zzz", " "] {
                let hits = catalog.filter(selector, search);
                for product in catalog.products() {
                    let expected = selector.matches(product.category)
                        && product.name.to_lowercase().contains(&search.to_lowercase());
                    let present = hits.iter().any(|hit| hit.id == product.id);
                    assert_eq!(present, expected, "{selector} / {search:?} / {}", product.name);
                }
            }
        }
    }

    #[test]
    fn test_from_json() {
        let catalog = Catalog::from_json(
            r#"[{"id": 7, "name": "Netflix Gift Card", "price": 50.5,
                 "image": "/img/netflix.png", "category": "apps",
                 "description": "Streaming credit"}]"#,
        )
        .unwrap();
        let product = catalog.get(ProductId::new(7)).unwrap();
        assert_eq!(product.unit_price().to_string(), "LYD 50.50");
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut products = Catalog::builtin().products().to_vec();
        let mut copy = products[0].clone();
        copy.name = "FIFA 25".to_string();
        products.push(copy);
        assert!(matches!(
            Catalog::new(products),
            Err(CatalogError::DuplicateId(id)) if id == ProductId::new(1)
        ));
    }

    #[test]
    fn test_rejects_negative_price() {
        let mut products = Catalog::builtin().products().to_vec();
        products[1].price = Decimal::new(-1, 0);
        assert!(matches!(
            Catalog::new(products),
            Err(CatalogError::NegativePrice(id)) if id == ProductId::new(2)
        ));
    }

    #[test]
    fn test_accepts_largest_representable_price() {
        let mut products = Catalog::builtin().products().to_vec();
        products[0].price = Decimal::MAX;
        let catalog = Catalog::new(products).unwrap();
        let fifa = catalog.get(ProductId::new(1)).unwrap();
        assert_eq!(fifa.unit_price().times(2).amount, Decimal::MAX);
    }

    #[test]
    fn test_empty_catalog_filters_to_empty() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.filter(CategoryFilter::All, "").is_empty());
    }
}
