//! # Catalog
//!
//! The static list of extras a customer can put on the pizza.
//!
//! The catalog owns the canonical `Product` values behind `Arc`s; order
//! lines hold clones of those `Arc`s instead of copies of the product.

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, ProductId};

/// Immutable product list, in display order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
}

impl Catalog {
    /// Builds a catalog from trusted, pre-validated products.
    ///
    /// Ids are expected to be unique; if one repeats, the first product
    /// with that id wins lookups.
    pub fn new(products: Vec<Product>) -> Self {
        Catalog {
            products: products.into_iter().map(Arc::new).collect(),
        }
    }

    /// The house extras: four ingredients at 1.00 each, each with its own id.
    pub fn extras() -> Self {
        let one = Money::from_cents(100);
        Catalog::new(vec![
            Product::new(1, "Ham", one),
            Product::new(2, "Pepperoni", one),
            Product::new(3, "Mushrooms", one),
            Product::new(4, "Olives", one),
        ])
    }

    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    pub fn find(&self, id: ProductId) -> Option<&Arc<Product>> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Case-insensitive lookup by display name.
    pub fn find_by_name(&self, name: &str) -> Option<&Arc<Product>> {
        let name = name.trim();
        self.products
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Like [`Catalog::find`], but unknown ids are an error.
    pub fn get(&self, id: ProductId) -> CoreResult<&Arc<Product>> {
        self.find(id).ok_or(CoreError::ProductNotFound(id))
    }

    /// Like [`Catalog::find_by_name`], but unknown names are an error.
    pub fn get_by_name(&self, name: &str) -> CoreResult<&Arc<Product>> {
        self.find_by_name(name)
            .ok_or_else(|| CoreError::ProductNameNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extras_have_distinct_ids() {
        let catalog = Catalog::extras();
        assert_eq!(catalog.len(), 4);

        let mut ids: Vec<_> = catalog.products().iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
        assert!(catalog
            .products()
            .iter()
            .all(|p| p.unit_price == Money::from_cents(100)));
    }

    #[test]
    fn test_find_by_id_and_name() {
        let catalog = Catalog::extras();
        assert_eq!(catalog.find(ProductId(3)).unwrap().name, "Mushrooms");
        assert_eq!(catalog.find_by_name("pepperoni").unwrap().id, ProductId(2));
        assert!(catalog.find(ProductId(99)).is_none());
        assert!(catalog.find_by_name("pineapple").is_none());
    }

    #[test]
    fn test_get_reports_missing_products() {
        let catalog = Catalog::extras();
        assert!(matches!(
            catalog.get(ProductId(99)),
            Err(CoreError::ProductNotFound(ProductId(99)))
        ));
        assert!(matches!(
            catalog.get_by_name("pineapple"),
            Err(CoreError::ProductNameNotFound(_))
        ));
    }

    #[test]
    fn test_lookups_share_the_canonical_product() {
        let catalog = Catalog::extras();
        let a = catalog.find(ProductId(1)).unwrap();
        let b = catalog.find_by_name("Ham").unwrap();
        assert!(Arc::ptr_eq(a, b));
    }
}
