//! Product catalog module.
//!
//! The catalog is fixed when the app is built and never changes afterwards.

mod builtin;
mod category;
mod product;

pub use category::{group_by_category, CategoryGroup};
pub use product::Product;

use crate::error::CommerceError;
use crate::ids::ProductId;
use indexmap::IndexMap;

/// An immutable, ordered set of products with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: IndexMap<ProductId, Product>,
}

impl Catalog {
    /// Build a catalog, keeping the given order.
    ///
    /// Fails if two products share an id, a price is not positive, or a
    /// product has an empty name.
    pub fn new(products: impl IntoIterator<Item = Product>) -> Result<Self, CommerceError> {
        let mut map = IndexMap::new();

        for product in products {
            if product.name.trim().is_empty() {
                return Err(CommerceError::InvalidProduct {
                    product_id: product.id.to_string(),
                    reason: "empty name".to_string(),
                });
            }
            if !product.unit_price.is_positive() {
                return Err(CommerceError::InvalidPrice {
                    product_id: product.id.to_string(),
                    amount: product.unit_price.amount_minor,
                });
            }
            if map.contains_key(&product.id) {
                return Err(CommerceError::DuplicateProduct(product.id.into_inner()));
            }
            map.insert(product.id.clone(), product);
        }

        Ok(Self { products: map })
    }

    /// The built-in houseplant catalog.
    pub fn houseplants() -> Self {
        let products = builtin::houseplants()
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();
        Self { products }
    }

    /// Look up a product by id.
    pub fn lookup(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    /// Check if a product id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.products.contains_key(id)
    }

    /// Iterate products in catalog order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Group products by category in first-seen order.
    pub fn groups(&self) -> Vec<CategoryGroup<'_>> {
        group_by_category(self.products.values())
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::houseplants()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::money::Money;

    #[test]
    fn test_houseplants_catalog() {
        let catalog = Catalog::houseplants();
        assert_eq!(catalog.len(), 6);

        let aloe = catalog.lookup("aloe").unwrap();
        assert_eq!(aloe.name, "Aloe Vera");
        assert_eq!(aloe.unit_price, Money::inr(499));
        assert_eq!(catalog.lookup("snake").unwrap().unit_price, Money::inr(899));
        assert!(catalog.lookup("cactus").is_none());
    }

    #[test]
    fn test_houseplants_pass_validation() {
        let products: Vec<Product> = Catalog::houseplants().products().cloned().collect();
        let rebuilt = Catalog::new(products).unwrap();
        assert_eq!(rebuilt, Catalog::houseplants());
    }

    #[test]
    fn test_houseplants_grouping_order() {
        let catalog = Catalog::houseplants();
        let groups = catalog.groups();
        let names: Vec<&str> = groups.iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["Succulents", "Low Light", "Tropical", "Flowering"]);

        let tropical = &groups[2];
        let ids: Vec<&str> = tropical.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["monstera", "fern"]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![
            Product::new("aloe", "Aloe Vera", 499, "Succulents", ""),
            Product::new("aloe", "Aloe Again", 599, "Succulents", ""),
        ]);
        assert_eq!(result, Err(CommerceError::DuplicateProduct("aloe".to_string())));
    }

    #[test]
    fn test_non_positive_price_rejected() {
        let result = Catalog::new(vec![Product::new("free", "Free Plant", 0, "Misc", "")]);
        assert!(matches!(result, Err(CommerceError::InvalidPrice { amount: 0, .. })));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Catalog::new(vec![Product::new("blank", "  ", 100, "Misc", "")]);
        assert!(matches!(result, Err(CommerceError::InvalidProduct { .. })));
    }
}
