//! Product type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Price of a single unit.
    pub unit_price: Money,
    /// Grouping label used by the shop listing.
    pub category: String,
    /// Display image URL.
    pub image_url: String,
}

impl Product {
    /// Create a new product priced in INR minor units.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price_minor: i64,
        category: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price: Money::inr(unit_price_minor),
            category: category.into(),
            image_url: image_url.into(),
        }
    }

    /// Format the unit price for display.
    pub fn price_display(&self) -> String {
        self.unit_price.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_product_new() {
        let p = Product::new("aloe", "Aloe Vera", 499, "Succulents", "https://img/aloe");
        assert_eq!(p.id.as_str(), "aloe");
        assert_eq!(p.unit_price, Money::inr(499));
        assert_eq!(p.price_display(), "\u{20b9}4.99");
    }
}
