//! Category grouping for the shop listing.

use crate::catalog::Product;

/// Products sharing a category label, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    /// Category label.
    pub name: &'a str,
    /// Products in this category.
    pub products: Vec<&'a Product>,
}

impl CategoryGroup<'_> {
    /// Number of products in the group.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the group has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Group products by category.
///
/// Groups appear in the order their category is first seen while scanning
/// `products`; within a group, products keep their catalog order.
pub fn group_by_category<'a>(
    products: impl IntoIterator<Item = &'a Product>,
) -> Vec<CategoryGroup<'a>> {
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();

    for product in products {
        match groups.iter_mut().find(|g| g.name == product.category) {
            Some(group) => group.products.push(product),
            None => groups.push(CategoryGroup {
                name: &product.category,
                products: vec![product],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn product(id: &str, category: &str) -> Product {
        Product::new(id, id, 100, category, "")
    }

    #[test]
    fn test_first_seen_order() {
        let products = vec![
            product("a", "B-cat"),
            product("b", "A-cat"),
            product("c", "B-cat"),
            product("d", "C-cat"),
        ];

        let groups = group_by_category(&products);
        let names: Vec<&str> = groups.iter().map(|g| g.name).collect();
        assert_eq!(names, vec!["B-cat", "A-cat", "C-cat"]);

        let ids: Vec<&str> = groups[0].products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(groups[2].len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let products: Vec<Product> = Vec::new();
        let groups = group_by_category(&products);
        assert!(groups.is_empty());
    }
}
