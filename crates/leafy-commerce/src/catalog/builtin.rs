//! The Leafy Lane houseplant range.

use crate::catalog::Product;

/// Six houseplants across four categories, in shelf order.
pub(super) fn houseplants() -> Vec<Product> {
    vec![
        Product::new(
            "aloe",
            "Aloe Vera",
            499,
            "Succulents",
            "https://images.unsplash.com/photo-1604079628040-94301bb21b91?q=80&w=800&auto=format&fit=crop",
        ),
        Product::new(
            "snake",
            "Snake Plant",
            899,
            "Low Light",
            "https://images.unsplash.com/photo-1528821154947-1aa3d1a65f2d?q=80&w=800&auto=format&fit=crop",
        ),
        Product::new(
            "monstera",
            "Monstera Deliciosa",
            1499,
            "Tropical",
            "https://images.unsplash.com/photo-1587300003388-59208cc962cb?q=80&w=800&auto=format&fit=crop",
        ),
        Product::new(
            "pothos",
            "Golden Pothos",
            699,
            "Low Light",
            "https://images.unsplash.com/photo-1593697821254-0c0b4b2a2c73?q=80&w=800&auto=format&fit=crop",
        ),
        Product::new(
            "peace-lily",
            "Peace Lily",
            1099,
            "Flowering",
            "https://images.unsplash.com/photo-1614594854631-6b2b3a2e0f2c?q=80&w=800&auto=format&fit=crop",
        ),
        Product::new(
            "fern",
            "Boston Fern",
            799,
            "Tropical",
            "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?q=80&w=800&auto=format&fit=crop",
        ),
    ]
}
