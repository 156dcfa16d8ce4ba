//! Plain-data descriptions of what each page renders.
//!
//! Every model is built from the current cart state and the static catalog
//! and nothing else, so the pages stay stateless and the models can be
//! checked without a browser.

use leafy_commerce::prelude::*;
use leafy_core::StorefrontConfig;
use leafy_router::{AppRoute, RouteRegistry};

/// A header navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// The shared page header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderModel {
    pub store_name: String,
    pub home_href: &'static str,
    pub nav: Vec<NavLink>,
    pub cart_href: &'static str,
    pub cart_count: u64,
}

impl HeaderModel {
    pub fn build(store_name: &str, routes: &RouteRegistry, cart: &CartState) -> Self {
        Self {
            store_name: store_name.to_string(),
            home_href: AppRoute::Landing.path(),
            nav: routes
                .nav_entries()
                .map(|entry| NavLink {
                    label: entry.route.nav_label(),
                    href: entry.path(),
                })
                .collect(),
            cart_href: AppRoute::Cart.path(),
            cart_count: cart.total_count(),
        }
    }
}

/// The landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingModel {
    pub heading: String,
    pub tagline: String,
    pub hero_image: String,
    pub cta_label: &'static str,
    pub cta_route: AppRoute,
}

impl LandingModel {
    pub fn build(config: &StorefrontConfig) -> Self {
        Self {
            heading: config.name.clone(),
            tagline: config.tagline.clone(),
            hero_image: config.hero_image.clone(),
            cta_label: "Get Started \u{2192}",
            cta_route: AppRoute::Shop,
        }
    }
}

/// One product card on the shop page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardModel {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: String,
    pub image_url: String,
    pub in_cart: bool,
}

impl ProductCardModel {
    fn build(product: &Product, cart: &CartState) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price_display(),
            image_url: product.image_url.clone(),
            in_cart: cart.contains(product.id.as_str()),
        }
    }

    /// Button text.
    pub fn button_label(&self) -> &'static str {
        if self.in_cart {
            "Added"
        } else {
            "Add to Cart"
        }
    }

    /// What the button dispatches. `None` once the product is in the cart,
    /// which is when the button is disabled.
    pub fn add_action(&self) -> Option<CartAction> {
        (!self.in_cart).then(|| CartAction::Add(self.id.clone()))
    }
}

/// A category section on the shop page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    pub name: String,
    pub cards: Vec<ProductCardModel>,
}

/// The shop page: one section per category, in first-seen catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingModel {
    pub sections: Vec<CategorySection>,
}

impl ListingModel {
    pub fn build(catalog: &Catalog, cart: &CartState) -> Self {
        let sections = catalog
            .groups()
            .into_iter()
            .map(|group| CategorySection {
                name: group.name.to_string(),
                cards: group
                    .products
                    .iter()
                    .map(|product| ProductCardModel::build(product, cart))
                    .collect(),
            })
            .collect();

        Self { sections }
    }

    /// Find a card by product id.
    pub fn card(&self, id: &str) -> Option<&ProductCardModel> {
        self.sections
            .iter()
            .flat_map(|s| s.cards.iter())
            .find(|c| c.id.as_str() == id)
    }
}

/// One row on the cart page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRowModel {
    pub id: ProductId,
    pub name: String,
    pub image_url: String,
    pub unit_price: String,
    pub quantity: Quantity,
}

impl CartRowModel {
    pub fn increase_action(&self) -> CartAction {
        CartAction::Increase(self.id.clone())
    }

    pub fn decrease_action(&self) -> CartAction {
        CartAction::Decrease(self.id.clone())
    }

    pub fn remove_action(&self) -> CartAction {
        CartAction::Remove(self.id.clone())
    }
}

/// The totals block at the top of the cart page, shown whether or not the
/// cart is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummaryModel {
    pub total_items: String,
    pub total_cost: String,
}

/// The cart page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPageModel {
    /// "Total items".
    pub total_count: u64,
    /// "Total cost", formatted.
    pub total_cost: String,
    /// Rows for entries found in the catalog, in cart order.
    pub rows: Vec<CartRowModel>,
    /// Show the "Your cart is empty." block instead of rows and actions.
    pub show_empty_state: bool,
}

impl CartPageModel {
    pub fn build(catalog: &Catalog, cart: &CartState) -> Self {
        let pricing = CartPricing::calculate(cart, catalog);

        let rows = pricing
            .lines
            .iter()
            .map(|line| CartRowModel {
                id: line.product.id.clone(),
                name: line.product.name.clone(),
                image_url: line.product.image_url.clone(),
                unit_price: line.product.price_display(),
                quantity: line.quantity,
            })
            .collect();

        Self {
            total_count: pricing.total_count,
            total_cost: pricing.total_cost.display(),
            rows,
            show_empty_state: cart.is_empty(),
        }
    }

    pub fn summary(&self) -> CartSummaryModel {
        CartSummaryModel {
            total_items: format!("Total items: {}", self.total_count),
            total_cost: self.total_cost.clone(),
        }
    }

    /// Where "Continue Shopping" goes.
    pub fn continue_route(&self) -> AppRoute {
        AppRoute::Shop
    }
}

/// The shared page footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterModel {
    pub text: String,
}

impl FooterModel {
    pub fn build(store_name: &str, year: i32) -> Self {
        Self {
            text: format!("\u{a9} {} {}. All rights reserved.", year, store_name),
        }
    }
}
