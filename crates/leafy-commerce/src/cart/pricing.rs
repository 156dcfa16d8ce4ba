//! Cart pricing calculations.

use crate::cart::{CartState, Quantity};
use crate::catalog::{Catalog, Product};
use crate::money::{Currency, Money};

/// Pricing breakdown for a cart, joined against the catalog.
///
/// Recomputed from the state every time; nothing here is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPricing<'a> {
    /// Priced lines, in cart order. Entries missing from the catalog are skipped.
    pub lines: Vec<LinePricing<'a>>,
    /// Sum of quantities, including entries missing from the catalog.
    pub total_count: u64,
    /// Sum of line subtotals.
    pub total_cost: Money,
}

impl<'a> CartPricing<'a> {
    /// Price every cart entry against the catalog.
    pub fn calculate(cart: &CartState, catalog: &'a Catalog) -> Self {
        let lines: Vec<LinePricing<'a>> = cart
            .iter()
            .filter_map(|(id, quantity)| {
                catalog
                    .lookup(id.as_str())
                    .map(|product| LinePricing::new(product, quantity))
            })
            .collect();

        let total_cost = Money::saturating_sum(lines.iter().map(|l| &l.subtotal), Currency::INR);

        Self {
            lines,
            total_count: cart.total_count(),
            total_cost,
        }
    }

    /// Check if there is nothing to price.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Pricing for a single cart entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePricing<'a> {
    /// The product being bought.
    pub product: &'a Product,
    /// Quantity held.
    pub quantity: Quantity,
    /// `unit_price * quantity`.
    pub subtotal: Money,
}

impl<'a> LinePricing<'a> {
    fn new(product: &'a Product, quantity: Quantity) -> Self {
        Self {
            product,
            quantity,
            subtotal: product.unit_price.saturating_mul(quantity),
        }
    }
}
