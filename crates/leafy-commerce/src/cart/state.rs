//! Cart state and its transitions.

use crate::catalog::Catalog;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quantity of one product held in the cart. Always at least 1 while stored.
pub type Quantity = u32;

/// A named cart transition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "product_id", rename_all = "snake_case")]
pub enum CartAction {
    /// Insert with quantity 1, or increment.
    Add(ProductId),
    /// Same effect as `Add`; dispatched by the cart page's "+" control.
    Increase(ProductId),
    /// Decrement, removing the entry when it reaches zero. No-op if absent.
    Decrease(ProductId),
    /// Drop the entry. No-op if absent.
    Remove(ProductId),
    /// Drop every entry.
    Clear,
}

impl CartAction {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::Add(_) => "add",
            CartAction::Increase(_) => "increase",
            CartAction::Decrease(_) => "decrease",
            CartAction::Remove(_) => "remove",
            CartAction::Clear => "clear",
        }
    }

    /// The product the action targets, if any.
    pub fn product_id(&self) -> Option<&ProductId> {
        match self {
            CartAction::Add(id)
            | CartAction::Increase(id)
            | CartAction::Decrease(id)
            | CartAction::Remove(id) => Some(id),
            CartAction::Clear => None,
        }
    }
}

impl fmt::Display for CartAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.product_id() {
            Some(id) => write!(f, "{}({})", self.name(), id),
            None => write!(f, "{}", self.name()),
        }
    }
}

/// Mapping from product id to a positive quantity.
///
/// Entries keep insertion order. A key is never stored with quantity zero;
/// decrementing the last unit removes it. No transition fails, including for
/// ids the catalog does not know.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    items: IndexMap<ProductId, Quantity>,
}

impl CartState {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert with quantity 1, or increment an existing entry.
    pub fn add(&mut self, id: impl Into<ProductId>) -> bool {
        let qty = self.items.entry(id.into()).or_insert(0);
        let before = *qty;
        *qty = qty.saturating_add(1);
        *qty != before
    }

    /// Identical to [`CartState::add`].
    pub fn increase(&mut self, id: impl Into<ProductId>) -> bool {
        self.add(id)
    }

    /// Decrement an entry, removing it once it reaches zero.
    pub fn decrease(&mut self, id: &str) -> bool {
        let Some(qty) = self.items.get_mut(id) else {
            return false;
        };
        if *qty > 1 {
            *qty -= 1;
            return true;
        }
        self.items.shift_remove(id);
        true
    }

    /// Remove an entry regardless of its quantity.
    pub fn remove(&mut self, id: &str) -> bool {
        self.items.shift_remove(id).is_some()
    }

    /// Remove every entry.
    pub fn clear(&mut self) -> bool {
        let changed = !self.items.is_empty();
        self.items.clear();
        changed
    }

    /// Apply a transition. Returns whether the state changed.
    pub fn apply(&mut self, action: &CartAction) -> bool {
        match action {
            CartAction::Add(id) => self.add(id),
            CartAction::Increase(id) => self.increase(id),
            CartAction::Decrease(id) => self.decrease(id.as_str()),
            CartAction::Remove(id) => self.remove(id.as_str()),
            CartAction::Clear => self.clear(),
        }
    }

    /// Consume the state, apply a transition and return the result.
    pub fn with(mut self, action: &CartAction) -> Self {
        self.apply(action);
        self
    }

    /// Quantity held for a product, 0 if absent.
    pub fn quantity(&self, id: &str) -> Quantity {
        self.items.get(id).copied().unwrap_or(0)
    }

    /// Check if a product is in the cart.
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProductId, Quantity)> {
        self.items.iter().map(|(id, qty)| (id, *qty))
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities.
    pub fn total_count(&self) -> u64 {
        self.items.values().map(|&qty| u64::from(qty)).sum()
    }

    /// Sum of `unit_price * quantity` over all entries.
    ///
    /// Entries whose id is missing from the catalog contribute nothing.
    pub fn total_cost(&self, catalog: &Catalog) -> Money {
        self.items
            .iter()
            .filter_map(|(id, &qty)| {
                catalog
                    .lookup(id.as_str())
                    .map(|p| p.unit_price.saturating_mul(qty))
            })
            .fold(Money::zero(Currency::INR), |acc, line| acc.saturating_add(&line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::catalog::Product;

    fn two_plant_catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("aloe", "Aloe Vera", 499, "Succulents", ""),
            Product::new("snake", "Snake Plant", 899, "Low Light", ""),
        ])
        .unwrap()
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = CartState::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_count(), 0);
    }

    #[test]
    fn test_add_inserts_then_increments() {
        let mut cart = CartState::new();
        assert!(cart.add("aloe"));
        assert_eq!(cart.quantity("aloe"), 1);
        assert!(cart.add("aloe"));
        assert_eq!(cart.quantity("aloe"), 2);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_increase_matches_add() {
        let mut added = CartState::new();
        let mut increased = CartState::new();
        added.add("fern");
        added.add("fern");
        increased.increase("fern");
        increased.increase("fern");
        assert_eq!(added, increased);
    }

    #[test]
    fn test_decrease_removes_at_zero() {
        let mut cart = CartState::new();
        cart.add("aloe");
        cart.add("aloe");

        assert!(cart.decrease("aloe"));
        assert_eq!(cart.quantity("aloe"), 1);
        assert!(cart.contains("aloe"));

        assert!(cart.decrease("aloe"));
        assert!(!cart.contains("aloe"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrease_absent_is_noop() {
        let mut cart = CartState::new();
        cart.add("snake");
        let before = cart.clone();

        assert!(!cart.decrease("aloe"));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_ignores_quantity() {
        let mut cart = CartState::new();
        cart.add("aloe");
        cart.add("aloe");
        cart.add("aloe");

        assert!(cart.remove("aloe"));
        assert!(!cart.contains("aloe"));
        assert!(!cart.remove("aloe"));
    }

    #[test]
    fn test_clear() {
        let mut cart = CartState::new();
        cart.add("aloe");
        cart.add("snake");

        assert!(cart.clear());
        assert!(cart.is_empty());
        assert!(!cart.clear());
    }

    #[test]
    fn test_insertion_order_preserved_across_removal() {
        let mut cart = CartState::new();
        cart.add("snake");
        cart.add("aloe");
        cart.add("fern");
        cart.remove("aloe");

        let ids: Vec<&str> = cart.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["snake", "fern"]);
    }

    #[test]
    fn test_add_saturates() {
        let mut cart = CartState::new();
        cart.items.insert(ProductId::new("aloe"), Quantity::MAX);
        assert!(!cart.add("aloe"));
        assert_eq!(cart.quantity("aloe"), Quantity::MAX);
    }

    #[test]
    fn test_totals() {
        let catalog = two_plant_catalog();
        let mut cart = CartState::new();
        cart.add("aloe");
        cart.add("aloe");
        cart.add("snake");

        assert_eq!(cart.total_count(), 3);
        assert_eq!(cart.total_cost(&catalog), Money::inr(1897));
    }

    #[test]
    fn test_unknown_id_costs_nothing() {
        let catalog = two_plant_catalog();
        let mut cart = CartState::new();
        cart.add("aloe");
        cart.add("ghost-orchid");

        assert_eq!(cart.total_count(), 2);
        assert_eq!(cart.total_cost(&catalog), Money::inr(499));
    }

    #[test]
    fn test_apply_dispatches_each_action() {
        let cart = CartState::new()
            .with(&CartAction::Add("aloe".into()))
            .with(&CartAction::Increase("aloe".into()))
            .with(&CartAction::Add("snake".into()))
            .with(&CartAction::Decrease("snake".into()));
        assert_eq!(cart.quantity("aloe"), 2);
        assert!(!cart.contains("snake"));

        let cart = cart.with(&CartAction::Remove("aloe".into()));
        assert!(cart.is_empty());

        let cart = cart
            .with(&CartAction::Add("fern".into()))
            .with(&CartAction::Clear);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_action_display() {
        assert_eq!(CartAction::Add("aloe".into()).to_string(), "add(aloe)");
        assert_eq!(CartAction::Clear.to_string(), "clear");
    }

    #[test]
    fn test_state_serializes_in_insertion_order() {
        let mut cart = CartState::new();
        cart.add("snake");
        cart.add("aloe");
        cart.add("aloe");

        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(json, r#"{"items":{"snake":1,"aloe":2}}"#);
    }
}
