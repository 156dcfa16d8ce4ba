//! The observable cart store.
//!
//! `CartStore` is the single owner of the cart state. Views dispatch
//! transitions through it and subscribe to be told when the state changed.
//! Listeners run synchronously, after the transition has fully completed.

use crate::cart::{CartAction, CartState};
use crate::catalog::Catalog;
use crate::ids::ProductId;
use crate::money::Money;
use std::fmt;

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&CartState)>;

/// Owns a [`CartState`] and notifies subscribers of changes.
#[derive(Default)]
pub struct CartStore {
    state: CartState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl CartStore {
    /// Create a store with an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Apply a transition and notify listeners if the state changed.
    ///
    /// Returns whether the state changed.
    pub fn dispatch(&mut self, action: CartAction) -> bool {
        let changed = self.state.apply(&action);

        tracing::debug!(
            action = action.name(),
            product_id = action.product_id().map(ProductId::as_str),
            changed,
            total_count = self.state.total_count(),
            "cart transition"
        );

        if changed {
            self.notify();
        }
        changed
    }

    /// Add one unit of a product.
    pub fn add(&mut self, id: impl Into<ProductId>) -> bool {
        self.dispatch(CartAction::Add(id.into()))
    }

    /// Add one unit of a product already shown in the cart.
    pub fn increase(&mut self, id: impl Into<ProductId>) -> bool {
        self.dispatch(CartAction::Increase(id.into()))
    }

    /// Remove one unit of a product.
    pub fn decrease(&mut self, id: impl Into<ProductId>) -> bool {
        self.dispatch(CartAction::Decrease(id.into()))
    }

    /// Remove a product entirely.
    pub fn remove(&mut self, id: impl Into<ProductId>) -> bool {
        self.dispatch(CartAction::Remove(id.into()))
    }

    /// Empty the cart.
    pub fn clear(&mut self) -> bool {
        self.dispatch(CartAction::Clear)
    }

    /// Sum of all quantities.
    pub fn total_count(&self) -> u64 {
        self.state.total_count()
    }

    /// Total cost of the cart against a catalog.
    pub fn total_cost(&self, catalog: &Catalog) -> Money {
        self.state.total_cost(catalog)
    }

    /// Register a listener called with the new state after each change.
    pub fn subscribe(&mut self, listener: impl FnMut(&CartState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Drop a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() < len_before
    }

    /// Number of registered listeners.
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        let state = &self.state;
        for (_, listener) in self.listeners.iter_mut() {
            listener(state);
        }
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
