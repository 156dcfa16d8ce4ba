//! Reactive bridge between the cart store and the views.

use leafy_commerce::prelude::*;
use leptos::prelude::*;

use crate::view_model::{CartPageModel, ListingModel};

/// Handle shared through context by every page.
///
/// The store is the single owner of the cart. Its subscription copies each
/// new state into `state`, which is what the views track.
#[derive(Clone, Copy)]
pub struct CartContext {
    store: StoredValue<CartStore, LocalStorage>,
    state: RwSignal<CartState>,
    catalog: StoredValue<Catalog>,
}

impl CartContext {
    pub fn new(catalog: Catalog) -> Self {
        let state = RwSignal::new(CartState::new());

        let mut store = CartStore::new();
        store.subscribe(move |next: &CartState| state.set(next.clone()));

        Self {
            store: StoredValue::new_local(store),
            state,
            catalog: StoredValue::new(catalog),
        }
    }

    /// Apply a transition. Returns whether the cart changed.
    pub fn dispatch(&self, action: CartAction) -> bool {
        self.store
            .try_update_value(|store| store.dispatch(action))
            .unwrap_or(false)
    }

    /// The tracked cart state.
    pub fn state(&self) -> ReadSignal<CartState> {
        self.state.read_only()
    }

    /// Total units in the cart, tracked.
    pub fn total_count(&self) -> u64 {
        self.state.with(CartState::total_count)
    }

    /// The shop page model, tracked.
    pub fn listing(&self) -> ListingModel {
        self.state
            .with(|state| self.catalog.with_value(|catalog| ListingModel::build(catalog, state)))
    }

    /// The cart page model, tracked.
    pub fn cart_page(&self) -> CartPageModel {
        self.state
            .with(|state| self.catalog.with_value(|catalog| CartPageModel::build(catalog, state)))
    }

    pub fn checkout(&self) -> Result<(), CommerceError> {
        self.state.with_untracked(checkout)
    }
}

/// Create the cart and put it in context.
pub fn provide_cart(catalog: Catalog) -> CartContext {
    let cart = CartContext::new(catalog);
    provide_context(cart);
    cart
}

pub fn use_cart() -> CartContext {
    expect_context::<CartContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_dispatch_mirrors_store_into_signal() {
        let owner = Owner::new();
        owner.with(|| {
            let cart = CartContext::new(Catalog::houseplants());
            assert_eq!(cart.state().get_untracked(), CartState::new());

            assert!(cart.dispatch(CartAction::Add("aloe".into())));
            assert_eq!(cart.state().get_untracked().quantity("aloe"), 1);
            assert_eq!(cart.total_count(), 1);
            assert_eq!(cart.cart_page().total_cost, "\u{20b9}4.99");
            assert_eq!(
                cart.listing().card("aloe").map(|c| c.button_label()),
                Some("Added")
            );

            assert!(cart.dispatch(CartAction::Decrease("aloe".into())));
            assert!(cart.state().get_untracked().is_empty());
            assert!(cart.cart_page().show_empty_state);
        });
    }

    #[test]
    fn test_unchanged_dispatch_reports_false() {
        let owner = Owner::new();
        owner.with(|| {
            let cart = CartContext::new(Catalog::houseplants());
            assert!(!cart.dispatch(CartAction::Decrease("fern".into())));
            assert!(!cart.dispatch(CartAction::Clear));
            assert!(cart.state().get_untracked().is_empty());
        });
    }

    #[test]
    fn test_checkout_does_not_touch_state() {
        let owner = Owner::new();
        owner.with(|| {
            let cart = CartContext::new(Catalog::houseplants());
            cart.dispatch(CartAction::Add("snake".into()));

            let err = cart.checkout().unwrap_err();
            assert_eq!(err.to_string(), CHECKOUT_NOTICE);
            assert_eq!(cart.state().get_untracked().quantity("snake"), 1);
        });
    }
}
