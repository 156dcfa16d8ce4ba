use leafy_core::prelude::*;

use crate::state::use_cart;
use crate::view_model::{CategorySection, ProductCardModel};

/// Product listing, one section per category.
#[component]
pub fn ShopPage() -> impl IntoView {
    let cart = use_cart();

    view! {
        <section class="shop">
            <h2>"Shop"</h2>
            {move || {
                cart.listing()
                    .sections
                    .into_iter()
                    .map(|section| view! { <Category section/> })
                    .collect_view()
            }}
        </section>
    }
}

#[component]
fn Category(section: CategorySection) -> impl IntoView {
    view! {
        <div class="category">
            <h3>{section.name}</h3>
            <div class="products">
                {section
                    .cards
                    .into_iter()
                    .map(|card| view! { <ProductCard card/> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ProductCard(card: ProductCardModel) -> impl IntoView {
    let cart = use_cart();
    let label = card.button_label();
    let action = card.add_action();
    let disabled = action.is_none();

    view! {
        <div class="product-card">
            <img src=card.image_url alt=card.name.clone()/>
            <div class="product-info">
                <h4>{card.name}</h4>
                <p class="category">{card.category}</p>
                <p class="price">{card.price}</p>
                <button
                    class="btn"
                    disabled=disabled
                    on:click=move |_| {
                        if let Some(action) = action.clone() {
                            cart.dispatch(action);
                        }
                    }
                >
                    {label}
                </button>
            </div>
        </div>
    }
}
