use leafy_commerce::prelude::CartAction;
use leafy_core::prelude::*;

use crate::state::use_cart;
use crate::view_model::{CartPageModel, CartRowModel, CartSummaryModel};

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = use_cart();

    view! {
        <section class="cart">
            <h2>"Your Cart"</h2>
            {move || {
                let page = cart.cart_page();
                let summary = view! { <CartSummary summary=page.summary()/> };
                let body = if page.show_empty_state {
                    view! { <EmptyCart/> }.into_any()
                } else {
                    view! { <CartContents page/> }.into_any()
                };
                view! { {summary} {body} }
            }}
        </section>
    }
}

#[component]
fn CartSummary(summary: CartSummaryModel) -> impl IntoView {
    view! {
        <div class="cart-summary">
            <p>{summary.total_items}</p>
            <p>"Total cost: " <strong>{summary.total_cost}</strong></p>
        </div>
    }
}

#[component]
fn EmptyCart() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="cart-empty">
            <p>"Your cart is empty."</p>
            <button class="btn" on:click=move |_| navigate(AppRoute::Shop.path(), Default::default())>
                "Continue Shopping"
            </button>
        </div>
    }
}

#[component]
fn CartContents(page: CartPageModel) -> impl IntoView {
    let cart = use_cart();
    let navigate = use_navigate();
    let continue_path = page.continue_route().path();

    let on_checkout = move |_| {
        if let Err(err) = cart.checkout() {
            let _ = window().alert_with_message(&err.to_string());
        }
    };

    view! {
        <div class="cart-items">
            {page.rows.into_iter().map(|row| view! { <CartRow row/> }).collect_view()}
        </div>
        <div class="cart-actions">
            <button class="btn" on:click=move |_| navigate(continue_path, Default::default())>
                "Continue Shopping"
            </button>
            <button class="btn" on:click=on_checkout>"Checkout"</button>
            <button
                class="btn danger"
                on:click=move |_| {
                    cart.dispatch(CartAction::Clear);
                }
            >
                "Clear Cart"
            </button>
        </div>
    }
}

#[component]
fn CartRow(row: CartRowModel) -> impl IntoView {
    let cart = use_cart();
    let increase = row.increase_action();
    let decrease = row.decrease_action();
    let remove = row.remove_action();

    view! {
        <div class="cart-item">
            <img src=row.image_url alt=row.name.clone()/>
            <div class="cart-item-info">
                <h4>{row.name}</h4>
                <p>"Unit: " {row.unit_price}</p>
                <div class="quantity">
                    <button on:click=move |_| {
                        cart.dispatch(decrease.clone());
                    }>"-"</button>
                    <span>{row.quantity}</span>
                    <button on:click=move |_| {
                        cart.dispatch(increase.clone());
                    }>"+"</button>
                </div>
                <button
                    class="btn danger"
                    on:click=move |_| {
                        cart.dispatch(remove.clone());
                    }
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
