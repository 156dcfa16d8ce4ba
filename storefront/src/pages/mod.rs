//! Route views.

mod cart;
mod landing;
mod shop;

pub use cart::CartPage;
pub use landing::LandingPage;
pub use shop::ShopPage;

use leafy_core::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <A href=AppRoute::Landing.path()>"Back to Home"</A>
        </div>
    }
}
