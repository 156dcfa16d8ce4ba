//! Application shell: layout, routes and document title.

use chrono::Datelike;
use leafy_commerce::prelude::Catalog;
use leafy_core::prelude::*;
use leptos_router::hooks::use_location;

use crate::pages::{CartPage, LandingPage, NotFound, ShopPage};
use crate::state::{provide_cart, use_cart};
use crate::view_model::{FooterModel, HeaderModel};

#[component]
pub fn App(config: StorefrontConfig, routes: RouteRegistry) -> impl IntoView {
    provide_meta_context();
    provide_cart(Catalog::houseplants());

    let routes = StoredValue::new(routes);
    let store_name = config.name.clone();
    let default_title = config.title.clone();
    let stylesheet = config
        .css_path
        .clone()
        .map(|href| view! { <Stylesheet id="leafy" href=href/> });
    provide_context(config);

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        {stylesheet}
        <Meta name="description" content="Boutique houseplants, sourced responsibly and shipped with care"/>

        <Router>
            <RouteTitle routes default_title/>
            <Header store_name=store_name.clone() routes/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=LandingPage/>
                    <Route path=path!("/shop") view=ShopPage/>
                    <Route path=path!("/cart") view=CartPage/>
                </Routes>
            </main>
            <Footer store_name/>
        </Router>
    }
}

/// Keeps the document title in step with the current route and logs
/// navigations.
#[component]
fn RouteTitle(routes: StoredValue<RouteRegistry>, default_title: String) -> impl IntoView {
    let pathname = use_location().pathname;

    Effect::new(move |_| {
        let path = pathname.get();
        let route = AppRoute::from_path(&path);
        tracing::info!(target: "nav", path = %path, known = route.is_some(), "navigate");
    });

    let title = move || {
        pathname.with(|path| {
            routes
                .with_value(|r| r.resolve(path).map(|entry| entry.meta.title.clone()))
                .unwrap_or_else(|| default_title.clone())
        })
    };

    view! { <Title text=title/> }
}

#[component]
fn Header(store_name: String, routes: StoredValue<RouteRegistry>) -> impl IntoView {
    let cart = use_cart();
    let model = Memo::new(move |_| {
        let state = cart.state();
        state.with(|s| routes.with_value(|r| HeaderModel::build(&store_name, r, s)))
    });

    view! {
        <header>
            {move || {
                let m = model.get();
                view! {
                    <A href=m.home_href attr:class="brand">
                        <h1>{m.store_name.clone()}</h1>
                    </A>
                }
            }}
            <nav>
                {move || {
                    model
                        .get()
                        .nav
                        .into_iter()
                        .map(|link| view! { <A href=link.href>{link.label}</A> })
                        .collect_view()
                }}
                <A href=AppRoute::Cart.path() attr:class="cart-badge">
                    "\u{1f6d2} "
                    <span class="count">{move || model.with(|m| m.cart_count)}</span>
                </A>
            </nav>
        </header>
    }
}

#[component]
fn Footer(store_name: String) -> impl IntoView {
    let year = chrono::Local::now().year();
    let model = FooterModel::build(&store_name, year);

    view! {
        <footer>
            <p>{model.text}</p>
        </footer>
    }
}
