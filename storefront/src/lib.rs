//! Leafy Lane storefront.
//!
//! A client-rendered Leptos app over the `leafy-*` crates. Pages render plain
//! view models from [`view_model`], so the cart flow can be checked without
//! a browser.

mod app;
mod pages;
mod state;
pub mod view_model;

use leafy_core::prelude::*;

pub use app::App;

/// Install logging and mount the app on `<body>`.
pub fn mount() {
    console_error_panic_hook::set_once();

    let (config, routes) = LeafyApp::from_toml(include_str!("../storefront.toml")).build();

    if let Err(e) = leafy_observability::init(config.log, console_sink) {
        leptos::logging::warn!("{}", e);
    }
    tracing::info!(store = %config.name, "storefront starting");

    leptos::mount::mount_to_body(move || view! { <App config routes/> });
}

fn console_sink(line: &str) {
    leptos::logging::log!("{}", line);
}
