use leafy_core::prelude::*;

use crate::view_model::LandingModel;

#[component]
pub fn LandingPage() -> impl IntoView {
    let config = expect_context::<StorefrontConfig>();
    let model = LandingModel::build(&config);
    let hero = format!("background-image: url('{}')", model.hero_image);

    view! {
        <section class="hero" style=hero>
            <div class="hero-content">
                <h2>{model.heading}</h2>
                <p>{model.tagline}</p>
                <A href=model.cta_route.path() attr:class="btn">{model.cta_label}</A>
            </div>
        </section>
    }
}
