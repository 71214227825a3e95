use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::text;
use crate::models::Feature;

stylance::import_crate_style!(css, "src/components/placeholder.module.css");

/// Titled panel for features that have no content yet.
#[component]
pub fn Placeholder(feature: Feature) -> impl IntoView {
    let icon = match feature {
        Feature::Report => ic::REPORT,
        _ => ic::CARDS,
    };

    view! {
        <section class=css::panel>
            <span class=css::icon><Icon icon=icon /></span>
            <h2 class=css::title>{feature.title()}</h2>
            <p class=css::body>{text::PLACEHOLDER_BODY}</p>
        </section>
    }
}
