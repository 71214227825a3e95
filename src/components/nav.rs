//! Bottom navigation bar.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Feature;

stylance::import_crate_style!(css, "src/components/nav.module.css");

fn nav_icon(feature: Feature) -> IconData {
    match feature {
        Feature::Dashboard => ic::HOME,
        Feature::Learning | Feature::Materials => ic::LEARNING,
        Feature::Cards => ic::CARDS,
        Feature::Report => ic::REPORT,
    }
}

/// Four-slot navigation; `learning` and `materials` share a slot.
#[component]
pub fn BottomNav(feature: Memo<Feature>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let items = Feature::NAV
        .into_iter()
        .map(|target| {
            let active = move || feature.get().nav_slot() == target.nav_slot();
            view! {
                <button
                    class=move || {
                        if active() {
                            format!("{} {}", css::item, css::active)
                        } else {
                            css::item.to_string()
                        }
                    }
                    aria-current=move || active().then_some("page")
                    on:click=move |_| {
                        if !active() {
                            ctx.switch_feature(target);
                        }
                    }
                >
                    <span class=css::icon><Icon icon=nav_icon(target) /></span>
                    <span class=css::label>{target.nav_label()}</span>
                </button>
            }
        })
        .collect_view();

    view! { <nav class=css::nav>{items}</nav> }
}
