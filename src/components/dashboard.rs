//! Home page: greeting, catalog summary and recommended materials.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::feedback::{ErrorPanel, Loading, NoData};
use crate::components::materials::MaterialRow;
use crate::config::text;
use crate::models::{DashboardStats, Feature, Material, MaterialCard};

stylance::import_crate_style!(css, "src/components/dashboard.module.css");

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let greeting = Signal::derive(move || {
        let name = ctx
            .session
            .with(|s| s.display_name())
            .unwrap_or_else(|| text::GREETING_FALLBACK.to_string());
        text::greeting(&name)
    });

    let catalog = LocalResource::new(move || {
        let cache = ctx.cache();
        async move { cache.get_catalog().await }
    });

    // Recommended items open in the materials browser
    let on_select = Callback::new(move |material: Material| {
        ctx.switch_feature(Feature::Materials);
        ctx.navigate(|n| n.open_detail(material));
    });

    view! {
        <div class=css::dashboard>
            <h2 class=css::greeting>{greeting}</h2>

            {move || match catalog.get() {
                None => view! { <Loading /> }.into_any(),
                Some(Err(_)) => {
                    view! {
                        <ErrorPanel
                            message=text::CATALOG_FAILED
                            on_retry=Callback::new(move |_| catalog.refetch())
                        />
                    }
                        .into_any()
                }
                Some(Ok(catalog)) => {
                    let stats = DashboardStats::from(catalog.as_ref());
                    let recommended: Vec<MaterialCard> =
                        catalog.recommended().iter().map(MaterialCard::from).collect();
                    view! {
                        <div class=css::stats>
                            <StatTile label="主題" value=stats.topics />
                            <StatTile label="材料" value=stats.materials />
                            <StatTile label="推薦" value=stats.recommended />
                        </div>

                        <section class=css::section>
                            <h3 class=css::sectionTitle>{text::RECOMMENDED_CARD}</h3>
                            {if recommended.is_empty() {
                                view! { <NoData message=text::NO_MATERIALS /> }.into_any()
                            } else {
                                view! {
                                    <ul class=css::list role="list">
                                        {recommended
                                            .into_iter()
                                            .map(|card| view! { <MaterialRow card=card on_select=on_select /> })
                                            .collect_view()}
                                    </ul>
                                }
                                    .into_any()
                            }}
                        </section>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn StatTile(label: &'static str, value: usize) -> impl IntoView {
    view! {
        <div class=css::stat>
            <span class=css::statValue>{value}</span>
            <span class=css::statLabel>{label}</span>
        </div>
    }
}
