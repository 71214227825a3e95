//! Material lists: one topic, the recommended set, or search results.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::paint;
use crate::app::AppContext;
use crate::components::feedback::{ErrorPanel, Loading, NoData};
use crate::components::icons::{self as ic, material_glyph};
use crate::config::text;
use crate::core::{ListView, LoadTicket, SearchStrategy};
use crate::models::{LoadState, Material, MaterialCard};

stylance::import_crate_style!(css, "src/components/materials/list.module.css");

fn heading(list: &ListView) -> String {
    match list {
        ListView::Topics => String::new(),
        ListView::Topic(topic) => topic.clone(),
        ListView::Recommended => text::RECOMMENDED_TITLE.to_string(),
        ListView::Search(keyword) => text::search_heading(keyword.as_str()),
    }
}

fn describe(list: &ListView) -> String {
    match list {
        ListView::Topics => "topics".to_string(),
        ListView::Topic(topic) => format!("topic {}", topic),
        ListView::Recommended => "recommended materials".to_string(),
        ListView::Search(keyword) => format!("search \"{}\"", keyword.as_str()),
    }
}

fn cards(materials: &[Material]) -> Vec<MaterialCard> {
    materials.iter().map(MaterialCard::from).collect()
}

#[component]
pub fn MaterialList(list: ListView, ticket: LoadTicket) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = RwSignal::new(LoadState::<Vec<MaterialCard>>::Loading);
    let title = heading(&list);
    let source = StoredValue::new(list);

    let load = move || {
        let list = source.get_value();
        let cache = ctx.cache();
        let search = ctx.search();
        paint(ctx, ticket, state, describe(&list), async move {
            match list {
                ListView::Topic(topic) => LoadState::from_list(
                    cache.get_materials_for_topic(&topic).await.map(|m| cards(&m)),
                    text::MATERIALS_FAILED,
                ),
                ListView::Recommended => LoadState::from_list(
                    cache.get_recommended().await.map(|m| cards(&m)),
                    text::RECOMMENDED_FAILED,
                ),
                ListView::Search(keyword) => LoadState::from_list(
                    search.search(&keyword).await.map(|m| cards(&m)),
                    text::SEARCH_FAILED,
                ),
                ListView::Topics => LoadState::Empty,
            }
        });
    };
    load();

    let on_select = Callback::new(move |material: Material| {
        ctx.navigate(|n| n.open_detail(material));
    });

    view! {
        <section class=css::section>
            <div class=css::listHeader>
                <button
                    class=css::backButton
                    on:click=move |_| {
                        ctx.navigate(|n| n.back());
                    }
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                    <span>{text::BACK_TO_TOPICS}</span>
                </button>
                <h2 class=css::heading>{title}</h2>
            </div>

            {move || match state.get() {
                LoadState::Loading => view! { <Loading /> }.into_any(),
                LoadState::Empty => view! { <NoData message=text::NO_MATERIALS /> }.into_any(),
                LoadState::Failed(message) => {
                    view! { <ErrorPanel message=message on_retry=Callback::new(move |_| load()) /> }
                        .into_any()
                }
                LoadState::Ready(items) => {
                    view! {
                        <ul class=css::list role="list">
                            {items
                                .into_iter()
                                .map(|card| view! { <MaterialRow card=card on_select=on_select /> })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

/// One material row; clicking it hands the material to `on_select`.
#[component]
pub fn MaterialRow(card: MaterialCard, on_select: Callback<Material>) -> impl IntoView {
    let MaterialCard {
        title,
        subtitle,
        icon,
        recommended,
        material,
    } = card;

    view! {
        <li>
            <button class=css::row on:click=move |_| on_select.run(material.clone())>
                <span class=css::rowIcon><Icon icon=material_glyph(icon) /></span>
                <span class=css::rowText>
                    <span class=css::rowTitle>
                        {title}
                        {recommended.then(|| view! {
                            <span class=css::badge title=text::RECOMMENDED_TITLE>
                                <Icon icon=ic::STAR />
                            </span>
                        })}
                    </span>
                    <span class=css::rowMeta>{subtitle}</span>
                </span>
                <span class=css::chevron><Icon icon=ic::CHEVRON_RIGHT /></span>
            </button>
        </li>
    }
}
