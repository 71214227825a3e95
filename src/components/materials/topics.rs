//! Topics grid.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::paint;
use crate::app::AppContext;
use crate::components::feedback::{ErrorPanel, Loading, NoData};
use crate::components::icons as ic;
use crate::config::text;
use crate::core::LoadTicket;
use crate::models::{LoadState, TopicCard, topics_use_full_grid};

stylance::import_crate_style!(css, "src/components/materials/topics.module.css");

/// One card per topic, always followed by the recommended card.
#[component]
pub fn TopicsGrid(ticket: LoadTicket) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = RwSignal::new(LoadState::<Vec<TopicCard>>::Loading);

    let load = move || {
        let cache = ctx.cache();
        paint(ctx, ticket, state, "topics".to_string(), async move {
            let cards = cache.get_topics().await.map(|topics| {
                topics
                    .iter()
                    .map(|name| TopicCard {
                        name: name.clone(),
                        count: cache.cached_count(name),
                    })
                    .collect::<Vec<_>>()
            });
            LoadState::from_list(cards, text::TOPICS_FAILED)
        });
    };
    load();

    view! {
        <section class=css::topics>
            {move || match state.get() {
                LoadState::Loading => view! { <Loading /> }.into_any(),
                LoadState::Empty => view! { <NoData message=text::NO_TOPICS /> }.into_any(),
                LoadState::Failed(message) => {
                    view! { <ErrorPanel message=message on_retry=Callback::new(move |_| load()) /> }
                        .into_any()
                }
                LoadState::Ready(topics) => {
                    let grid_class = if topics_use_full_grid(topics.len()) {
                        format!("{} {}", css::grid, css::fullGrid)
                    } else {
                        css::grid.to_string()
                    };
                    view! {
                        <div class=grid_class>
                            {topics
                                .into_iter()
                                .map(|card| view! { <TopicTile card=card /> })
                                .collect_view()}
                            <button
                                class=format!("{} {}", css::card, css::recommended)
                                on:click=move |_| {
                                    ctx.navigate(|n| n.open_recommended());
                                }
                            >
                                <span class=css::cardIcon><Icon icon=ic::STAR /></span>
                                <span class=css::cardTitle>{text::RECOMMENDED_CARD}</span>
                            </button>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn TopicTile(card: TopicCard) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let subtitle = card.subtitle();
    let name = card.name;
    let label = name.clone();

    view! {
        <button
            class=css::card
            on:click=move |_| {
                ctx.navigate(|n| n.open_topic(name.clone()));
            }
        >
            <span class=css::cardTitle>{label}</span>
            {subtitle.map(|s| view! { <span class=css::cardMeta>{s}</span> })}
            <span class=css::chevron><Icon icon=ic::CHEVRON_RIGHT /></span>
        </button>
    }
}
