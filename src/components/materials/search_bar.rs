use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::text;

stylance::import_crate_style!(css, "src/components/materials/search_bar.module.css");

/// Keyword input. Blank submissions are ignored by the navigator.
#[component]
pub fn SearchBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let draft = RwSignal::new(String::new());

    // Returning to the topics grid starts a fresh search
    Effect::new(move |_| {
        if ctx.nav.with(|n| n.at_topics()) {
            draft.set(String::new());
        }
    });

    let submit = move || {
        draft.with_untracked(|keyword| ctx.navigate(|n| n.submit_search(keyword)));
    };

    view! {
        <div class=css::bar role="search">
            <input
                class=css::input
                type="search"
                placeholder=text::SEARCH_PLACEHOLDER
                prop:value=draft
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        submit();
                    }
                }
            />
            <button class=css::button on:click=move |_| submit() title="搜索">
                <Icon icon=ic::SEARCH />
            </button>
        </div>
    }
}
