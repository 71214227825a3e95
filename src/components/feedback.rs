//! Loading, empty and error panels shared by every list.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::text;

stylance::import_crate_style!(css, "src/components/feedback.module.css");

/// Inline loading spinner with label.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class=css::loading role="status">
            <div class=css::spinner />
            <span>{text::LOADING}</span>
        </div>
    }
}

/// "Nothing here" panel.
#[component]
pub fn NoData(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class=css::noData>
            <span class=css::icon><Icon icon=ic::EMPTY /></span>
            <p>{message}</p>
        </div>
    }
}

/// Inline error panel, with a retry button when `on_retry` is given.
#[component]
pub fn ErrorPanel(
    #[prop(into)] message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class=css::error role="alert">
            <span class=css::icon><Icon icon=ic::WARNING /></span>
            <p>{message}</p>
            {on_retry.map(|retry| view! {
                <button class=css::retry on:click=move |_| retry.run(())>
                    {text::RETRY}
                </button>
            })}
        </div>
    }
}
