//! Header bar component.
//!
//! Close button, feature title and the logged-in user's name.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::{AppContext, Session};
use crate::components::icons as ic;
use crate::config::text;
use crate::core::liff;
use crate::models::Feature;
use crate::utils::{console, dom};

stylance::import_crate_style!(css, "src/components/header.module.css");

/// Header bar.
///
/// The back button closes the LIFF window; inside an external browser
/// `closeWindow` does nothing.
#[component]
pub fn Header(feature: Memo<Feature>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let user_name = Signal::derive(move || ctx.session.with(|s| s.display_name()).unwrap_or_default());
    let avatar = Signal::derive(move || {
        ctx.session.with(|s| match s {
            Session::Ready(profile) => profile.picture_url.clone(),
            _ => None,
        })
    });
    let title = Signal::derive(move || feature.get().title());

    let on_close = move |_: leptos::ev::MouseEvent| {
        if let Err(e) = liff::close_window() {
            console::warn(&format!("closeWindow failed: {}", e));
        }
    };

    view! {
        <header class=css::bar>
            <button class=css::iconButton on:click=on_close title="關閉">
                <Icon icon=ic::CHEVRON_LEFT />
            </button>

            <h1 class=css::title>{title}</h1>

            <div class=css::section>
                <span class=css::user>
                    {move || match avatar.get() {
                        Some(src) => view! { <img class=css::avatar src=src alt="" /> }.into_any(),
                        None => view! { <span class=css::userIcon><Icon icon=ic::USER /></span> }.into_any(),
                    }}
                    <span class=css::userName>{user_name}</span>
                </span>
                <button
                    class=css::iconButton
                    on:click=move |_| dom::alert(text::MENU_COMING_SOON)
                    title="選單"
                >
                    <Icon icon=ic::MENU />
                </button>
            </div>
        </header>
    }
}
