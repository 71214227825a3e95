//! Application router component.
//!
//! Routing is query-string based (`?feature=...&topic=...`) because LIFF
//! deep links land on a single page.
//!
//! # Architecture
//!
//! - **The navigator is the source of truth**: the URL is read once at start
//!   and again on every `popstate`; the bottom nav writes it with pushState
//! - **Session gating**: nothing but the splash is shown until LIFF has
//!   initialized and the user is logged in
//! - **Header and nav never re-render on navigation**: only the page body
//!   switches with the feature

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use super::boot;
use super::dashboard::Dashboard;
use super::feedback::Loading;
use super::header::Header;
use super::materials::MaterialsPage;
use super::nav::BottomNav;
use super::placeholder::Placeholder;
use crate::app::{AppContext, Session};
use crate::models::Feature;
#[cfg(target_arch = "wasm32")]
use crate::models::PageQuery;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Main application router.
///
/// - `?feature=dashboard` (or none) → Dashboard
/// - `?feature=learning` / `?feature=materials` → Materials browser
/// - `?feature=cards` / `?feature=report` → Placeholder pages
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Browser back/forward between features (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.navigate(|n| n.sync_query(&PageQuery::current()));
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    boot::run(ctx);

    let feature = Memo::new(move |_| ctx.nav.with(|n| n.feature()));

    Effect::new(move |_| {
        dom::set_document_title(&feature.get().document_title());
    });

    let ready = Memo::new(move |_| ctx.session.with(|s| matches!(s, Session::Ready(_))));
    let failed = Memo::new(move |_| ctx.session.with(|s| matches!(s, Session::Failed)));

    view! {
        <Show
            when=move || ready.get()
            fallback=move || view! {
                // A failed init has already alerted; setup stays halted
                <div class=css::splash>
                    <Show when=move || !failed.get()>
                        <Loading />
                    </Show>
                </div>
            }
        >
            <div class=css::layout>
                <Header feature=feature />
                <main class=css::content>
                    {move || match feature.get() {
                        Feature::Dashboard => view! { <Dashboard /> }.into_any(),
                        f if f.shows_materials() => view! { <MaterialsPage /> }.into_any(),
                        other => view! { <Placeholder feature=other /> }.into_any(),
                    }}
                </main>
                <BottomNav feature=feature />
            </div>
        </Show>
    }
}
