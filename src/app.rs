//! Root application module.
//!
//! Contains the main App component, the AppContext definition and the
//! application-level wiring of cache, search and navigation state.

use std::rc::Rc;

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::{SEARCH_MODE, api_base};
use crate::core::liff::Profile;
use crate::core::{HttpApi, MaterialCache, Navigator, Search};
use crate::models::{Feature, PageQuery};
use crate::utils::dom;

// ============================================================================
// Session
// ============================================================================

/// LIFF session lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Session {
    /// SDK initializing or login redirect pending.
    #[default]
    Booting,
    /// Logged in; the app content is shown.
    Ready(Profile),
    /// Initialization failed; setup is halted.
    Failed,
}

impl Session {
    pub fn display_name(&self) -> Option<String> {
        match self {
            Self::Ready(profile) => Some(profile.display_name.clone()),
            _ => None,
        }
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Navigation**: [`Navigator`] in a signal; components paint from it
/// - **Session**: LIFF login state and profile
/// - **Data**: the [`MaterialCache`] and the configured [`Search`] strategy,
///   kept in thread-local stored values because they hold `Rc`s
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Feature and materials-page navigation state.
    pub nav: RwSignal<Navigator>,

    /// LIFF session state.
    pub session: RwSignal<Session>,

    /// Backend cache shared by every panel.
    cache: StoredValue<MaterialCache<HttpApi>, LocalStorage>,

    /// Search strategy built on top of the cache.
    search: StoredValue<Rc<Search<HttpApi>>, LocalStorage>,
}

impl AppContext {
    /// Creates the context from the current URL and configuration.
    pub fn new() -> Self {
        let cache = MaterialCache::new(HttpApi::new(api_base()));
        let search = Rc::new(Search::new(SEARCH_MODE, &cache));
        Self {
            nav: RwSignal::new(Navigator::from_query(&PageQuery::current())),
            session: RwSignal::new(Session::Booting),
            cache: StoredValue::new_local(cache),
            search: StoredValue::new_local(search),
        }
    }

    pub fn cache(&self) -> MaterialCache<HttpApi> {
        self.cache.get_value()
    }

    pub fn search(&self) -> Rc<Search<HttpApi>> {
        self.search.get_value()
    }

    /// Apply a navigation transition.
    pub fn navigate<R>(&self, f: impl FnOnce(&mut Navigator) -> R) -> Option<R> {
        self.nav.try_update(f)
    }

    /// Switch feature from the bottom navigation and record it in history.
    pub fn switch_feature(&self, feature: Feature) {
        let topic = PageQuery::current().topic;
        PageQuery { feature, topic }.push();
        self.navigate(|n| n.switch_feature(feature));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #f5f7fa;
                    color: #333;
                    font-family: sans-serif;
                ">
                    <div style="max-width: 480px; text-align: center;">
                        <h1 style="color: #e74c3c; margin-bottom: 1rem;">
                            "發生錯誤"
                        </h1>
                        <p style="color: #666; margin-bottom: 2rem;">
                            "頁面發生未預期的錯誤，請重新載入。"
                        </p>
                        <details style="
                            text-align: left;
                            background: #fff;
                            padding: 1rem;
                            border-radius: 8px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #888;">
                                "錯誤詳情"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #e74c3c;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| dom::reload()
                            style="
                                background: #06c755;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 8px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "重新載入"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
