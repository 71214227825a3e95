//! Materials browser.
//!
//! Components:
//! - [`MaterialsPage`] - Search bar, current list and detail modal
//! - [`TopicsGrid`] - Topic cards plus the recommended card
//! - [`MaterialList`] - Topic, recommended or search result list
//! - [`DetailModal`] - Material detail (bottom sheet on mobile)
//!
//! Each list is rebuilt whenever the navigator hands out a new load ticket,
//! and paints its fetch result only while that ticket is still current.

mod detail;
mod list;
mod search_bar;
mod topics;

use std::future::Future;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::core::{ListView, LoadTicket, Navigator};
use crate::models::{LoadState, MaterialDetail};
use crate::utils::console;

use detail::DetailModal;
use list::MaterialList;
use search_bar::SearchBar;
use topics::TopicsGrid;

pub use list::MaterialRow;

stylance::import_crate_style!(css, "src/components/materials/materials.module.css");

#[component]
pub fn MaterialsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Opening or closing the detail modal keeps the ticket, so the list
    // underneath is not refetched.
    let current = Memo::new(move |_| ctx.nav.with(|n| (n.list().clone(), n.ticket())));
    let detail = Memo::new(move |_| ctx.nav.with(|n| n.detail().map(MaterialDetail::from)));

    view! {
        <div class=css::page>
            <SearchBar />
            {move || {
                let (list, ticket) = current.get();
                match list {
                    ListView::Topics => view! { <TopicsGrid ticket=ticket /> }.into_any(),
                    list => view! { <MaterialList list=list ticket=ticket /> }.into_any(),
                }
            }}
            {move || detail.get().map(|detail| view! { <DetailModal detail=detail /> })}
        </div>
    }
}

/// Run `load` and paint its result into `state`, unless the user has
/// navigated away from the view that issued `ticket` in the meantime.
fn paint<T, F>(
    ctx: AppContext,
    ticket: LoadTicket,
    state: RwSignal<LoadState<T>>,
    what: String,
    load: F,
) where
    T: Send + Sync + 'static,
    F: Future<Output = LoadState<T>> + 'static,
{
    state.set(LoadState::Loading);
    spawn_local(async move {
        let next = load.await;
        if let Some(next) = ctx.nav.with_untracked(|nav| admit(nav, ticket, next, &what)) {
            state.try_set(next);
        }
    });
}

/// `next` if `ticket` still belongs to the view on screen, `None` otherwise.
fn admit<T>(
    nav: &Navigator,
    ticket: LoadTicket,
    next: LoadState<T>,
    what: &str,
) -> Option<LoadState<T>> {
    if nav.is_current(ticket) {
        Some(next)
    } else {
        console::log(&format!("Dropping stale response for {}", what));
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageQuery;

    #[test]
    fn test_late_response_is_not_painted() {
        let mut nav = Navigator::from_query(&PageQuery::from_search("?feature=materials"));
        let slow = nav.open_topic("熱力學");
        let fast = nav.open_topic("記憶術");

        assert_eq!(admit(&nav, slow, LoadState::<Vec<u8>>::Ready(vec![1]), "topic 熱力學"), None);
        assert_eq!(
            admit(&nav, fast, LoadState::<Vec<u8>>::Ready(vec![2]), "topic 記憶術"),
            Some(LoadState::Ready(vec![2]))
        );
    }

    #[test]
    fn test_detail_modal_keeps_list_response() {
        let mut nav = Navigator::from_query(&PageQuery::from_search("?feature=materials"));
        let ticket = nav.open_recommended();
        nav.open_detail(Default::default());

        assert_eq!(
            admit(&nav, ticket, LoadState::<Vec<u8>>::Empty, "recommended materials"),
            Some(LoadState::Empty)
        );
    }
}
