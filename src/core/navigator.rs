//! Materials-page navigation state.
//!
//! The navigator is a plain state machine over [`MaterialsView`]; the
//! Leptos layer keeps it in a signal and paints whatever it says. Every
//! transition that needs data hands out a [`LoadTicket`]. A fetch started
//! for one view must present its ticket before painting, and a ticket goes
//! stale as soon as the user navigates elsewhere, so late responses never
//! paint over the view that replaced theirs.

use crate::core::search::Keyword;
use crate::models::{Feature, Material, PageQuery};

/// List shown by the materials page.
#[derive(Clone, Debug, PartialEq)]
pub enum ListView {
    Topics,
    Topic(String),
    Recommended,
    Search(Keyword),
}

/// What the materials page is currently showing.
#[derive(Clone, Debug, PartialEq)]
pub enum MaterialsView {
    List(ListView),
    /// Detail modal over the list it was opened from.
    Detail {
        material: Box<Material>,
        from: ListView,
    },
}

/// Identifies the navigation generation a fetch belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Navigation state for the whole mini-app.
#[derive(Clone, Debug, PartialEq)]
pub struct Navigator {
    feature: Feature,
    /// `topic` URL parameter; decides where "back" from a search lands.
    url_topic: Option<String>,
    view: MaterialsView,
    generation: u64,
}

impl Navigator {
    /// Initial state from the page URL.
    pub fn from_query(query: &PageQuery) -> Self {
        let list = match &query.topic {
            Some(topic) => ListView::Topic(topic.clone()),
            None => ListView::Topics,
        };
        Self {
            feature: query.feature,
            url_topic: query.topic.clone(),
            view: MaterialsView::List(list),
            generation: 0,
        }
    }

    pub fn feature(&self) -> Feature {
        self.feature
    }

    pub fn view(&self) -> &MaterialsView {
        &self.view
    }

    /// The list currently visible (under the detail modal, if one is open).
    pub fn list(&self) -> &ListView {
        match &self.view {
            MaterialsView::List(list) => list,
            MaterialsView::Detail { from, .. } => from,
        }
    }

    /// Whether the topics grid is showing; the search input is cleared there.
    pub fn at_topics(&self) -> bool {
        self.view == MaterialsView::List(ListView::Topics)
    }

    pub fn detail(&self) -> Option<&Material> {
        match &self.view {
            MaterialsView::Detail { material, .. } => Some(material),
            MaterialsView::List(_) => None,
        }
    }

    /// Ticket for the data currently on screen.
    pub fn ticket(&self) -> LoadTicket {
        LoadTicket(self.generation)
    }

    /// Whether a fetch started under `ticket` may still paint.
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    fn show_list(&mut self, list: ListView) -> LoadTicket {
        self.view = MaterialsView::List(list);
        self.generation += 1;
        self.ticket()
    }

    /// Switch top-level feature. Entering the materials page resets it to
    /// its URL-derived initial list.
    pub fn switch_feature(&mut self, feature: Feature) -> LoadTicket {
        self.feature = feature;
        let list = match &self.url_topic {
            Some(topic) => ListView::Topic(topic.clone()),
            None => ListView::Topics,
        };
        self.show_list(list)
    }

    /// Re-sync with the URL after browser history navigation.
    pub fn sync_query(&mut self, query: &PageQuery) -> LoadTicket {
        self.url_topic = query.topic.clone();
        self.switch_feature(query.feature)
    }

    pub fn open_topics(&mut self) -> LoadTicket {
        self.show_list(ListView::Topics)
    }

    pub fn open_topic(&mut self, topic: impl Into<String>) -> LoadTicket {
        self.show_list(ListView::Topic(topic.into()))
    }

    pub fn open_recommended(&mut self) -> LoadTicket {
        self.show_list(ListView::Recommended)
    }

    /// Start a search. Blank input leaves the state untouched and returns
    /// `None`.
    pub fn submit_search(&mut self, input: &str) -> Option<LoadTicket> {
        let keyword = Keyword::parse(input)?;
        Some(self.show_list(ListView::Search(keyword)))
    }

    /// Open the detail modal. The list stays loaded underneath, so the
    /// generation does not change.
    pub fn open_detail(&mut self, material: Material) {
        let from = self.list().clone();
        self.view = MaterialsView::Detail {
            material: Box::new(material),
            from,
        };
    }

    /// Close the detail modal, keeping the list.
    pub fn close_detail(&mut self) {
        if let MaterialsView::Detail { from, .. } = &self.view {
            self.view = MaterialsView::List(from.clone());
        }
    }

    /// Go back one level.
    ///
    /// Returns a ticket when the destination list must be (re)loaded, and
    /// `None` when nothing needs fetching (closing the detail modal, or
    /// already at the topics grid).
    pub fn back(&mut self) -> Option<LoadTicket> {
        match &self.view {
            MaterialsView::Detail { .. } => {
                self.close_detail();
                None
            }
            MaterialsView::List(ListView::Topics) => None,
            MaterialsView::List(ListView::Search(_)) => {
                let dest = match &self.url_topic {
                    Some(topic) => ListView::Topic(topic.clone()),
                    None => ListView::Topics,
                };
                Some(self.show_list(dest))
            }
            MaterialsView::List(ListView::Topic(_) | ListView::Recommended) => {
                Some(self.show_list(ListView::Topics))
            }
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::from_query(&PageQuery::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(search: &str) -> Navigator {
        Navigator::from_query(&PageQuery::from_search(search))
    }

    fn material(title: &str) -> Material {
        Material {
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_view_from_url() {
        assert_eq!(nav("?feature=materials").list(), &ListView::Topics);
        assert_eq!(
            nav("?feature=materials&topic=熱力學").list(),
            &ListView::Topic("熱力學".into())
        );
        assert_eq!(nav("?feature=cards").feature(), Feature::Cards);
        assert_eq!(nav("").feature(), Feature::Dashboard);
    }

    #[test]
    fn test_topic_then_detail_then_back() {
        let mut n = nav("?feature=learning");
        n.open_topic("熱力學");
        n.open_detail(material("熵"));
        assert_eq!(n.detail().and_then(|m| m.title.as_deref()), Some("熵"));
        assert_eq!(n.list(), &ListView::Topic("熱力學".into()));

        assert_eq!(n.back(), None);
        assert_eq!(n.view(), &MaterialsView::List(ListView::Topic("熱力學".into())));

        assert!(n.back().is_some());
        assert_eq!(n.list(), &ListView::Topics);
        assert_eq!(n.back(), None);
    }

    #[test]
    fn test_blank_search_is_noop() {
        let mut n = nav("?feature=materials");
        n.open_topic("記憶術");
        let before = n.clone();

        assert_eq!(n.submit_search(""), None);
        assert_eq!(n.submit_search("   "), None);
        assert_eq!(n, before);
    }

    #[test]
    fn test_search_replaces_view() {
        let mut n = nav("?feature=materials");
        n.open_topic("記憶術");
        n.open_detail(material("記憶宮殿"));
        assert!(n.submit_search(" 宮殿 ").is_some());
        assert_eq!(
            n.view(),
            &MaterialsView::List(ListView::Search(Keyword::parse("宮殿").unwrap()))
        );
    }

    #[test]
    fn test_back_from_search_without_topic_param() {
        let mut n = nav("?feature=materials");
        n.submit_search("熵");
        n.back();
        assert_eq!(n.list(), &ListView::Topics);
    }

    #[test]
    fn test_back_from_search_returns_to_topics_grid() {
        let mut n = nav("?feature=materials");
        assert!(n.at_topics());
        n.submit_search("熵");
        assert!(!n.at_topics());
        n.back();
        assert!(n.at_topics());

        n.open_topic("熱力學");
        n.open_detail(material("熵"));
        assert!(!n.at_topics());
    }

    #[test]
    fn test_back_from_search_with_topic_param() {
        let mut n = nav("?feature=materials&topic=熱力學");
        n.submit_search("熵");
        n.back();
        assert_eq!(n.list(), &ListView::Topic("熱力學".into()));
    }

    #[test]
    fn test_stale_ticket_is_rejected() {
        let mut n = nav("?feature=materials");
        let slow = n.open_topic("熱力學");
        assert!(n.is_current(slow));

        let fast = n.open_topic("記憶術");
        assert!(!n.is_current(slow));
        assert!(n.is_current(fast));
    }

    #[test]
    fn test_detail_keeps_ticket() {
        let mut n = nav("?feature=materials");
        let ticket = n.open_recommended();
        n.open_detail(material("x"));
        n.close_detail();
        assert!(n.is_current(ticket));
    }

    #[test]
    fn test_switch_feature_resets_materials_page() {
        let mut n = nav("?feature=materials&topic=熱力學");
        n.open_recommended();
        n.switch_feature(Feature::Report);
        assert_eq!(n.feature(), Feature::Report);
        n.switch_feature(Feature::Materials);
        assert_eq!(n.list(), &ListView::Topic("熱力學".into()));
    }

    #[test]
    fn test_sync_query_follows_history() {
        let mut n = nav("?feature=materials&topic=熱力學");
        let old = n.ticket();
        n.sync_query(&PageQuery::from_search("?feature=learning"));
        assert_eq!(n.feature(), Feature::Learning);
        assert_eq!(n.list(), &ListView::Topics);
        assert!(!n.is_current(old));
    }
}
