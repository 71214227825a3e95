//! Material search.
//!
//! One contract, two strategies:
//! - [`LocalSearch`] filters the bulk catalog in the browser
//! - [`RemoteSearch`] asks the backend search endpoint
//!
//! Both match case-insensitively against title, description and topic
//! name. [`Search`] picks one according to [`SearchMode`].

use std::rc::Rc;

use crate::config::SearchMode;
use crate::core::api::MaterialsApi;
use crate::core::cache::MaterialCache;
use crate::core::error::FetchError;
use crate::models::{Catalog, Material};

/// A non-empty, trimmed search keyword.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Keyword(String);

impl Keyword {
    /// Returns `None` for blank input; searching with it is a no-op.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        (!trimmed.is_empty()).then(|| Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Filter a catalog by keyword.
///
/// A material matches when its title or description contains the keyword,
/// or when the topic it is filed under does; a topic-name hit therefore
/// returns the whole topic.
pub fn filter_catalog(catalog: &Catalog, keyword: &Keyword) -> Vec<Material> {
    let needle = keyword.as_str().to_lowercase();
    catalog
        .entries()
        .filter(|(topic, material)| {
            topic.to_lowercase().contains(&needle) || material.text_contains(&needle)
        })
        .map(|(_, material)| material.clone())
        .collect()
}

/// A way of answering keyword searches.
#[allow(async_fn_in_trait)]
pub trait SearchStrategy {
    async fn search(&self, keyword: &Keyword) -> Result<Vec<Material>, FetchError>;
}

/// Client-side filter over the cached catalog.
pub struct LocalSearch<A> {
    cache: MaterialCache<A>,
}

impl<A: MaterialsApi> LocalSearch<A> {
    pub fn new(cache: MaterialCache<A>) -> Self {
        Self { cache }
    }
}

impl<A: MaterialsApi> SearchStrategy for LocalSearch<A> {
    async fn search(&self, keyword: &Keyword) -> Result<Vec<Material>, FetchError> {
        let catalog = self.cache.get_catalog().await?;
        Ok(filter_catalog(&catalog, keyword))
    }
}

/// Delegates to the backend search endpoint. Results are not cached.
pub struct RemoteSearch<A> {
    api: Rc<A>,
}

impl<A: MaterialsApi> RemoteSearch<A> {
    pub fn new(api: Rc<A>) -> Self {
        Self { api }
    }
}

impl<A: MaterialsApi> SearchStrategy for RemoteSearch<A> {
    async fn search(&self, keyword: &Keyword) -> Result<Vec<Material>, FetchError> {
        self.api.search(keyword.as_str()).await
    }
}

/// The configured search strategy.
pub enum Search<A> {
    Local(LocalSearch<A>),
    Remote(RemoteSearch<A>),
}

impl<A: MaterialsApi> Search<A> {
    /// Build the strategy for `mode` on top of a shared cache.
    pub fn new(mode: SearchMode, cache: &MaterialCache<A>) -> Self {
        match mode {
            SearchMode::Local => Self::Local(LocalSearch::new(cache.clone())),
            SearchMode::Remote => Self::Remote(RemoteSearch::new(cache.api())),
        }
    }
}

impl<A: MaterialsApi> SearchStrategy for Search<A> {
    async fn search(&self, keyword: &Keyword) -> Result<Vec<Material>, FetchError> {
        match self {
            Self::Local(local) => local.search(keyword).await,
            Self::Remote(remote) => remote.search(keyword).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::mock::{MockApi, sample_catalog};

    fn titles(materials: &[Material]) -> Vec<&str> {
        materials.iter().filter_map(|m| m.title.as_deref()).collect()
    }

    #[test]
    fn test_blank_keyword_is_rejected() {
        assert_eq!(Keyword::parse(""), None);
        assert_eq!(Keyword::parse("   \t"), None);
        assert_eq!(Keyword::parse("  熵 ").unwrap().as_str(), "熵");
    }

    #[test]
    fn test_filter_matches_title_and_description() {
        let catalog = sample_catalog();
        let hits = filter_catalog(&catalog, &Keyword::parse("循環").unwrap());
        assert_eq!(titles(&hits), vec!["卡諾循環"]);

        let hits = filter_catalog(&catalog, &Keyword::parse("能量").unwrap());
        assert_eq!(titles(&hits), vec!["第一定律"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let catalog = sample_catalog();
        let hits = filter_catalog(&catalog, &Keyword::parse("SPACED").unwrap());
        assert_eq!(titles(&hits), vec!["間隔重複"]);
    }

    #[test]
    fn test_topic_name_match_returns_whole_topic() {
        let catalog = sample_catalog();
        // "記憶術" appears in no title or description
        let hits = filter_catalog(&catalog, &Keyword::parse("記憶術").unwrap());
        assert_eq!(titles(&hits), vec!["記憶宮殿", "間隔重複"]);
    }

    #[test]
    fn test_filter_no_match() {
        let hits = filter_catalog(&sample_catalog(), &Keyword::parse("量子").unwrap());
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_local_search_uses_cached_catalog() {
        let cache = MaterialCache::new(MockApi::new(sample_catalog()));
        let search = Search::new(SearchMode::Local, &cache);

        let hits = search.search(&Keyword::parse("熱力學").unwrap()).await.unwrap();
        assert_eq!(hits.len(), 2);
        search.search(&Keyword::parse("記憶").unwrap()).await.unwrap();

        assert_eq!(cache.api().catalog_calls.get(), 1);
        assert_eq!(cache.api().search_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_remote_search_hits_endpoint_each_time() {
        let cache = MaterialCache::new(MockApi::new(sample_catalog()));
        let search = Search::new(SearchMode::Remote, &cache);

        let hits = search.search(&Keyword::parse("宮殿").unwrap()).await.unwrap();
        assert_eq!(titles(&hits), vec!["記憶宮殿"]);
        search.search(&Keyword::parse("宮殿").unwrap()).await.unwrap();

        assert_eq!(cache.api().search_calls.get(), 2);
        assert_eq!(cache.api().catalog_calls.get(), 0);
    }

    #[tokio::test]
    async fn test_remote_topic_name_returns_whole_topic() {
        let cache = MaterialCache::new(MockApi::new(sample_catalog()));
        let search = Search::new(SearchMode::Remote, &cache);

        let hits = search.search(&Keyword::parse("記憶術").unwrap()).await.unwrap();
        assert_eq!(titles(&hits), vec!["記憶宮殿", "間隔重複"]);
        assert_eq!(cache.api().search_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_search_failure_propagates() {
        let cache = MaterialCache::new(MockApi::new(sample_catalog()));
        cache.api().fail.set(true);
        let search = Search::new(SearchMode::Local, &cache);
        assert!(search.search(&Keyword::parse("x").unwrap()).await.is_err());
    }
}
