//! Page-session cache in front of the materials backend.
//!
//! Successful responses are memoized until [`MaterialCache::clear`] (or a
//! page reload); failures are never stored, so the next call retries. There
//! is no single-flight: two calls racing on an empty slot both hit the
//! network and the later response wins the slot.
//!
//! Lists are handed out as `Rc<[T]>`, so repeated hits share one allocation.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::core::api::MaterialsApi;
use crate::core::error::FetchError;
use crate::models::{Catalog, Material};
use crate::utils::console;

#[derive(Default)]
struct Slots {
    topics: Option<Rc<[String]>>,
    by_topic: HashMap<String, Rc<[Material]>>,
    recommended: Option<Rc<[Material]>>,
    catalog: Option<Rc<Catalog>>,
}

/// Memoizing wrapper around a [`MaterialsApi`].
///
/// Cloning is cheap and clones share the same slots.
pub struct MaterialCache<A> {
    api: Rc<A>,
    slots: Rc<RefCell<Slots>>,
}

impl<A> Clone for MaterialCache<A> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            slots: Rc::clone(&self.slots),
        }
    }
}

impl<A: MaterialsApi> MaterialCache<A> {
    pub fn new(api: A) -> Self {
        Self {
            api: Rc::new(api),
            slots: Rc::new(RefCell::new(Slots::default())),
        }
    }

    /// The backend this cache wraps.
    pub fn api(&self) -> Rc<A> {
        Rc::clone(&self.api)
    }

    /// All topic names.
    pub async fn get_topics(&self) -> Result<Rc<[String]>, FetchError> {
        if let Some(hit) = self.slots.borrow().topics.clone() {
            return Ok(hit);
        }

        console::log("Fetching topics from API...");
        let topics: Rc<[String]> = self
            .api
            .topics()
            .await
            .inspect_err(|e| console::error(&format!("Error fetching topics: {}", e)))?
            .into();
        self.slots.borrow_mut().topics = Some(Rc::clone(&topics));
        Ok(topics)
    }

    /// Materials filed under `topic`.
    pub async fn get_materials_for_topic(&self, topic: &str) -> Result<Rc<[Material]>, FetchError> {
        if let Some(hit) = self.slots.borrow().by_topic.get(topic).cloned() {
            return Ok(hit);
        }

        console::log(&format!("Fetching materials for topic: {}...", topic));
        let materials: Rc<[Material]> = self
            .api
            .topic_materials(topic)
            .await
            .inspect_err(|e| {
                console::error(&format!(
                    "Error fetching materials for topic {}: {}",
                    topic, e
                ))
            })?
            .into();
        self.slots
            .borrow_mut()
            .by_topic
            .insert(topic.to_string(), Rc::clone(&materials));
        Ok(materials)
    }

    /// Materials the backend flags as recommended.
    pub async fn get_recommended(&self) -> Result<Rc<[Material]>, FetchError> {
        if let Some(hit) = self.slots.borrow().recommended.clone() {
            return Ok(hit);
        }

        console::log("Fetching recommended materials...");
        let materials: Rc<[Material]> = self
            .api
            .recommended()
            .await
            .inspect_err(|e| {
                console::error(&format!("Error fetching recommended materials: {}", e))
            })?
            .into();
        self.slots.borrow_mut().recommended = Some(Rc::clone(&materials));
        Ok(materials)
    }

    /// The whole topic → materials catalog.
    pub async fn get_catalog(&self) -> Result<Rc<Catalog>, FetchError> {
        if let Some(hit) = self.slots.borrow().catalog.clone() {
            return Ok(hit);
        }

        console::log("Fetching material catalog...");
        let catalog = Rc::new(
            self.api
                .catalog()
                .await
                .inspect_err(|e| console::error(&format!("Error fetching catalog: {}", e)))?,
        );
        self.slots.borrow_mut().catalog = Some(Rc::clone(&catalog));
        Ok(catalog)
    }

    /// Number of cached materials for `topic`, if it has been loaded.
    pub fn cached_count(&self, topic: &str) -> Option<usize> {
        let slots = self.slots.borrow();
        slots
            .by_topic
            .get(topic)
            .map(|list| list.len())
            .or_else(|| {
                slots
                    .catalog
                    .as_ref()
                    .map(|c| c.materials(topic).len())
                    .filter(|n| *n > 0)
            })
    }

    /// Drop one topic's materials so the next access refetches.
    pub fn evict_topic(&self, topic: &str) -> bool {
        self.slots.borrow_mut().by_topic.remove(topic).is_some()
    }

    /// Drop everything.
    pub fn clear(&self) {
        *self.slots.borrow_mut() = Slots::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::mock::{MockApi, sample_catalog};

    fn cache() -> MaterialCache<MockApi> {
        MaterialCache::new(MockApi::new(sample_catalog()))
    }

    #[tokio::test]
    async fn test_topic_materials_fetched_once() {
        let cache = cache();
        let first = cache.get_materials_for_topic("熱力學").await.unwrap();
        let second = cache.get_materials_for_topic("熱力學").await.unwrap();

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 2);
        assert_eq!(cache.api().material_calls_for("熱力學"), 1);
    }

    #[tokio::test]
    async fn test_topics_fetched_once() {
        let cache = cache();
        let first = cache.get_topics().await.unwrap();
        let second = cache.clone().get_topics().await.unwrap();

        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(&*first, &["熱力學".to_string(), "記憶術".to_string()]);
        assert_eq!(cache.api().topic_calls.get(), 1);
    }

    #[tokio::test]
    async fn test_topics_keyed_independently() {
        let cache = cache();
        cache.get_materials_for_topic("熱力學").await.unwrap();
        cache.get_materials_for_topic("記憶術").await.unwrap();
        cache.get_materials_for_topic("記憶術").await.unwrap();

        assert_eq!(cache.api().material_calls_for("熱力學"), 1);
        assert_eq!(cache.api().material_calls_for("記憶術"), 1);
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let cache = cache();
        cache.api().fail.set(true);
        assert_eq!(
            cache.get_topics().await.unwrap_err(),
            FetchError::HttpError(500)
        );

        cache.api().fail.set(false);
        let topics = cache.get_topics().await.unwrap();
        assert_eq!(topics.len(), 2);
        assert_eq!(cache.api().topic_calls.get(), 2);
    }

    #[tokio::test]
    async fn test_evict_topic_refetches() {
        let cache = cache();
        cache.get_materials_for_topic("熱力學").await.unwrap();
        assert_eq!(cache.cached_count("熱力學"), Some(2));

        assert!(cache.evict_topic("熱力學"));
        assert!(!cache.evict_topic("熱力學"));
        assert_eq!(cache.cached_count("熱力學"), None);

        cache.get_materials_for_topic("熱力學").await.unwrap();
        assert_eq!(cache.api().material_calls_for("熱力學"), 2);
    }

    #[tokio::test]
    async fn test_clear_drops_every_slot() {
        let cache = cache();
        cache.get_topics().await.unwrap();
        cache.get_recommended().await.unwrap();
        cache.get_catalog().await.unwrap();

        cache.clear();
        cache.get_topics().await.unwrap();
        cache.get_recommended().await.unwrap();
        cache.get_catalog().await.unwrap();

        let api = cache.api();
        assert_eq!(api.topic_calls.get(), 2);
        assert_eq!(api.recommended_calls.get(), 2);
        assert_eq!(api.catalog_calls.get(), 2);
    }

    #[tokio::test]
    async fn test_cached_count_falls_back_to_catalog() {
        let cache = cache();
        assert_eq!(cache.cached_count("記憶術"), None);
        cache.get_catalog().await.unwrap();
        assert_eq!(cache.cached_count("記憶術"), Some(2));
        assert_eq!(cache.cached_count("missing"), None);
    }
}
