//! Materials backend client.
//!
//! [`MaterialsApi`] is the seam between the view layer and the network:
//! the app uses [`HttpApi`], tests substitute an in-memory implementation.

use crate::core::error::FetchError;
use crate::models::{Catalog, Material, TopicNames};
use crate::utils::fetch_json;

/// Read-only access to the materials backend.
///
/// Futures are not `Send`: everything runs on the browser event loop.
#[allow(async_fn_in_trait)]
pub trait MaterialsApi {
    /// `GET /api/materials/topics`
    async fn topics(&self) -> Result<Vec<String>, FetchError>;

    /// `GET /api/materials/topic/:topic`
    async fn topic_materials(&self, topic: &str) -> Result<Vec<Material>, FetchError>;

    /// `GET /api/materials/search/:keyword`
    async fn search(&self, keyword: &str) -> Result<Vec<Material>, FetchError>;

    /// `GET /api/materials/recommended`
    async fn recommended(&self) -> Result<Vec<Material>, FetchError>;

    /// `GET /api/materials`
    async fn catalog(&self) -> Result<Catalog, FetchError>;
}

/// [`MaterialsApi`] over the browser Fetch API.
#[derive(Clone, Debug)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    /// Create a client for `base` (e.g. `""` for same origin or
    /// `https://api.example.com`). Trailing slashes are ignored.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn topics_url(&self) -> String {
        format!("{}/api/materials/topics", self.base)
    }

    pub fn topic_url(&self, topic: &str) -> String {
        format!("{}/api/materials/topic/{}", self.base, urlencoding::encode(topic))
    }

    pub fn search_url(&self, keyword: &str) -> String {
        format!(
            "{}/api/materials/search/{}",
            self.base,
            urlencoding::encode(keyword)
        )
    }

    pub fn recommended_url(&self) -> String {
        format!("{}/api/materials/recommended", self.base)
    }

    pub fn catalog_url(&self) -> String {
        format!("{}/api/materials", self.base)
    }
}

impl MaterialsApi for HttpApi {
    async fn topics(&self) -> Result<Vec<String>, FetchError> {
        fetch_json::<TopicNames>(&self.topics_url()).await.map(Vec::from)
    }

    async fn topic_materials(&self, topic: &str) -> Result<Vec<Material>, FetchError> {
        fetch_json(&self.topic_url(topic)).await
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Material>, FetchError> {
        fetch_json(&self.search_url(keyword)).await
    }

    async fn recommended(&self) -> Result<Vec<Material>, FetchError> {
        fetch_json(&self.recommended_url()).await
    }

    async fn catalog(&self) -> Result<Catalog, FetchError> {
        fetch_json(&self.catalog_url()).await
    }
}

#[cfg(test)]
pub(crate) mod mock {
    //! In-memory backend that counts calls per endpoint.

    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    pub struct MockApi {
        pub catalog: Catalog,
        pub fail: Cell<bool>,
        pub topic_calls: Cell<usize>,
        pub material_calls: RefCell<Vec<String>>,
        pub search_calls: Cell<usize>,
        pub recommended_calls: Cell<usize>,
        pub catalog_calls: Cell<usize>,
    }

    impl MockApi {
        pub fn new(catalog: Catalog) -> Self {
            Self {
                catalog,
                ..Default::default()
            }
        }

        pub fn material_calls_for(&self, topic: &str) -> usize {
            self.material_calls
                .borrow()
                .iter()
                .filter(|t| *t == topic)
                .count()
        }

        fn check(&self) -> Result<(), FetchError> {
            if self.fail.get() {
                Err(FetchError::HttpError(500))
            } else {
                Ok(())
            }
        }
    }

    impl MaterialsApi for MockApi {
        async fn topics(&self) -> Result<Vec<String>, FetchError> {
            self.topic_calls.set(self.topic_calls.get() + 1);
            self.check()?;
            Ok(self.catalog.topic_names().map(String::from).collect())
        }

        async fn topic_materials(&self, topic: &str) -> Result<Vec<Material>, FetchError> {
            self.material_calls.borrow_mut().push(topic.to_string());
            self.check()?;
            Ok(self.catalog.materials(topic).to_vec())
        }

        async fn search(&self, keyword: &str) -> Result<Vec<Material>, FetchError> {
            self.search_calls.set(self.search_calls.get() + 1);
            self.check()?;
            let needle = keyword.to_lowercase();
            Ok(self
                .catalog
                .entries()
                .filter(|(topic, m)| {
                    topic.to_lowercase().contains(&needle) || m.text_contains(&needle)
                })
                .map(|(_, m)| m.clone())
                .collect())
        }

        async fn recommended(&self) -> Result<Vec<Material>, FetchError> {
            self.recommended_calls.set(self.recommended_calls.get() + 1);
            self.check()?;
            Ok(self.catalog.recommended())
        }

        async fn catalog(&self) -> Result<Catalog, FetchError> {
            self.catalog_calls.set(self.catalog_calls.get() + 1);
            self.check()?;
            Ok(self.catalog.clone())
        }
    }

    /// Small two-topic catalog used across the core tests.
    pub fn sample_catalog() -> Catalog {
        serde_json::from_value(serde_json::json!({
            "熱力學": [
                { "標題": "第一定律", "類型": "文章", "描述": "能量守恆", "推薦": true },
                { "標題": "卡諾循環", "類型": "視頻", "描述": "理想熱機" }
            ],
            "記憶術": [
                { "標題": "記憶宮殿", "類型": "練習", "描述": "空間記憶法", "推薦": "TRUE" },
                { "標題": "間隔重複", "類型": "筆記", "描述": "Spaced repetition" }
            ]
        }))
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let api = HttpApi::new("https://api.example.com/");
        assert_eq!(api.topics_url(), "https://api.example.com/api/materials/topics");
        assert_eq!(
            api.recommended_url(),
            "https://api.example.com/api/materials/recommended"
        );
        assert_eq!(api.catalog_url(), "https://api.example.com/api/materials");
    }

    #[test]
    fn test_path_segments_are_encoded() {
        let api = HttpApi::new("");
        assert_eq!(
            api.topic_url("熱力學"),
            "/api/materials/topic/%E7%86%B1%E5%8A%9B%E5%AD%B8"
        );
        assert_eq!(
            api.search_url("a/b c"),
            "/api/materials/search/a%2Fb%20c"
        );
    }
}
