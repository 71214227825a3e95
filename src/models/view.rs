//! View models: plain data derived from materials, ready to paint.
//!
//! Components never read `Material` fields directly; they render these
//! structs, which keeps fallbacks and formatting testable without a DOM.

use super::{Catalog, Material};
use crate::config::text;

/// Async load state of a panel.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
    /// Fetch succeeded with nothing to show.
    Empty,
    /// Fetch failed; carries the user-facing message.
    Failed(String),
}

impl<T> LoadState<Vec<T>> {
    /// Build a state from a list result, mapping empty lists to [`LoadState::Empty`].
    pub fn from_list<E>(result: Result<Vec<T>, E>, error_message: &str) -> Self {
        match result {
            Ok(items) if items.is_empty() => Self::Empty,
            Ok(items) => Self::Ready(items),
            Err(_) => Self::Failed(error_message.to_string()),
        }
    }
}

/// Card in the topics grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCard {
    pub name: String,
    /// Number of materials, when the topic has already been loaded.
    pub count: Option<usize>,
}

impl TopicCard {
    pub fn subtitle(&self) -> Option<String> {
        self.count.map(|n| format!("{} 項材料", n))
    }
}

/// Whether the topics grid should switch to its full-width layout.
pub fn topics_use_full_grid(topic_count: usize) -> bool {
    topic_count <= 2
}

/// Row in a materials list.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialCard {
    pub title: String,
    /// `type` or `type - topic`.
    pub subtitle: String,
    pub icon: &'static str,
    pub recommended: bool,
    pub material: Material,
}

impl From<&Material> for MaterialCard {
    fn from(material: &Material) -> Self {
        let type_label = type_label(material);
        let subtitle = match &material.topic {
            Some(topic) => format!("{} - {}", type_label, topic),
            None => type_label,
        };
        Self {
            title: material
                .title
                .clone()
                .unwrap_or_else(|| text::UNTITLED.to_string()),
            subtitle,
            icon: material.icon_name(),
            recommended: material.is_recommended(),
            material: material.clone(),
        }
    }
}

/// One labelled attribute row in the detail view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

/// Detail modal content.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialDetail {
    pub title: String,
    /// `topic - type`.
    pub topic_type: String,
    pub description: String,
    pub icon: &'static str,
    /// Present only for real links; the link section is hidden otherwise.
    pub link: Option<String>,
    pub fields: Vec<DetailField>,
}

impl MaterialDetail {
    /// Text sent through the share target picker.
    pub fn share_text(&self) -> String {
        match &self.link {
            Some(link) => format!("📚 {}\n{}", self.title, link),
            None => format!("📚 {}", self.title),
        }
    }
}

impl From<&Material> for MaterialDetail {
    fn from(material: &Material) -> Self {
        let or_na = |v: &Option<String>| v.clone().unwrap_or_else(|| text::NOT_AVAILABLE.to_string());

        let fields = [
            ("難度", &material.difficulty),
            ("預計時間", &material.estimated_time),
            ("作者", &material.author),
            ("發布日期", &material.publish_date),
        ]
        .into_iter()
        .filter_map(|(label, value)| {
            value.as_ref().map(|v| DetailField {
                label,
                value: v.clone(),
            })
        })
        .collect();

        Self {
            title: or_na(&material.title),
            topic_type: format!("{} - {}", or_na(&material.topic), or_na(&material.kind)),
            description: material
                .description
                .clone()
                .unwrap_or_else(|| text::NO_DESCRIPTION.to_string()),
            icon: material.icon_name(),
            link: material.link.clone(),
            fields,
        }
    }
}

/// Summary numbers for the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub topics: usize,
    pub materials: usize,
    pub recommended: usize,
}

impl From<&Catalog> for DashboardStats {
    fn from(catalog: &Catalog) -> Self {
        Self {
            topics: catalog.topic_count(),
            materials: catalog.material_count(),
            recommended: catalog.entries().filter(|(_, m)| m.is_recommended()).count(),
        }
    }
}

fn type_label(material: &Material) -> String {
    material
        .kind
        .clone()
        .unwrap_or_else(|| text::UNCLASSIFIED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn material(value: serde_json::Value) -> Material {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_material_card_fallbacks() {
        let card = MaterialCard::from(&Material::default());
        assert_eq!(card.title, text::UNTITLED);
        assert_eq!(card.subtitle, text::UNCLASSIFIED);
        assert_eq!(card.icon, "file");

        let card = MaterialCard::from(&material(json!({
            "標題": "熵", "類型": "文章", "主題": "熱力學"
        })));
        assert_eq!(card.title, "熵");
        assert_eq!(card.subtitle, "文章 - 熱力學");
        assert_eq!(card.icon, "file-text");
    }

    #[test]
    fn test_detail_hides_placeholder_links() {
        for raw in ["", "nan", "NaN"] {
            let detail = MaterialDetail::from(&material(json!({ "連結": raw })));
            assert_eq!(detail.link, None);
        }
    }

    #[test]
    fn test_detail_shows_link_verbatim() {
        let detail = MaterialDetail::from(&material(json!({ "連結": "https://a.b/c d" })));
        assert_eq!(detail.link.as_deref(), Some("https://a.b/c d"));
    }

    #[test]
    fn test_detail_text() {
        let detail = MaterialDetail::from(&material(json!({
            "標題": "記憶宮殿", "類型": "練習", "作者": "林", "難度": 2
        })));
        assert_eq!(detail.title, "記憶宮殿");
        assert_eq!(detail.topic_type, format!("{} - 練習", text::NOT_AVAILABLE));
        assert_eq!(detail.description, text::NO_DESCRIPTION);
        let labels: Vec<_> = detail.fields.iter().map(|f| f.label).collect();
        assert_eq!(labels, vec!["難度", "作者"]);
        assert_eq!(detail.share_text(), "📚 記憶宮殿");
    }

    #[test]
    fn test_load_state_from_list() {
        let ok: Result<Vec<u8>, ()> = Ok(vec![1]);
        assert_eq!(LoadState::from_list(ok, "x"), LoadState::Ready(vec![1]));
        let empty: Result<Vec<u8>, ()> = Ok(vec![]);
        assert_eq!(LoadState::from_list(empty, "x"), LoadState::Empty);
        let err: Result<Vec<u8>, ()> = Err(());
        assert_eq!(
            LoadState::from_list(err, "boom"),
            LoadState::Failed("boom".to_string())
        );
    }

    #[test]
    fn test_topic_card() {
        assert!(topics_use_full_grid(2));
        assert!(!topics_use_full_grid(3));
        let card = TopicCard {
            name: "熱力學".into(),
            count: Some(4),
        };
        assert_eq!(card.subtitle().as_deref(), Some("4 項材料"));
    }
}
