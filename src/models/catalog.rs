//! Topic → materials grouping returned by the bulk materials endpoint.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use super::Material;
use super::material::cell_to_text;

/// Topic names from the topics endpoint.
///
/// Names are spreadsheet cells: blank or null names are dropped and
/// numeric names become text, so one bad row never fails the whole list.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "Vec<Value>")]
pub struct TopicNames(Vec<String>);

impl From<Vec<Value>> for TopicNames {
    fn from(cells: Vec<Value>) -> Self {
        Self(cells.into_iter().filter_map(cell_to_text).collect())
    }
}

impl From<TopicNames> for Vec<String> {
    fn from(names: TopicNames) -> Self {
        names.0
    }
}

/// All materials grouped by topic name.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    topics: BTreeMap<String, Vec<Material>>,
}

impl Catalog {
    pub fn topic_names(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    pub fn material_count(&self) -> usize {
        self.topics.values().map(Vec::len).sum()
    }

    pub fn materials(&self, topic: &str) -> &[Material] {
        self.topics.get(topic).map(Vec::as_slice).unwrap_or_default()
    }

    /// Every material paired with the topic it is filed under.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Material)> {
        self.topics
            .iter()
            .flat_map(|(topic, list)| list.iter().map(move |m| (topic.as_str(), m)))
    }

    /// Materials flagged as recommended, in topic order.
    pub fn recommended(&self) -> Vec<Material> {
        self.entries()
            .filter(|(_, m)| m.is_recommended())
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl FromIterator<(String, Vec<Material>)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Material>)>>(iter: I) -> Self {
        Self {
            topics: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Catalog {
        serde_json::from_value(json!({
            "熱力學": [
                { "標題": "第一定律", "推薦": true },
                { "標題": "熵", "推薦": "false" },
                { "標題": "卡諾循環", "推薦": 1 }
            ],
            "記憶術": [
                { "標題": "記憶宮殿", "推薦": "TRUE" },
                { "標題": "間隔重複", "推薦": 0 },
                { "標題": "聯想法" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_topic_names_skip_blank_cells() {
        let names: TopicNames = serde_json::from_str(r#"["熱力學", null, "", "  ", 42, "記憶術"]"#).unwrap();
        assert_eq!(
            Vec::<String>::from(names),
            vec!["熱力學".to_string(), "42".to_string(), "記憶術".to_string()]
        );
    }

    #[test]
    fn test_counts() {
        let catalog = sample();
        assert_eq!(catalog.topic_count(), 2);
        assert_eq!(catalog.material_count(), 6);
        assert_eq!(catalog.materials("熱力學").len(), 3);
        assert!(catalog.materials("missing").is_empty());
    }

    #[test]
    fn test_recommended_extraction() {
        let titles: Vec<_> = sample()
            .recommended()
            .into_iter()
            .filter_map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["第一定律", "卡諾循環", "記憶宮殿"]);
    }

    #[test]
    fn test_entries_carry_group_topic() {
        let catalog = sample();
        let topics: Vec<_> = catalog.entries().map(|(t, _)| t).collect();
        assert_eq!(topics.iter().filter(|t| **t == "記憶術").count(), 3);
    }
}
