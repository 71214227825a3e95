//! Query-string routing for the mini-app.
//!
//! URL format: `?feature=materials&topic=熱力學`. LIFF deep links carry the
//! page in the query string, so `feature` is the source of truth for which
//! page is shown and `topic` narrows the materials page.

use crate::config::APP_NAME;

/// Top-level page selected by the `feature` parameter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Home page (also used for missing or unknown values)
    #[default]
    Dashboard,
    /// Learning tab, shows the materials browser
    Learning,
    /// Flash cards
    Cards,
    /// Learning report
    Report,
    /// Materials browser opened directly
    Materials,
}

impl Feature {
    /// Features in bottom-navigation order.
    pub const NAV: [Feature; 4] = [Self::Dashboard, Self::Learning, Self::Cards, Self::Report];

    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("learning") => Self::Learning,
            Some("cards") => Self::Cards,
            Some("report") => Self::Report,
            Some("materials") => Self::Materials,
            _ => Self::Dashboard,
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Learning => "learning",
            Self::Cards => "cards",
            Self::Report => "report",
            Self::Materials => "materials",
        }
    }

    /// Whether this feature renders the materials browser.
    pub fn shows_materials(self) -> bool {
        matches!(self, Self::Learning | Self::Materials)
    }

    /// Bottom-navigation slot highlighted for this feature.
    pub fn nav_slot(self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::Learning | Self::Materials => 1,
            Self::Cards => 2,
            Self::Report => 3,
        }
    }

    /// Header title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => APP_NAME,
            Self::Learning | Self::Materials => "學習材料",
            Self::Cards => "記憶卡片",
            Self::Report => "學習報告",
        }
    }

    /// Short label for the bottom navigation.
    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Dashboard => "首頁",
            Self::Learning | Self::Materials => "學習",
            Self::Cards => "卡片",
            Self::Report => "報告",
        }
    }

    /// Browser tab title.
    pub fn document_title(self) -> String {
        match self {
            Self::Dashboard => APP_NAME.to_string(),
            other => format!("{} | {}", other.title(), APP_NAME),
        }
    }
}

/// Parsed page query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub feature: Feature,
    pub topic: Option<String>,
}

impl PageQuery {
    /// Parse `location.search` (with or without the leading `?`).
    pub fn from_search(search: &str) -> Self {
        let mut feature = None;
        let mut topic = None;

        for pair in search.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(value);
            match key {
                "feature" if feature.is_none() => feature = Some(value),
                "topic" if topic.is_none() && !value.trim().is_empty() => topic = Some(value),
                _ => {}
            }
        }

        Self {
            feature: Feature::from_param(feature.as_deref()),
            topic,
        }
    }

    /// Convert back to a query string (with the leading `?`).
    pub fn to_search(&self) -> String {
        let mut search = format!("?feature={}", self.feature.as_param());
        if let Some(topic) = &self.topic {
            search.push_str("&topic=");
            search.push_str(&urlencoding::encode(topic));
        }
        search
    }

    /// Get the query from the browser URL.
    pub fn current() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_search(&search)
    }

    /// Update the browser URL to match this query (using pushState).
    pub fn push(&self) {
        if let Some(window) = web_sys::window()
            && let Ok(history) = window.history()
        {
            let search = self.to_search();
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&search));
        }
    }
}

/// Decode a form-encoded query component (`+` is a space).
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_parsing() {
        assert_eq!(PageQuery::from_search("").feature, Feature::Dashboard);
        assert_eq!(PageQuery::from_search("?").feature, Feature::Dashboard);
        assert_eq!(
            PageQuery::from_search("?feature=cards").feature,
            Feature::Cards
        );
        assert_eq!(
            PageQuery::from_search("feature=report").feature,
            Feature::Report
        );
        assert_eq!(
            PageQuery::from_search("?feature=learning").feature,
            Feature::Learning
        );
        assert_eq!(
            PageQuery::from_search("?feature=bogus").feature,
            Feature::Dashboard
        );
    }

    #[test]
    fn test_topic_parsing() {
        let q = PageQuery::from_search("?feature=materials&topic=%E7%86%B1%E5%8A%9B%E5%AD%B8");
        assert_eq!(q.feature, Feature::Materials);
        assert_eq!(q.topic.as_deref(), Some("熱力學"));

        let q = PageQuery::from_search("?topic=machine+learning&feature=materials");
        assert_eq!(q.topic.as_deref(), Some("machine learning"));

        let q = PageQuery::from_search("?feature=materials&topic=");
        assert_eq!(q.topic, None);
    }

    #[test]
    fn test_to_search() {
        let q = PageQuery {
            feature: Feature::Materials,
            topic: Some("熱力學".to_string()),
        };
        assert_eq!(PageQuery::from_search(&q.to_search()), q);
        assert_eq!(
            PageQuery {
                feature: Feature::Cards,
                topic: None
            }
            .to_search(),
            "?feature=cards"
        );
    }

    #[test]
    fn test_nav_slots() {
        for (i, feature) in Feature::NAV.iter().enumerate() {
            assert_eq!(feature.nav_slot(), i);
        }
        assert_eq!(Feature::Materials.nav_slot(), Feature::Learning.nav_slot());
        assert!(Feature::Materials.shows_materials());
        assert!(!Feature::Report.shows_materials());
    }

    #[test]
    fn test_document_title() {
        assert_eq!(Feature::Cards.document_title(), "記憶卡片 | 學習助手");
        assert_eq!(Feature::Dashboard.document_title(), "學習助手");
        assert_eq!(Feature::Dashboard.title(), APP_NAME);
        assert!(Feature::Report.document_title().ends_with(APP_NAME));
    }
}
