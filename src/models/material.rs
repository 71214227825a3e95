//! Learning material records as served by the materials backend.
//!
//! Rows come from a spreadsheet export, so every field is optional and
//! scalar cells may arrive as strings, numbers or booleans. The custom
//! deserializers below normalize that into plain Rust values once, at the
//! wire boundary.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Icon identifier used for missing or unrecognized material types.
pub const DEFAULT_ICON: &str = "file";

/// The nine material kinds the backend knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialType {
    Article,
    Video,
    Book,
    Exercise,
    Course,
    Note,
    Quiz,
    Project,
    Other,
}

impl MaterialType {
    pub const ALL: [MaterialType; 9] = [
        Self::Article,
        Self::Video,
        Self::Book,
        Self::Exercise,
        Self::Course,
        Self::Note,
        Self::Quiz,
        Self::Project,
        Self::Other,
    ];

    /// Parse a spreadsheet type label (Chinese column value or English name).
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        let kind = match label {
            "文章" => Self::Article,
            "視頻" | "影片" => Self::Video,
            "書籍" => Self::Book,
            "練習" => Self::Exercise,
            "課程" => Self::Course,
            "筆記" => Self::Note,
            "測驗" => Self::Quiz,
            "項目" | "專案" => Self::Project,
            "其他" => Self::Other,
            _ => match label.to_ascii_lowercase().as_str() {
                "article" => Self::Article,
                "video" => Self::Video,
                "book" => Self::Book,
                "exercise" => Self::Exercise,
                "course" => Self::Course,
                "note" => Self::Note,
                "quiz" => Self::Quiz,
                "project" => Self::Project,
                "other" => Self::Other,
                _ => return None,
            },
        };
        Some(kind)
    }

    /// Display label shown on cards.
    pub fn label(self) -> &'static str {
        match self {
            Self::Article => "文章",
            Self::Video => "視頻",
            Self::Book => "書籍",
            Self::Exercise => "練習",
            Self::Course => "課程",
            Self::Note => "筆記",
            Self::Quiz => "測驗",
            Self::Project => "項目",
            Self::Other => "其他",
        }
    }

    /// Icon identifier for this type.
    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Article => "file-text",
            Self::Video => "video",
            Self::Book => "book",
            Self::Exercise => "pencil",
            Self::Course => "graduation-cap",
            Self::Note => "sticky-note",
            Self::Quiz => "check-square",
            Self::Project => "project-diagram",
            Self::Other => "file",
        }
    }
}

/// Icon identifier for an optional type; unknown and missing types fall back
/// to [`DEFAULT_ICON`].
pub fn icon_for(kind: Option<MaterialType>) -> &'static str {
    kind.map(MaterialType::icon_name).unwrap_or(DEFAULT_ICON)
}

/// A single learning resource.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Material {
    #[serde(rename = "標題", alias = "title", default, deserialize_with = "text_cell")]
    pub title: Option<String>,
    /// Raw type label as sent by the backend.
    #[serde(rename = "類型", alias = "type", default, deserialize_with = "text_cell")]
    pub kind: Option<String>,
    #[serde(rename = "主題", alias = "topic", default, deserialize_with = "text_cell")]
    pub topic: Option<String>,
    #[serde(rename = "描述", alias = "description", default, deserialize_with = "text_cell")]
    pub description: Option<String>,
    #[serde(rename = "連結", alias = "link", default, deserialize_with = "link_cell")]
    pub link: Option<String>,
    #[serde(rename = "推薦", alias = "recommended", default, deserialize_with = "flag_cell")]
    pub recommended: bool,
    #[serde(rename = "難度", alias = "difficulty", default, deserialize_with = "text_cell")]
    pub difficulty: Option<String>,
    #[serde(rename = "預計時間", alias = "estimatedTime", default, deserialize_with = "text_cell")]
    pub estimated_time: Option<String>,
    #[serde(rename = "作者", alias = "author", default, deserialize_with = "text_cell")]
    pub author: Option<String>,
    #[serde(rename = "發布日期", alias = "publishDate", default, deserialize_with = "text_cell")]
    pub publish_date: Option<String>,
}

impl Material {
    pub fn material_type(&self) -> Option<MaterialType> {
        self.kind.as_deref().and_then(MaterialType::from_label)
    }

    pub fn icon_name(&self) -> &'static str {
        icon_for(self.material_type())
    }

    pub fn is_recommended(&self) -> bool {
        self.recommended
    }

    /// Case-insensitive substring match over title and description.
    ///
    /// `needle` must already be lowercased.
    pub fn text_contains(&self, needle: &str) -> bool {
        [&self.title, &self.description]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Returns `None` for blank links and the pandas `nan` placeholder; any other
/// value is kept verbatim.
pub fn normalize_link(raw: Option<&str>) -> Option<String> {
    let raw = raw?;
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Interpret a spreadsheet "recommended" cell.
///
/// Only JSON `true`, the string `"TRUE"` and the number `1` count.
pub fn is_recommended_value(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => s == "TRUE",
        Value::Number(n) => n.as_f64() == Some(1.0),
        _ => false,
    }
}

pub(crate) fn cell_to_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        }),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn text_cell<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(cell_to_text(Value::deserialize(deserializer)?))
}

fn link_cell<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let text = cell_to_text(Value::deserialize(deserializer)?);
    Ok(normalize_link(text.as_deref()))
}

fn flag_cell<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(is_recommended_value(&Value::deserialize(deserializer)?))
}
