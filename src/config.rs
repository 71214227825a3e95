//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use crate::utils::dom;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header and tab title.
pub const APP_NAME: &str = "學習助手";

// =============================================================================
// LIFF Configuration
// =============================================================================

/// LIFF app id registered in the LINE developers console.
pub const LIFF_ID: &str = "2007183662-oq3j8zg8";

/// Ask LIFF to log the user in automatically when opened outside LINE.
pub const LIFF_LOGIN_ON_EXTERNAL_BROWSER: bool = true;

// =============================================================================
// Network Configuration
// =============================================================================

/// Default API base. Empty means same origin as the LIFF page.
pub const DEFAULT_API_BASE: &str = "";

/// localStorage key that overrides [`DEFAULT_API_BASE`] (useful when the
/// mini-app is served from a CDN separate from the backend).
pub const API_BASE_STORAGE_KEY: &str = "api_base";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

/// Get the API base URL from localStorage or use the default.
///
/// The trailing slash is stripped so endpoint paths can be appended directly.
pub fn api_base() -> String {
    dom::local_storage()
        .and_then(|s| s.get_item(API_BASE_STORAGE_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
        .trim_end_matches('/')
        .to_string()
}

// =============================================================================
// Search Configuration
// =============================================================================

/// Where keyword searches run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum SearchMode {
    /// Filter the bulk catalog in the browser.
    Local,
    /// Ask the backend search endpoint.
    #[default]
    Remote,
}

/// Search strategy used by the materials page.
pub const SEARCH_MODE: SearchMode = SearchMode::Remote;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

/// User-facing text.
pub mod text {
    pub const UNTITLED: &str = "未命名";
    pub const UNCLASSIFIED: &str = "未分類";
    pub const NOT_AVAILABLE: &str = "N/A";
    pub const NO_DESCRIPTION: &str = "沒有提供描述。";

    pub const RECOMMENDED_TITLE: &str = "推薦材料";
    pub const RECOMMENDED_CARD: &str = "🌟 推薦材料";
    pub const SEARCH_PLACEHOLDER: &str = "搜索學習材料...";
    pub const BACK_TO_TOPICS: &str = "返回主題";
    pub const RETRY: &str = "重試";
    pub const LOADING: &str = "載入中...";

    pub const NO_TOPICS: &str = "目前沒有任何學習主題。";
    pub const NO_MATERIALS: &str = "找不到相關學習材料。";

    pub const TOPICS_FAILED: &str = "無法載入主題列表，請稍後再試。";
    pub const MATERIALS_FAILED: &str = "無法載入學習材料，請稍後再試。";
    pub const RECOMMENDED_FAILED: &str = "無法載入推薦材料，請稍後再試。";
    pub const SEARCH_FAILED: &str = "搜索失敗，請稍後再試。";
    pub const CATALOG_FAILED: &str = "無法載入學習概況，請稍後再試。";

    pub const INIT_FAILED: &str = "初始化失敗，請稍後再試";
    pub const MENU_COMING_SOON: &str = "功能選單即將推出";
    pub const SHARE_SUCCESS: &str = "分享成功！";
    pub const SHARE_UNSUPPORTED: &str = "此裝置不支援分享功能";

    pub const GREETING_FALLBACK: &str = "同學";
    pub const PLACEHOLDER_BODY: &str = "此功能即將推出，敬請期待。";

    /// Dashboard greeting.
    pub fn greeting(name: &str) -> String {
        format!("你好，{}！", name)
    }

    /// Heading for a search result list.
    pub fn search_heading(keyword: &str) -> String {
        format!("搜索結果: \"{}\"", keyword)
    }
}
