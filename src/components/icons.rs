//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuBook as Book, LuBookOpen as Learning, LuChevronLeft as ChevronLeft,
        LuChevronRight as ChevronRight, LuClipboardList as Report, LuExternalLink as ExternalLink,
        LuFile as File, LuFileText as FileText, LuFolderKanban as Project,
        LuGraduationCap as Course, LuHouse as Home, LuInbox as Empty, LuLayoutGrid as Cards, LuMenu as Menu,
        LuListChecks as Quiz, LuPencil as Exercise, LuSearch as Search, LuShare2 as Share,
        LuStar as Star, LuStickyNote as Note, LuTriangleAlert as Warning, LuUser as User,
        LuVideo as Video, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBook as Book, BsBookHalf as Learning, BsBoxArrowUpRight as ExternalLink,
        BsCameraVideo as Video, BsCheck2Square as Quiz, BsChevronLeft as ChevronLeft,
        BsChevronRight as ChevronRight, BsClipboardData as Report, BsExclamationTriangle as Warning,
        BsFileEarmark as File, BsFileEarmarkText as FileText, BsGrid as Cards, BsHouseFill as Home,
        BsInbox as Empty, BsKanban as Project, BsList as Menu, BsMortarboard as Course, BsPencil as Exercise,
        BsPerson as User, BsSearch as Search, BsShare as Share, BsStarFill as Star,
        BsSticky as Note, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

// Chrome
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(SEARCH, Search);
themed_icon!(CLOSE, Close);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(SHARE, Share);
themed_icon!(USER, User);
themed_icon!(STAR, Star);
themed_icon!(EMPTY, Empty);
themed_icon!(WARNING, Warning);
themed_icon!(MENU, Menu);

// Bottom navigation
themed_icon!(HOME, Home);
themed_icon!(LEARNING, Learning);
themed_icon!(CARDS, Cards);
themed_icon!(REPORT, Report);

// Material types
themed_icon!(FILE, File);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(VIDEO, Video);
themed_icon!(BOOK, Book);
themed_icon!(EXERCISE, Exercise);
themed_icon!(COURSE, Course);
themed_icon!(NOTE, Note);
themed_icon!(QUIZ, Quiz);
themed_icon!(PROJECT, Project);

/// Glyph for a material icon identifier (see `MaterialType::icon_name`).
pub fn material_glyph(name: &str) -> Icon {
    match name {
        "file-text" => FILE_TEXT,
        "video" => VIDEO,
        "book" => BOOK,
        "pencil" => EXERCISE,
        "graduation-cap" => COURSE,
        "sticky-note" => NOTE,
        "check-square" => QUIZ,
        "project-diagram" => PROJECT,
        _ => FILE,
    }
}
