//! Utility modules for web, DOM, and network operations.
//!
//! Provides:
//! - [`console`] - Browser console logging
//! - [`dom`] - Window, storage, document and dialog helpers
//! - [`fetch_json`] - JSON fetching with timeout

pub mod console;
pub mod dom;
mod fetch;

pub use fetch::fetch_json;
