//! UI components built with Leptos.
//!
//! - [`router`] - Feature routing and session gating (main entry point)
//! - [`header`] - Top bar with close button, title and user name
//! - [`nav`] - Bottom navigation between features
//! - [`dashboard`] - Home page
//! - [`materials`] - Topic grid, material lists, search and detail modal
//! - [`placeholder`] - Cards and report pages
//! - [`feedback`] - Loading, empty and error panels
//! - [`icons`] - Centralized icon definitions (change theme here)

mod boot;
mod dashboard;
mod feedback;
mod header;
pub mod icons;
mod materials;
mod nav;
mod placeholder;
mod router;

pub use router::AppRouter;
