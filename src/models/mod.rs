//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Material`] - Learning resource records from the backend
//! - [`Catalog`] - Topic → materials grouping
//! - [`Feature`], [`PageQuery`] - Query-string routing
//! - [`MaterialCard`], [`MaterialDetail`], [`LoadState`] - View models

mod catalog;
mod material;
mod route;
mod view;

pub use catalog::{Catalog, TopicNames};
pub use material::Material;
pub use route::{Feature, PageQuery};
pub use view::{DashboardStats, LoadState, MaterialCard, MaterialDetail, TopicCard, topics_use_full_grid};
