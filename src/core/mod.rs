//! Core business logic for the mini-app.
//!
//! This module provides:
//! - [`api::MaterialsApi`] backend access and the [`HttpApi`] client
//! - [`MaterialCache`] page-session memoization
//! - [`Navigator`] materials-page state machine
//! - [`Search`] keyword search strategies
//! - [`liff`] LINE Front-end Framework bindings

pub mod api;
pub mod cache;
pub mod error;
pub mod liff;
pub mod navigator;
pub mod search;

pub use api::HttpApi;
pub use cache::MaterialCache;
pub use navigator::{ListView, LoadTicket, Navigator};
pub use search::{Search, SearchStrategy};
