//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for backend requests
//! - [`LiffError`] - LIFF SDK initialization and call errors

use std::fmt;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    HttpError(u16),
    /// Failed to read response body
    ResponseReadFailed,
    /// Invalid response content (not text)
    InvalidContent,
    /// JSON parsing error
    JsonParseError(String),
    /// Request timed out
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error! status: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}

/// LIFF SDK errors.
#[derive(Debug, Clone, PartialEq)]
pub enum LiffError {
    /// Browser window not available
    NoWindow,
    /// The LIFF SDK script is not loaded (`window.liff` missing)
    SdkMissing,
    /// A LIFF method could not be found or invoked
    CallFailed(&'static str),
    /// `liff.init` rejected
    InitFailed(String),
    /// A LIFF promise rejected
    Rejected(String),
    /// `liff.getProfile` returned an unexpected shape
    InvalidProfile(String),
}

impl fmt::Display for LiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::SdkMissing => write!(f, "LIFF SDK not loaded"),
            Self::CallFailed(method) => write!(f, "Failed to call liff.{}", method),
            Self::InitFailed(msg) => write!(f, "LIFF initialization failed: {}", msg),
            Self::Rejected(msg) => write!(f, "LIFF request rejected: {}", msg),
            Self::InvalidProfile(msg) => write!(f, "Invalid LIFF profile: {}", msg),
        }
    }
}

impl std::error::Error for LiffError {}
