//! Error types for page chrome rendering

use thiserror::Error;

/// Errors raised while building or applying page chrome
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChromeError {
    /// Version label does not follow the `v1.2` form
    #[error("Invalid version format: {0:?}")]
    InvalidVersionFormat(String),

    /// Target document lacks a required anchor id
    #[error("Element not found: #{0}")]
    ElementNotFound(String),
}

/// Result type alias for chrome rendering
pub type Result<T> = std::result::Result<T, ChromeError>;
