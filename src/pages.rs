//! Page generation
//!
//! Turns a document filled by the chrome renderer into a complete HTML
//! page using the shared components.

pub mod page;
