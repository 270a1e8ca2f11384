//! Reusable HTML components for page generation
//!
//! Maud components that turn a rendered [`Document`](crate::Document) into
//! markup. Each anchor keeps its id so the generated page exposes the same
//! hooks the chrome renderer writes to.

pub mod chrome;
pub mod footer;
pub mod layout;
