//! In-memory target document
//!
//! Models the parts of a page the chrome renderer writes to: the document
//! title and a fixed set of anchor elements addressed by id. Each anchor
//! holds an ordered list of child nodes.

use std::collections::BTreeMap;

use crate::error::{ChromeError, Result};

/// Anchor ids the renderer writes to
pub mod anchors {
    pub const PAGE_NAME: &str = "page-name";
    pub const VERSION_LABEL: &str = "page-version-name";
    pub const VERSION_LIST: &str = "versionList";
    pub const COPYRIGHT: &str = "page-copyright-text";
    pub const DONATION: &str = "donation";

    /// Anchors every page must provide.
    pub const REQUIRED: [&str; 4] = [PAGE_NAME, VERSION_LABEL, VERSION_LIST, COPYRIGHT];

    /// Every anchor a full page provides.
    pub const ALL: [&str; 5] = [PAGE_NAME, VERSION_LABEL, VERSION_LIST, COPYRIGHT, DONATION];
}

/// Hyperlink node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub class: Option<String>,
    pub href: String,
    pub text: String,
}

/// Child node of an anchor element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Link(Link),
}

/// Page document with a title and id addressed anchors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    title: String,
    elements: BTreeMap<String, Vec<Node>>,
}

impl Document {
    /// Creates a document with empty anchors for the given ids.
    pub fn with_anchors(ids: &[&str]) -> Self {
        Self {
            title: String::new(),
            elements: ids.iter().map(|id| (id.to_string(), Vec::new())).collect(),
        }
    }

    /// Creates a document providing every anchor in [`anchors::ALL`].
    pub fn standard() -> Self {
        Self::with_anchors(&anchors::ALL)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn has_anchor(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    /// Returns child nodes of an anchor.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::ElementNotFound`] if the id is absent.
    pub fn element(&self, id: &str) -> Result<&[Node]> {
        self.elements
            .get(id)
            .map(Vec::as_slice)
            .ok_or_else(|| ChromeError::ElementNotFound(id.to_string()))
    }

    /// Replaces an anchor's children with a single text node.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::ElementNotFound`] if the id is absent.
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> Result<()> {
        let children = self.element_mut(id)?;
        children.clear();
        children.push(Node::Text(text.into()));
        Ok(())
    }

    /// Appends a child node to an anchor.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::ElementNotFound`] if the id is absent.
    pub fn append(&mut self, id: &str, node: Node) -> Result<()> {
        self.element_mut(id)?.push(node);
        Ok(())
    }

    /// Concatenated text content of an anchor, including link text.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::ElementNotFound`] if the id is absent.
    pub fn text(&self, id: &str) -> Result<String> {
        Ok(self
            .element(id)?
            .iter()
            .map(|node| match node {
                Node::Text(text) => text.as_str(),
                Node::Link(link) => link.text.as_str(),
            })
            .collect())
    }

    /// Link children of an anchor, skipping text nodes.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::ElementNotFound`] if the id is absent.
    pub fn links(&self, id: &str) -> Result<Vec<&Link>> {
        Ok(self
            .element(id)?
            .iter()
            .filter_map(|node| match node {
                Node::Link(link) => Some(link),
                Node::Text(_) => None,
            })
            .collect())
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut Vec<Node>> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| ChromeError::ElementNotFound(id.to_string()))
    }
}
