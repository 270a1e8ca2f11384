//! Page and site version metadata

use serde::Deserialize;

/// Per page metadata, fixed for the lifetime of a rendered page
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageMetadata {
    /// Document and copyright title
    pub title: String,
    /// Human readable name shown in the page heading
    pub display_name: String,
    /// Year this page version was authored
    pub creation_year: String,
    /// Whether this page is the most current version
    pub is_latest: bool,
    /// This page's own version label
    pub self_version: String,
    /// Identifier used to build version history URLs
    pub slug: String,
}

/// Site wide version history
///
/// `historical` is kept in render order. Newly superseded versions go to
/// the front so the list reads newest first below the latest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionHistory {
    pub latest: String,
    pub historical: Vec<String>,
}

impl VersionHistory {
    pub fn new(latest: impl Into<String>, historical: Vec<String>) -> Self {
        Self {
            latest: latest.into(),
            historical,
        }
    }

    /// Inserts a superseded version ahead of existing historical entries.
    pub fn push_older(&mut self, version: impl Into<String>) {
        self.historical.insert(0, version.into());
    }

    /// Makes `latest` the newest version.
    ///
    /// The previous latest label moves to the front of the historical
    /// list unless it is already present there.
    pub fn promote(&mut self, latest: &str) {
        if self.latest == latest {
            return;
        }
        let previous = std::mem::replace(&mut self.latest, latest.to_string());
        self.historical.retain(|v| v != latest);
        if !self.historical.contains(&previous) {
            self.push_older(previous);
        }
    }

    /// Returns true when the label is the latest or a historical version.
    pub fn contains(&self, version: &str) -> bool {
        self.latest == version || self.historical.iter().any(|v| v == version)
    }

    /// All labels, latest first.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.latest.as_str()).chain(self.historical.iter().map(String::as_str))
    }

    /// Number of entries the version list will contain.
    pub fn entry_count(&self) -> usize {
        1 + self.historical.len()
    }
}
