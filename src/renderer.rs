//! Page chrome rendering
//!
//! Fills the fixed anchors of a [`Document`] from [`PageMetadata`]: the
//! document title, the page name heading, the version label, the copyright
//! line, the version history list, and an optional donation link.

use chrono::Datelike;
use serde::Deserialize;
use tracing::debug;

use crate::document::{Document, Link, Node, anchors};
use crate::error::{ChromeError, Result};
use crate::links::UrlScheme;
use crate::metadata::{PageMetadata, VersionHistory};
use crate::version::{hyphenate, version_class};

/// CSS class suffix marking the entry for the page being viewed.
pub const ACTIVE_CLASS: &str = "active";

/// Optional support link appended after the version list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DonationLink {
    pub href: String,
    pub text: String,
}

/// One entry of the version history list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    pub version: String,
    pub label: String,
    pub href: String,
    pub base_class: String,
    pub active: bool,
}

impl VersionEntry {
    /// Full class attribute, e.g. `version--v-1-0 active`.
    pub fn class_name(&self) -> String {
        if self.active {
            format!("{} {}", self.base_class, ACTIVE_CLASS)
        } else {
            self.base_class.clone()
        }
    }

    fn into_node(self) -> Node {
        Node::Link(Link {
            class: Some(self.class_name()),
            href: self.href,
            text: self.label,
        })
    }
}

/// Renders title, version and copyright chrome onto a document
#[derive(Debug, Clone)]
pub struct PageChromeRenderer {
    history: VersionHistory,
    urls: UrlScheme,
    donation: Option<DonationLink>,
    current_year: i32,
}

impl PageChromeRenderer {
    /// Creates a renderer using the local calendar year.
    pub fn new(history: VersionHistory, urls: UrlScheme) -> Self {
        Self {
            history,
            urls,
            donation: None,
            current_year: chrono::Local::now().year(),
        }
    }

    /// Overrides the year used for latest page copyrights.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    pub fn with_donation(mut self, donation: Option<DonationLink>) -> Self {
        self.donation = donation;
        self
    }

    pub fn history(&self) -> &VersionHistory {
        &self.history
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Writes all chrome for one page into the document.
    ///
    /// Required anchors and version labels are checked before anything is
    /// written, so a failed render leaves the document untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::ElementNotFound`] for the first missing anchor
    /// and [`ChromeError::InvalidVersionFormat`] for a malformed label.
    pub fn render(&self, metadata: &PageMetadata, doc: &mut Document) -> Result<()> {
        let donation_anchor = self.donation.as_ref().map(|_| anchors::DONATION);
        if let Some(missing) = anchors::REQUIRED
            .into_iter()
            .chain(donation_anchor)
            .find(|id| !doc.has_anchor(id))
        {
            return Err(ChromeError::ElementNotFound(missing.to_string()));
        }

        let entries = self.build_version_list(metadata)?;
        debug!(
            page = %metadata.slug,
            version = %metadata.self_version,
            entries = entries.len(),
            "rendering page chrome"
        );

        doc.set_title(metadata.title.as_str());
        doc.set_text(anchors::PAGE_NAME, metadata.display_name.as_str())?;
        doc.set_text(
            anchors::VERSION_LABEL,
            format!("version {}", metadata.self_version),
        )?;
        doc.set_text(anchors::COPYRIGHT, self.build_copyright_text(metadata))?;

        for entry in entries {
            doc.append(anchors::VERSION_LIST, entry.into_node())?;
        }

        if let Some(donation) = &self.donation {
            doc.append(
                anchors::DONATION,
                Node::Link(Link {
                    class: None,
                    href: donation.href.clone(),
                    text: donation.text.clone(),
                }),
            )?;
        }

        Ok(())
    }

    /// Builds the version history list, latest entry first.
    ///
    /// Historical entries follow in configured order. Active markers are
    /// not exclusive: a latest page whose own label also appears among
    /// the historical versions marks both entries.
    ///
    /// # Errors
    ///
    /// Returns [`ChromeError::InvalidVersionFormat`] if any configured
    /// label lacks the `v` prefix.
    pub fn build_version_list(&self, metadata: &PageMetadata) -> Result<Vec<VersionEntry>> {
        let mut entries = Vec::with_capacity(self.history.entry_count());

        let latest = &self.history.latest;
        entries.push(VersionEntry {
            version: latest.clone(),
            label: format!("{} (latest)", latest),
            href: self.urls.latest_href(&metadata.slug),
            base_class: version_class(latest)?,
            active: metadata.is_latest,
        });

        for version in &self.history.historical {
            let hyphenated = hyphenate(version)?;
            entries.push(VersionEntry {
                version: version.clone(),
                label: version.clone(),
                href: self.urls.historical_href(&metadata.slug, &hyphenated),
                base_class: format!("version--{}", hyphenated),
                active: *version == metadata.self_version,
            });
        }

        Ok(entries)
    }

    /// Builds `"{title} © {year}"`.
    ///
    /// Latest pages carry the current year; older versions keep the year
    /// they were authored.
    pub fn build_copyright_text(&self, metadata: &PageMetadata) -> String {
        if metadata.is_latest {
            format!("{} © {}", metadata.title, self.current_year)
        } else {
            format!("{} © {}", metadata.title, metadata.creation_year)
        }
    }
}
