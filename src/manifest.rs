//! Site manifest loading
//!
//! A manifest describes the site wide version history, the URL scheme,
//! an optional donation link, and every page to render. It is read from
//! TOML:
//!
//! ```toml
//! latest_version = "v1.0"
//! historical_versions = ["v0.1"]
//!
//! [urls]
//! scheme = "slug"
//! host = "https://example.github.io/sites/smoking/"
//!
//! [[pages]]
//! title = "About Us"
//! display_name = "About"
//! creation_year = "2021"
//! is_latest = true
//! self_version = "v1.0"
//! slug = "about"
//! ```

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::links::UrlScheme;
use crate::metadata::{PageMetadata, VersionHistory};
use crate::path::ensure_contained;
use crate::renderer::{DonationLink, PageChromeRenderer};
use crate::version::validate_version;

/// One page to generate
#[derive(Debug, Clone, Deserialize)]
pub struct PageEntry {
    #[serde(flatten)]
    pub metadata: PageMetadata,
    /// Output file relative to the output directory
    pub output: Option<PathBuf>,
    /// Body HTML fragment relative to the manifest
    pub content: Option<PathBuf>,
}

impl PageEntry {
    /// Output path, defaulting to `{slug}.html`.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.html", self.metadata.slug)))
    }
}

/// Parsed `site.toml`
#[derive(Debug, Clone, Deserialize)]
pub struct SiteManifest {
    pub latest_version: String,
    #[serde(default)]
    pub historical_versions: Vec<String>,
    pub urls: UrlScheme,
    pub donation: Option<DonationLink>,
    #[serde(default)]
    pub pages: Vec<PageEntry>,
    /// Directory content paths resolve against
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl SiteManifest {
    /// Reads and parses a manifest file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not a valid manifest.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest: {}", path.display()))?;

        let mut manifest = Self::from_toml_str(&text)
            .with_context(|| format!("Failed to parse manifest: {}", path.display()))?;
        manifest.base_dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Ok(manifest)
    }

    /// Parses a manifest from TOML text.
    ///
    /// # Errors
    ///
    /// Returns error on malformed TOML or missing fields.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid manifest TOML")
    }

    /// Replaces the latest version label.
    ///
    /// The previous latest label moves to the front of the historical
    /// list unless it is already present there. Pages marked latest are
    /// retargeted to the new label so each keeps a single active entry.
    pub fn set_latest(&mut self, latest: &str) {
        let mut history = self.history();
        history.promote(latest);
        self.latest_version = history.latest;
        self.historical_versions = history.historical;

        for page in self.pages.iter_mut().filter(|p| p.metadata.is_latest) {
            page.metadata.self_version = latest.to_string();
        }
    }

    /// Validates version labels and pages.
    ///
    /// Pages whose own version is missing from the history are reported
    /// with a warning; their version list simply has no active entry.
    ///
    /// # Errors
    ///
    /// Returns error for malformed or duplicate labels, when no pages are
    /// declared, when a page marked latest carries another version, or
    /// when an output or content path leaves its base directory.
    pub fn validate(&self) -> Result<()> {
        let history = self.history();
        let mut seen = HashSet::new();
        for version in history.labels() {
            validate_version(version)
                .with_context(|| format!("Bad version label in history: {}", version))?;
            if !seen.insert(version) {
                bail!("Duplicate version label in history: {}", version);
            }
        }

        if self.pages.is_empty() {
            bail!("Manifest declares no pages");
        }

        for page in &self.pages {
            let meta = &page.metadata;
            validate_version(&meta.self_version)
                .with_context(|| format!("Bad version label on page {}", meta.slug))?;
            if meta.is_latest && meta.self_version != history.latest {
                bail!(
                    "Page {} is marked latest but has version {} (latest is {})",
                    meta.slug,
                    meta.self_version,
                    history.latest
                );
            }
            ensure_contained(&page.output_path())
                .with_context(|| format!("Bad output path on page {}", meta.slug))?;
            if let Some(content) = &page.content {
                ensure_contained(content)
                    .with_context(|| format!("Bad content path on page {}", meta.slug))?;
            }
            if !history.contains(&meta.self_version) {
                warn!(
                    page = %meta.slug,
                    version = %meta.self_version,
                    "page version not found in version history"
                );
            }
        }

        Ok(())
    }

    pub fn history(&self) -> VersionHistory {
        VersionHistory::new(
            self.latest_version.clone(),
            self.historical_versions.clone(),
        )
    }

    /// Builds a renderer for this site.
    ///
    /// # Arguments
    ///
    /// * `current_year`: Year override; local calendar year when None
    pub fn renderer(&self, current_year: Option<i32>) -> PageChromeRenderer {
        let renderer = PageChromeRenderer::new(self.history(), self.urls.clone())
            .with_donation(self.donation.clone());
        match current_year {
            Some(year) => renderer.with_current_year(year),
            None => renderer,
        }
    }

    /// Reads a page's body fragment, empty when none is configured.
    ///
    /// # Errors
    ///
    /// Returns error if the configured fragment cannot be read.
    pub fn page_content(&self, page: &PageEntry) -> Result<String> {
        let Some(content) = &page.content else {
            return Ok(String::new());
        };
        let path = self.base_dir.join(content);
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read page content: {}", path.display()))
    }
}
