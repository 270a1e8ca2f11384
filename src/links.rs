//! Version history URL schemes
//!
//! Pages differ only in where their latest version lives. Historical
//! versions always sit under `url/{slug}/version/{hyphenated}/`.

use serde::Deserialize;

/// Strategy for building version list hrefs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum UrlScheme {
    /// Latest version at `{host}{slug}.html`
    Slug { host: String },
    /// Latest version at a fixed path below the host
    FixedLatest { host: String, latest_path: String },
}

impl UrlScheme {
    pub fn slug(host: impl Into<String>) -> Self {
        Self::Slug { host: host.into() }
    }

    pub fn fixed_latest(host: impl Into<String>, latest_path: impl Into<String>) -> Self {
        Self::FixedLatest {
            host: host.into(),
            latest_path: latest_path.into(),
        }
    }

    /// Base URL with a trailing slash.
    pub fn host(&self) -> String {
        let host = match self {
            Self::Slug { host } | Self::FixedLatest { host, .. } => host,
        };
        if host.ends_with('/') {
            host.clone()
        } else {
            format!("{}/", host)
        }
    }

    /// Builds the href for the latest version of a page.
    pub fn latest_href(&self, slug: &str) -> String {
        match self {
            Self::Slug { .. } => format!("{}{}.html", self.host(), slug),
            Self::FixedLatest { latest_path, .. } => {
                format!("{}{}", self.host(), latest_path.trim_start_matches('/'))
            }
        }
    }

    /// Builds the href for a historical version of a page.
    ///
    /// # Arguments
    ///
    /// * `slug`: Page identifier
    /// * `hyphenated`: Hyphenated version, e.g. `v-0-1`
    pub fn historical_href(&self, slug: &str, hyphenated: &str) -> String {
        format!(
            "{}url/{}/version/{}/{}.html",
            self.host(),
            slug,
            hyphenated,
            slug
        )
    }
}
