//! Shared test utilities for integration tests.
//!
//! Provides helpers for writing temporary site manifests and page body
//! fragments used across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HOST: &str = "https://example.github.io/sites/smoking/";

/// Manifest with an About page at v1.0 and its archived v0.1 copy.
pub fn about_manifest() -> String {
    format!(
        r#"
latest_version = "v1.0"
historical_versions = ["v0.1"]

[urls]
scheme = "slug"
host = "{HOST}"

[donation]
href = "https://www.buymeacoffee.com/someone"
text = "Buy me coffee"

[[pages]]
title = "About Us"
display_name = "About"
creation_year = "2021"
is_latest = true
self_version = "v1.0"
slug = "about"
content = "about.part.html"

[[pages]]
title = "About Us"
display_name = "About"
creation_year = "2021"
is_latest = false
self_version = "v0.1"
slug = "about"
output = "url/about/version/v-0-1/about.html"
"#
    )
}

/// Creates temporary site directory containing a manifest.
///
/// # Arguments
///
/// * `manifest`: Manifest TOML text
///
/// # Returns
///
/// Temporary directory and path to the written `site.toml`
///
/// # Errors
///
/// Returns error if directory creation or file writes fail
pub fn create_test_site(manifest: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("site.toml");
    fs::write(&path, manifest)?;
    fs::write(
        dir.path().join("about.part.html"),
        "<p>We make smoke detectors.</p>",
    )?;
    Ok((dir, path))
}

/// Reads a generated page relative to an output directory.
pub fn read_page(output: &Path, page: &str) -> Result<String> {
    Ok(fs::read_to_string(output.join(page))?)
}
