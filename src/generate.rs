//! Site generation from a manifest.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::assets::{CHROME_CSS, write_css_assets};
use crate::document::Document;
use crate::manifest::{PageEntry, SiteManifest};
use crate::pages::page;
use crate::path::root_prefix;
use crate::renderer::PageChromeRenderer;

/// Renders one manifest page to an HTML string.
///
/// Fills a fresh [`Document`] with the page chrome and wraps it with the
/// page body. The stylesheet link is made relative to the page's output
/// location.
///
/// # Arguments
///
/// * `renderer`: Site renderer
/// * `entry`: Page to render
/// * `body_html`: Trusted body fragment
///
/// # Errors
///
/// Returns error if the chrome cannot be rendered onto the document.
pub fn render_page(
    renderer: &PageChromeRenderer,
    entry: &PageEntry,
    body_html: &str,
) -> Result<String> {
    let mut doc = Document::standard();
    renderer
        .render(&entry.metadata, &mut doc)
        .with_context(|| format!("Failed to render chrome for page {}", entry.metadata.slug))?;

    let css_path = format!(
        "{}assets/{}",
        root_prefix(&entry.output_path()),
        CHROME_CSS
    );
    Ok(page::generate(&doc, &css_path, body_html).into_string())
}

/// Generates every manifest page into the output directory.
///
/// # Arguments
///
/// * `manifest`: Validated site manifest
/// * `output`: Output directory, created if missing
/// * `current_year`: Copyright year override for latest pages
///
/// # Returns
///
/// Paths of the written HTML files, in manifest order
///
/// # Errors
///
/// Returns error if rendering fails or any file cannot be written.
pub fn generate_site(
    manifest: &SiteManifest,
    output: &Path,
    current_year: Option<i32>,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory: {}", output.display()))?;
    write_css_assets(&output.join("assets"))?;

    let renderer = manifest.renderer(current_year);
    let mut written = Vec::with_capacity(manifest.pages.len());

    for entry in &manifest.pages {
        let body = manifest.page_content(entry)?;
        let html = render_page(&renderer, entry, &body)?;

        let path = output.join(entry.output_path());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&path, html)
            .with_context(|| format!("Failed to write page: {}", path.display()))?;

        info!(
            page = %entry.metadata.slug,
            version = %entry.metadata.self_version,
            "Generated: {}",
            path.display()
        );
        written.push(path);
    }

    Ok(written)
}
