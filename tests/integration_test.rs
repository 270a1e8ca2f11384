//! Integration tests for pagechrome.
//!
//! Tests manifest loading, chrome rendering, and site generation.

mod common;

use anyhow::Result;
use common::{HOST, about_manifest, create_test_site, read_page};
use pagechrome::{
    ChromeError, Document, PageChromeRenderer, PageMetadata, SiteManifest, UrlScheme,
    VersionHistory, anchors, generate_site, hyphenate,
};

fn about_metadata() -> PageMetadata {
    PageMetadata {
        title: "About Us".to_string(),
        display_name: "About".to_string(),
        creation_year: "2021".to_string(),
        is_latest: true,
        self_version: "v1.0".to_string(),
        slug: "about".to_string(),
    }
}

/// Tests the About Us scenario through the public API.
#[test]
fn test_about_scenario_version_list_and_copyright() -> Result<()> {
    // Arrange
    let renderer = PageChromeRenderer::new(
        VersionHistory::new("v1.0", vec!["v0.1".to_string()]),
        UrlScheme::slug(HOST),
    );
    let year = renderer.current_year();

    // Act
    let entries = renderer.build_version_list(&about_metadata())?;
    let copyright = renderer.build_copyright_text(&about_metadata());

    // Assert
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].label, "v1.0 (latest)");
    assert!(entries[0].active);
    assert_eq!(entries[0].href, format!("{}about.html", HOST));
    assert_eq!(entries[1].label, "v0.1");
    assert!(!entries[1].active);
    assert_eq!(
        entries[1].href,
        format!("{}url/about/version/v-0-1/about.html", HOST)
    );
    assert_eq!(copyright, format!("About Us © {}", year));

    Ok(())
}

/// Tests that a document missing an anchor reports the anchor id.
#[test]
fn test_render_reports_missing_anchor() {
    // Arrange
    let renderer = PageChromeRenderer::new(
        VersionHistory::new("v1.0", vec![]),
        UrlScheme::slug(HOST),
    );
    let mut doc = Document::with_anchors(&[anchors::VERSION_LIST, anchors::COPYRIGHT]);

    // Act
    let result = renderer.render(&about_metadata(), &mut doc);

    // Assert
    assert_eq!(
        result,
        Err(ChromeError::ElementNotFound("page-name".to_string()))
    );
    assert_eq!(doc.title(), "", "Failed render should not set the title");
}

/// Tests hyphenation over a range of well formed labels.
#[test]
fn test_hyphenate_well_formed_labels() {
    let cases = [
        ("v0.1", "v-0-1"),
        ("v1.0", "v-1-0"),
        ("v2.10.3", "v-2-10-3"),
        ("v12", "v-12"),
    ];

    for (input, expected) in cases {
        assert_eq!(hyphenate(input).as_deref(), Ok(expected), "input {}", input);
    }
}

/// Tests loading a manifest from disk and generating every page.
#[test]
fn test_generate_site_from_manifest_file() -> Result<()> {
    // Arrange
    let (dir, manifest_path) = create_test_site(&about_manifest())?;
    let output = dir.path().join("dist");
    let manifest = SiteManifest::load(&manifest_path)?;
    manifest.validate()?;

    // Act
    let written = generate_site(&manifest, &output, Some(2026))?;

    // Assert
    assert_eq!(written.len(), 2);

    let latest = read_page(&output, "about.html")?;
    assert!(latest.contains("<title>About Us</title>"));
    assert!(latest.contains("We make smoke detectors."));
    assert!(latest.contains("version v1.0"));
    assert!(latest.contains("About Us © 2026"));
    assert!(latest.contains(r#"class="version--v-1-0 active""#));
    assert!(latest.contains(r#"class="version--v-0-1""#));
    assert!(latest.contains("Buy me coffee"));

    assert_eq!(latest.matches(" active\"").count(), 1);

    let archived = read_page(&output, "url/about/version/v-0-1/about.html")?;
    assert!(archived.contains("version v0.1"));
    assert!(archived.contains("About Us © 2021"));
    assert!(archived.contains(r#"class="version--v-1-0""#));
    assert!(archived.contains(r#"class="version--v-0-1 active""#));
    assert!(archived.contains(r#"href="../../../../assets/chrome.css""#));
    assert_eq!(archived.matches(" active\"").count(), 1);

    Ok(())
}

/// Tests that a missing body fragment fails generation with context.
#[test]
fn test_generate_site_missing_content_fragment() -> Result<()> {
    // Arrange
    let manifest_text = about_manifest().replace("about.part.html", "missing.html");
    let (dir, manifest_path) = create_test_site(&manifest_text)?;
    let manifest = SiteManifest::load(&manifest_path)?;

    // Act
    let result = generate_site(&manifest, &dir.path().join("dist"), Some(2026));

    // Assert
    let err = result.expect_err("Missing fragment should fail");
    assert!(format!("{:#}", err).contains("missing.html"));

    Ok(())
}

/// Tests that overriding the latest label shifts the history.
#[test]
fn test_latest_override_regenerates_history() -> Result<()> {
    // Arrange
    let (dir, manifest_path) = create_test_site(&about_manifest())?;
    let output = dir.path().join("dist");
    let mut manifest = SiteManifest::load(&manifest_path)?;

    // Act
    manifest.set_latest("v1.1");
    generate_site(&manifest, &output, Some(2026))?;

    // Assert
    let page = read_page(&output, "about.html")?;
    assert!(page.contains("v1.1 (latest)"));
    assert!(page.contains(&format!("{}url/about/version/v-1-0/about.html", HOST)));
    assert!(page.contains("version v1.1"));
    assert_eq!(page.matches(" active\"").count(), 1);
    let latest = page.find("v1.1 (latest)").unwrap();
    let previous = page.find(">v1.0<").unwrap();
    let oldest = page.find(">v0.1<").unwrap();
    assert!(latest < previous && previous < oldest);

    Ok(())
}

/// Tests that loading a nonexistent manifest fails.
#[test]
fn test_load_missing_manifest() {
    let result = SiteManifest::load(std::path::Path::new("/nonexistent/site.toml"));

    assert!(result.is_err());
}

/// Tests that an output path leaving the output directory is rejected.
#[test]
fn test_validate_rejects_output_outside_directory() -> Result<()> {
    // Arrange
    let manifest_text = about_manifest().replace(
        "output = \"url/about/version/v-0-1/about.html\"",
        "output = \"../escaped.html\"",
    );
    let (dir, manifest_path) = create_test_site(&manifest_text)?;
    let manifest = SiteManifest::load(&manifest_path)?;

    // Act
    let result = manifest.validate();

    // Assert
    assert!(result.is_err());
    assert!(!dir.path().join("escaped.html").exists());

    Ok(())
}
