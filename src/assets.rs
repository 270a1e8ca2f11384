//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const CHROME: &str = include_str!("../assets/chrome.css");

/// Stylesheet file name written to the assets directory
pub const CHROME_CSS: &str = "chrome.css";

/// Writes bundled CSS assets to output directory
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!(
            "Failed to create assets directory: {}",
            assets_dir.display()
        )
    })?;
    fs::write(assets_dir.join(CHROME_CSS), CHROME)
        .with_context(|| format!("Failed to write CSS asset: {}", CHROME_CSS))?;
    Ok(())
}
