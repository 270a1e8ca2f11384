//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::version::validate_version;

/// Command line configuration for pagechrome.
#[derive(Debug, Clone, Parser)]
#[command(name = "pagechrome", version, about, long_about = None)]
pub struct Config {
    /// Site manifest path
    #[arg(default_value = "site.toml")]
    pub manifest: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Copyright year for latest pages (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Latest version label, overriding the manifest
    #[arg(long)]
    pub latest: Option<String>,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the manifest does not exist or the latest override
    /// is not a valid version label.
    pub fn validate(&self) -> Result<()> {
        if !self.manifest.is_file() {
            bail!("Manifest file does not exist: {}", self.manifest.display());
        }

        if let Some(latest) = &self.latest {
            validate_version(latest)?;
        }

        Ok(())
    }
}
