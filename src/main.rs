use anyhow::{Context, Result};
use pagechrome::{Config, SiteManifest};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let mut manifest = SiteManifest::load(&config.manifest).context("Failed to load manifest")?;
    if let Some(latest) = &config.latest {
        manifest.set_latest(latest);
    }
    manifest.validate().context("Invalid manifest")?;

    let written = pagechrome::generate_site(&manifest, &config.output, config.year)
        .context("Failed to generate site")?;

    tracing::info!(
        "Generated {} pages in {}",
        written.len(),
        config.output.display()
    );

    Ok(())
}
