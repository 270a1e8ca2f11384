//! Version history and copyright chrome for static documentation pages.

mod assets;
pub mod components;
mod config;
mod document;
mod error;
mod generate;
mod links;
mod manifest;
mod metadata;
pub mod pages;
mod path;
mod renderer;
mod version;

pub use assets::{CHROME_CSS, write_css_assets};
pub use config::Config;
pub use document::{Document, Link, Node, anchors};
pub use error::{ChromeError, Result};
pub use generate::{generate_site, render_page};
pub use links::UrlScheme;
pub use manifest::{PageEntry, SiteManifest};
pub use metadata::{PageMetadata, VersionHistory};
pub use path::{calculate_depth, root_prefix};
pub use renderer::{ACTIVE_CLASS, DonationLink, PageChromeRenderer, VersionEntry};
pub use version::{hyphenate, validate_version, version_class};
