//! Path utilities for HTML generation

use anyhow::{Result, bail};
use std::path::{Component, Path};

/// Checks that a path stays below the directory it is joined onto.
///
/// # Errors
///
/// Returns error for absolute paths or paths with `..` components.
pub fn ensure_contained(path: &Path) -> Result<()> {
    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                bail!("Path must not contain '..': {}", path.display())
            }
            Component::RootDir | Component::Prefix(_) => {
                bail!("Path must be relative: {}", path.display())
            }
        }
    }
    Ok(())
}

/// Calculates how many directories a page sits below the output root.
///
/// # Arguments
///
/// * `output`: Page path relative to the output directory
///
/// # Returns
///
/// Number of `../` segments needed to reach the output root
pub fn calculate_depth(output: &Path) -> usize {
    output
        .parent()
        .map(|parent| {
            parent
                .components()
                .filter(|c| matches!(c, Component::Normal(_)))
                .count()
        })
        .unwrap_or(0)
}

/// Returns the relative prefix from a page back to the output root.
pub fn root_prefix(output: &Path) -> String {
    "../".repeat(calculate_depth(output))
}
