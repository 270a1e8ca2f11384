//! Version label utilities
//!
//! Version labels take the form `v` followed by dot separated numeric
//! components (`v1.0`, `v0.1.3`). The hyphenated form (`v-1-0`) is used
//! both as a CSS class fragment and as a URL path segment.

use crate::error::{ChromeError, Result};

/// Converts a version label to its hyphenated form
///
/// Strips the leading `v`, splits the remainder on `.`, rejoins with `-`
/// and prefixes `v-`. Only the leading `v` is checked; use
/// [`validate_version`] for the strict form.
///
/// # Errors
///
/// Returns [`ChromeError::InvalidVersionFormat`] when the label does not
/// start with `v`.
pub fn hyphenate(version: &str) -> Result<String> {
    let Some(rest) = version.strip_prefix('v') else {
        return Err(ChromeError::InvalidVersionFormat(version.to_string()));
    };

    let parts: Vec<&str> = rest.split('.').collect();
    Ok(format!("v-{}", parts.join("-")))
}

/// Checks that a label is `v` followed by dot separated numbers
///
/// # Errors
///
/// Returns [`ChromeError::InvalidVersionFormat`] for empty components,
/// non digit characters, or a missing `v` prefix.
pub fn validate_version(version: &str) -> Result<()> {
    let valid = version.strip_prefix('v').is_some_and(|rest| {
        rest.split('.')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
    });

    if valid {
        Ok(())
    } else {
        Err(ChromeError::InvalidVersionFormat(version.to_string()))
    }
}

/// Returns the base CSS class for a version list entry
///
/// # Errors
///
/// Propagates [`hyphenate`] failures.
pub fn version_class(version: &str) -> Result<String> {
    Ok(format!("version--{}", hyphenate(version)?))
}
