//! Identifier sanitization and path tokenization
//!
//! Namespace names and array names are derived from filesystem names, which
//! may contain characters that are not valid in C++ identifiers. [`sanitize`]
//! maps an arbitrary name onto a valid identifier deterministically.

use std::path::{Component, Path};

use crate::error::{Error, Result};

/// Convert an arbitrary path segment into a valid C++ identifier.
///
/// Every character that is not ASCII alphanumeric becomes an underscore,
/// leading non-alphanumeric characters are stripped, and a leading digit is
/// escaped with an underscore prefix. Sanitizing an already-sanitized
/// identifier returns it unchanged.
///
/// # Examples
///
/// ```rust
/// use dir2src_core::ident::sanitize;
///
/// assert_eq!(sanitize("logo.png")?, "logo_png");
/// assert_eq!(sanitize("9lives")?, "_9lives");
/// assert_eq!(sanitize("__init")?, "init");
/// assert!(sanitize("...").is_err());
/// # Ok::<(), dir2src_core::Error>(())
/// ```
pub fn sanitize(segment: &str) -> Result<String> {
    let replaced: String = segment
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    let stripped = replaced.trim_start_matches('_');
    if stripped.is_empty() {
        return Err(Error::InvalidName {
            segment: segment.to_string(),
        });
    }

    if stripped.starts_with(|c: char| c.is_ascii_digit()) {
        Ok(format!("_{stripped}"))
    } else {
        Ok(stripped.to_string())
    }
}

/// Split a path into its normal components.
///
/// Repeated separators collapse, and root, prefix, `.`, and `..` components
/// are dropped, so `a//b/./c` and `a/b/c` tokenize identically. Non-UTF-8
/// components are converted lossily.
pub fn path_segments(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}
