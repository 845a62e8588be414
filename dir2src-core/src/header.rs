//! Aggregate header construction
//!
//! The header declares every embedded array as an `extern` symbol, nested in
//! namespaces that mirror the directory hierarchy. Sibling declarations must
//! share a single `namespace` open rather than repeating it per file, so the
//! builder tracks which namespace segments are currently open and emits only
//! the close/open sequence needed at each divergence point.

use std::fmt::Write as _;

use crate::source::BANNER;

/// Incremental builder for the aggregate declaration header.
///
/// Lifecycle: [`new`](Self::new) at run start, one [`declare`](Self::declare)
/// per embedded file in traversal order, [`finish`](Self::finish) at run end.
///
/// # Examples
///
/// ```rust
/// use dir2src_core::header::HeaderBuilder;
///
/// let mut header = HeaderBuilder::new("Bin");
/// header.declare(&["assets".to_string()], "logo_png", 512);
/// header.declare(&["assets".to_string()], "icon_png", 128);
/// let text = header.finish();
/// assert!(text.contains("extern std::array<uint8_t, 512> logo_png;"));
/// // Both declarations share one `namespace assets` open.
/// assert_eq!(text.matches("namespace assets").count(), 1);
/// ```
#[derive(Debug)]
pub struct HeaderBuilder {
    buffer: String,
    /// Namespace segments currently open, excluding the root namespace,
    /// which opens in `new` and closes in `finish`.
    open: Vec<String>,
}

impl HeaderBuilder {
    /// Start a header wrapped in `root_namespace`.
    ///
    /// `root_namespace` must already be a sanitized identifier.
    pub fn new(root_namespace: &str) -> Self {
        let mut buffer = String::from(BANNER);
        buffer.push_str("\n\n#pragma once\n\n#include <array>\n#include <cstdint>\n\n");
        let _ = write!(buffer, "namespace {root_namespace} {{\n\n");

        Self {
            buffer,
            open: Vec::new(),
        }
    }

    /// Declare one embedded array at the given namespace path.
    ///
    /// `namespaces` are the sanitized segments below the root namespace.
    /// Closes every open segment past the common prefix with the previous
    /// declaration (innermost first), opens the remaining new segments, then
    /// emits the `extern` declaration.
    ///
    /// Precondition: declarations arrive in depth-first traversal order, a
    /// full subtree before the next sibling. Under that order a shared
    /// segment prefix between consecutive paths always refers to the same
    /// ancestor directory, so prefix comparison alone is sound.
    pub fn declare(&mut self, namespaces: &[String], identifier: &str, len: usize) {
        let common = self
            .open
            .iter()
            .zip(namespaces)
            .take_while(|(open, new)| open == new)
            .count();

        for _ in common..self.open.len() {
            self.buffer.push_str("\n}\n");
        }
        self.open.truncate(common);

        for namespace in &namespaces[common..] {
            let _ = write!(self.buffer, "\nnamespace {namespace} {{\n\n");
            self.open.push(namespace.clone());
        }

        let _ = writeln!(
            self.buffer,
            "extern std::array<uint8_t, {len}> {identifier};"
        );
    }

    /// Close all remaining namespaces, including the root, and return the
    /// completed header text.
    pub fn finish(mut self) -> String {
        for _ in 0..=self.open.len() {
            self.buffer.push_str("\n}\n");
        }
        self.buffer
    }
}
