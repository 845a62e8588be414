//! Output persistence
//!
//! Writes generated text to the output tree, creating missing ancestor
//! directories first. Directory creation is attempted for every file and is
//! idempotent. Writes replace any existing file; there is no partial-write
//! recovery, a failed run is expected to be re-run.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Create the parent directories of `path` as needed, then write `contents`,
/// replacing any existing file.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::OutputWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, contents).map_err(|source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote output file");
    Ok(())
}
