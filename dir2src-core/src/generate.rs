//! Run orchestration
//!
//! Drives the walker over the input tree, renders one source unit per file,
//! keeps the aggregate header in step, and writes everything under the
//! output root. Every invocation is a full rebuild; any error aborts the
//! whole run rather than leaving a partially embedded tree.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::header::HeaderBuilder;
use crate::ident::sanitize;
use crate::output::write_file;
use crate::source::render_source;
use crate::walk::{TreeSource, Walker};

/// Root namespace used when none is configured
pub const DEFAULT_ROOT_NAMESPACE: &str = "Bin";

/// File name of the aggregate declaration header
pub const HEADER_FILE_NAME: &str = "bin.h";

/// Extension appended to each generated source file
pub const SOURCE_EXTENSION: &str = "cpp";

/// Configuration for one generation run
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Directory tree to embed
    pub input_root: PathBuf,
    /// Directory the generated sources and header are written under
    pub output_root: PathBuf,
    /// Outermost namespace wrapping all generated declarations
    pub root_namespace: String,
    /// Print the absolute path of each generated source file to stdout
    pub print_output_files: bool,
}

impl GenerateConfig {
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            root_namespace: DEFAULT_ROOT_NAMESPACE.to_string(),
            print_output_files: false,
        }
    }
}

/// Paths written by a completed generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Generated per-file sources, in traversal order
    pub source_files: Vec<PathBuf>,
    /// The aggregate header
    pub header_file: PathBuf,
}

/// Embed every regular file under `config.input_root`.
///
/// Writes one source unit per input file at
/// `<output-root>/<sanitized-dirs...>/<file-name>.cpp` and the aggregate
/// header at `<output-root>/bin.h`. Output directories mirror the sanitized
/// namespace path, not the raw directory names.
pub fn generate(config: &GenerateConfig, source: &dyn TreeSource) -> Result<GenerateSummary> {
    let root_namespace = sanitize(&config.root_namespace)?;

    let mut header = HeaderBuilder::new(&root_namespace);
    let mut source_files = Vec::new();

    for entry in Walker::new(source, &config.input_root) {
        let entry = entry?;

        let namespaces: Vec<String> = entry
            .rel_dirs
            .iter()
            .map(|dir| sanitize(dir))
            .collect::<Result<_>>()?;
        let identifier = sanitize(&entry.file_name)?;

        let body = render_source(&root_namespace, &namespaces, &identifier, &entry.contents);

        let mut path = config.output_root.clone();
        for namespace in &namespaces {
            path.push(namespace);
        }
        path.push(format!("{}.{SOURCE_EXTENSION}", entry.file_name));

        write_file(&path, &body)?;
        debug!(
            path = %path.display(),
            bytes = entry.contents.len(),
            "embedded file"
        );

        if config.print_output_files {
            println!("{}", absolute_path(&path)?.display());
        }

        header.declare(&namespaces, &identifier, entry.contents.len());
        source_files.push(path);
    }

    let header_file = config.output_root.join(HEADER_FILE_NAME);
    write_file(&header_file, &header.finish())?;

    info!(
        files = source_files.len(),
        header = %header_file.display(),
        "generation complete"
    );

    Ok(GenerateSummary {
        source_files,
        header_file,
    })
}

fn absolute_path(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|source| Error::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
