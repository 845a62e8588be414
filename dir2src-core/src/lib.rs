//! # dir2src-core
//!
//! Build-time resource embedding: walks a directory tree and generates, for
//! every regular file, a C++ source file embedding that file's bytes as a
//! `std::array<uint8_t, N>` inside namespaces mirroring the directory path,
//! plus one aggregate header (`bin.h`) declaring every array as an `extern`
//! symbol. Programs link the generated sources instead of reading asset
//! files at runtime.
//!
//! Every run is a pure function of the input tree, the output root, and the
//! root namespace name: single-threaded, synchronous, full rebuild, with
//! byte-stable output for reproducible builds.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use dir2src_core::{FsSource, GenerateConfig, generate};
//!
//! let mut config = GenerateConfig::new("assets", "generated");
//! config.root_namespace = "Assets".to_string();
//!
//! let summary = generate(&config, &FsSource)?;
//! println!("embedded {} files", summary.source_files.len());
//! # Ok::<(), dir2src_core::Error>(())
//! ```
//!
//! A file `assets/ui/logo.png` becomes `generated/ui/logo.png.cpp` defining
//! `Assets::ui::logo_png`, declared `extern` in `generated/bin.h`.

pub mod array;
pub mod error;
pub mod generate;
pub mod header;
pub mod ident;
pub mod output;
pub mod source;
pub mod walk;

pub use error::{Error, Result};
pub use generate::{
    DEFAULT_ROOT_NAMESPACE, GenerateConfig, GenerateSummary, HEADER_FILE_NAME, generate,
};
pub use header::HeaderBuilder;
pub use walk::{FileEntry, FsSource, TreeEntry, TreeSource, Walker};
