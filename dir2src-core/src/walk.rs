//! Input tree traversal
//!
//! Enumerates every regular file under an input root with an explicit,
//! iterative frontier rather than recursion. Directory access goes through
//! the [`TreeSource`] trait so tests can walk an in-memory tree.
//!
//! Traversal order is depth-first pre-order: within each directory, entries
//! are sorted lexicographically by name, the directory's own files are
//! yielded first, and then each subdirectory's full subtree is expanded
//! before the next sibling. The aggregate header builder relies on this
//! order; see [`crate::header::HeaderBuilder::declare`].

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// One regular file found during traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Raw directory names relative to the input root, outermost first
    pub rel_dirs: Vec<String>,
    /// Raw file name
    pub file_name: String,
    /// Full file contents
    pub contents: Vec<u8>,
}

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Directory-entry provider the walker reads from.
///
/// Production code uses [`FsSource`]; tests inject an in-memory tree.
pub trait TreeSource {
    /// List the entries of a directory. Order does not matter; the walker
    /// sorts entries by name.
    fn list_dir(&self, path: &Path) -> Result<Vec<TreeEntry>>;

    /// Read the full contents of a regular file.
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
}

/// [`TreeSource`] backed by the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl TreeSource for FsSource {
    fn list_dir(&self, path: &Path) -> Result<Vec<TreeEntry>> {
        let read_dir = std::fs::read_dir(path).map_err(|source| Error::InputOpen {
            path: path.to_path_buf(),
            source,
        })?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|source| Error::InputOpen {
                path: path.to_path_buf(),
                source,
            })?;
            let file_type = entry.file_type().map_err(|source| Error::InputOpen {
                path: entry.path(),
                source,
            })?;
            entries.push(TreeEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                is_dir: file_type.is_dir(),
            });
        }
        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        std::fs::read(path).map_err(|source| Error::InputOpen {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Depth-first iterator over the regular files of an input tree
pub struct Walker<'a> {
    source: &'a dyn TreeSource,
    input_root: PathBuf,
    /// Pending directories as relative segment paths, popped LIFO
    frontier: Vec<Vec<String>>,
    /// Files of the most recently expanded directory, in name order
    pending_files: VecDeque<(Vec<String>, String)>,
}

impl<'a> Walker<'a> {
    pub fn new(source: &'a dyn TreeSource, input_root: impl Into<PathBuf>) -> Self {
        Self {
            source,
            input_root: input_root.into(),
            frontier: vec![Vec::new()],
            pending_files: VecDeque::new(),
        }
    }

    fn resolve(&self, rel_dirs: &[String]) -> PathBuf {
        let mut path = self.input_root.clone();
        for dir in rel_dirs {
            path.push(dir);
        }
        path
    }

    fn expand(&mut self, rel_dirs: Vec<String>) -> Result<()> {
        let dir_path = self.resolve(&rel_dirs);
        debug!(path = %dir_path.display(), "expanding directory");

        let mut entries = self.source.list_dir(&dir_path)?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        let mut subdirs = Vec::new();
        for entry in entries {
            if entry.name == "." || entry.name == ".." {
                continue;
            }
            if entry.is_dir {
                let mut sub = rel_dirs.clone();
                sub.push(entry.name);
                subdirs.push(sub);
            } else {
                self.pending_files.push_back((rel_dirs.clone(), entry.name));
            }
        }

        // LIFO frontier: push in reverse so the lexicographically first
        // subtree is expanded next.
        for sub in subdirs.into_iter().rev() {
            self.frontier.push(sub);
        }
        Ok(())
    }
}

impl Iterator for Walker<'_> {
    type Item = Result<FileEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((rel_dirs, file_name)) = self.pending_files.pop_front() {
                let path = self.resolve(&rel_dirs).join(&file_name);
                return Some(self.source.read_file(&path).map(|contents| FileEntry {
                    rel_dirs,
                    file_name,
                    contents,
                }));
            }

            let rel_dirs = self.frontier.pop()?;
            if let Err(err) = self.expand(rel_dirs) {
                return Some(Err(err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// In-memory tree: maps relative directory paths (joined with `/`) to
    /// entry lists, and relative file paths to contents.
    #[derive(Default)]
    struct MockSource {
        dirs: BTreeMap<String, Vec<TreeEntry>>,
        files: BTreeMap<String, Vec<u8>>,
    }

    impl MockSource {
        fn with_files(paths: &[(&str, &[u8])]) -> Self {
            let mut source = Self::default();
            source.dirs.insert(String::new(), Vec::new());
            for (path, contents) in paths {
                source.add_file(path, contents);
            }
            source
        }

        fn add_file(&mut self, path: &str, contents: &[u8]) {
            let segments: Vec<&str> = path.split('/').collect();
            let (file_name, dirs) = segments.split_last().unwrap();

            let mut parent = String::new();
            for dir in dirs {
                let child = if parent.is_empty() {
                    (*dir).to_string()
                } else {
                    format!("{parent}/{dir}")
                };
                let listing = self.dirs.entry(parent).or_default();
                if !listing.iter().any(|e| e.name == **dir) {
                    listing.push(TreeEntry {
                        name: (*dir).to_string(),
                        is_dir: true,
                    });
                }
                self.dirs.entry(child.clone()).or_default();
                parent = child;
            }

            self.dirs.entry(parent.clone()).or_default().push(TreeEntry {
                name: (*file_name).to_string(),
                is_dir: false,
            });
            let full = if parent.is_empty() {
                (*file_name).to_string()
            } else {
                format!("{parent}/{file_name}")
            };
            self.files.insert(full, contents.to_vec());
        }
    }

    fn rel_key(path: &Path) -> String {
        // The walker resolves against an empty root, so paths are relative.
        path.to_string_lossy().replace('\\', "/")
    }

    impl TreeSource for MockSource {
        fn list_dir(&self, path: &Path) -> Result<Vec<TreeEntry>> {
            self.dirs.get(&rel_key(path)).cloned().ok_or_else(|| {
                Error::InputOpen {
                    path: path.to_path_buf(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                }
            })
        }

        fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
            self.files.get(&rel_key(path)).cloned().ok_or_else(|| {
                Error::InputOpen {
                    path: path.to_path_buf(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                }
            })
        }
    }

    fn collect_paths(source: &MockSource) -> Vec<String> {
        Walker::new(source, "")
            .map(|entry| {
                let entry = entry.unwrap();
                let mut segments = entry.rel_dirs;
                segments.push(entry.file_name);
                segments.join("/")
            })
            .collect()
    }

    #[test]
    fn test_empty_tree_yields_nothing() {
        let source = MockSource::with_files(&[]);
        assert!(collect_paths(&source).is_empty());
    }

    #[test]
    fn test_files_before_subdirectories() {
        let source = MockSource::with_files(&[
            ("zebra.txt", b"z"),
            ("a/nested.txt", b"n"),
            ("apple.txt", b"a"),
        ]);
        assert_eq!(
            collect_paths(&source),
            vec!["apple.txt", "zebra.txt", "a/nested.txt"]
        );
    }

    #[test]
    fn test_depth_first_subtree_before_sibling() {
        let source = MockSource::with_files(&[
            ("b/y.bin", b"y"),
            ("a/deep/f.bin", b"f"),
            ("a/x.bin", b"x"),
        ]);
        assert_eq!(
            collect_paths(&source),
            vec!["a/x.bin", "a/deep/f.bin", "b/y.bin"]
        );
    }

    #[test]
    fn test_contents_read_whole() {
        let source = MockSource::with_files(&[("data.bin", &[1, 2, 3])]);
        let entries: Vec<FileEntry> = Walker::new(&source, "")
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].contents, vec![1, 2, 3]);
        assert!(entries[0].rel_dirs.is_empty());
    }

    #[test]
    fn test_dot_entries_skipped() {
        let mut source = MockSource::with_files(&[("real.txt", b"r")]);
        source.dirs.get_mut("").unwrap().extend([
            TreeEntry {
                name: ".".to_string(),
                is_dir: true,
            },
            TreeEntry {
                name: "..".to_string(),
                is_dir: true,
            },
        ]);
        assert_eq!(collect_paths(&source), vec!["real.txt"]);
    }

    #[test]
    fn test_missing_root_surfaces_error() {
        let source = MockSource::default();
        let results: Vec<_> = Walker::new(&source, "nope").collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], Err(Error::InputOpen { .. })));
    }
}
