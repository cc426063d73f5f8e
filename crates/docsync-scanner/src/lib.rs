#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Annotation scanner: walks an implementation tree and records which file
//! declares each named service.
//!
//! # Design
//! - Line-oriented scan, no parsing: a file counts once a line containing the
//!   marker import has been seen and a later (or the same) line matches the
//!   annotation pattern; the first match wins and the file is not read further.
//! - File contents are read lossily so odd encodings cannot abort a batch.
//! - The index is ordered so iteration and logging stay deterministic.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Result, ScanError};

pub mod error;

/// Compiled rules describing what the scanner looks for.
#[derive(Debug, Clone)]
pub struct ScanRules {
    marker_import: String,
    annotation: Regex,
    extension: String,
}

impl ScanRules {
    /// Compile scan rules from their profile representation.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::PatternInvalid`] when the annotation pattern does
    /// not compile.
    pub fn new(marker_import: &str, annotation_pattern: &str, extension: &str) -> Result<Self> {
        let annotation =
            Regex::new(annotation_pattern).map_err(|source| ScanError::PatternInvalid {
                pattern: annotation_pattern.to_string(),
                source,
            })?;

        Ok(Self {
            marker_import: marker_import.to_string(),
            annotation,
            extension: extension.to_string(),
        })
    }
}

/// Ordered mapping from service name to the file that declares it.
#[derive(Debug, Default)]
pub struct ServiceIndex {
    entries: BTreeMap<String, PathBuf>,
}

impl ServiceIndex {
    /// Look up the implementation file recorded for `name`.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    /// Number of indexed services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the scan found any services at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, name: String, path: PathBuf) {
        if let Some(previous) = self.entries.insert(name.clone(), path) {
            warn!(
                service = %name,
                previous = %previous.display(),
                "service name declared more than once, keeping the later file"
            );
        }
    }
}

/// Walk `root` and build the service index according to `rules`.
///
/// Unreadable directory entries are skipped; files that fail to read are
/// errors, since a partially built index would silently drop services.
///
/// # Errors
///
/// Returns [`ScanError::RootMissing`] when `root` does not exist and
/// [`ScanError::ReadSource`] when a candidate file cannot be read.
pub fn scan_tree(root: &Path, rules: &ScanRules) -> Result<ServiceIndex> {
    if !root.exists() {
        return Err(ScanError::RootMissing {
            path: root.to_path_buf(),
        });
    }

    let mut index = ServiceIndex::default();
    for entry in WalkDir::new(root)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
    {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(rules.extension.as_str()) {
            continue;
        }

        let raw = fs::read(path).map_err(|source| ScanError::ReadSource {
            path: path.to_path_buf(),
            source,
        })?;
        let contents = String::from_utf8_lossy(&raw);

        if let Some(name) = extract_service_name(&contents, rules) {
            debug!(service = %name, file = %path.display(), "indexed service");
            index.insert(name, path.to_path_buf());
        }
    }

    Ok(index)
}

/// Extract the service name from one file's contents, if any.
fn extract_service_name(contents: &str, rules: &ScanRules) -> Option<String> {
    let mut marker_seen = false;
    for line in contents.lines() {
        if !marker_seen && line.contains(&rules.marker_import) {
            marker_seen = true;
        }

        if marker_seen
            && let Some(captures) = rules.annotation.captures(line)
        {
            return captures.get(1).map(|group| group.as_str().to_string());
        }
    }
    None
}
