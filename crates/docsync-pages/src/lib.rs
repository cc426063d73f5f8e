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

//! Documentation pages: listing, the comparison report writer, and in-place
//! page updates.
//!
//! # Design
//! - The pages directory is listed flat (depth 1); nested trees are out of
//!   scope for a page set that mirrors a command reference.
//! - Listing is sorted by page name so runs process pages in a stable order.
//! - Reads are lossy so an odd encoding degrades to replacement characters
//!   instead of aborting the batch.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Result alias for page operations.
pub type PageResult<T> = std::result::Result<T, PageError>;

/// Errors raised while listing, reading, or writing documentation artifacts.
#[derive(Debug, Error)]
pub enum PageError {
    /// The documentation pages directory does not exist.
    #[error("documentation pages directory missing")]
    DocsDirMissing {
        /// Missing directory path.
        path: PathBuf,
    },

    /// Failed to read a page or implementation file.
    #[error("failed to read documentation input")]
    ReadPage {
        /// File path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Failed to append to the report file.
    #[error("failed to append to report file")]
    WriteReport {
        /// Report file path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Failed to overwrite a documentation page.
    #[error("failed to overwrite documentation page")]
    WritePage {
        /// Page file path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// One documentation page: its base name and where it lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocPage {
    /// File name without the extension; matched against the service index.
    pub name: String,
    /// Absolute or run-relative path of the page file.
    pub path: PathBuf,
}

/// List the pages directly inside `dir` carrying `extension`, sorted by name.
///
/// # Errors
///
/// Returns [`PageError::DocsDirMissing`] when `dir` is not a directory.
pub fn list_pages(dir: &Path, extension: &str) -> PageResult<Vec<DocPage>> {
    if !dir.is_dir() {
        return Err(PageError::DocsDirMissing {
            path: dir.to_path_buf(),
        });
    }

    let mut pages = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
    {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
            continue;
        }

        let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };

        pages.push(DocPage {
            name: name.to_string(),
            path: path.to_path_buf(),
        });
    }

    pages.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(dir = %dir.display(), count = pages.len(), "listed documentation pages");
    Ok(pages)
}

/// Read a text file lossily (invalid UTF-8 becomes replacement characters).
///
/// # Errors
///
/// Returns [`PageError::ReadPage`] when the file cannot be read.
pub fn read_text(path: &Path) -> PageResult<String> {
    let raw = fs::read(path).map_err(|source| PageError::ReadPage {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

/// Replace a page's contents with `content`, byte for byte.
///
/// # Errors
///
/// Returns [`PageError::WritePage`] when the write fails.
pub fn overwrite_page(path: &Path, content: &str) -> PageResult<()> {
    fs::write(path, content).map_err(|source| PageError::WritePage {
        path: path.to_path_buf(),
        source,
    })
}

/// Appends one comparison entry per page to a single report file.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    path: PathBuf,
}

impl ReportWriter {
    /// Create a writer targeting `path`; the file appears on first append.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Append one entry: a `## <name>` header, the body, and a separator.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::WriteReport`] when the file cannot be opened or
    /// written.
    pub fn append_entry(&self, name: &str, body: &str) -> PageResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| PageError::WriteReport {
                path: self.path.clone(),
                source,
            })?;

        write!(
            file,
            "## {name}\n{body}\n\n ========================================= \n\n"
        )
        .map_err(|source| PageError::WriteReport {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_file(path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, contents).expect("write file");
    }

    #[test]
    fn list_pages_filters_and_sorts() {
        let temp = TempDir::new().expect("create temp dir");
        let dir = temp.path().join("pages");
        write_file(&dir.join("zeta.adoc"), "= Zeta\n");
        write_file(&dir.join("alpha.adoc"), "= Alpha\n");
        write_file(&dir.join("notes.txt"), "not a page\n");
        write_file(&dir.join("nested/inner.adoc"), "= Inner\n");

        let pages = list_pages(&dir, "adoc").expect("listing should succeed");
        let names: Vec<&str> = pages.iter().map(|page| page.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn list_pages_rejects_missing_directory() {
        let temp = TempDir::new().expect("create temp dir");
        let err = list_pages(&temp.path().join("absent"), "adoc")
            .expect_err("missing dir should error");
        assert!(matches!(err, PageError::DocsDirMissing { .. }));
    }

    #[test]
    fn report_entries_accumulate() {
        let temp = TempDir::new().expect("create temp dir");
        let report = temp.path().join("gpt.adoc");
        let writer = ReportWriter::new(report.clone());

        writer
            .append_entry("list-commands", "Parameters match.")
            .expect("first append");
        writer
            .append_entry("stop-domain", "Missing --force flag.")
            .expect("second append");

        let contents = fs::read_to_string(&report).expect("read report");
        assert!(contents.starts_with("## list-commands\nParameters match.\n"));
        assert!(contents.contains("## stop-domain\nMissing --force flag.\n"));
        assert_eq!(contents.matches("=========================================").count(), 2);
    }

    #[test]
    fn overwrite_page_replaces_bytes_exactly() {
        let temp = TempDir::new().expect("create temp dir");
        let page = temp.path().join("list-commands.adoc");
        write_file(&page, "= Old content\n");

        overwrite_page(&page, "= Fresh content\n").expect("overwrite should succeed");

        let bytes = fs::read(&page).expect("read page");
        assert_eq!(bytes, b"= Fresh content\n");
    }

    #[test]
    fn read_text_reports_missing_file() {
        let temp = TempDir::new().expect("create temp dir");
        let err = read_text(&temp.path().join("absent.adoc"))
            .expect_err("missing file should error");
        assert!(matches!(err, PageError::ReadPage { .. }));
    }
}
