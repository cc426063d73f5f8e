//! Typed run-profile models for a documentation sync pass.
//!
//! # Design
//! - Pure data carriers assembled by the CLI and consumed by the pipeline.
//! - Validation lives in `validate.rs`; these types never self-check.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What the pipeline does with the model output for each matched page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    /// Append comparison prose to the report file; pages are untouched.
    Report,
    /// Overwrite each matched page with the model's rewritten content.
    Update,
}

impl SyncMode {
    /// Render the mode as its lowercase string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Report => "report",
            Self::Update => "update",
        }
    }
}

/// Implementation repository and annotation-scan settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceProfile {
    /// Git URL the implementation repository is cloned from.
    pub repo_url: String,
    /// Local directory holding (or receiving) the implementation checkout.
    pub checkout_dir: PathBuf,
    /// Import line that marks a file as a scan candidate.
    pub marker_import: String,
    /// Regex whose first capture group extracts the service name.
    pub annotation_pattern: String,
    /// Extension (without leading dot) of files the scanner opens.
    pub extension: String,
}

/// Documentation repository and page-matching settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocsProfile {
    /// Git URL the documentation repository is cloned from.
    pub repo_url: String,
    /// Local directory holding (or receiving) the documentation checkout.
    pub checkout_dir: PathBuf,
    /// Directory of documentation pages, relative to the checkout.
    pub pages_subdir: PathBuf,
    /// Extension (without leading dot) of documentation pages.
    pub extension: String,
    /// File comparison prose is appended to in report mode.
    pub report_path: PathBuf,
}

/// Hosted chat-completion model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelProfile {
    /// Base URL of the chat-completions API.
    pub api_url: String,
    /// Bearer token presented to the API.
    pub api_key: String,
    /// Model identifier requested per completion.
    pub model: String,
    /// Sampling temperature requested per completion.
    pub temperature: f32,
    /// Fixed HTTP client timeout, in seconds.
    pub timeout_secs: u64,
}

/// Complete profile for one sync pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncProfile {
    /// Selected output mode.
    pub mode: SyncMode,
    /// Implementation-side settings.
    pub source: SourceProfile,
    /// Documentation-side settings.
    pub docs: DocsProfile,
    /// Model client settings.
    pub model: ModelProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_mode_renders_lowercase() {
        assert_eq!(SyncMode::Report.as_str(), "report");
        assert_eq!(SyncMode::Update.as_str(), "update");
    }

    #[test]
    fn sync_mode_serializes_lowercase() {
        let json = serde_json::to_string(&SyncMode::Update).expect("serialize mode");
        assert_eq!(json, "\"update\"");
    }
}
