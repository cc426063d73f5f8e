//! Default values for run-profile fields.
//!
//! # Design
//! - Centralise defaults so the CLI and tests stay consistent.
//! - Scan rules default to the HK2 `@Service` convention the tool was first
//!   built against; every value can be overridden per run.

/// Chat model requested when none is configured.
pub const MODEL: &str = "gpt-4o-mini";
/// Sampling temperature requested when none is configured.
pub const TEMPERATURE: f32 = 0.7;
/// HTTP client timeout for model calls, in seconds.
pub const TIMEOUT_SECS: u64 = 180;
/// Base URL of the chat-completions API.
pub const API_URL: &str = "https://api.openai.com";
/// Import line that marks a source file as a candidate for the annotation scan.
pub const MARKER_IMPORT: &str = "import org.jvnet.hk2.annotations.Service;";
/// Pattern extracting the service name from an annotation line; the first
/// capture group is the name.
pub const ANNOTATION_PATTERN: &str = "@Service\\(name\\s*=\\s*\"(.*?)\"\\)";
/// Extension of implementation files considered by the scanner.
pub const SOURCE_EXTENSION: &str = "java";
/// Extension of documentation pages considered by the matcher.
pub const PAGE_EXTENSION: &str = "adoc";
/// File the comparison report is appended to.
pub const REPORT_PATH: &str = "gpt.adoc";
