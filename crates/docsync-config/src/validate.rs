//! Validation and normalisation helpers for run profiles.

use regex::Regex;

use crate::error::{ConfigError, ConfigResult};
use crate::model::SyncProfile;

/// Inclusive sampling-temperature range accepted by the profile.
pub const TEMPERATURE_RANGE: (f32, f32) = (0.0, 2.0);

/// Validate a fully assembled run profile.
///
/// # Errors
///
/// Returns a [`ConfigError`] naming the first section/field that is empty,
/// out of range, or (for the annotation pattern) fails to compile or lacks a
/// capture group.
pub fn validate_profile(profile: &SyncProfile) -> ConfigResult<()> {
    require("source", "repo_url", &profile.source.repo_url)?;
    require_path("source", "checkout_dir", profile.source.checkout_dir.as_os_str())?;
    require("source", "marker_import", &profile.source.marker_import)?;
    require("source", "extension", &profile.source.extension)?;
    validate_annotation_pattern(&profile.source.annotation_pattern)?;

    require("docs", "repo_url", &profile.docs.repo_url)?;
    require_path("docs", "checkout_dir", profile.docs.checkout_dir.as_os_str())?;
    require_path("docs", "report_path", profile.docs.report_path.as_os_str())?;
    require("docs", "extension", &profile.docs.extension)?;

    require("model", "api_url", &profile.model.api_url)?;
    require("model", "api_key", &profile.model.api_key)?;
    require("model", "model", &profile.model.model)?;

    let (low, high) = TEMPERATURE_RANGE;
    if !(low..=high).contains(&profile.model.temperature) {
        return Err(ConfigError::InvalidField {
            section: "model",
            field: "temperature",
            message: format!("must be between {low} and {high}"),
        });
    }

    if profile.model.timeout_secs == 0 {
        return Err(ConfigError::InvalidField {
            section: "model",
            field: "timeout_secs",
            message: "must be at least 1 second".to_string(),
        });
    }

    Ok(())
}

/// Strip a single leading dot so `.adoc` and `adoc` configure the same thing.
#[must_use]
pub fn normalize_extension(extension: &str) -> String {
    extension
        .trim()
        .strip_prefix('.')
        .unwrap_or_else(|| extension.trim())
        .to_string()
}

fn require(section: &'static str, field: &'static str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::MissingField { section, field });
    }
    Ok(())
}

fn require_path(
    section: &'static str,
    field: &'static str,
    value: &std::ffi::OsStr,
) -> ConfigResult<()> {
    if value.is_empty() {
        return Err(ConfigError::MissingField { section, field });
    }
    Ok(())
}

fn validate_annotation_pattern(pattern: &str) -> ConfigResult<()> {
    require("source", "annotation_pattern", pattern)?;

    let compiled = Regex::new(pattern).map_err(|err| ConfigError::InvalidField {
        section: "source",
        field: "annotation_pattern",
        message: err.to_string(),
    })?;

    // captures_len counts the implicit whole-match group.
    if compiled.captures_len() < 2 {
        return Err(ConfigError::InvalidField {
            section: "source",
            field: "annotation_pattern",
            message: "must contain a capture group for the service name".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;
    use crate::model::{DocsProfile, ModelProfile, SourceProfile, SyncMode};
    use std::path::PathBuf;

    fn sample_profile() -> SyncProfile {
        SyncProfile {
            mode: SyncMode::Report,
            source: SourceProfile {
                repo_url: "https://example.com/impl.git".to_string(),
                checkout_dir: PathBuf::from("/tmp/impl"),
                marker_import: defaults::MARKER_IMPORT.to_string(),
                annotation_pattern: defaults::ANNOTATION_PATTERN.to_string(),
                extension: defaults::SOURCE_EXTENSION.to_string(),
            },
            docs: DocsProfile {
                repo_url: "https://example.com/docs.git".to_string(),
                checkout_dir: PathBuf::from("/tmp/docs"),
                pages_subdir: PathBuf::from("docs"),
                extension: defaults::PAGE_EXTENSION.to_string(),
                report_path: PathBuf::from(defaults::REPORT_PATH),
            },
            model: ModelProfile {
                api_url: defaults::API_URL.to_string(),
                api_key: "secret".to_string(),
                model: defaults::MODEL.to_string(),
                temperature: defaults::TEMPERATURE,
                timeout_secs: defaults::TIMEOUT_SECS,
            },
        }
    }

    #[test]
    fn default_profile_is_valid() {
        validate_profile(&sample_profile()).expect("defaults should validate");
    }

    #[test]
    fn empty_repo_url_is_rejected() {
        let mut profile = sample_profile();
        profile.source.repo_url = "  ".to_string();
        let err = validate_profile(&profile).expect_err("blank URL should fail");
        assert!(
            matches!(err, ConfigError::MissingField { section: "source", field: "repo_url" })
        );
    }

    #[test]
    fn missing_api_key_is_rejected() {
        let mut profile = sample_profile();
        profile.model.api_key = String::new();
        let err = validate_profile(&profile).expect_err("missing key should fail");
        assert!(matches!(err, ConfigError::MissingField { section: "model", field: "api_key" }));
    }

    #[test]
    fn out_of_range_temperature_is_rejected() {
        let mut profile = sample_profile();
        profile.model.temperature = 2.5;
        let err = validate_profile(&profile).expect_err("temperature should fail");
        assert!(matches!(
            err,
            ConfigError::InvalidField { field: "temperature", .. }
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut profile = sample_profile();
        profile.model.timeout_secs = 0;
        let err = validate_profile(&profile).expect_err("zero timeout should fail");
        assert!(matches!(
            err,
            ConfigError::InvalidField { field: "timeout_secs", .. }
        ));
    }

    #[test]
    fn pattern_without_capture_group_is_rejected() {
        let mut profile = sample_profile();
        profile.source.annotation_pattern = "@Service".to_string();
        let err = validate_profile(&profile).expect_err("group-less pattern should fail");
        assert!(matches!(
            err,
            ConfigError::InvalidField { field: "annotation_pattern", .. }
        ));
    }

    #[test]
    fn malformed_pattern_is_rejected() {
        let mut profile = sample_profile();
        profile.source.annotation_pattern = "@Service(".to_string();
        let err = validate_profile(&profile).expect_err("bad regex should fail");
        assert!(matches!(
            err,
            ConfigError::InvalidField { field: "annotation_pattern", .. }
        ));
    }

    #[test]
    fn normalize_extension_strips_leading_dot() {
        assert_eq!(normalize_extension(".adoc"), "adoc");
        assert_eq!(normalize_extension("adoc"), "adoc");
        assert_eq!(normalize_extension(" .java "), "java");
    }
}
