//! The sequential sync pipeline: acquire repositories, scan the
//! implementation tree, match documentation pages, and feed each matched pair
//! through the model.

use std::time::Duration;

use docsync_config::{SyncMode, SyncProfile};
use docsync_llm::{ChatModel, ChatModelConfig, prompt};
use docsync_pages::{ReportWriter, list_pages, overwrite_page, read_text};
use docsync_repo::{RemoteRepo, ensure_local_checkout};
use docsync_scanner::{ScanRules, scan_tree};
use tracing::info;
use uuid::Uuid;

use crate::cli::{CliError, CliResult};

/// Totals accumulated over one sync pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct SyncSummary {
    /// Services recorded by the annotation scan.
    pub(crate) services_indexed: usize,
    /// Documentation pages found under the pages directory.
    pub(crate) pages_total: usize,
    /// Pages with a matching service that went through the model.
    pub(crate) pages_matched: usize,
    /// Pages with no matching service, logged and skipped.
    pub(crate) pages_missed: usize,
    /// Characters sent to the model across all prompts.
    pub(crate) prompt_chars: usize,
    /// Characters received from the model across all responses.
    pub(crate) response_chars: usize,
}

/// Run one sync pass according to `profile`.
pub(crate) async fn execute(profile: &SyncProfile) -> CliResult<SyncSummary> {
    let source_repo = RemoteRepo {
        url: profile.source.repo_url.clone(),
        local_path: profile.source.checkout_dir.clone(),
    };
    ensure_local_checkout(&source_repo)
        .await
        .map_err(CliError::failure)?;

    let rules = ScanRules::new(
        &profile.source.marker_import,
        &profile.source.annotation_pattern,
        &profile.source.extension,
    )
    .map_err(CliError::failure)?;
    let index = scan_tree(&profile.source.checkout_dir, &rules).map_err(CliError::failure)?;
    info!(services = index.len(), "implementation scan finished");

    let docs_repo = RemoteRepo {
        url: profile.docs.repo_url.clone(),
        local_path: profile.docs.checkout_dir.clone(),
    };
    ensure_local_checkout(&docs_repo)
        .await
        .map_err(CliError::failure)?;

    let pages_dir = profile.docs.checkout_dir.join(&profile.docs.pages_subdir);
    let pages = list_pages(&pages_dir, &profile.docs.extension).map_err(CliError::failure)?;

    let model = ChatModel::new(&ChatModelConfig {
        api_url: profile.model.api_url.clone(),
        api_key: profile.model.api_key.clone(),
        model: profile.model.model.clone(),
        temperature: profile.model.temperature,
        timeout: Duration::from_secs(profile.model.timeout_secs),
        request_id: Uuid::new_v4().to_string(),
    })
    .map_err(CliError::failure)?;

    let report = ReportWriter::new(profile.docs.report_path.clone());

    let mut summary = SyncSummary {
        services_indexed: index.len(),
        pages_total: pages.len(),
        ..SyncSummary::default()
    };

    for page in &pages {
        let Some(source_path) = index.lookup(&page.name) else {
            info!(page = %page.path.display(), "no matching implementation file for page");
            summary.pages_missed += 1;
            continue;
        };

        let doc_text = read_text(&page.path).map_err(CliError::failure)?;
        let source_text = read_text(source_path).map_err(CliError::failure)?;

        let prompt_text = match profile.mode {
            SyncMode::Report => prompt::comparison_prompt(&doc_text, &source_text),
            SyncMode::Update => prompt::update_prompt(&doc_text, &source_text),
        };

        let response = model.generate(&prompt_text).await.map_err(CliError::failure)?;

        match profile.mode {
            SyncMode::Report => {
                report
                    .append_entry(&page.name, &response)
                    .map_err(CliError::failure)?;
            }
            SyncMode::Update => {
                overwrite_page(&page.path, &response).map_err(CliError::failure)?;
                info!(page = %page.path.display(), "page updated in place");
            }
        }

        summary.pages_matched += 1;
        summary.prompt_chars += prompt_text.chars().count();
        summary.response_chars += response.chars().count();
    }

    info!(
        mode = profile.mode.as_str(),
        matched = summary.pages_matched,
        missed = summary.pages_missed,
        prompt_chars = summary.prompt_chars,
        response_chars = summary.response_chars,
        "sync pass finished"
    );

    Ok(summary)
}
