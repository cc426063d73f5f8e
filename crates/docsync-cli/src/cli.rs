//! Argument parsing, run-profile assembly, and command dispatch.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use docsync_config::{
    DocsProfile, ModelProfile, SourceProfile, SyncMode, SyncProfile, defaults,
    normalize_extension, validate_profile,
};
use docsync_telemetry::{LogFormat, LoggingConfig, init_logging};
use tracing::error;

use crate::sync::{self, SyncSummary};

/// Parses CLI arguments, executes the requested sync pass, and renders the
/// run summary. Returns the process exit code.
pub async fn run() -> i32 {
    let cli = Cli::parse();
    let command_name = command_label(&cli.command);

    let logging = LoggingConfig {
        level: &cli.log_level,
        format: cli.log_format.map_or_else(LogFormat::infer, Into::into),
    };
    if let Err(err) = init_logging(&logging) {
        eprintln!("error: {err:#}");
        return 3;
    }

    match dispatch(cli).await {
        Ok(summary) => {
            render_summary(command_name, &summary);
            0
        }
        Err(err) => {
            let message = err.display_message();
            error!(command = command_name, "{message}");
            err.exit_code()
        }
    }
}

async fn dispatch(cli: Cli) -> CliResult<SyncSummary> {
    let profile = build_profile(cli)?;
    sync::execute(&profile).await
}

fn build_profile(cli: Cli) -> CliResult<SyncProfile> {
    let api_key = cli
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            CliError::validation("API key is required (pass --api-key or set DOCSYNC_API_KEY)")
        })?;

    let (mode, args) = match cli.command {
        Command::Report(args) => (SyncMode::Report, args),
        Command::Update(args) => (SyncMode::Update, args),
    };

    let profile = SyncProfile {
        mode,
        source: SourceProfile {
            repo_url: args.source_url,
            checkout_dir: args.source_dir,
            marker_import: args.marker_import,
            annotation_pattern: args.annotation_pattern,
            extension: normalize_extension(&args.source_ext),
        },
        docs: DocsProfile {
            repo_url: args.docs_url,
            checkout_dir: args.docs_dir,
            pages_subdir: args.pages_subdir,
            extension: normalize_extension(&args.page_ext),
            report_path: args.report,
        },
        model: ModelProfile {
            api_url: cli.api_url,
            api_key,
            model: cli.model,
            temperature: cli.temperature,
            timeout_secs: cli.timeout,
        },
    };

    validate_profile(&profile).map_err(|err| CliError::validation(err.to_string()))?;
    Ok(profile)
}

#[derive(Parser)]
#[command(
    name = "docsync",
    about = "Compare or update service documentation against its implementation"
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "DOCSYNC_API_URL",
        default_value = defaults::API_URL,
        help = "Base URL of the chat-completions API"
    )]
    api_url: String,
    #[arg(
        long,
        global = true,
        env = "DOCSYNC_API_KEY",
        hide_env_values = true,
        help = "Bearer token for the chat-completions API"
    )]
    api_key: Option<String>,
    #[arg(
        long,
        global = true,
        env = "DOCSYNC_MODEL",
        default_value = defaults::MODEL,
        help = "Model identifier requested per completion"
    )]
    model: String,
    #[arg(
        long,
        global = true,
        env = "DOCSYNC_TEMPERATURE",
        default_value_t = defaults::TEMPERATURE,
        help = "Sampling temperature requested per completion"
    )]
    temperature: f32,
    #[arg(
        long,
        global = true,
        env = "DOCSYNC_TIMEOUT_SECS",
        default_value_t = defaults::TIMEOUT_SECS,
        help = "HTTP client timeout for model calls, in seconds"
    )]
    timeout: u64,
    #[arg(
        long,
        global = true,
        default_value = docsync_telemetry::DEFAULT_LOG_LEVEL,
        help = "Log level when RUST_LOG is not set"
    )]
    log_level: String,
    #[arg(long, global = true, value_enum, help = "Log output format")]
    log_format: Option<LogFormatArg>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare each matched page and append prose findings to the report file.
    Report(SyncArgs),
    /// Rewrite each matched page in place with model output.
    Update(SyncArgs),
}

#[derive(Args)]
struct SyncArgs {
    #[arg(long, env = "DOCSYNC_SOURCE_URL", help = "Git URL of the implementation repository")]
    source_url: String,
    #[arg(
        long,
        env = "DOCSYNC_SOURCE_DIR",
        help = "Local directory holding (or receiving) the implementation checkout"
    )]
    source_dir: PathBuf,
    #[arg(long, env = "DOCSYNC_DOCS_URL", help = "Git URL of the documentation repository")]
    docs_url: String,
    #[arg(
        long,
        env = "DOCSYNC_DOCS_DIR",
        help = "Local directory holding (or receiving) the documentation checkout"
    )]
    docs_dir: PathBuf,
    #[arg(
        long,
        default_value = "docs",
        help = "Directory of documentation pages, relative to the docs checkout"
    )]
    pages_subdir: PathBuf,
    #[arg(
        long,
        default_value = defaults::PAGE_EXTENSION,
        help = "Extension of documentation pages"
    )]
    page_ext: String,
    #[arg(
        long,
        default_value = defaults::MARKER_IMPORT,
        help = "Import line marking a source file as a scan candidate"
    )]
    marker_import: String,
    #[arg(
        long,
        default_value = defaults::ANNOTATION_PATTERN,
        help = "Regex whose first capture group extracts the service name"
    )]
    annotation_pattern: String,
    #[arg(
        long,
        default_value = defaults::SOURCE_EXTENSION,
        help = "Extension of implementation files considered by the scanner"
    )]
    source_ext: String,
    #[arg(
        long,
        default_value = defaults::REPORT_PATH,
        help = "File comparison prose is appended to (report mode)"
    )]
    report: PathBuf,
}

/// Log output format flag.
#[derive(Copy, Clone, Debug, ValueEnum)]
enum LogFormatArg {
    /// Human-readable output.
    Pretty,
    /// Structured JSON output.
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Json => Self::Json,
        }
    }
}

#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

const fn command_label(command: &Command) -> &'static str {
    match command {
        Command::Report(_) => "report",
        Command::Update(_) => "update",
    }
}

fn render_summary(command: &str, summary: &SyncSummary) {
    println!("mode: {command}");
    println!("services indexed: {}", summary.services_indexed);
    println!(
        "pages: {} ({} matched, {} missed)",
        summary.pages_total, summary.pages_matched, summary.pages_missed
    );
    println!(
        "characters: {} prompted, {} generated",
        summary.prompt_chars, summary.response_chars
    );
}
