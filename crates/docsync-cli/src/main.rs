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

//! Thin CLI entrypoint that delegates to the library implementation.

use std::process;

/// Entry point for the docsync binary.
#[tokio::main]
async fn main() {
    let exit_code = docsync_cli::run().await;
    if exit_code != 0 {
        process::exit(exit_code);
    }
}
