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

//! Command-line front end for the documentation sync tool.
//!
//! Layout:
//! - `cli.rs`: argument parsing, profile assembly, dispatch, summary output
//! - `sync.rs`: the sequential acquire → scan → match → complete → write pipeline
//! - `main.rs`: thin entrypoint delegating to `run()`

pub(crate) mod cli;
pub(crate) mod sync;

pub use cli::run;
