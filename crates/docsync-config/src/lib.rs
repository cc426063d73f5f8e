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

//! Run-profile configuration for a documentation sync pass.
//!
//! Layout: `model.rs` (typed profile sections and the sync mode),
//! `defaults.rs` (centralised default values), `validate.rs`
//! (validation/normalisation helpers), `error.rs` (typed errors).

pub mod defaults;
pub mod error;
pub mod model;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use model::{DocsProfile, ModelProfile, SourceProfile, SyncMode, SyncProfile};
pub use validate::{normalize_extension, validate_profile};
