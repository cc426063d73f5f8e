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

//! Clone-if-absent acquisition of the repositories a sync pass reads from.
//!
//! # Design
//! - A checkout containing `.git` is reused as-is; nothing is fetched or
//!   verified beyond that marker.
//! - Cloning shells out to the `git` binary rather than linking a git
//!   implementation; the captured stderr becomes the error detail.

use std::path::PathBuf;

use thiserror::Error;
use tokio::process::Command;
use tracing::info;

/// Result alias for repository acquisition.
pub type RepoResult<T> = std::result::Result<T, RepoError>;

/// Errors raised while ensuring a local checkout exists.
#[derive(Debug, Error)]
pub enum RepoError {
    /// The `git` binary could not be started.
    #[error("failed to launch git")]
    SpawnFailed {
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// `git clone` exited with a failure status.
    #[error("failed to clone '{url}': {detail}")]
    CloneFailed {
        /// Remote URL the clone targeted.
        url: String,
        /// Trimmed stderr captured from git.
        detail: String,
    },
}

/// A remote repository and the local directory it is materialised into.
#[derive(Debug, Clone)]
pub struct RemoteRepo {
    /// Git URL to clone from.
    pub url: String,
    /// Local directory holding (or receiving) the checkout.
    pub local_path: PathBuf,
}

/// Whether [`ensure_local_checkout`] cloned fresh or reused an existing tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    /// The repository was cloned during this run.
    Cloned,
    /// An existing checkout was found and left untouched.
    Reused,
}

/// Make sure `repo.local_path` holds a checkout of `repo.url`.
///
/// # Errors
///
/// Returns [`RepoError::SpawnFailed`] when the `git` binary cannot be
/// launched and [`RepoError::CloneFailed`] when the clone exits non-zero.
pub async fn ensure_local_checkout(repo: &RemoteRepo) -> RepoResult<CheckoutState> {
    if repo.local_path.is_dir() && repo.local_path.join(".git").exists() {
        info!(
            path = %repo.local_path.display(),
            "repository already exists locally, skipping clone"
        );
        return Ok(CheckoutState::Reused);
    }

    info!(url = %repo.url, path = %repo.local_path.display(), "cloning repository");
    let output = Command::new("git")
        .arg("clone")
        .arg(&repo.url)
        .arg(&repo.local_path)
        .output()
        .await
        .map_err(|source| RepoError::SpawnFailed { source })?;

    if !output.status.success() {
        let detail = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(RepoError::CloneFailed {
            url: repo.url.clone(),
            detail,
        });
    }

    info!(url = %repo.url, "repository cloned successfully");
    Ok(CheckoutState::Cloned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::process::Command as StdCommand;
    use tempfile::TempDir;

    fn git_available() -> bool {
        StdCommand::new("git")
            .arg("--version")
            .output()
            .is_ok_and(|output| output.status.success())
    }

    #[tokio::test]
    async fn existing_checkout_is_reused() {
        let temp = TempDir::new().expect("create temp dir");
        let checkout = temp.path().join("impl");
        fs::create_dir_all(checkout.join(".git")).expect("create .git marker");

        let repo = RemoteRepo {
            url: "https://example.invalid/impl.git".to_string(),
            local_path: checkout,
        };

        let state = ensure_local_checkout(&repo)
            .await
            .expect("reuse should not touch the network");
        assert_eq!(state, CheckoutState::Reused);
    }

    #[tokio::test]
    async fn clone_of_missing_remote_fails() {
        if !git_available() {
            return;
        }

        let temp = TempDir::new().expect("create temp dir");
        let repo = RemoteRepo {
            url: format!("file://{}", temp.path().join("no-such-remote").display()),
            local_path: temp.path().join("clone"),
        };

        let err = ensure_local_checkout(&repo)
            .await
            .expect_err("missing remote should fail");
        assert!(matches!(err, RepoError::CloneFailed { .. }));
    }

    #[tokio::test]
    async fn clone_materialises_local_remote() {
        if !git_available() {
            return;
        }

        let temp = TempDir::new().expect("create temp dir");
        let remote = temp.path().join("remote");
        fs::create_dir_all(&remote).expect("create remote dir");
        let init = StdCommand::new("git")
            .arg("init")
            .arg("--bare")
            .arg(&remote)
            .output()
            .expect("run git init");
        assert!(init.status.success(), "git init failed");

        let repo = RemoteRepo {
            url: format!("file://{}", remote.display()),
            local_path: temp.path().join("clone"),
        };

        let state = ensure_local_checkout(&repo).await.expect("clone should succeed");
        assert_eq!(state, CheckoutState::Cloned);

        let state = ensure_local_checkout(&repo).await.expect("second run should reuse");
        assert_eq!(state, CheckoutState::Reused);
    }
}
