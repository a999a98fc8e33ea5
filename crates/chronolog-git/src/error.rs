//! Error types for chronolog-git

use thiserror::Error;

/// Errors that can occur while reading the repository
#[derive(Debug, Error)]
pub enum GitError {
    /// Error from the git2 library
    #[error("git error: {0}")]
    Git2(#[from] git2::Error),

    /// Repository not found at the specified path
    #[error("repository not found: {path}")]
    RepositoryNotFound {
        /// The path that was searched for a repository
        path: String,
    },

    /// Invalid reference (branch, tag, or commit id)
    #[error("invalid reference: {reference}")]
    InvalidReference {
        /// The reference string that could not be resolved
        reference: String,
    },
}
