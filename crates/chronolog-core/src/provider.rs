//! Repository provider interface
//!
//! The engine consumes history through this trait instead of talking to git
//! directly. `chronolog-git` implements it on top of `git2`; tests implement
//! it with scripted in-memory histories.

use crate::commit::Commit;
use crate::tag::{ResolvedTag, Tag};

/// Error type carried across the provider boundary
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// An ordered, finite stream of commits, newest to oldest
pub type CommitStream<'a> = Box<dyn Iterator<Item = Result<Commit, BoxedError>> + 'a>;

/// Source of commits, tags, and branch metadata for one repository
///
/// The engine only requires a strict total order from [`walk`]; whether the
/// provider follows first-parent or full-ancestry semantics is up to the
/// implementation. [`walk`] must be restartable: each call yields a fresh
/// iterator over the same history.
///
/// [`walk`]: RepositoryProvider::walk
pub trait RepositoryProvider {
    /// The commit at the tip of the current branch
    fn head_commit(&self) -> Result<Commit, BoxedError>;

    /// Name of the currently checked out branch
    fn branch_name(&self) -> Result<String, BoxedError>;

    /// Commits from the branch tip to the root, newest first
    fn walk(&self) -> Result<CommitStream<'_>, BoxedError>;

    /// All tags known to the repository, unresolved
    fn tags(&self) -> Result<Vec<Tag>, BoxedError>;

    /// Load the annotation date and timezone for a tag
    ///
    /// Idempotent; called at most once per tag entered during a walk.
    fn resolve_tag(&self, tag: &Tag) -> Result<ResolvedTag, BoxedError>;
}
