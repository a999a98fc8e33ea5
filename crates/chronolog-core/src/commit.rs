//! Commit data model

use chrono::{DateTime, Utc};

/// A single commit as seen by the changelog walk
///
/// Commits are immutable once read from history; the engine only holds them
/// transiently while a walk is in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Content-addressed commit identifier (hex string)
    pub id: String,
    /// Full commit message (subject + optional body)
    pub message: String,
    /// Author timestamp
    pub timestamp: DateTime<Utc>,
    /// Parent commit identifiers
    pub parents: Vec<String>,
}

impl Commit {
    /// Get the short identifier (first 7 characters)
    #[must_use]
    pub fn short_id(&self) -> &str {
        &self.id[..7.min(self.id.len())]
    }

    /// Check if this is a merge commit (has more than one parent)
    #[must_use]
    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// Get the first line of the commit message (subject)
    ///
    /// The body is never rendered into the changelog.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }
}
