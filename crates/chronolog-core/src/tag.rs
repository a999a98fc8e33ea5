//! Tag data model
//!
//! Tags are resolved lazily: a walk only needs a tag's name and commit
//! mapping up front, while the annotation date and timezone are loaded the
//! first time the tag is actually rendered. Tags on branches the walk never
//! reaches are never resolved.

use chrono::{DateTime, FixedOffset};

/// A tag identity: a name pointing at a commit
///
/// Carries no date; see [`ResolvedTag`] for the rendered form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Tag name (without the `refs/tags/` prefix)
    pub name: String,
    /// Identifier of the commit the tag points at
    pub commit_id: String,
}

impl Tag {
    /// Create a tag identity
    #[must_use]
    pub fn new(name: impl Into<String>, commit_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commit_id: commit_id.into(),
        }
    }
}

/// A tag with its annotation date loaded
///
/// The fixed offset carries the timezone recorded on the tag itself, so
/// dates format identically regardless of where the changelog is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTag {
    /// Tag name (without the `refs/tags/` prefix)
    pub name: String,
    /// Identifier of the commit the tag points at
    pub commit_id: String,
    /// Annotation date in the tag's own recorded timezone
    pub date: DateTime<FixedOffset>,
}
