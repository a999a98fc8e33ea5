//! Tag index: one-time snapshot mapping commit identifiers to tags

use std::collections::HashMap;

use crate::tag::Tag;

/// Read-only mapping from commit identifier to the tag pointing at it
///
/// Built once per walk in O(tags) time and space, queried in O(1) per
/// commit. If the underlying history has multiple tags on one commit, the
/// index retains exactly one of them (last inserted wins); which one
/// survives depends on the provider's enumeration order. This mirrors the
/// behavior changelogs have historically shown for such repositories and is
/// a documented limitation, not a feature.
#[derive(Debug, Default)]
pub struct TagIndex {
    by_commit: HashMap<String, Tag>,
}

impl TagIndex {
    /// Build the index from the full set of tags known to the repository
    #[must_use]
    pub fn build(tags: impl IntoIterator<Item = Tag>) -> Self {
        let by_commit = tags
            .into_iter()
            .map(|tag| (tag.commit_id.clone(), tag))
            .collect();
        Self { by_commit }
    }

    /// Look up the tag pointing at a commit, if any
    #[must_use]
    pub fn get(&self, commit_id: &str) -> Option<&Tag> {
        self.by_commit.get(commit_id)
    }

    /// Check whether a commit introduces a tag
    #[must_use]
    pub fn contains(&self, commit_id: &str) -> bool {
        self.by_commit.contains_key(commit_id)
    }

    /// Number of tagged commits in the index
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_commit.len()
    }

    /// Check whether the index holds no tags
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_commit.is_empty()
    }
}
