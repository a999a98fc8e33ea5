//! Boundary detector: recognizes tag transitions during the walk
//!
//! The walk driver feeds commits one at a time, newest to oldest. The
//! detector owns no hidden state; everything mutable lives in the explicit
//! [`WalkState`] value passed in by the driver, created at walk start and
//! discarded at walk end.

use crate::commit::Commit;
use crate::index::TagIndex;
use crate::tag::Tag;

/// Mutable per-walk state, single writer, never shared across walks
#[derive(Debug)]
pub struct WalkState {
    /// Tag most recently entered, if any
    pub current_tag: Option<Tag>,
    /// The tag that was current before the last transition
    pub last_tag: Option<Tag>,
    /// True until the first heading or commit line has been rendered
    pub first_commit: bool,
}

impl WalkState {
    /// State for a fresh walk
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_tag: None,
            last_tag: None,
            first_commit: true,
        }
    }
}

impl Default for WalkState {
    fn default() -> Self {
        Self::new()
    }
}

/// A crossing into the commit range owned by a new tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTransition {
    /// The tag being entered
    pub tag: Tag,
    /// The previously current tag; `None` on the first transition
    pub previous: Option<Tag>,
}

/// Watches the commit stream for tag boundaries
#[derive(Debug)]
pub struct BoundaryDetector<'i> {
    index: &'i TagIndex,
}

impl<'i> BoundaryDetector<'i> {
    /// Create a detector over a tag index snapshot
    #[must_use]
    pub fn new(index: &'i TagIndex) -> Self {
        Self { index }
    }

    /// Observe one commit, rotating the walk state on a tag boundary
    ///
    /// Returns the transition when the commit introduces a tag, with the
    /// previously current tag recorded as `previous`. Untagged commits leave
    /// the state untouched and return `None`.
    pub fn observe(&self, commit: &Commit, state: &mut WalkState) -> Option<TagTransition> {
        let tag = self.index.get(&commit.id)?.clone();
        state.last_tag = state.current_tag.replace(tag.clone());
        Some(TagTransition {
            tag,
            previous: state.last_tag.clone(),
        })
    }
}
