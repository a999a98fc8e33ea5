//! Commit filter: stateless predicates deciding which messages render

use regex::{Regex, RegexBuilder};

use crate::commit::Commit;
use crate::error::Error;
use crate::walk::ChangelogConfig;

/// Decides whether a commit's message line is rendered
///
/// The filter only suppresses commit *message* lines. Tag headings are owned
/// by the boundary detector and render even when the tagged commit's own
/// message is excluded.
#[derive(Debug)]
pub struct CommitFilter {
    skip_pattern: Option<Regex>,
    skip_merge_commits: bool,
    skip_tagged: bool,
}

impl CommitFilter {
    /// Build the filter, compiling the exclusion pattern if configured
    ///
    /// The pattern is compiled in multi-line mode and excludes a commit when
    /// it matches anywhere in the full message, body included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pattern`] for an invalid pattern. This happens
    /// before the walk starts, so no output has been produced.
    pub fn new(config: &ChangelogConfig) -> Result<Self, Error> {
        let skip_pattern = match config.skip_commits_matching.as_deref() {
            Some(pattern) if !pattern.is_empty() => Some(
                RegexBuilder::new(pattern)
                    .multi_line(true)
                    .build()
                    .map_err(|source| Error::Pattern {
                        pattern: pattern.to_string(),
                        source,
                    })?,
            ),
            _ => None,
        };

        Ok(Self {
            skip_pattern,
            skip_merge_commits: config.skip_merge_commits,
            skip_tagged: config.skip_tagged,
        })
    }

    /// Decide whether this commit's message line should be rendered
    ///
    /// Rules, first match wins: exclusion pattern, merge exclusion, tagged
    /// exclusion. Pure given the commit and whether it introduces a tag.
    #[must_use]
    pub fn should_render(&self, commit: &Commit, is_tagged: bool) -> bool {
        if let Some(pattern) = &self.skip_pattern
            && pattern.is_match(&commit.message)
        {
            return false;
        }

        if self.skip_merge_commits && commit.is_merge() {
            return false;
        }

        if is_tagged && self.skip_tagged {
            return false;
        }

        true
    }
}
