//! Walk driver: one single-threaded, single-pass traversal per changelog
//!
//! Commits are consumed newest-first with no backtracking. Boundary
//! detection and "first rendered output" semantics are order-dependent, so
//! there is deliberately no parallelism and no cancellation mid-walk; a run
//! either completes the traversal or fails outright, and output already
//! written to the sink stays written.

use std::io::Write;

use crate::boundary::{BoundaryDetector, WalkState};
use crate::error::Error;
use crate::filter::CommitFilter;
use crate::format::ChangelogFormat;
use crate::index::TagIndex;
use crate::link::LinkBuilder;
use crate::provider::RepositoryProvider;
use crate::tag::Tag;

/// Everything the walk needs to know, besides the repository itself
#[derive(Debug, Clone)]
pub struct ChangelogConfig {
    /// Exclude commits whose message matches this regex (multi-line)
    pub skip_commits_matching: Option<String>,
    /// Exclude merge commit messages (more than one parent)
    pub skip_merge_commits: bool,
    /// Suppress the message of commits that introduce a tag
    ///
    /// Useful when tagged commits are routinely "Version bump to X.Y.Z".
    /// The tag heading itself still renders.
    pub skip_tagged: bool,
    /// Base repository URL for compare/commits links
    ///
    /// `None` disables link generation entirely.
    pub base_url: Option<String>,
    /// Templates the changelog is rendered through
    pub format: ChangelogFormat,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            skip_commits_matching: None,
            skip_merge_commits: true,
            skip_tagged: false,
            base_url: None,
            format: ChangelogFormat::default(),
        }
    }
}

/// Walk the branch history and write the changelog to the sink
///
/// Renders the header, then one pass over the provider's commit stream:
/// each commit is offered to the boundary detector (tag headings, transition
/// links) and the commit filter (message lines). After the stream is
/// exhausted, a final link covers the commits below the last heading.
///
/// Returns the last tag entered during the walk, or `None` for a history
/// with no reachable tags.
///
/// # Errors
///
/// [`Error::Pattern`] before any output for an invalid exclusion pattern;
/// [`Error::Repository`] when the provider fails; [`Error::TagResolution`]
/// when a tag about to be rendered cannot be loaded; [`Error::Output`] when
/// the sink rejects a write. All fail-fast, never retried.
pub fn generate_changelog<P, W>(
    config: &ChangelogConfig,
    provider: &P,
    sink: &mut W,
) -> Result<Option<Tag>, Error>
where
    P: RepositoryProvider + ?Sized,
    W: Write + ?Sized,
{
    let filter = CommitFilter::new(config)?;

    let tags = provider.tags().map_err(Error::Repository)?;
    let index = TagIndex::build(tags);
    let branch = provider.branch_name().map_err(Error::Repository)?;
    let links = config
        .base_url
        .as_deref()
        .map(|base| LinkBuilder::new(base, &config.format));

    writeln!(sink, "{}", config.format.header)?;

    let detector = BoundaryDetector::new(&index);
    let mut state = WalkState::new();

    for commit in provider.walk().map_err(Error::Repository)? {
        let commit = commit.map_err(Error::Repository)?;

        if let Some(transition) = detector.observe(&commit, &mut state) {
            // The transition link needs both endpoints: the entered tag and
            // either the previous tag or the branch tip. On the very first
            // rendered output there is nothing above to link back to.
            if let Some(links) = &links
                && !state.first_commit
            {
                let line = match &transition.previous {
                    None => links.render(&transition.tag.name, Some(&branch), true),
                    Some(previous) => {
                        links.render(&transition.tag.name, Some(&previous.name), false)
                    }
                };
                writeln!(sink, "{line}")?;
            }

            // Lazy resolution: date/timezone load only for tags reached.
            let resolved = provider
                .resolve_tag(&transition.tag)
                .map_err(|source| Error::TagResolution {
                    name: transition.tag.name.clone(),
                    source,
                })?;
            let heading = config.format.tag_heading(&resolved, state.first_commit);
            writeln!(sink, "{heading}")?;
            state.first_commit = false;

            if filter.should_render(&commit, true) {
                writeln!(sink, "{}", config.format.commit_line(commit.subject()))?;
            }
        } else {
            if !filter.should_render(&commit, false) {
                continue;
            }

            // The branch heading appears right before the first rendered
            // commit line, and only when no tag has been entered yet.
            if state.first_commit {
                let heading = config.format.branch_heading(&branch, true);
                writeln!(sink, "{heading}")?;
            }

            writeln!(sink, "{}", config.format.commit_line(commit.subject()))?;
            state.first_commit = false;
        }
    }

    if let Some(links) = &links {
        let line = match &state.current_tag {
            Some(tag) => links.render(&tag.name, None, false),
            None => links.render(&branch, None, true),
        };
        writeln!(sink, "{line}")?;
    }

    Ok(state.current_tag)
}
