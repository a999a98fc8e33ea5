//! Git repository access
//!
//! Wraps `git2` behind the `RepositoryProvider` interface. Commit streaming
//! uses a revwalk from HEAD sorted newest first; tag dates are only loaded
//! when a tag is resolved, never while building the tag list.

use std::path::Path;

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use git2::{Repository, Sort};
use tracing::debug;

use chronolog_core::{BoxedError, Commit, CommitStream, RepositoryProvider, ResolvedTag, Tag};

use crate::error::GitError;

/// A git repository wrapper serving commit and tag data
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RepositoryNotFound`] if the path is not a git
    /// repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Discover and open a git repository containing the given path
    ///
    /// This walks up the directory tree to find a `.git` directory.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RepositoryNotFound`] if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|_| GitError::RepositoryNotFound {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Get the repository path (the `.git` directory)
    #[must_use]
    pub fn path(&self) -> &Path {
        self.repo.path()
    }

    /// Get the commit at the tip of the current branch
    ///
    /// # Errors
    ///
    /// Returns [`GitError::InvalidReference`] if HEAD cannot be resolved to
    /// a commit (e.g. an unborn branch).
    pub fn head(&self) -> Result<Commit, GitError> {
        let head = self.repo.head()?;
        let commit = head
            .peel_to_commit()
            .map_err(|_| GitError::InvalidReference {
                reference: "HEAD".to_string(),
            })?;
        Ok(extract_commit(&commit))
    }

    /// Get the name of the currently checked out branch
    ///
    /// Returns `HEAD` for a detached head.
    ///
    /// # Errors
    ///
    /// Returns `GitError` if HEAD cannot be read.
    pub fn current_branch(&self) -> Result<String, GitError> {
        let head = self.repo.head()?;
        Ok(head.shorthand().unwrap_or("HEAD").to_string())
    }

    /// Enumerate all tags, without loading their dates
    ///
    /// Both annotated and lightweight tags are peeled to the commit they
    /// point at.
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the tag namespace cannot be read.
    pub fn tag_list(&self) -> Result<Vec<Tag>, GitError> {
        let names = self.repo.tag_names(None)?;
        let mut tags = Vec::with_capacity(names.len());

        for name in names.iter().flatten() {
            let reference = self.repo.find_reference(&format!("refs/tags/{name}"))?;
            let commit = reference
                .peel_to_commit()
                .map_err(|_| GitError::InvalidReference {
                    reference: format!("refs/tags/{name}"),
                })?;
            tags.push(Tag::new(name, commit.id().to_string()));
        }

        debug!(count = tags.len(), "enumerated tags");
        Ok(tags)
    }

    /// Load the annotation date and timezone for a tag
    ///
    /// Annotated tags use the tagger's date in the tagger's recorded
    /// timezone; lightweight tags fall back to the committer date of the
    /// commit they point at.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::InvalidReference`] if the tag no longer exists.
    pub fn resolve(&self, tag: &Tag) -> Result<ResolvedTag, GitError> {
        let refname = format!("refs/tags/{}", tag.name);
        let reference =
            self.repo
                .find_reference(&refname)
                .map_err(|_| GitError::InvalidReference {
                    reference: refname.clone(),
                })?;

        let time = match reference.peel_to_tag() {
            Ok(annotated) => match annotated.tagger() {
                Some(tagger) => tagger.when(),
                None => {
                    reference
                        .peel_to_commit()
                        .map_err(|_| GitError::InvalidReference {
                            reference: refname.clone(),
                        })?
                        .committer()
                        .when()
                }
            },
            Err(_) => {
                reference
                    .peel_to_commit()
                    .map_err(|_| GitError::InvalidReference {
                        reference: refname.clone(),
                    })?
                    .committer()
                    .when()
            }
        };

        Ok(ResolvedTag {
            name: tag.name.clone(),
            commit_id: tag.commit_id.clone(),
            date: local_datetime(time),
        })
    }

    /// Walk commits from the branch tip to the root, newest first
    ///
    /// Each call starts a fresh walk over the same history.
    ///
    /// # Errors
    ///
    /// Returns `GitError` if the revwalk cannot be started.
    pub fn commits(&self) -> Result<CommitWalk<'_>, GitError> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME | Sort::TOPOLOGICAL)?;
        revwalk.push_head()?;
        debug!(repo = %self.repo.path().display(), "starting commit walk");

        Ok(CommitWalk {
            repo: &self.repo,
            revwalk,
        })
    }
}

impl RepositoryProvider for GitRepo {
    fn head_commit(&self) -> Result<Commit, BoxedError> {
        Ok(self.head()?)
    }

    fn branch_name(&self) -> Result<String, BoxedError> {
        Ok(self.current_branch()?)
    }

    fn walk(&self) -> Result<CommitStream<'_>, BoxedError> {
        let walk = self.commits()?;
        Ok(Box::new(walk.map(|item| item.map_err(BoxedError::from))))
    }

    fn tags(&self) -> Result<Vec<Tag>, BoxedError> {
        Ok(self.tag_list()?)
    }

    fn resolve_tag(&self, tag: &Tag) -> Result<ResolvedTag, BoxedError> {
        Ok(self.resolve(tag)?)
    }
}

/// Lazy commit stream backed by a revwalk
pub struct CommitWalk<'repo> {
    repo: &'repo Repository,
    revwalk: git2::Revwalk<'repo>,
}

impl Iterator for CommitWalk<'_> {
    type Item = Result<Commit, GitError>;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = match self.revwalk.next()? {
            Ok(oid) => oid,
            Err(e) => return Some(Err(e.into())),
        };
        Some(
            self.repo
                .find_commit(oid)
                .map(|commit| extract_commit(&commit))
                .map_err(GitError::from),
        )
    }
}

/// Extract the engine's commit model from a git2 commit
fn extract_commit(commit: &git2::Commit<'_>) -> Commit {
    let timestamp = Utc
        .timestamp_opt(commit.author().when().seconds(), 0)
        .single()
        .unwrap_or_else(Utc::now);

    Commit {
        id: commit.id().to_string(),
        message: commit.message().unwrap_or("").to_string(),
        timestamp,
        parents: commit.parent_ids().map(|id| id.to_string()).collect(),
    }
}

/// Convert a git timestamp to a date in its own recorded timezone
fn local_datetime(time: git2::Time) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(time.offset_minutes() * 60).unwrap_or_else(|| Utc.fix());
    offset
        .timestamp_opt(time.seconds(), 0)
        .single()
        .unwrap_or_else(|| Utc::now().with_timezone(&offset))
}
