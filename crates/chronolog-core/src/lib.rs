//! chronolog-core: tag-aware changelog generation from commit history
//!
//! This library crate contains the traversal-and-correlation engine behind
//! chronolog: a single reverse-chronological walk over a branch's commits
//! that detects tag boundaries as they are crossed, filters individual
//! commit messages, and renders headings, commit lines, and compare/commits
//! links through a configurable set of templates.
//!
//! The engine is deliberately free of I/O: commits and tags come from a
//! [`RepositoryProvider`] implementation, and output goes to any
//! [`std::io::Write`] sink. It never logs and holds no state across walks.
//!
//! # Example
//!
//! ```ignore
//! use chronolog_core::{generate_changelog, ChangelogConfig};
//! use chronolog_git::GitRepo;
//!
//! let repo = GitRepo::discover(".")?;
//! let config = ChangelogConfig::default();
//! let mut out = Vec::new();
//! let latest = generate_changelog(&config, &repo, &mut out)?;
//! ```

pub mod boundary;
pub mod commit;
pub mod error;
pub mod filter;
pub mod format;
pub mod index;
pub mod link;
pub mod provider;
pub mod tag;
pub mod walk;

pub use boundary::{BoundaryDetector, TagTransition, WalkState};
pub use commit::Commit;
pub use error::Error;
pub use filter::CommitFilter;
pub use format::ChangelogFormat;
pub use index::TagIndex;
pub use link::LinkBuilder;
pub use provider::{BoxedError, CommitStream, RepositoryProvider};
pub use tag::{ResolvedTag, Tag};
pub use walk::{ChangelogConfig, generate_changelog};
