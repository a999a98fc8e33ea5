//! chronolog-git: git2-backed repository provider for chronolog
//!
//! This library crate adapts a local git repository to the
//! [`RepositoryProvider`] interface consumed by `chronolog-core`: commit
//! stream from the branch tip, tag enumeration, and lazy per-tag date
//! resolution.
//!
//! [`RepositoryProvider`]: chronolog_core::RepositoryProvider
//!
//! # Example
//!
//! ```no_run
//! use chronolog_git::GitRepo;
//!
//! let repo = GitRepo::discover(".").expect("open repo");
//! for commit in repo.commits().expect("walk commits") {
//!     let commit = commit.expect("read commit");
//!     println!("{} - {}", commit.short_id(), commit.subject());
//! }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod repo;

pub use error::GitError;
pub use repo::{CommitWalk, GitRepo};
