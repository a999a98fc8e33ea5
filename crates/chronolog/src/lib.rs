//! chronolog library
//!
//! This module exports the CLI wiring of chronolog for use in integration
//! tests and as a library: configuration parsing, sink handling, and the
//! `run` entry point that ties the git provider to the changelog engine.

pub mod config;
pub mod output;

use anyhow::Context;
use tracing::{debug, info};

use chronolog_core::generate_changelog;
use chronolog_git::GitRepo;

use crate::config::Config;

/// Generate the changelog described by the configuration
///
/// Discovers the repository, opens the output sink, runs the walk, and
/// appends the footer.
///
/// # Errors
///
/// Returns an error if the repository cannot be found, the configuration
/// is invalid, or the walk fails.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let changelog = config.changelog_config()?;

    let path = config.repository_path();
    let repo = GitRepo::discover(&path)
        .with_context(|| format!("no git repository found at {}", path.display()))?;
    debug!(repo = %repo.path().display(), "opened repository");

    let head = repo.head().context("unable to resolve HEAD")?;
    info!(commit = %head.short_id(), "generating changelog");

    let mut sink = create_configured_sink(config)?;
    let latest = generate_changelog(&changelog, &repo, sink.as_mut())?;
    output::write_footer(sink.as_mut(), &changelog.format)?;
    sink.flush().context("unable to flush changelog output")?;

    match latest {
        Some(tag) => info!(tag = %tag.name, "changelog generated"),
        None => info!("changelog generated (no tags reached)"),
    }
    Ok(())
}

fn create_configured_sink(config: &Config) -> anyhow::Result<Box<dyn std::io::Write>> {
    output::create_sink(config.output.as_deref()).with_context(|| match &config.output {
        Some(path) => format!("unable to create output file {}", path.display()),
        None => "unable to open stdout".to_string(),
    })
}
