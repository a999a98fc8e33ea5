//! Command-line configuration for chronolog
//!
//! This module turns flags, environment variables, and an optional format
//! file into the engine's `ChangelogConfig`.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use chronolog_core::{ChangelogConfig, ChangelogFormat};

/// Default footer appended below the changelog
const DEFAULT_FOOTER: &str = "\nGenerated by chronolog at {date}";

/// chronolog - generate a changelog from a git branch's commit history
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "chronolog")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path inside the repository to generate the changelog for
    ///
    /// The repository is discovered by walking up from this path.
    /// Defaults to the current working directory.
    #[arg(value_name = "PATH")]
    pub repository: Option<PathBuf>,

    /// File to write the changelog to
    ///
    /// Missing parent directories are created. Defaults to stdout.
    #[arg(short, long, env = "CHRONOLOG_OUTPUT")]
    pub output: Option<PathBuf>,

    /// GitHub user for compare/commits links
    #[arg(long, env = "CHRONOLOG_GITHUB_USER")]
    pub github_user: Option<String>,

    /// GitHub project for compare/commits links
    ///
    /// Links are only generated when both user and project are set
    /// (or `--link-base` is given).
    #[arg(long, env = "CHRONOLOG_GITHUB_PROJECT")]
    pub github_project: Option<String>,

    /// Base repository URL for link generation
    ///
    /// Overrides the GitHub user/project pair.
    #[arg(long, env = "CHRONOLOG_LINK_BASE", value_name = "URL")]
    pub link_base: Option<String>,

    /// Keep merge commits' messages (skipped by default)
    #[arg(long, default_value = "false")]
    pub keep_merge_commits: bool,

    /// Skip tagged commits' messages
    ///
    /// Useful when tagged commits are routinely "Version bump to X.Y.Z";
    /// the version heading itself is still rendered.
    #[arg(long, default_value = "false")]
    pub skip_tagged: bool,

    /// Skip commits whose message matches this regular expression
    #[arg(long, value_name = "REGEX")]
    pub skip_commits_matching: Option<String>,

    /// Date format for tag headings (strftime pattern)
    #[arg(long, value_name = "PATTERN")]
    pub date_format: Option<String>,

    /// JSON file with a changelog format definition
    ///
    /// Fields not present in the file keep their defaults.
    #[arg(long, value_name = "FILE")]
    pub format: Option<PathBuf>,

    /// Footer printed below the changelog ({date} is substituted)
    ///
    /// Pass an empty string to suppress the footer.
    #[arg(long)]
    pub footer: Option<String>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix into a changelog
    /// going to stdout.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Get the repository path, using the current directory as default
    #[must_use]
    pub fn repository_path(&self) -> PathBuf {
        self.repository
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }

    /// Compose the base URL for link generation
    ///
    /// An explicit `--link-base` wins; otherwise both the GitHub user and
    /// project must be non-empty, mirroring how the links would be hosted
    /// at `https://github.com/{user}/{project}/`. Returns `None` when link
    /// generation is disabled.
    #[must_use]
    pub fn base_url(&self) -> Option<String> {
        if let Some(base) = &self.link_base
            && !base.is_empty()
        {
            return Some(base.clone());
        }

        match (self.github_user.as_deref(), self.github_project.as_deref()) {
            (Some(user), Some(project)) if !user.is_empty() && !project.is_empty() => {
                Some(format!("https://github.com/{user}/{project}/"))
            }
            _ => None,
        }
    }

    /// Build the engine configuration from flags and the format file
    ///
    /// # Errors
    ///
    /// Returns an error if the format file cannot be read or parsed.
    pub fn changelog_config(&self) -> anyhow::Result<ChangelogConfig> {
        let mut format = match &self.format {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("unable to read format file {}", path.display()))?;
                serde_json::from_str::<ChangelogFormat>(&raw)
                    .with_context(|| format!("invalid format file {}", path.display()))?
            }
            None => ChangelogFormat::default(),
        };

        if let Some(pattern) = &self.date_format {
            format.date_format = pattern.clone();
        }
        format.footer = self
            .footer
            .clone()
            .unwrap_or_else(|| DEFAULT_FOOTER.to_string());
        format.prepare();

        Ok(ChangelogConfig {
            skip_commits_matching: self.skip_commits_matching.clone(),
            skip_merge_commits: !self.keep_merge_commits,
            skip_tagged: self.skip_tagged,
            base_url: self.base_url(),
            format,
        })
    }
}
