//! Link builder: compare/commits URLs between two historical points

use crate::format::ChangelogFormat;

/// Builds hyperlinks to a hosting service's compare and commits views
///
/// Given two reference names (tag or branch), constructs either a single-ref
/// `commits/` listing (when no current ref is supplied) or a two-ref
/// `compare/` view, and wraps the URL in the matching link template. The
/// walk driver only constructs a `LinkBuilder` when a base URL is
/// configured; without one, no link line of any form is emitted.
#[derive(Debug)]
pub struct LinkBuilder<'f> {
    base_url: String,
    format: &'f ChangelogFormat,
}

impl<'f> LinkBuilder<'f> {
    /// Create a builder over a base repository URL
    #[must_use]
    pub fn new(base_url: &str, format: &'f ChangelogFormat) -> Self {
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        Self { base_url, format }
    }

    /// Render the link line between two historical references
    ///
    /// With `current_ref` absent the URL lists all commits reachable from
    /// `last_ref`; otherwise it compares the two refs. `is_branch` selects
    /// the branch-flavored templates.
    #[must_use]
    pub fn render(&self, last_ref: &str, current_ref: Option<&str>, is_branch: bool) -> String {
        let url = match current_ref {
            None => format!("{}commits/{}", self.base_url, last_ref),
            Some(current) => format!("{}compare/{}...{}", self.base_url, last_ref, current),
        };

        if is_branch {
            match current_ref {
                None => self
                    .format
                    .branch_only_link
                    .replace("{branch}", last_ref)
                    .replace("{url}", &url),
                Some(branch) => self
                    .format
                    .branch_link
                    .replace("{branch}", branch)
                    .replace("{tag}", last_ref)
                    .replace("{url}", &url),
            }
        } else {
            let tag = current_ref.unwrap_or(last_ref);
            self.format
                .tag_link
                .replace("{tag}", tag)
                .replace("{url}", &url)
        }
    }
}
