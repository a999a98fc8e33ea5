//! Changelog templates and rendering
//!
//! Each output line comes from a fixed, named template with named
//! placeholders (`{branch}`, `{tag}`, `{date}`, `{url}`) substituted at
//! render time. Dates are formatted with a chrono strftime pattern evaluated
//! in the timezone recorded on the tag being rendered, never the process's
//! local timezone, so a changelog is byte-reproducible anywhere.

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::tag::ResolvedTag;

/// The set of templates a changelog is rendered through
///
/// All fields have defaults, so a partial definition (e.g. loaded from a
/// JSON file) only overrides what it names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChangelogFormat {
    /// Rendered once at the very start, before any commit
    pub header: String,
    /// Heading for the untagged commits at the branch tip (`{branch}`)
    pub branch: String,
    /// Heading rendered on entering a tag's commit range (`{tag}`, `{date}`)
    pub tag: String,
    /// Fixed string concatenated directly before each commit subject
    pub commit_prefix: String,
    /// strftime pattern for tag heading and footer dates
    pub date_format: String,
    /// Link from a branch back to the newest tag (`{branch}`, `{tag}`, `{url}`)
    pub branch_link: String,
    /// Link for a branch when no tag exists at all (`{branch}`, `{url}`)
    pub branch_only_link: String,
    /// Link for a tag's commit range (`{tag}`, `{url}`)
    pub tag_link: String,
    /// Rendered below the changelog by the output glue (`{date}`); empty
    /// suppresses the line
    pub footer: String,
}

impl Default for ChangelogFormat {
    fn default() -> Self {
        Self {
            header: "Changelog\n=========".to_string(),
            branch: "\nCommits on branch \"{branch}\"\n".to_string(),
            tag: "\nVersion {tag} - {date}\n".to_string(),
            commit_prefix: " * ".to_string(),
            date_format: "%m/%d/%Y".to_string(),
            branch_link:
                "\nSee Git history for changes in the \"{branch}\" branch since version {tag} at: {url}"
                    .to_string(),
            branch_only_link:
                "\nSee Git history for changes in the \"{branch}\" branch at: {url}".to_string(),
            tag_link: "\nSee Git history for version {tag} at: {url}".to_string(),
            footer: String::new(),
        }
    }
}

impl ChangelogFormat {
    /// Unescape literal `\n` and `\t` sequences in all templates
    ///
    /// Configuration arriving through command-line flags carries escape
    /// sequences as two characters; this turns them into real separators.
    pub fn prepare(&mut self) {
        for template in [
            &mut self.header,
            &mut self.branch,
            &mut self.tag,
            &mut self.commit_prefix,
            &mut self.branch_link,
            &mut self.branch_only_link,
            &mut self.tag_link,
            &mut self.footer,
        ] {
            *template = template.replace("\\n", "\n").replace("\\t", "\t");
        }
    }

    /// Render the heading for the untagged branch tip range
    ///
    /// The very first heading in the output loses its leading separator.
    #[must_use]
    pub fn branch_heading(&self, branch: &str, first: bool) -> String {
        strip_leading_separator(self.branch.replace("{branch}", branch), first)
    }

    /// Render the heading for a tag's commit range
    #[must_use]
    pub fn tag_heading(&self, tag: &ResolvedTag, first: bool) -> String {
        let line = self
            .tag
            .replace("{tag}", &tag.name)
            .replace("{date}", &self.format_date(&tag.date));
        strip_leading_separator(line, first)
    }

    /// Render one retained commit message line
    #[must_use]
    pub fn commit_line(&self, subject: &str) -> String {
        format!("{}{}", self.commit_prefix, subject)
    }

    /// Render the footer for the given generation time
    ///
    /// Returns `None` when the footer template is empty.
    #[must_use]
    pub fn footer_line(&self, date: &DateTime<FixedOffset>) -> Option<String> {
        if self.footer.is_empty() {
            return None;
        }
        Some(self.footer.replace("{date}", &self.format_date(date)))
    }

    /// Format a date with the configured pattern, in the date's own offset
    #[must_use]
    pub fn format_date(&self, date: &DateTime<FixedOffset>) -> String {
        date.format(&self.date_format).to_string()
    }
}

/// Drop one leading newline when this is the first heading of the output
fn strip_leading_separator(line: String, first: bool) -> String {
    if first && line.starts_with('\n') {
        line[1..].to_string()
    } else {
        line
    }
}
