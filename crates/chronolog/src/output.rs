//! Output sink handling
//!
//! The changelog goes to stdout by default, or to a file when one is
//! configured. Missing parent directories of the output file are created.
//! The footer is written here rather than by the walk, so the engine stays
//! free of wall-clock access.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::Local;

use chronolog_core::ChangelogFormat;

/// Open the sink the changelog is written to
///
/// # Errors
///
/// Returns an error if the output file or its parent directories cannot
/// be created.
pub fn create_sink(output: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match output {
        None => Ok(Box::new(io::stdout())),
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
                && !parent.exists()
            {
                fs::create_dir_all(parent)?;
            }
            Ok(Box::new(BufWriter::new(File::create(path)?)))
        }
    }
}

/// Write the footer below the changelog, if one is configured
///
/// The current time is substituted for `{date}` using the configured date
/// format. An empty footer template writes nothing.
///
/// # Errors
///
/// Returns an error if the sink rejects the write.
pub fn write_footer(sink: &mut dyn Write, format: &ChangelogFormat) -> io::Result<()> {
    let now = Local::now().fixed_offset();
    match format.footer_line(&now) {
        Some(line) => writeln!(sink, "{line}"),
        None => Ok(()),
    }
}
