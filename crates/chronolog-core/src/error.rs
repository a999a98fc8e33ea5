//! Error types for changelog generation

use thiserror::Error;

use crate::provider::BoxedError;

/// Errors raised while generating a changelog
///
/// All failures are fail-fast and never retried. Output already written to
/// the sink when an error surfaces is not rolled back; the caller decides
/// whether to discard it.
#[derive(Debug, Error)]
pub enum Error {
    /// The provider cannot enumerate commits or tags
    #[error("repository unavailable: {0}")]
    Repository(BoxedError),

    /// A tag's annotation date/timezone could not be loaded
    ///
    /// Surfaced at the point the tag heading would have been rendered.
    #[error("unable to load details for tag {name:?}: {source}")]
    TagResolution {
        /// Name of the tag that failed to resolve
        name: String,
        /// The provider-side failure
        source: BoxedError,
    },

    /// The configured commit exclusion pattern is not a valid regex
    ///
    /// Raised before the walk starts; no output has been written.
    #[error("invalid commit exclusion pattern {pattern:?}")]
    Pattern {
        /// The pattern as supplied in configuration
        pattern: String,
        /// The compilation failure
        #[source]
        source: regex::Error,
    },

    /// Writing to the output sink failed
    #[error("unable to write changelog output")]
    Output(#[from] std::io::Error),
}
