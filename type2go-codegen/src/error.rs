use thiserror::Error;

/// Result type for codegen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort generation of a single class.
///
/// These carry no source spans: they describe configuration-level problems
/// (a tag with no convention, an annotation argument of the wrong shape)
/// that are reported per class so siblings keep generating.
#[derive(Debug, Error)]
pub enum Error {
    /// A tag requested by `generateTags` has no entry in the `[naming]`
    /// table. Fails fast rather than defaulting to identity, so typos in
    /// `generateTags` surface instead of silently producing odd tags.
    #[error("no naming convention configured for tag '{tag}' (field '{field}')")]
    UnknownTagStyle { tag: String, field: String },

    /// An annotation argument had the wrong literal shape.
    #[error("annotation '{annotation}' on {target}: expected {expected}")]
    InvalidAnnotation {
        annotation: String,
        target: String,
        expected: String,
    },
}

impl Error {
    pub(crate) fn invalid_annotation(
        annotation: impl Into<String>,
        target: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Error::InvalidAnnotation {
            annotation: annotation.into(),
            target: target.into(),
            expected: expected.into(),
        }
    }
}
