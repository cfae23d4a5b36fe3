use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for parser operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename, reducing parameter passing
/// in error factory functions.
#[derive(Debug, Clone)]
pub(crate) struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub(crate) fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Create a NamedSource for miette error reporting.
    fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create an unexpected-character error (lexer).
    pub(crate) fn unexpected_char(&self, ch: char, span: impl Into<SourceSpan>) -> Box<Error> {
        Box::new(Error::UnexpectedChar {
            src: self.named_source(),
            span: span.into(),
            ch,
        })
    }

    /// Create an unterminated-string error (lexer).
    pub(crate) fn unterminated_string(&self, span: impl Into<SourceSpan>) -> Box<Error> {
        Box::new(Error::UnterminatedString {
            src: self.named_source(),
            span: span.into(),
        })
    }

    /// Create an unexpected-token error.
    pub(crate) fn unexpected_token(
        &self,
        expected: impl Into<String>,
        found: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::UnexpectedToken {
            src: self.named_source(),
            span: span.into(),
            expected: expected.into(),
            found: found.into(),
        })
    }

    /// Create a non-literal annotation argument error.
    pub(crate) fn literal_error(
        &self,
        found: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Literal {
            src: self.named_source(),
            span: span.into(),
            found: found.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected character '{ch}'")]
    #[diagnostic(code(type2go::lex_error))]
    UnexpectedChar {
        #[source_code]
        src: NamedSource<String>,
        #[label("not valid in a model declaration")]
        span: SourceSpan,
        ch: char,
    },

    #[error("unterminated string literal")]
    #[diagnostic(code(type2go::lex_error))]
    UnterminatedString {
        #[source_code]
        src: NamedSource<String>,
        #[label("string starts here")]
        span: SourceSpan,
    },

    #[error("expected {expected}, found {found}")]
    #[diagnostic(code(type2go::parse_error))]
    UnexpectedToken {
        #[source_code]
        src: NamedSource<String>,
        #[label("found {found}")]
        span: SourceSpan,
        expected: String,
        found: String,
    },

    #[error("annotation arguments must be literal values, found {found}")]
    #[diagnostic(
        code(type2go::literal_error),
        help("only object, array, string, number, and boolean literals are supported")
    )]
    Literal {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a literal")]
        span: SourceSpan,
        found: String,
    },
}
