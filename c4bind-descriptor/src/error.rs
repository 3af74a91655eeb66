use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for descriptor operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Encapsulates the source content and filename so the parser does not
/// have to thread both through every error factory.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a configuration parse error from a toml error.
    pub fn config_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::ConfigParse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create an empty-line error.
    pub fn empty_line(&self, span: impl Into<SourceSpan>) -> Box<Error> {
        Box::new(Error::EmptyLine {
            src: self.named_source(),
            span: span.into(),
        })
    }

    /// Create a missing-token error, labelled at the last token present.
    pub fn missing_token(&self, what: &'static str, span: impl Into<SourceSpan>) -> Box<Error> {
        Box::new(Error::MissingToken {
            src: self.named_source(),
            span: span.into(),
            what,
        })
    }

    /// Create an invalid return type error.
    pub fn invalid_return_type(
        &self,
        token: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidReturnType {
            src: self.named_source(),
            span: span.into(),
            token: token.into(),
        })
    }

    /// Create a malformed parameter error.
    pub fn malformed_param(
        &self,
        token: impl Into<String>,
        reason: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::MalformedParam {
            src: self.named_source(),
            span: span.into(),
            token: token.into(),
            reason: reason.into(),
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

    #[error("failed to parse configuration")]
    #[diagnostic(code(c4bind::config_parse))]
    ConfigParse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("empty descriptor line")]
    #[diagnostic(
        code(c4bind::empty_line),
        help("every line describes one function; remove the blank line")
    )]
    EmptyLine {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected a function signature")]
        span: SourceSpan,
    },

    #[error("missing {what}")]
    #[diagnostic(
        code(c4bind::missing_token),
        help("lines have the form `<marker> .<return-type> <name> [type:name ...]`")
    )]
    MissingToken {
        #[source_code]
        src: NamedSource<String>,
        #[label("{what} expected after this")]
        span: SourceSpan,
        what: &'static str,
    },

    #[error("invalid return type '{token}'")]
    #[diagnostic(
        code(c4bind::invalid_return_type),
        help(
            "the return type follows the marker and starts with '.', e.g. `.bridge .bool c4db_close ...`; raw-only lines still need a marker"
        )
    )]
    InvalidReturnType {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected `.<type>`")]
        span: SourceSpan,
        token: String,
    },

    #[error("malformed parameter '{token}'")]
    #[diagnostic(code(c4bind::malformed_param), help("{reason}"))]
    MalformedParam {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected `type:name`")]
        span: SourceSpan,
        token: String,
        reason: String,
    },
}

impl Error {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// 1-based line the error points at, when it points into a file.
    pub fn line(&self) -> Option<usize> {
        let (src, offset) = match self {
            Error::Io { .. } => return None,
            Error::ConfigParse { src, span, .. } => (src, span.as_ref()?.offset()),
            Error::EmptyLine { src, span }
            | Error::MissingToken { src, span, .. }
            | Error::InvalidReturnType { src, span, .. }
            | Error::MalformedParam { src, span, .. } => (src, span.offset()),
        };
        let text = src.inner();
        let end = offset.min(text.len());
        Some(text.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1)
    }
}
