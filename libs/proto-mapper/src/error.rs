use std::fmt;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which step of a conversion failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Domain object ↔ JSON text (serialize, parse, shape mismatch).
    TextCodec,
    /// Wire message ↔ JSON text (print, parse, schema mismatch).
    WireCodec,
    /// A customizer rejected the intermediate text.
    Customizer,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::TextCodec => f.write_str("text codec"),
            ErrorKind::WireCodec => f.write_str("wire codec"),
            ErrorKind::Customizer => f.write_str("customizer"),
        }
    }
}

/// Error returned by every conversion step.
///
/// Carries an `ErrorKind` naming the failed leg, a human-readable message
/// and, when there is one, the underlying codec error as `source()`.
#[derive(Debug, thiserror::Error)]
#[error("{kind} failure: {message}")]
pub struct MappingError {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl MappingError {
    pub fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self { kind, message: msg.into(), source: None }
    }

    /// Text leg failure caused by `err`.
    pub fn text(err: impl Into<BoxError>) -> Self {
        Self::caused_by(ErrorKind::TextCodec, err.into())
    }

    /// Wire leg failure caused by `err`.
    pub fn wire(err: impl Into<BoxError>) -> Self {
        Self::caused_by(ErrorKind::WireCodec, err.into())
    }

    pub fn customizer(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Customizer, msg)
    }

    fn caused_by(kind: ErrorKind, source: BoxError) -> Self {
        Self { kind, message: source.to_string(), source: Some(source) }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Add context to the error, preserving the kind and the source.
    ///
    /// Produces: `"context: original message"`.
    pub fn with_context(self, ctx: impl fmt::Display) -> Self {
        Self {
            kind: self.kind,
            message: format!("{ctx}: {}", self.message),
            source: self.source,
        }
    }
}

/// Failure to load a [`MapperConfig`](crate::config::MapperConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config read '{path}': {source}")]
    Read { path: String, source: std::io::Error },

    #[error("config parse: {0}")]
    Parse(#[from] toml::de::Error),
}
