//! Error types for SVG decoding

use thiserror::Error;

/// Result type alias for decode operations
pub type Result<T> = std::result::Result<T, Error>;

/// Parse failures reported by the rendering engine.
///
/// Each kind maps 1:1 from an engine status and carries a fixed message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    #[error("SVG data is not valid UTF-8")]
    NotUtf8,

    #[error("SVG gzip data is malformed")]
    MalformedGzip,

    #[error("SVG elements limit reached")]
    ElementsLimitReached,

    #[error("SVG has invalid size")]
    InvalidSize,

    #[error("Failed to parse SVG")]
    ParseFailed,

    /// The engine reported a status this crate does not know about
    #[error("Unknown SVG parsing error")]
    Unknown,
}

/// Errors that can occur while decoding an SVG
#[derive(Error, Debug)]
pub enum Error {
    /// The input (or its options value) has an unsupported shape
    #[error("{0}")]
    InvalidInput(String),

    /// The engine rejected the document
    #[error(transparent)]
    Parse(#[from] ParseErrorKind),

    /// The pixel buffer could not be allocated
    #[error("Memory allocation failed")]
    OutOfMemory,

    /// The engine could not render into the buffer
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Operation not provided by this codec
    #[error("{0}")]
    Unsupported(String),
}

impl Error {
    /// The parse failure kind, if this error came from the engine's parser
    pub fn parse_kind(&self) -> Option<ParseErrorKind> {
        match self {
            Error::Parse(kind) => Some(*kind),
            _ => None,
        }
    }
}
