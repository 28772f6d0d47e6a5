//! Error types for tintcap.

use std::fmt;
use std::io;

/// Result type alias for tintcap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for tintcap operations.
///
/// The taxonomy is deliberately narrow: a rejected font file and the I/O
/// failures reading one. Everything else in the engine is a total,
/// synchronous transformation over in-memory data and cannot fail.
#[derive(Debug)]
pub enum Error {
    /// Font file extension not in the allowed set (ttf, otf, woff, woff2).
    InvalidFontFormat { extension: String },
    /// I/O error reading a font file.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFontFormat { extension } => {
                write!(
                    f,
                    "invalid font file type \"{extension}\": expected ttf, otf, woff, or woff2"
                )
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidFontFormat { .. } => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
