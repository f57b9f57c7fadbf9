//! Session error type.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use cubestage_codec::ParseError;

use crate::config::ConfigError;

/// Errors raised by [`EditorSession`](crate::EditorSession) operations.
///
/// A failed operation leaves the session as it was: the previously loaded
/// document and stage index are retained.
#[derive(Debug)]
pub enum SessionError {
    /// The store could not read, write, or copy a stage file.
    Io {
        /// Stage path involved.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A stage file is not a valid stage document.
    Parse {
        /// Stage path involved.
        path: PathBuf,
        /// Decode failure.
        source: ParseError,
    },
    /// The document could not be serialized.
    Encode {
        /// Stage path involved.
        path: PathBuf,
        /// Serializer failure.
        source: serde_json::Error,
    },
    /// The session configuration is invalid.
    Config(ConfigError),
    /// A stage index past the end of the configured list.
    StageIndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of configured stages.
        count: usize,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Parse { path, source } => {
                write!(f, "{}: invalid stage: {source}", path.display())
            }
            Self::Encode { path, source } => {
                write!(f, "{}: cannot encode stage: {source}", path.display())
            }
            Self::Config(e) => write!(f, "config: {e}"),
            Self::StageIndexOutOfRange { index, count } => {
                write!(f, "stage index {index} out of range (have {count})")
            }
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Encode { source, .. } => Some(source),
            Self::Config(e) => Some(e),
            Self::StageIndexOutOfRange { .. } => None,
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
