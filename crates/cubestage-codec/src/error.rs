//! Error types for stage decoding.

use std::fmt;

use cubestage_core::Coord3;
use cubestage_grid::GridError;

/// Errors that make a stage document undecodable.
///
/// References to columns outside the grid are not errors; the decoder
/// skips them.
#[derive(Debug)]
pub enum ParseError {
    /// The input is not valid JSON or does not match the wire schema
    /// (missing `body`, wrong element types, malformed triples).
    Json(serde_json::Error),
    /// `body` has no rows, or its rows have no columns.
    EmptyBody,
    /// A `body` row differs in width from the first row.
    RaggedBody {
        /// Index of the offending row.
        row: usize,
        /// Width of row 0.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A switch entry lists no targets.
    EmptySwitchTargets {
        /// The entry's `position`.
        position: Coord3,
    },
    /// The grid could not be built from `body`.
    Grid(GridError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "invalid stage JSON: {e}"),
            Self::EmptyBody => write!(f, "stage body has no columns"),
            Self::RaggedBody {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "stage body row {row} has {found} columns, expected {expected}"
                )
            }
            Self::EmptySwitchTargets { position } => {
                write!(f, "switch at {position} has no targets")
            }
            Self::Grid(e) => write!(f, "invalid stage grid: {e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<GridError> for ParseError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
