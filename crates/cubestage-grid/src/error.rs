//! Error types for grid construction and resizing.

use std::fmt;

/// Errors arising from grid construction or resizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to build or resize a grid with a zero extent.
    EmptyGrid {
        /// Requested width.
        width: usize,
        /// Requested length.
        length: usize,
    },
    /// An extent, or the cell count they give, is too large.
    DimensionTooLarge {
        /// Which value overflowed (`"width"`, `"length"` or `"cells"`).
        name: &'static str,
        /// The requested value.
        value: usize,
        /// Largest accepted value.
        max: usize,
    },
    /// The supplied column list does not cover `width * length` cells.
    ColumnCountMismatch {
        /// `width * length`.
        expected: usize,
        /// Number of columns supplied.
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { width, length } => {
                write!(f, "grid must have at least one column, got {width}x{length}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "grid {name} {value} exceeds maximum {max}")
            }
            Self::ColumnCountMismatch { expected, found } => {
                write!(f, "expected {expected} columns, got {found}")
            }
        }
    }
}

impl std::error::Error for GridError {}
