//! Grid store and stage document for cubestage.
//!
//! [`Grid`] owns the dense, rectangular array of columns and exposes every
//! editing operation addressed by `(x, z)`. [`StageDocument`] pairs a grid
//! with its [`StageMeta`](cubestage_core::StageMeta) and is the unit the
//! codec reads and writes.
//!
//! Edits never fail: addressing a column outside the grid, reducing a
//! switch to zero targets, or pushing a height past its limits are all
//! no-ops or clamps. The only fallible operations are the ones that change
//! the grid's shape, which reject empty extents.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod document;
pub mod error;
pub mod grid;

pub use document::StageDocument;
pub use error::GridError;
pub use grid::{Grid, KindCounts};
