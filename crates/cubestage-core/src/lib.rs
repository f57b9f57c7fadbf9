//! Core types for the cubestage level model.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! per-column data model shared by the grid store, the JSON codec, and the
//! editor session: coordinates, [`Column`] with its exclusive [`Variant`],
//! and the appearance/tunable metadata carried alongside the grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod column;
pub mod coord;
pub mod meta;

pub use column::{
    Column, Direction, Pattern, Targets, Variant, VariantKind, DEFAULT_SWITCH_TARGET, MAX_HEIGHT,
    MIN_HEIGHT,
};
pub use coord::{Coord3, GridPos};
pub use meta::{Appearance, Rgb, StageMeta, Tunables, DEFAULT_CAMERA, DEFAULT_LIGHT_TWEEN};
