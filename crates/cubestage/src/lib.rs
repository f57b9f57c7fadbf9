//! cubestage: the editing core behind a column-grid puzzle game's stages.
//!
//! A stage is a rectangular grid of columns. Each column has a height and
//! at most one variant (item, mover, switch, faller or one-way). Stages are
//! stored as JSON and edited through the grid's per-column operations.
//!
//! This facade re-exports every sub-crate. Depending on `cubestage` alone
//! is enough for most users.
//!
//! # Quick start
//!
//! ```rust
//! use cubestage::prelude::*;
//!
//! let mut doc = decode_str(r#"{
//!     "body": [[0, 0], [0, 1]],
//!     "items": [[0, 0, 0]],
//!     "color": [1, 1, 1],
//!     "bg_color": [0, 0, 0]
//! }"#).unwrap();
//!
//! // Only one variant per column: the item blocks a switch.
//! assert!(!doc.grid.toggle_switch(0, 0));
//! assert!(doc.grid.toggle_item(0, 0));
//! assert!(doc.grid.toggle_switch(0, 0));
//! assert_eq!(doc.grid.targets(0, 0), Some(&[Coord3::ZERO][..]));
//!
//! let json = encode(&doc).unwrap();
//! assert!(json.get("items").is_none());
//! assert_eq!(json["switches"][0]["target"], serde_json::json!([[0, 0, 0]]));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cubestage-core` | Coordinates, columns, variants, stage metadata |
//! | [`grid`] | `cubestage-grid` | `Grid` store and `StageDocument` |
//! | [`codec`] | `cubestage-codec` | JSON wire types, decode and encode |
//! | [`session`] | `cubestage-session` | Editor session, config, stage storage |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Columns, variants, coordinates and metadata (`cubestage-core`).
pub use cubestage_core as types;

/// The grid store and stage document (`cubestage-grid`).
///
/// [`grid::Grid`] holds the columns; [`grid::StageDocument`] pairs it with
/// metadata.
pub use cubestage_grid as grid;

/// Stage JSON codec (`cubestage-codec`).
///
/// [`codec::decode_str`] and [`codec::encode`] are the usual entry points.
pub use cubestage_codec as codec;

/// Editing sessions over a configured stage list (`cubestage-session`).
pub use cubestage_session as session;

/// Common imports for typical cubestage usage.
///
/// ```rust
/// use cubestage::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use cubestage_core::{Column, Coord3, Direction, GridPos, StageMeta, Variant, VariantKind};

    // Grid
    pub use cubestage_grid::{Grid, StageDocument};

    // Codec
    pub use cubestage_codec::{decode, decode_str, encode, encode_string_pretty};

    // Session
    pub use cubestage_session::{EditorConfig, EditorSession, FsStore, StageStore};

    // Errors
    pub use cubestage_codec::ParseError;
    pub use cubestage_grid::GridError;
    pub use cubestage_session::SessionError;
}
