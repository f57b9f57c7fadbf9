//! JSON codec for cubestage documents.
//!
//! Translates between [`StageDocument`](cubestage_grid::StageDocument) and
//! the stage JSON consumed by the game runtime.
//!
//! # Architecture
//!
//! - [`types`] holds the serde wire structs ([`StageFile`] and its entries)
//! - [`codec`] converts between wire structs and documents, and wraps
//!   `serde_json` for the text/bytes edges
//! - Decoding is atomic: a [`ParseError`] means no document was produced
//!
//! # Format
//!
//! ```text
//! {
//!   "body": [[h, ...], ...],            row-major heights, z outer, x inner
//!   "items": [[x,y,z], ...],            variant categories, omitted when empty
//!   "moving" | "switches" | "falling" | "oneways": [...],
//!   "color": [r,g,b], "bg_color": [r,g,b],
//!   "x_offset": int, "pickable": int,
//!   "build_speed" | "collapse_speed" | "auto_collapse": float   omitted when <= 0
//!   "camera": str, "light_tween": str
//! }
//! ```
//!
//! Variant entries address their column by `x` and `z`; `y` is written as
//! the column height and ignored on read.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod types;

pub use codec::{
    decode, decode_file, decode_slice, decode_str, encode, encode_file, encode_string_pretty,
    encode_vec_pretty,
};
pub use error::ParseError;
pub use types::{FallingEntry, MovingEntry, OneWayEntry, StageFile, SwitchEntry};
