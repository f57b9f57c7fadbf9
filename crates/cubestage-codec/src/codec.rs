//! Conversion between [`StageDocument`] and the stage JSON format.
//!
//! Decoding builds a fresh document and returns it only on success.
//! Encoding is a pure function of the document; the only normalization it
//! applies is dropping empty variant categories and unset (`<= 0`) speed
//! tunables, so `encode(decode(x))` is stable from the first pass on.

use cubestage_core::{
    Appearance, Column, Coord3, Direction, Rgb, StageMeta, Tunables, Variant, VariantKind,
};
use cubestage_grid::{Grid, StageDocument};
use log::{debug, warn};
use serde_json::Value;

use crate::error::ParseError;
use crate::types::{FallingEntry, MovingEntry, OneWayEntry, StageFile, SwitchEntry};

// ── Decode ──────────────────────────────────────────────────────

/// Decode a stage from a parsed JSON value.
pub fn decode(value: Value) -> Result<StageDocument, ParseError> {
    decode_file(serde_json::from_value(value)?)
}

/// Decode a stage from JSON text.
///
/// # Examples
///
/// ```
/// use cubestage_codec::decode_str;
/// use cubestage_core::VariantKind;
///
/// let doc = decode_str(r#"{
///     "body": [[0, 0], [0, 1]],
///     "color": [1, 0, 0], "bg_color": [0, 0, 0],
///     "items": [[0, 0, 0]]
/// }"#).unwrap();
/// assert_eq!((doc.width(), doc.length()), (2, 2));
/// assert_eq!(doc.grid.kind_at(0, 0), Some(VariantKind::Item));
/// assert_eq!(doc.grid.height(1, 1), Some(1));
/// ```
pub fn decode_str(json: &str) -> Result<StageDocument, ParseError> {
    decode_file(serde_json::from_str(json)?)
}

/// Decode a stage from JSON bytes.
pub fn decode_slice(json: &[u8]) -> Result<StageDocument, ParseError> {
    decode_file(serde_json::from_slice(json)?)
}

/// Build a document from its wire form.
///
/// The grid extents come from `body`. Variant entries are then applied in
/// category order (items, moving, switches, falling, oneways); an entry
/// outside the grid is skipped, and an entry for a column that already
/// holds a variant is skipped as well, so the first entry for a column wins.
/// A switch inside the grid must list at least one target.
pub fn decode_file(file: StageFile) -> Result<StageDocument, ParseError> {
    let StageFile {
        body,
        items,
        moving,
        switches,
        falling,
        oneways,
        color,
        bg_color,
        x_offset,
        pickable,
        build_speed,
        collapse_speed,
        auto_collapse,
        camera,
        light_tween,
    } = file;

    let mut grid = decode_body(body)?;

    for at in items {
        place(&mut grid, at, "item", Variant::Item);
    }
    for MovingEntry { entry, pattern } in moving {
        let variant = Variant::Mover {
            pattern: pattern.into_iter().collect(),
        };
        place(&mut grid, entry, "moving", variant);
    }
    for SwitchEntry { position, target } in switches {
        let [x, _, z] = position;
        if target.is_empty() && grid.contains(x, z) {
            return Err(ParseError::EmptySwitchTargets {
                position: Coord3::from(position),
            });
        }
        let variant = Variant::Switch {
            targets: target.into_iter().map(Coord3::from).collect(),
        };
        place(&mut grid, position, "switch", variant);
    }
    for FallingEntry {
        entry,
        interval,
        delay,
    } in falling
    {
        let variant = Variant::Faller {
            interval: interval.max(0.0),
            delay: delay.max(0.0),
        };
        place(&mut grid, entry, "falling", variant);
    }
    for OneWayEntry {
        position,
        direction,
        power,
    } in oneways
    {
        let variant = Variant::OneWay {
            direction: Direction::from(direction),
            power,
        };
        place(&mut grid, position, "oneway", variant);
    }

    let meta = StageMeta {
        appearance: Appearance {
            color: Rgb::from(color),
            bg_color: Rgb::from(bg_color),
        },
        x_offset,
        pickable,
        tunables: Tunables {
            build_speed: build_speed.unwrap_or(0.0),
            collapse_speed: collapse_speed.unwrap_or(0.0),
            auto_collapse: auto_collapse.unwrap_or(0.0),
        },
        camera,
        light_tween,
    };

    Ok(StageDocument::from_parts(grid, meta))
}

/// Build the grid from `body`, rejecting empty or ragged input.
fn decode_body(body: Vec<Vec<i32>>) -> Result<Grid, ParseError> {
    let length = body.len();
    let width = body.first().map_or(0, Vec::len);
    if width == 0 {
        return Err(ParseError::EmptyBody);
    }
    if let Some((row, found)) = body
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != width)
    {
        return Err(ParseError::RaggedBody {
            row,
            expected: width,
            found,
        });
    }
    let columns = body.into_iter().flatten().map(Column::new).collect();
    Ok(Grid::from_columns(width, length, columns)?)
}

/// Attach `variant` to the column addressed by `at`, ignoring `y`.
fn place(grid: &mut Grid, at: [i32; 3], category: &str, variant: Variant) {
    let at = Coord3::from(at);
    let (width, length) = (grid.width(), grid.length());
    match grid.get_mut(at.x, at.z) {
        None => {
            debug!("skipping {category} at {at}: outside {width}x{length} grid");
        }
        Some(col) if col.kind() != VariantKind::None => {
            warn!(
                "skipping {category} at {at}: column already holds {}",
                col.kind()
            );
        }
        Some(col) => col.variant = variant,
    }
}

// ── Encode ──────────────────────────────────────────────────────

/// Build the wire form of a document.
///
/// Variant entries are collected row-major, each triple carrying the
/// column's current height as `y`. Empty categories serialize to nothing;
/// speed tunables `<= 0` are left out.
pub fn encode_file(doc: &StageDocument) -> StageFile {
    let mut items = Vec::new();
    let mut moving = Vec::new();
    let mut switches = Vec::new();
    let mut falling = Vec::new();
    let mut oneways = Vec::new();

    for (pos, col) in doc.grid.iter() {
        let at = [pos.x, col.height, pos.z];
        match &col.variant {
            Variant::None => {}
            Variant::Item => items.push(at),
            Variant::Mover { pattern } => moving.push(MovingEntry {
                entry: at,
                pattern: pattern.to_vec(),
            }),
            Variant::Switch { targets } => switches.push(SwitchEntry {
                position: at,
                target: targets.iter().map(|t| t.to_array()).collect(),
            }),
            Variant::Faller { interval, delay } => falling.push(FallingEntry {
                entry: at,
                interval: *interval,
                delay: *delay,
            }),
            Variant::OneWay { direction, power } => oneways.push(OneWayEntry {
                position: at,
                direction: direction.as_str().to_owned(),
                power: *power,
            }),
        }
    }

    let meta = &doc.meta;
    StageFile {
        body: doc.grid.rows().map(|row| row.iter().map(|c| c.height).collect()).collect(),
        items,
        moving,
        switches,
        falling,
        oneways,
        color: meta.appearance.color.to_array(),
        bg_color: meta.appearance.bg_color.to_array(),
        x_offset: meta.x_offset,
        pickable: meta.pickable,
        build_speed: Tunables::set_value(meta.tunables.build_speed),
        collapse_speed: Tunables::set_value(meta.tunables.collapse_speed),
        auto_collapse: Tunables::set_value(meta.tunables.auto_collapse),
        camera: meta.camera.clone(),
        light_tween: meta.light_tween.clone(),
    }
}

/// Encode a document as a JSON value.
pub fn encode(doc: &StageDocument) -> Result<Value, serde_json::Error> {
    serde_json::to_value(encode_file(doc))
}

/// Encode a document as pretty-printed JSON text.
pub fn encode_string_pretty(doc: &StageDocument) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&encode_file(doc))
}

/// Encode a document as pretty-printed JSON bytes.
pub fn encode_vec_pretty(doc: &StageDocument) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec_pretty(&encode_file(doc))
}
