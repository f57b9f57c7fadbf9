//! Sample stage documents.
//!
//! - [`SCENARIO_ITEM`]: `2x2` with one item at `(0,0)`.
//! - [`SCENARIO_SWITCH`]: `2x2` with a single-target switch at `(1,0)`.
//! - [`SCENARIO_NO_SPEEDS`]: no speed tunables, so they decode to `0.0`.
//! - [`SCENARIO_OUT_OF_BOUNDS`]: a mover addressing `(5,0)` on a `2x2` grid.
//! - [`FULL_STAGE`]: every variant kind and every metadata key.

pub const SCENARIO_ITEM: &str = r#"{
    "body": [[0, 0], [0, 1]],
    "items": [[0, 0, 0]],
    "color": [1.0, 1.0, 1.0],
    "bg_color": [0.0, 0.0, 0.0]
}"#;

pub const SCENARIO_SWITCH: &str = r#"{
    "body": [[0, 0], [0, 1]],
    "switches": [{"position": [1, 0, 0], "target": [[0, 0, 0]]}],
    "color": [1.0, 1.0, 1.0],
    "bg_color": [0.0, 0.0, 0.0]
}"#;

pub const SCENARIO_NO_SPEEDS: &str = r#"{
    "body": [[2, 2], [2, 2]],
    "color": [0.5, 0.25, 0.75],
    "bg_color": [0.0, 0.0, 0.0],
    "collapse_speed": 1.5
}"#;

pub const SCENARIO_OUT_OF_BOUNDS: &str = r#"{
    "body": [[0, 0], [0, 1]],
    "moving": [{"entry": [5, 5, 0], "pattern": [1, -1]}],
    "color": [1.0, 1.0, 1.0],
    "bg_color": [0.0, 0.0, 0.0]
}"#;

/// A `4x3` stage using every key of the format.
pub const FULL_STAGE: &str = r#"{
    "body": [
        [1, 1, 2, -1],
        [1, 0, 2, 3],
        [4, 4, 4, 4]
    ],
    "items": [[0, 1, 0]],
    "moving": [{"entry": [1, 0, 1], "pattern": [2, 0, -2]}],
    "switches": [{"position": [2, 2, 0], "target": [[3, 4, 2], [0, 4, 2]]}],
    "falling": [{"entry": [3, 3, 1], "interval": 1.5, "delay": 0.25}],
    "oneways": [{"position": [0, 4, 2], "direction": "left", "power": 2}],
    "color": [0.25, 0.5, 1.0],
    "bg_color": [0.0, 0.125, 0.25],
    "x_offset": -2,
    "pickable": 1,
    "build_speed": 2.0,
    "collapse_speed": 0.5,
    "auto_collapse": 10.0,
    "camera": "far",
    "light_tween": "sunset"
}"#;

/// A `params.json` listing `stage01.json` and `stage02.json`, deployed to
/// `deploy/`.
pub const PARAMS: &str = r#"{
    "window": {"width": 1280, "height": 720},
    "app": {
        "stage": ["stage01.json", "stage02.json"],
        "copy_path": "deploy/"
    }
}"#;
