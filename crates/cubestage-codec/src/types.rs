//! Wire structs for the stage JSON format.
//!
//! These mirror the document one-to-one. Field declaration order is the
//! key order of encoded output.

use cubestage_core::{Direction, DEFAULT_CAMERA, DEFAULT_LIGHT_TWEEN};
use serde::{Deserialize, Serialize};

/// A whole stage document as it appears on disk.
///
/// # Examples
///
/// ```
/// use cubestage_codec::StageFile;
///
/// let file: StageFile = serde_json::from_str(
///     r#"{"body": [[0, 1]], "color": [1, 1, 1], "bg_color": [0, 0, 0]}"#,
/// ).unwrap();
/// assert_eq!(file.camera, "normal");
/// assert_eq!(file.build_speed, None);
/// assert!(file.items.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageFile {
    /// Column heights, one inner array per row.
    pub body: Vec<Vec<i32>>,
    /// Item positions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<[i32; 3]>,
    /// Mover entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub moving: Vec<MovingEntry>,
    /// Switch entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub switches: Vec<SwitchEntry>,
    /// Faller entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub falling: Vec<FallingEntry>,
    /// One-way entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub oneways: Vec<OneWayEntry>,
    /// Primary color.
    pub color: [f64; 3],
    /// Background color.
    pub bg_color: [f64; 3],
    /// Horizontal offset.
    #[serde(default)]
    pub x_offset: i32,
    /// Expected pickable count.
    #[serde(default)]
    pub pickable: u32,
    /// Build animation speed; absent when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_speed: Option<f64>,
    /// Collapse animation speed; absent when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapse_speed: Option<f64>,
    /// Auto-collapse delay; absent when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_collapse: Option<f64>,
    /// Camera preset.
    #[serde(default = "default_camera")]
    pub camera: String,
    /// Light tween preset.
    #[serde(default = "default_light_tween")]
    pub light_tween: String,
}

/// `{"entry": [x,y,z], "pattern": [int, ...]}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovingEntry {
    /// Mover position.
    pub entry: [i32; 3],
    /// Waypoint offsets.
    #[serde(default)]
    pub pattern: Vec<i32>,
}

/// `{"position": [x,y,z], "target": [[x,y,z], ...]}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwitchEntry {
    /// Switch position.
    pub position: [i32; 3],
    /// Activated coordinates, in order.
    pub target: Vec<[i32; 3]>,
}

/// `{"entry": [x,y,z], "interval": float, "delay": float}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FallingEntry {
    /// Faller position.
    pub entry: [i32; 3],
    /// Seconds between falls.
    pub interval: f64,
    /// Initial delay in seconds.
    pub delay: f64,
}

/// `{"position": [x,y,z], "direction": str, "power": int}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OneWayEntry {
    /// One-way position.
    pub position: [i32; 3],
    /// Push direction name.
    #[serde(default = "default_direction")]
    pub direction: String,
    /// Push strength.
    #[serde(default)]
    pub power: i32,
}

fn default_camera() -> String {
    DEFAULT_CAMERA.to_owned()
}

fn default_light_tween() -> String {
    DEFAULT_LIGHT_TWEEN.to_owned()
}

fn default_direction() -> String {
    Direction::default().as_str().to_owned()
}
