//! Appearance and tunables carried alongside the grid.
//!
//! None of these values are interpreted here; they are opaque hints for
//! the runtime renderer and animator.

/// Camera preset used when a document does not name one.
pub const DEFAULT_CAMERA: &str = "normal";

/// Light tween preset used when a document does not name one.
pub const DEFAULT_LIGHT_TWEEN: &str = "default";

/// An RGB color with float components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rgb {
    /// Red.
    pub r: f64,
    /// Green.
    pub g: f64,
    /// Blue.
    pub b: f64,
}

impl Rgb {
    /// Create a color.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// `[r, g, b]` as laid out on the wire.
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[f64; 3]> for Rgb {
    fn from([r, g, b]: [f64; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Stage colors.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Appearance {
    /// Primary cube color.
    pub color: Rgb,
    /// Background color.
    pub bg_color: Rgb,
}

/// Build/collapse speed hints.
///
/// A value `<= 0` means "unset": the runtime falls back to its own default
/// and the codec leaves the field out of the document.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tunables {
    /// Speed of the stage build-up animation.
    pub build_speed: f64,
    /// Speed of the collapse animation.
    pub collapse_speed: f64,
    /// Delay before the stage collapses on its own.
    pub auto_collapse: f64,
}

impl Tunables {
    /// `value` if it is set (`> 0`), otherwise `None`.
    pub fn set_value(value: f64) -> Option<f64> {
        (value > 0.0).then_some(value)
    }
}

/// Everything in a stage document besides the grid.
#[derive(Clone, Debug, PartialEq)]
pub struct StageMeta {
    /// Colors.
    pub appearance: Appearance,
    /// Horizontal placement offset of the stage.
    pub x_offset: i32,
    /// Number of pickable items the stage expects.
    pub pickable: u32,
    /// Animation speed hints.
    pub tunables: Tunables,
    /// Camera preset name.
    pub camera: String,
    /// Light tween preset name.
    pub light_tween: String,
}

impl Default for StageMeta {
    fn default() -> Self {
        Self {
            appearance: Appearance::default(),
            x_offset: 0,
            pickable: 0,
            tunables: Tunables::default(),
            camera: DEFAULT_CAMERA.to_owned(),
            light_tween: DEFAULT_LIGHT_TWEEN.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_presets() {
        let meta = StageMeta::default();
        assert_eq!(meta.camera, "normal");
        assert_eq!(meta.light_tween, "default");
        assert_eq!(meta.pickable, 0);
        assert_eq!(meta.tunables, Tunables::default());
    }

    #[test]
    fn unset_tunables_are_none() {
        assert_eq!(Tunables::set_value(0.0), None);
        assert_eq!(Tunables::set_value(-1.0), None);
        assert_eq!(Tunables::set_value(f64::NAN), None);
        assert_eq!(Tunables::set_value(0.25), Some(0.25));
    }
}
