//! Columns, their height, and the exclusive per-column [`Variant`].
//!
//! A column holds at most one special behavior. Switching from one kind to
//! another requires toggling the active kind off first; toggles that would
//! replace a different active kind are refused and leave the column as is.

use std::fmt;

use smallvec::{smallvec, SmallVec};

use crate::coord::Coord3;

/// Lowest legal column height. A column at this height is a hole.
pub const MIN_HEIGHT: i32 = -1;

/// Highest legal column height.
pub const MAX_HEIGHT: i32 = 10;

/// Target appended by [`Column::add_target`] callers and seeded into a
/// freshly toggled switch.
pub const DEFAULT_SWITCH_TARGET: Coord3 = Coord3::ZERO;

/// Waypoint offsets of a mover. Inline for short patterns.
pub type Pattern = SmallVec<[i32; 8]>;

/// Ordered target list of a switch. Inline for the common one- or
/// two-target case.
pub type Targets = SmallVec<[Coord3; 2]>;

// ── Direction ───────────────────────────────────────────────────

/// Push direction of a one-way column.
///
/// The four cardinal names are recognized; anything else round-trips
/// unchanged through [`Direction::Other`] so that stages authored for newer
/// runtimes survive an edit.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `"up"` (the default).
    #[default]
    Up,
    /// `"down"`.
    Down,
    /// `"left"`.
    Left,
    /// `"right"`.
    Right,
    /// Any other direction name.
    Other(String),
}

impl Direction {
    /// Wire name of the direction.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Direction {
    fn from(name: &str) -> Self {
        match name {
            "up" => Self::Up,
            "down" => Self::Down,
            "left" => Self::Left,
            "right" => Self::Right,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for Direction {
    fn from(name: String) -> Self {
        match Direction::from(name.as_str()) {
            Self::Other(_) => Self::Other(name),
            known => known,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Variant ─────────────────────────────────────────────────────

/// Payload-free discriminant of a [`Variant`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VariantKind {
    /// Plain column.
    None,
    /// Collectible item.
    Item,
    /// Back-and-forth mover.
    Mover,
    /// Switch with targets.
    Switch,
    /// Timed faller.
    Faller,
    /// Directional one-way pusher.
    OneWay,
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Item => "item",
            Self::Mover => "mover",
            Self::Switch => "switch",
            Self::Faller => "faller",
            Self::OneWay => "oneway",
        };
        f.write_str(name)
    }
}

/// The special behavior attached to a column.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Variant {
    /// No special behavior.
    #[default]
    None,
    /// Collectible item sitting on the column.
    Item,
    /// Column that moves back and forth along `pattern`.
    Mover {
        /// Cyclic waypoint offsets.
        pattern: Pattern,
    },
    /// Switch activating every coordinate in `targets`.
    Switch {
        /// Activated coordinates; never empty.
        targets: Targets,
    },
    /// Column that falls on a timer.
    Faller {
        /// Seconds between falls, `>= 0`.
        interval: f64,
        /// Initial delay in seconds, `>= 0`.
        delay: f64,
    },
    /// Pusher that moves the player in `direction`.
    OneWay {
        /// Push direction.
        direction: Direction,
        /// Push strength.
        power: i32,
    },
}

impl Variant {
    /// The freshly toggled-on payload for `kind`.
    ///
    /// Switches start with a single [`DEFAULT_SWITCH_TARGET`] so that the
    /// non-empty target invariant holds from the moment they exist.
    pub fn default_for(kind: VariantKind) -> Self {
        match kind {
            VariantKind::None => Self::None,
            VariantKind::Item => Self::Item,
            VariantKind::Mover => Self::Mover {
                pattern: Pattern::new(),
            },
            VariantKind::Switch => Self::Switch {
                targets: smallvec![DEFAULT_SWITCH_TARGET],
            },
            VariantKind::Faller => Self::Faller {
                interval: 0.0,
                delay: 0.0,
            },
            VariantKind::OneWay => Self::OneWay {
                direction: Direction::Up,
                power: 0,
            },
        }
    }

    /// Discriminant of this variant.
    pub fn kind(&self) -> VariantKind {
        match self {
            Self::None => VariantKind::None,
            Self::Item => VariantKind::Item,
            Self::Mover { .. } => VariantKind::Mover,
            Self::Switch { .. } => VariantKind::Switch,
            Self::Faller { .. } => VariantKind::Faller,
            Self::OneWay { .. } => VariantKind::OneWay,
        }
    }
}

/// Clamp timer values to `>= 0`, mapping NaN to 0.
fn non_negative(v: f64) -> f64 {
    if v > 0.0 {
        v
    } else {
        0.0
    }
}

// ── Column ──────────────────────────────────────────────────────

/// One vertical stack of cubes in the stage grid.
///
/// # Examples
///
/// ```
/// use cubestage_core::{Column, VariantKind};
///
/// let mut col = Column::default();
/// assert!(col.toggle(VariantKind::Item));
/// // A different kind cannot replace the active one.
/// assert!(!col.toggle(VariantKind::Switch));
/// assert_eq!(col.kind(), VariantKind::Item);
///
/// col.change_height(25);
/// assert_eq!(col.height, 10);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Column {
    /// Stack height. `-1` is a hole; edits through
    /// [`change_height`](Column::change_height) stay within
    /// [`MIN_HEIGHT`]`..=`[`MAX_HEIGHT`].
    pub height: i32,
    /// Active behavior.
    pub variant: Variant,
}

impl Column {
    /// A plain column at `height`.
    pub const fn new(height: i32) -> Self {
        Self {
            height,
            variant: Variant::None,
        }
    }

    /// Whether this column has no floor.
    pub fn is_hole(&self) -> bool {
        self.height < 0
    }

    /// Discriminant of the active variant.
    pub fn kind(&self) -> VariantKind {
        self.variant.kind()
    }

    /// Toggle `kind` on or off.
    ///
    /// Turns `kind` on when the column is plain and off when `kind` is
    /// already active. Returns `false` without touching the column when a
    /// different kind is active or `kind` is [`VariantKind::None`].
    pub fn toggle(&mut self, kind: VariantKind) -> bool {
        if kind == VariantKind::None {
            return false;
        }
        let current = self.kind();
        if current == kind {
            self.variant = Variant::None;
            true
        } else if current == VariantKind::None {
            self.variant = Variant::default_for(kind);
            true
        } else {
            false
        }
    }

    /// Add `delta` to the height, clamping to [`MIN_HEIGHT`]`..=`[`MAX_HEIGHT`].
    pub fn change_height(&mut self, delta: i32) {
        self.height = self
            .height
            .saturating_add(delta)
            .clamp(MIN_HEIGHT, MAX_HEIGHT);
    }

    /// Set the height to `value` as given.
    ///
    /// Unlike [`change_height`](Column::change_height) this does not clamp:
    /// out-of-range heights are stored verbatim and a later
    /// `validate` pass only reconciles the variant of holes.
    pub fn set_height(&mut self, value: i32) {
        self.height = value;
    }

    /// Reset to a plain column at height 0.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Drop the variant of a hole. Returns `true` if a variant was removed.
    pub fn strip_if_hole(&mut self) -> bool {
        if self.is_hole() && self.variant != Variant::None {
            self.variant = Variant::None;
            true
        } else {
            false
        }
    }

    // ── Mover ───────────────────────────────────────────────────

    /// Mover waypoints, or `None` if this column is not a mover.
    pub fn pattern(&self) -> Option<&[i32]> {
        match &self.variant {
            Variant::Mover { pattern } => Some(pattern),
            _ => None,
        }
    }

    /// Replace the mover waypoints. Returns `false` if not a mover.
    pub fn set_pattern<I: IntoIterator<Item = i32>>(&mut self, values: I) -> bool {
        match &mut self.variant {
            Variant::Mover { pattern } => {
                *pattern = values.into_iter().collect();
                true
            }
            _ => false,
        }
    }

    // ── Switch ──────────────────────────────────────────────────

    /// Switch targets, or `None` if this column is not a switch.
    pub fn targets(&self) -> Option<&[Coord3]> {
        match &self.variant {
            Variant::Switch { targets } => Some(targets),
            _ => None,
        }
    }

    /// Append a switch target. Returns `false` if not a switch.
    pub fn add_target(&mut self, target: Coord3) -> bool {
        match &mut self.variant {
            Variant::Switch { targets } => {
                targets.push(target);
                true
            }
            _ => false,
        }
    }

    /// Remove the last switch target, keeping at least one.
    ///
    /// Returns `true` only if a target was removed.
    pub fn reduce_targets(&mut self) -> bool {
        match &mut self.variant {
            Variant::Switch { targets } if targets.len() > 1 => {
                targets.pop();
                true
            }
            _ => false,
        }
    }

    /// Overwrite the switch target at `index`.
    ///
    /// Returns `false` if not a switch or `index` is out of range.
    pub fn set_target(&mut self, index: usize, target: Coord3) -> bool {
        match &mut self.variant {
            Variant::Switch { targets } => match targets.get_mut(index) {
                Some(slot) => {
                    *slot = target;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    // ── Faller ──────────────────────────────────────────────────

    /// Faller interval, or `None` if this column is not a faller.
    pub fn interval(&self) -> Option<f64> {
        match self.variant {
            Variant::Faller { interval, .. } => Some(interval),
            _ => None,
        }
    }

    /// Faller delay, or `None` if this column is not a faller.
    pub fn delay(&self) -> Option<f64> {
        match self.variant {
            Variant::Faller { delay, .. } => Some(delay),
            _ => None,
        }
    }

    /// Set the faller interval, clamped to `>= 0`. Returns `false` if not a faller.
    pub fn set_interval(&mut self, value: f64) -> bool {
        match &mut self.variant {
            Variant::Faller { interval, .. } => {
                *interval = non_negative(value);
                true
            }
            _ => false,
        }
    }

    /// Set the faller delay, clamped to `>= 0`. Returns `false` if not a faller.
    pub fn set_delay(&mut self, value: f64) -> bool {
        match &mut self.variant {
            Variant::Faller { delay, .. } => {
                *delay = non_negative(value);
                true
            }
            _ => false,
        }
    }

    // ── One-way ─────────────────────────────────────────────────

    /// One-way direction, or `None` if this column is not a one-way.
    pub fn direction(&self) -> Option<&Direction> {
        match &self.variant {
            Variant::OneWay { direction, .. } => Some(direction),
            _ => None,
        }
    }

    /// One-way power, or `None` if this column is not a one-way.
    pub fn power(&self) -> Option<i32> {
        match self.variant {
            Variant::OneWay { power, .. } => Some(power),
            _ => None,
        }
    }

    /// Set the one-way direction. Returns `false` if not a one-way.
    pub fn set_direction(&mut self, value: impl Into<Direction>) -> bool {
        match &mut self.variant {
            Variant::OneWay { direction, .. } => {
                *direction = value.into();
                true
            }
            _ => false,
        }
    }

    /// Set the one-way power. Returns `false` if not a one-way.
    pub fn set_power(&mut self, value: i32) -> bool {
        match &mut self.variant {
            Variant::OneWay { power, .. } => {
                *power = value;
                true
            }
            _ => false,
        }
    }
}
