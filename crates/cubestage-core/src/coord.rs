//! Grid addresses and stage-space coordinates.

use std::fmt;

/// Address of a column in the stage grid.
///
/// `x` indexes within a row, `z` selects the row. Columns are addressed as
/// vertical stacks, so there is no height component: two cubes at the same
/// `(x, z)` always belong to the same column.
///
/// Components are signed because addresses usually come from editor input
/// or wire data, where negative values simply mean "outside the grid".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    /// Position within the row.
    pub x: i32,
    /// Row index.
    pub z: i32,
}

impl GridPos {
    /// Create a grid address.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, z): (i32, i32)) -> Self {
        Self { x, z }
    }
}

/// A 3D integer coordinate in stage space.
///
/// Used for switch targets and for the `[x, y, z]` triples of the wire
/// format. When a `Coord3` refers to a column, `y` is informational only.
///
/// # Examples
///
/// ```
/// use cubestage_core::{Coord3, GridPos};
///
/// let c = Coord3::from([3, 7, 1]);
/// assert_eq!(c.grid_pos(), GridPos::new(3, 1));
/// assert_eq!(c.to_array(), [3, 7, 1]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord3 {
    /// Horizontal position within a row.
    pub x: i32,
    /// Vertical position (cube height).
    pub y: i32,
    /// Row index.
    pub z: i32,
}

impl Coord3 {
    /// The origin `(0, 0, 0)`.
    pub const ZERO: Coord3 = Coord3 { x: 0, y: 0, z: 0 };

    /// Create a coordinate.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The column this coordinate falls in, dropping `y`.
    pub const fn grid_pos(&self) -> GridPos {
        GridPos { x: self.x, z: self.z }
    }

    /// `[x, y, z]` as laid out on the wire.
    pub const fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[i32; 3]> for Coord3 {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Coord3> for [i32; 3] {
    fn from(c: Coord3) -> Self {
        c.to_array()
    }
}

impl fmt::Display for Coord3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
