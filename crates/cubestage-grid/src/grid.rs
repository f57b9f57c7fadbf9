//! The dense column store and its `(x, z)`-addressed editing operations.

use cubestage_core::{Column, Coord3, Direction, GridPos, VariantKind, DEFAULT_SWITCH_TARGET};
use log::debug;

use crate::error::GridError;

/// A rectangular grid of [`Column`]s.
///
/// Columns are stored row-major: row `z` occupies
/// `columns[z * width .. (z + 1) * width]`, so lookup by `(x, z)` is a
/// bounds check and one index computation. Every row always holds exactly
/// `width` columns.
///
/// # Examples
///
/// ```
/// use cubestage_grid::Grid;
/// use cubestage_core::VariantKind;
///
/// let mut grid = Grid::new(3, 2).unwrap();
/// assert!(grid.toggle_switch(1, 0));
/// grid.add_switch_target(1, 0);
/// assert_eq!(grid.targets(1, 0).map(<[_]>::len), Some(2));
///
/// // Out-of-bounds addresses are ignored.
/// assert!(!grid.toggle_item(7, 7));
/// assert_eq!(grid.kind_at(7, 7), None);
/// assert_eq!(grid.kind_at(1, 0), Some(VariantKind::Switch));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    width: usize,
    length: usize,
    columns: Vec<Column>,
}

/// Per-kind column counts of a grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KindCounts {
    /// Columns carrying an item.
    pub items: usize,
    /// Mover columns.
    pub movers: usize,
    /// Switch columns.
    pub switches: usize,
    /// Faller columns.
    pub fallers: usize,
    /// One-way columns.
    pub oneways: usize,
    /// Columns with a negative height.
    pub holes: usize,
}

impl Grid {
    /// Largest accepted extent: addresses are `i32`, so each axis must fit.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Largest accepted `width * length`.
    pub const MAX_CELLS: usize = i32::MAX as usize;

    /// Create a `width x length` grid of plain columns at height 0.
    pub fn new(width: usize, length: usize) -> Result<Self, GridError> {
        let cells = check_extents(width, length)?;
        Ok(Self {
            width,
            length,
            columns: vec![Column::default(); cells],
        })
    }

    /// Build a grid from row-major columns.
    ///
    /// `columns.len()` must equal `width * length`.
    pub fn from_columns(
        width: usize,
        length: usize,
        columns: Vec<Column>,
    ) -> Result<Self, GridError> {
        let cells = check_extents(width, length)?;
        if columns.len() != cells {
            return Err(GridError::ColumnCountMismatch {
                expected: cells,
                found: columns.len(),
            });
        }
        Ok(Self {
            width,
            length,
            columns,
        })
    }

    /// Number of columns per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Total number of columns.
    pub fn cell_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether `(x, z)` addresses a column of this grid.
    pub fn contains(&self, x: i32, z: i32) -> bool {
        self.index(x, z).is_some()
    }

    fn index(&self, x: i32, z: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let z = usize::try_from(z).ok()?;
        (x < self.width && z < self.length).then(|| z * self.width + x)
    }

    /// The column at `(x, z)`, or `None` outside the grid.
    pub fn get(&self, x: i32, z: i32) -> Option<&Column> {
        self.index(x, z).map(|i| &self.columns[i])
    }

    /// Mutable access to the column at `(x, z)`, or `None` outside the grid.
    pub fn get_mut(&mut self, x: i32, z: i32) -> Option<&mut Column> {
        let i = self.index(x, z)?;
        Some(&mut self.columns[i])
    }

    /// Iterate rows in `z` order, each a slice of `width` columns.
    pub fn rows(&self) -> impl Iterator<Item = &[Column]> + '_ {
        self.columns.chunks_exact(self.width)
    }

    /// Iterate columns row-major with their addresses.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, &Column)> + '_ {
        let width = self.width;
        self.columns.iter().enumerate().map(move |(i, col)| {
            // Both quotients fit in i32: extents are capped at MAX_DIM.
            let pos = GridPos::new((i % width) as i32, (i / width) as i32);
            (pos, col)
        })
    }

    // ── Structural operations ───────────────────────────────────

    /// Change the extents to `width x length`.
    ///
    /// Columns inside both the old and new bounds keep their height and
    /// variant; new columns are plain at height 0; columns outside the new
    /// bounds are dropped.
    pub fn resize(&mut self, width: usize, length: usize) -> Result<(), GridError> {
        let cells = check_extents(width, length)?;
        if width == self.width && length == self.length {
            return Ok(());
        }
        let mut columns = vec![Column::default(); cells];
        let keep_w = width.min(self.width);
        let keep_l = length.min(self.length);
        for z in 0..keep_l {
            let src = z * self.width;
            let dst = z * width;
            columns[dst..dst + keep_w].clone_from_slice(&self.columns[src..src + keep_w]);
        }
        debug!("resize grid {}x{} -> {}x{}", self.width, self.length, width, length);
        self.width = width;
        self.length = length;
        self.columns = columns;
        Ok(())
    }

    /// Reset every column to a plain column at height 0.
    pub fn clear(&mut self) {
        self.columns.iter_mut().for_each(Column::reset);
    }

    /// Remove the variant of every hole.
    ///
    /// Returns the number of columns that lost a variant. Idempotent: a
    /// second call returns 0.
    pub fn validate(&mut self) -> usize {
        let stripped = self
            .columns
            .iter_mut()
            .map(Column::strip_if_hole)
            .filter(|&stripped| stripped)
            .count();
        if stripped > 0 {
            debug!("validate stripped {stripped} variant(s) from holes");
        }
        stripped
    }

    /// Addresses of holes that still carry a variant.
    pub fn invalid_holes(&self) -> Vec<GridPos> {
        self.iter()
            .filter(|(_, col)| col.is_hole() && col.kind() != VariantKind::None)
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Count columns by variant kind.
    pub fn kind_counts(&self) -> KindCounts {
        let mut counts = KindCounts::default();
        for col in &self.columns {
            match col.kind() {
                VariantKind::None => {}
                VariantKind::Item => counts.items += 1,
                VariantKind::Mover => counts.movers += 1,
                VariantKind::Switch => counts.switches += 1,
                VariantKind::Faller => counts.fallers += 1,
                VariantKind::OneWay => counts.oneways += 1,
            }
            if col.is_hole() {
                counts.holes += 1;
            }
        }
        counts
    }

    fn with_column<R>(&mut self, x: i32, z: i32, f: impl FnOnce(&mut Column) -> R) -> Option<R> {
        self.get_mut(x, z).map(f)
    }

    // ── Variant toggles ─────────────────────────────────────────

    /// Toggle `kind` at `(x, z)`. See [`Column::toggle`].
    pub fn toggle(&mut self, x: i32, z: i32, kind: VariantKind) -> bool {
        self.with_column(x, z, |col| col.toggle(kind)).unwrap_or(false)
    }

    /// Toggle an item at `(x, z)`.
    pub fn toggle_item(&mut self, x: i32, z: i32) -> bool {
        self.toggle(x, z, VariantKind::Item)
    }

    /// Toggle a mover at `(x, z)`.
    pub fn toggle_moving(&mut self, x: i32, z: i32) -> bool {
        self.toggle(x, z, VariantKind::Mover)
    }

    /// Toggle a switch at `(x, z)`.
    pub fn toggle_switch(&mut self, x: i32, z: i32) -> bool {
        self.toggle(x, z, VariantKind::Switch)
    }

    /// Toggle a faller at `(x, z)`.
    pub fn toggle_falling(&mut self, x: i32, z: i32) -> bool {
        self.toggle(x, z, VariantKind::Faller)
    }

    /// Toggle a one-way at `(x, z)`.
    pub fn toggle_oneway(&mut self, x: i32, z: i32) -> bool {
        self.toggle(x, z, VariantKind::OneWay)
    }

    // ── Variant queries ─────────────────────────────────────────

    /// Variant kind at `(x, z)`, or `None` outside the grid.
    pub fn kind_at(&self, x: i32, z: i32) -> Option<VariantKind> {
        self.get(x, z).map(Column::kind)
    }

    /// Whether `(x, z)` carries an item.
    pub fn is_item(&self, x: i32, z: i32) -> bool {
        self.kind_at(x, z) == Some(VariantKind::Item)
    }

    /// Whether `(x, z)` is a mover.
    pub fn is_mover(&self, x: i32, z: i32) -> bool {
        self.kind_at(x, z) == Some(VariantKind::Mover)
    }

    /// Whether `(x, z)` is a switch.
    pub fn is_switch(&self, x: i32, z: i32) -> bool {
        self.kind_at(x, z) == Some(VariantKind::Switch)
    }

    /// Whether `(x, z)` is a faller.
    pub fn is_faller(&self, x: i32, z: i32) -> bool {
        self.kind_at(x, z) == Some(VariantKind::Faller)
    }

    /// Whether `(x, z)` is a one-way.
    pub fn is_oneway(&self, x: i32, z: i32) -> bool {
        self.kind_at(x, z) == Some(VariantKind::OneWay)
    }

    // ── Height ──────────────────────────────────────────────────

    /// Height at `(x, z)`, or `None` outside the grid.
    pub fn height(&self, x: i32, z: i32) -> Option<i32> {
        self.get(x, z).map(|col| col.height)
    }

    /// Add `delta` to the height at `(x, z)`, clamped to `[-1, 10]`.
    pub fn change_height(&mut self, x: i32, z: i32, delta: i32) -> bool {
        self.with_column(x, z, |col| col.change_height(delta)).is_some()
    }

    /// Set the height at `(x, z)` to `value` without clamping.
    ///
    /// Out-of-range values are stored as given; see
    /// [`Column::set_height`].
    pub fn set_height(&mut self, x: i32, z: i32, value: i32) -> bool {
        self.with_column(x, z, |col| col.set_height(value)).is_some()
    }

    // ── Mover ───────────────────────────────────────────────────

    /// Mover pattern at `(x, z)`; `None` if absent or not a mover.
    pub fn pattern(&self, x: i32, z: i32) -> Option<&[i32]> {
        self.get(x, z).and_then(Column::pattern)
    }

    /// Replace the mover pattern at `(x, z)`.
    pub fn set_pattern<I: IntoIterator<Item = i32>>(&mut self, x: i32, z: i32, values: I) -> bool {
        self.with_column(x, z, |col| col.set_pattern(values)).unwrap_or(false)
    }

    // ── Switch ──────────────────────────────────────────────────

    /// Switch targets at `(x, z)`; `None` if absent or not a switch.
    pub fn targets(&self, x: i32, z: i32) -> Option<&[Coord3]> {
        self.get(x, z).and_then(Column::targets)
    }

    /// Append a `(0, 0, 0)` target to the switch at `(x, z)`.
    pub fn add_switch_target(&mut self, x: i32, z: i32) -> bool {
        self.with_column(x, z, |col| col.add_target(DEFAULT_SWITCH_TARGET)).unwrap_or(false)
    }

    /// Remove the last target of the switch at `(x, z)`, keeping one.
    pub fn reduce_switch_target(&mut self, x: i32, z: i32) -> bool {
        self.with_column(x, z, Column::reduce_targets).unwrap_or(false)
    }

    /// Overwrite target `index` of the switch at `(x, z)`.
    pub fn set_switch_target(&mut self, x: i32, z: i32, index: usize, target: Coord3) -> bool {
        self.with_column(x, z, |col| col.set_target(index, target)).unwrap_or(false)
    }

    // ── Faller ──────────────────────────────────────────────────

    /// Faller interval at `(x, z)`; `None` if absent or not a faller.
    pub fn interval(&self, x: i32, z: i32) -> Option<f64> {
        self.get(x, z).and_then(Column::interval)
    }

    /// Faller delay at `(x, z)`; `None` if absent or not a faller.
    pub fn delay(&self, x: i32, z: i32) -> Option<f64> {
        self.get(x, z).and_then(Column::delay)
    }

    /// Set the faller interval at `(x, z)`, clamped to `>= 0`.
    pub fn set_interval(&mut self, x: i32, z: i32, value: f64) -> bool {
        self.with_column(x, z, |col| col.set_interval(value)).unwrap_or(false)
    }

    /// Set the faller delay at `(x, z)`, clamped to `>= 0`.
    pub fn set_delay(&mut self, x: i32, z: i32, value: f64) -> bool {
        self.with_column(x, z, |col| col.set_delay(value)).unwrap_or(false)
    }

    // ── One-way ─────────────────────────────────────────────────

    /// One-way direction at `(x, z)`; `None` if absent or not a one-way.
    pub fn direction(&self, x: i32, z: i32) -> Option<&Direction> {
        self.get(x, z).and_then(Column::direction)
    }

    /// One-way power at `(x, z)`; `None` if absent or not a one-way.
    pub fn power(&self, x: i32, z: i32) -> Option<i32> {
        self.get(x, z).and_then(Column::power)
    }

    /// Set the one-way direction at `(x, z)`.
    pub fn set_direction(&mut self, x: i32, z: i32, value: impl Into<Direction>) -> bool {
        self.with_column(x, z, |col| col.set_direction(value)).unwrap_or(false)
    }

    /// Set the one-way power at `(x, z)`.
    pub fn set_power(&mut self, x: i32, z: i32, value: i32) -> bool {
        self.with_column(x, z, |col| col.set_power(value)).unwrap_or(false)
    }
}

/// Validate the extents and return the cell count.
fn check_extents(width: usize, length: usize) -> Result<usize, GridError> {
    if width == 0 || length == 0 {
        return Err(GridError::EmptyGrid { width, length });
    }
    if width > Grid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "width",
            value: width,
            max: Grid::MAX_DIM,
        });
    }
    if length > Grid::MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            name: "length",
            value: length,
            max: Grid::MAX_DIM,
        });
    }
    match width.checked_mul(length) {
        Some(cells) if cells <= Grid::MAX_CELLS => Ok(cells),
        _ => Err(GridError::DimensionTooLarge {
            name: "cells",
            value: width.saturating_mul(length),
            max: Grid::MAX_CELLS,
        }),
    }
}
