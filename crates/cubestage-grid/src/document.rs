//! The stage document: a grid plus its metadata.

use cubestage_core::StageMeta;

use crate::error::GridError;
use crate::grid::Grid;

/// Root aggregate of a stage.
///
/// Exclusively owns its [`Grid`] and [`StageMeta`]. Documents are built
/// either empty with [`StageDocument::new`] or by the codec's decoder, and
/// are edited in place through [`grid`](StageDocument::grid).
///
/// # Examples
///
/// ```
/// use cubestage_grid::StageDocument;
///
/// let mut doc = StageDocument::new(4, 3).unwrap();
/// doc.grid.toggle_item(0, 0);
/// doc.grid.set_height(0, 0, -1);
/// assert_eq!(doc.validate(), 1);
/// assert_eq!(doc.meta.camera, "normal");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StageDocument {
    /// The column grid.
    pub grid: Grid,
    /// Appearance and tunables.
    pub meta: StageMeta,
}

impl StageDocument {
    /// An empty `width x length` stage with default metadata.
    pub fn new(width: usize, length: usize) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(width, length)?,
            meta: StageMeta::default(),
        })
    }

    /// Pair an existing grid with metadata.
    pub fn from_parts(grid: Grid, meta: StageMeta) -> Self {
        Self { grid, meta }
    }

    /// Grid width.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Grid length.
    pub fn length(&self) -> usize {
        self.grid.length()
    }

    /// Resize the grid. See [`Grid::resize`].
    pub fn resize(&mut self, width: usize, length: usize) -> Result<(), GridError> {
        self.grid.resize(width, length)
    }

    /// Reset every column. Metadata is untouched.
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Strip variants from holes. See [`Grid::validate`].
    pub fn validate(&mut self) -> usize {
        self.grid.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubestage_core::{Rgb, VariantKind};

    #[test]
    fn clear_keeps_metadata() {
        let mut doc = StageDocument::new(2, 2).unwrap();
        doc.meta.appearance.color = Rgb::new(1.0, 0.5, 0.0);
        doc.meta.x_offset = 3;
        doc.grid.toggle_item(1, 1);
        doc.clear();
        assert_eq!(doc.grid.kind_at(1, 1), Some(VariantKind::None));
        assert_eq!(doc.meta.appearance.color, Rgb::new(1.0, 0.5, 0.0));
        assert_eq!(doc.meta.x_offset, 3);
    }

    #[test]
    fn resize_updates_extents() {
        let mut doc = StageDocument::new(2, 2).unwrap();
        doc.resize(5, 1).unwrap();
        assert_eq!((doc.width(), doc.length()), (5, 1));
        assert!(doc.resize(5, 0).is_err());
        assert_eq!((doc.width(), doc.length()), (5, 1));
    }
}
