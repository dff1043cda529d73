//! Cell enumeration over a drawing surface.
//!
//! The lattice is indexed row-major over `rows × cols`, where both counts come
//! from the surface size and spacing alone. That linear index is what the
//! trail field and the multi-color seed key on, so it must not depend on which
//! cells happen to be culled.

use crate::config::LayoutMode;
use glam::Vec2;

/// Lattice geometry for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    pub spacing: Vec2,
    pub origin: Vec2,
    pub mode: LayoutMode,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridDims {
    pub rows: usize,
    pub cols: usize,
}

impl GridDims {
    pub fn for_surface(size: Vec2, spacing: Vec2) -> Self {
        Self {
            rows: cell_count(size.y, spacing.y),
            cols: cell_count(size.x, spacing.x),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn cell_count(extent: f32, spacing: f32) -> usize {
    if extent <= 0.0 || spacing <= 0.0 || !extent.is_finite() {
        return 0;
    }
    (extent / spacing).ceil() as usize
}

/// One lattice position with its center in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub index: usize,
    pub pos: Vec2,
}

/// Lazy row-major walk over the cells whose centers fall inside the surface
/// grown by one spacing unit on every side. A clone taken before iterating
/// walks the same cells again.
#[derive(Clone, Debug)]
pub struct CellIter {
    spec: GridSpec,
    size: Vec2,
    dims: GridDims,
    row: usize,
    col: usize,
}

impl CellIter {
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    fn center(&self, row: usize, col: usize) -> Vec2 {
        let mut pos = Vec2::new(
            col as f32 * self.spec.spacing.x,
            row as f32 * self.spec.spacing.y,
        ) + self.spec.origin;
        if self.spec.mode == LayoutMode::Staggered && row % 2 == 1 {
            pos.x += self.spec.spacing.x / 2.0;
        }
        pos
    }

    fn in_view(&self, pos: Vec2) -> bool {
        let s = self.spec.spacing;
        pos.x >= -s.x && pos.x <= self.size.x + s.x && pos.y >= -s.y && pos.y <= self.size.y + s.y
    }
}

impl Iterator for CellIter {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.dims.cols == 0 {
            return None;
        }
        while self.row < self.dims.rows {
            let (row, col) = (self.row, self.col);
            self.col += 1;
            if self.col >= self.dims.cols {
                self.col = 0;
                self.row += 1;
            }
            let pos = self.center(row, col);
            if self.in_view(pos) {
                return Some(Cell {
                    row,
                    col,
                    index: row * self.dims.cols + col,
                    pos,
                });
            }
        }
        None
    }
}

pub fn cells_in_view(size: Vec2, spec: GridSpec) -> CellIter {
    let dims = GridDims::for_surface(size, spec.spacing);
    CellIter {
        spec,
        size,
        dims,
        row: 0,
        col: 0,
    }
}
