use crate::grids::block_grid::BlockGrid;
use crate::grids::{CellKind, Dimensions, Point};

/// Returned by the neighbor counters for any cell on or beyond the padding ring.
/// Larger than any real count, so `count <= 1` style checks reject the ring for free.
pub const NEIGHBOR_SENTINEL: u8 = 5;

/// Working grid with a one-cell wall ring around the interior.
///
/// Interior cells live at `[1, width] × [1, height]`; the ring is never written to by the
/// generators, which lets neighbor lookups skip bounds checks entirely.
#[derive(Debug, Clone)]
pub struct PaddedGrid {
    pub dims: Dimensions,
    inner: BlockGrid,
}

impl PaddedGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            dims: Dimensions { width, height },
            inner: BlockGrid::walled(width + 2, height + 2),
        }
    }

    pub fn get(&self, at: Point) -> CellKind {
        self.inner.get_cell(at.x as usize, at.y as usize)
    }

    pub fn set(&mut self, at: Point, kind: CellKind) -> CellKind {
        self.inner.set_cell(at.x as usize, at.y as usize, kind)
    }

    pub fn is_interior(&self, at: Point) -> bool {
        at.x >= 1 && at.y >= 1 && at.x <= self.dims.width as i32 && at.y <= self.dims.height as i32
    }

    /// Counts orthogonal neighbors of `at` that are open.
    pub fn count_square_neighbors(&self, at: Point) -> u8 {
        self.count_neighbors_of_kind(at, CellKind::Empty)
    }

    /// Counts orthogonal neighbors of `at` already committed to a Wilson's spanning tree.
    pub fn count_maze_neighbors(&self, at: Point) -> u8 {
        self.count_neighbors_of_kind(at, CellKind::InProgress)
    }

    fn count_neighbors_of_kind(&self, at: Point, kind: CellKind) -> u8 {
        if !self.is_interior(at) {
            return NEIGHBOR_SENTINEL;
        }

        at.neighbors()
            .iter()
            .filter(|neighbor| self.get(**neighbor) == kind)
            .count() as u8
    }

    pub fn interior_points(&self) -> impl Iterator<Item = Point> {
        let width = self.dims.width as i32;
        let height = self.dims.height as i32;
        (1..=width).flat_map(move |x| (1..=height).map(move |y| Point::new(x, y)))
    }

    /// Turns every committed cell into a plain open cell.
    pub fn collapse_in_progress(&mut self) {
        for cell in self.inner.cells.iter_mut() {
            if *cell == CellKind::InProgress {
                *cell = CellKind::Empty;
            }
        }
    }

    /// Copies the interior into `grid`, dropping the padding ring.
    pub fn copy_into(&self, grid: &mut BlockGrid) {
        for x in 0..self.dims.width {
            for y in 0..self.dims.height {
                grid.set_cell(x, y, self.inner.get_cell(x + 1, y + 1));
            }
        }
    }
}
