use crate::grids::{CellKind, Dimensions};

/// Row-major `width × height` field of cells, indexed as `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockGrid {
    pub dims: Dimensions,

    pub cells: Vec<CellKind>,
}

impl BlockGrid {
    pub fn with_dims(width: usize, height: usize) -> Self {
        Self {
            cells: vec![CellKind::Empty; width * height],
            dims: Dimensions { width, height },
        }
    }

    /// Every generation run starts from this state.
    pub fn walled(width: usize, height: usize) -> Self {
        let mut grid = Self::with_dims(width, height);
        grid.fill();
        grid
    }

    pub fn width(&self) -> usize {
        self.dims.width
    }

    pub fn height(&self) -> usize {
        self.dims.height
    }

    fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.dims.width + x
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.dims.width && (y as usize) < self.dims.height
    }

    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.get_cell(x, y) != CellKind::Empty
    }

    pub fn get_cell(&self, x: usize, y: usize) -> CellKind {
        self.cells[self.index_of(x, y)]
    }

    pub fn set_cell(&mut self, x: usize, y: usize, kind: CellKind) -> CellKind {
        let index = self.index_of(x, y);
        let prev_kind = self.cells[index];
        self.cells[index] = kind;

        prev_kind
    }

    pub fn unset_cell(&mut self, x: usize, y: usize) -> CellKind {
        self.set_cell(x, y, CellKind::Empty)
    }

    pub fn fill(&mut self) {
        self.cells = vec![CellKind::Wall; self.cells.len()];
    }

    pub fn open_cell_count(&self) -> usize {
        self.cells.iter().filter(|kind| kind.is_open()).count()
    }
}
