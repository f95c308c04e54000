use crate::generators::{GenerationStats, Generator};
use crate::grids::block_grid::BlockGrid;
use crate::grids::CellKind;
use crate::rng::MazeRng;

/// Step ranges for one crawl, each a half-open `[min, max)` offset.
#[derive(Debug, Clone, Copy)]
struct Stride {
    x: (i32, i32),
    y: (i32, i32),
}

/// Drifts sideways by up to one cell, advances down by zero or one.
const VERTICAL: Stride = Stride {
    x: (-1, 2),
    y: (0, 2),
};

/// Mirror of `VERTICAL`: advances right, drifts up or down.
const HORIZONTAL: Stride = Stride {
    x: (0, 2),
    y: (-1, 2),
};

/// Random walkers that cross the grid top to bottom and left to right, opening every cell
/// they step on.
pub struct Crawler {
    vertical_crawls: u32,
    horizontal_crawls: u32,
}

impl Crawler {
    pub fn new(vertical_crawls: u32, horizontal_crawls: u32) -> Self {
        Self {
            vertical_crawls,
            horizontal_crawls,
        }
    }

    fn crawl_vertically(grid: &mut BlockGrid, rng: &mut MazeRng) -> Vec<(i32, i32)> {
        let x = rng.next_range(1, grid.width() as i32);
        Self::crawl(grid, rng, x, 1, VERTICAL)
    }

    fn crawl_horizontally(grid: &mut BlockGrid, rng: &mut MazeRng) -> Vec<(i32, i32)> {
        let y = rng.next_range(1, grid.height() as i32);
        Self::crawl(grid, rng, 1, y, HORIZONTAL)
    }

    /// Walks until the cursor leaves the grid. Returns every cell opened along the way, in
    /// order; a step that draws a zero offset repeats the previous cell.
    fn crawl(
        grid: &mut BlockGrid,
        rng: &mut MazeRng,
        mut x: i32,
        mut y: i32,
        stride: Stride,
    ) -> Vec<(i32, i32)> {
        let mut trail = Vec::new();
        while grid.in_bounds(x, y) {
            grid.set_cell(x as usize, y as usize, CellKind::Empty);
            trail.push((x, y));

            if rng.coin_flip() {
                x += rng.next_range(stride.x.0, stride.x.1);
            } else {
                y += rng.next_range(stride.y.0, stride.y.1);
            }
        }
        trail
    }
}

impl Generator for Crawler {
    fn generate_maze(&mut self, grid: &mut BlockGrid, rng: &mut MazeRng) -> GenerationStats {
        let mut vertical = self.vertical_crawls;
        let mut horizontal = self.horizontal_crawls;
        let mut crawls = 0;
        let mut steps = 0;

        // interleave one of each until both run out
        while vertical > 0 || horizontal > 0 {
            if vertical > 0 {
                vertical -= 1;
                steps += Self::crawl_vertically(grid, rng).len();
                crawls += 1;
            }
            if horizontal > 0 {
                horizontal -= 1;
                steps += Self::crawl_horizontally(grid, rng).len();
                crawls += 1;
            }
        }

        log::debug!("crawler: {} crawls, {} steps", crawls, steps);

        GenerationStats {
            iterations: crawls,
            ..GenerationStats::default()
        }
    }
}
