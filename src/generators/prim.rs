use crate::generators::{GenerationStats, Generator, WATCHDOG_LIMIT};
use crate::grids::block_grid::BlockGrid;
use crate::grids::padded_grid::PaddedGrid;
use crate::grids::{CellKind, Point};
use crate::rng::MazeRng;

/// Randomized Prim's: grows a tree out of the corner by opening frontier walls that touch
/// the maze on exactly one side.
pub struct RandPrims {
    walls: Vec<Point>,
    loop_limit: usize,
}

impl RandPrims {
    pub fn new() -> Self {
        Self {
            walls: Vec::new(),
            loop_limit: WATCHDOG_LIMIT,
        }
    }
}

impl Default for RandPrims {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for RandPrims {
    fn generate_maze(&mut self, grid: &mut BlockGrid, rng: &mut MazeRng) -> GenerationStats {
        let mut padded = PaddedGrid::new(grid.width(), grid.height());
        let start = Point::new(1, 1);
        padded.set(start, CellKind::Empty);

        self.walls.clear();
        self.walls.extend_from_slice(&start.neighbors());

        let mut stats = GenerationStats::default();
        while !self.walls.is_empty() {
            if stats.iterations >= self.loop_limit {
                log::warn!(
                    "prims: stopped after {} iterations with {} frontier cells left",
                    stats.iterations,
                    self.walls.len()
                );
                stats.capped = true;
                break;
            }
            stats.iterations += 1;

            let rand_wall_idx = rng.next_index(self.walls.len());
            let rand_wall = self.walls.remove(rand_wall_idx);

            // the padding ring reports 5 and is dropped here too
            if padded.count_square_neighbors(rand_wall) == 1 {
                padded.set(rand_wall, CellKind::Empty);
                self.walls.extend_from_slice(&rand_wall.neighbors());
            }
        }

        padded.copy_into(grid);
        log::debug!(
            "prims: {} iterations, {} open cells",
            stats.iterations,
            grid.open_cell_count()
        );
        stats
    }
}

#[cfg(test)]
mod test_prims {
    use super::*;

    #[test]
    fn starts_in_the_corner() {
        let mut grid = BlockGrid::walled(6, 6);
        let mut rng = MazeRng::new(30);
        let stats = RandPrims::new().generate_maze(&mut grid, &mut rng);
        assert!(!grid.is_set(0, 0));
        assert!(!stats.capped);
    }

    #[test]
    fn single_cell() {
        let mut grid = BlockGrid::walled(1, 1);
        let mut rng = MazeRng::new(30);
        let stats = RandPrims::new().generate_maze(&mut grid, &mut rng);
        assert_eq!(grid.open_cell_count(), 1);
        assert_eq!(stats.iterations, 4);
    }

    #[test]
    fn cap_stops_large_grids() {
        let mut grid = BlockGrid::walled(100, 100);
        let mut rng = MazeRng::new(30);
        let stats = RandPrims::new().generate_maze(&mut grid, &mut rng);
        assert!(stats.iterations <= WATCHDOG_LIMIT);
        assert!(stats.capped);
    }
}
