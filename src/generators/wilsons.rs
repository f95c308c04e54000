use crate::generators::{GenerationStats, Generator, WATCHDOG_LIMIT};
use crate::grids::block_grid::BlockGrid;
use crate::grids::padded_grid::PaddedGrid;
use crate::grids::{CellKind, Direction, Point};
use crate::rng::MazeRng;

/// Spanning tree grown from random walks.
///
/// Cells already in the tree are marked `InProgress` on the working grid. Each pass starts a
/// walk from a cell with no tree neighbor and keeps it only if it reaches the tree through
/// exactly one side. A walk that fails, for any reason, is erased in full; classic
/// loop-erasure would keep the prefix and drop only the loop.
pub struct Wilsons {
    pass_limit: usize,
    walk_limit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkOutcome {
    Joined,
    /// Stepped next to two tree cells at once.
    Ambiguous,
    Exhausted,
}

impl Wilsons {
    pub fn new() -> Self {
        Self {
            pass_limit: WATCHDOG_LIMIT,
            walk_limit: WATCHDOG_LIMIT,
        }
    }

    /// Wall cells not yet touching the tree; candidates for the next walk.
    fn unused_cells(grid: &PaddedGrid) -> Vec<Point> {
        grid.interior_points()
            .filter(|at| grid.get(*at) == CellKind::Wall && grid.count_maze_neighbors(*at) == 0)
            .collect()
    }

    fn random_walk(&self, grid: &mut PaddedGrid, unused: &[Point], rng: &mut MazeRng) -> WalkOutcome {
        let mut at = unused[rng.next_index(unused.len())];
        let mut walk = vec![at];
        let mut outcome = WalkOutcome::Exhausted;
        let mut steps = 0;

        while grid.is_interior(at) && steps < self.walk_limit {
            steps += 1;
            grid.set(at, CellKind::Empty);

            match grid.count_maze_neighbors(at) {
                0 => {}
                1 => {
                    outcome = WalkOutcome::Joined;
                    break;
                }
                _ => {
                    outcome = WalkOutcome::Ambiguous;
                    break;
                }
            }

            // refuse steps that would run alongside the walk so far
            let candidate = at.neighbor(Direction::from(rng.next_index(4)));
            if grid.count_square_neighbors(candidate) < 2 {
                walk.push(candidate);
                at = candidate;
            }
        }

        let settle = if outcome == WalkOutcome::Joined {
            CellKind::InProgress
        } else {
            CellKind::Wall
        };
        for cell in walk.iter() {
            grid.set(*cell, settle);
        }

        log::trace!("wilsons: walk of {} steps {:?}", steps, outcome);
        outcome
    }
}

impl Default for Wilsons {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for Wilsons {
    fn generate_maze(&mut self, grid: &mut BlockGrid, rng: &mut MazeRng) -> GenerationStats {
        let mut padded = PaddedGrid::new(grid.width(), grid.height());
        let start = Point::new(
            rng.next_range(1, grid.width() as i32 + 1),
            rng.next_range(1, grid.height() as i32 + 1),
        );
        padded.set(start, CellKind::InProgress);

        let mut stats = GenerationStats::default();
        let mut unused = Self::unused_cells(&padded);

        while unused.len() > 1 {
            if stats.iterations >= self.pass_limit {
                log::warn!(
                    "wilsons: stopped after {} passes with {} cells unused",
                    stats.iterations,
                    unused.len()
                );
                stats.capped = true;
                break;
            }
            stats.iterations += 1;

            if self.random_walk(&mut padded, &unused, rng) != WalkOutcome::Joined {
                stats.aborted += 1;
            }

            unused = Self::unused_cells(&padded);
        }

        padded.collapse_in_progress();
        padded.copy_into(grid);

        log::debug!(
            "wilsons: {} passes, {} walks erased, {} open cells",
            stats.iterations,
            stats.aborted,
            grid.open_cell_count()
        );
        stats
    }
}

#[cfg(test)]
mod test_wilsons {
    use super::*;

    #[test]
    fn no_committed_cells_leak() {
        let mut grid = BlockGrid::walled(15, 15);
        let mut rng = MazeRng::new(4);
        Wilsons::new().generate_maze(&mut grid, &mut rng);
        assert!(grid
            .cells
            .iter()
            .all(|kind| *kind == CellKind::Empty || *kind == CellKind::Wall));
        assert!(grid.open_cell_count() >= 1);
    }

    #[test]
    fn failed_walk_is_erased() {
        let mut grid = PaddedGrid::new(6, 6);
        grid.set(Point::new(1, 1), CellKind::InProgress);
        let wilsons = Wilsons {
            pass_limit: WATCHDOG_LIMIT,
            walk_limit: 1,
        };
        let mut rng = MazeRng::new(12);

        // one step is never enough to reach the tree from the far corner
        let outcome = wilsons.random_walk(&mut grid, &[Point::new(6, 6)], &mut rng);
        assert_eq!(outcome, WalkOutcome::Exhausted);
        assert_eq!(grid.get(Point::new(6, 6)), CellKind::Wall);
        assert_eq!(
            grid.interior_points()
                .filter(|at| grid.get(*at) != CellKind::Wall)
                .count(),
            1
        );
    }

    #[test]
    fn walk_next_to_the_tree_joins_it() {
        let mut grid = PaddedGrid::new(4, 4);
        grid.set(Point::new(2, 2), CellKind::InProgress);
        let mut rng = MazeRng::new(1);

        let outcome = Wilsons::new().random_walk(&mut grid, &[Point::new(2, 3)], &mut rng);
        assert_eq!(outcome, WalkOutcome::Joined);
        assert_eq!(grid.get(Point::new(2, 3)), CellKind::InProgress);
    }

    #[test]
    fn walk_between_two_tree_cells_is_abandoned() {
        let mut grid = PaddedGrid::new(5, 5);
        grid.set(Point::new(2, 3), CellKind::InProgress);
        grid.set(Point::new(4, 3), CellKind::InProgress);
        let mut rng = MazeRng::new(1);

        let outcome = Wilsons::new().random_walk(&mut grid, &[Point::new(3, 3)], &mut rng);
        assert_eq!(outcome, WalkOutcome::Ambiguous);
        assert_eq!(grid.get(Point::new(3, 3)), CellKind::Wall);
    }

    #[test]
    fn unused_cells_skip_the_tree_and_its_neighbors() {
        let mut grid = PaddedGrid::new(3, 3);
        grid.set(Point::new(2, 2), CellKind::InProgress);
        let unused = Wilsons::unused_cells(&grid);
        assert_eq!(
            unused,
            vec![
                Point::new(1, 1),
                Point::new(1, 3),
                Point::new(3, 1),
                Point::new(3, 3)
            ]
        );
    }
}
