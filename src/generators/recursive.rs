use crate::generators::{GenerationStats, Generator};
use crate::grids::block_grid::BlockGrid;
use crate::grids::padded_grid::PaddedGrid;
use crate::grids::{CellKind, Direction, Point};
use crate::rng::MazeRng;

/// Randomized depth-first flood fill.
///
/// A cell opens only while at most one of its neighbors is open, so paths never close into
/// loops. Runs on an explicit stack; each frame remembers which of its shuffled directions it
/// has already tried, which keeps the visit order (and random draws) of the recursive form.
pub struct RecursiveBacktracker;

struct Frame {
    at: Point,
    order: [Direction; 4],
    next: usize,
}

impl RecursiveBacktracker {
    /// Opens `at` and returns its frame, or `None` if opening it would touch two open cells.
    fn visit(grid: &mut PaddedGrid, at: Point, rng: &mut MazeRng) -> Option<Frame> {
        if grid.count_square_neighbors(at) > 1 {
            return None;
        }
        grid.set(at, CellKind::Empty);

        let mut order = Direction::ALL;
        rng.shuffle(&mut order);

        Some(Frame { at, order, next: 0 })
    }
}

impl Generator for RecursiveBacktracker {
    fn generate_maze(&mut self, grid: &mut BlockGrid, rng: &mut MazeRng) -> GenerationStats {
        let mut padded = PaddedGrid::new(grid.width(), grid.height());
        let start = Point::new(
            rng.next_range(1, grid.width() as i32 + 1),
            rng.next_range(1, grid.height() as i32 + 1),
        );

        let mut visits = 0;
        let mut stack = Vec::new();
        if let Some(frame) = Self::visit(&mut padded, start, rng) {
            visits += 1;
            stack.push(frame);
        }

        while let Some(frame) = stack.last_mut() {
            if frame.next == frame.order.len() {
                stack.pop();
                continue;
            }

            let target = frame.at.neighbor(frame.order[frame.next]);
            frame.next += 1;

            if let Some(child) = Self::visit(&mut padded, target, rng) {
                visits += 1;
                stack.push(child);
            }
        }

        padded.copy_into(grid);
        log::debug!(
            "recursive: {} visits, {} open cells",
            visits,
            grid.open_cell_count()
        );

        GenerationStats {
            iterations: visits,
            ..GenerationStats::default()
        }
    }
}
