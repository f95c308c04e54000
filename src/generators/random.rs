use crate::generators::{GenerationStats, Generator};
use crate::grids::block_grid::BlockGrid;
use crate::grids::CellKind;
use crate::rng::MazeRng;

/// Flips a fair coin per cell. No connectivity of any kind.
pub struct RandomFill;

impl Generator for RandomFill {
    fn generate_maze(&mut self, grid: &mut BlockGrid, rng: &mut MazeRng) -> GenerationStats {
        for x in 0..grid.width() {
            for y in 0..grid.height() {
                let kind = if rng.next_range(0, 2) == 0 {
                    CellKind::Empty
                } else {
                    CellKind::Wall
                };
                grid.set_cell(x, y, kind);
            }
        }

        GenerationStats {
            iterations: grid.dims.area(),
            ..GenerationStats::default()
        }
    }
}

#[cfg(test)]
mod test_random {
    use super::*;

    #[test]
    fn roughly_half_open() {
        let mut grid = BlockGrid::walled(40, 40);
        let mut rng = MazeRng::new(11);
        let stats = RandomFill.generate_maze(&mut grid, &mut rng);

        assert_eq!(stats.iterations, 1600);
        let open = grid.open_cell_count();
        assert!(open > 600 && open < 1000, "open = {}", open);
        assert!(grid
            .cells
            .iter()
            .all(|kind| *kind == CellKind::Empty || *kind == CellKind::Wall));
    }
}
