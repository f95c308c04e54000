use crate::config::GenerationConfig;
use crate::grids::block_grid::BlockGrid;
use crate::grids::CellKind;
use crate::rng::MazeRng;

/// Half-open rectangle of cells stamped open by the carver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Stamps open rectangles over whatever a generator left behind. Rooms may overlap each
/// other and any existing walls or paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomCarver {
    pub number_of_rooms: u32,
    pub min_room_size: usize,
    pub max_room_size: usize,
    pub room_distance_from_wall: usize,
}

impl RoomCarver {
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self {
            number_of_rooms: config.number_of_rooms,
            min_room_size: config.min_room_size,
            max_room_size: config.max_room_size,
            room_distance_from_wall: config.room_distance_from_wall,
        }
    }

    /// Carves every room and returns them, already clipped to the margin.
    pub fn carve(&self, grid: &mut BlockGrid, rng: &mut MazeRng) -> Vec<Room> {
        let margin = self.room_distance_from_wall as i32;
        let x_end = grid.width() as i32 - margin;
        let y_end = grid.height() as i32 - margin;

        let mut rooms = Vec::with_capacity(self.number_of_rooms as usize);
        for _ in 0..self.number_of_rooms {
            let start_x = rng.next_range(margin, x_end);
            let start_y = rng.next_range(margin, y_end);
            let room_width = rng.next_range(self.min_room_size as i32, self.max_room_size as i32);
            let room_height = rng.next_range(self.min_room_size as i32, self.max_room_size as i32);

            let room = Room {
                x: start_x as usize,
                y: start_y as usize,
                width: ((start_x + room_width).min(x_end) - start_x).max(0) as usize,
                height: ((start_y + room_height).min(y_end) - start_y).max(0) as usize,
            };

            for x in room.x..room.x + room.width {
                for y in room.y..room.y + room.height {
                    grid.set_cell(x, y, CellKind::Empty);
                }
            }
            rooms.push(room);
        }

        if !rooms.is_empty() {
            log::debug!("rooms: carved {:?}", rooms);
        }
        rooms
    }
}

#[cfg(test)]
mod test_rooms {
    use super::*;

    fn carver(count: u32, min: usize, max: usize, distance: usize) -> RoomCarver {
        RoomCarver::from_config(&GenerationConfig::with_dims(20, 20).rooms(count, min, max, distance))
    }

    #[test]
    fn stamps_rooms_inside_the_margin() {
        for seed in 0..50 {
            let mut grid = BlockGrid::walled(20, 20);
            let mut rng = MazeRng::new(seed);
            let rooms = carver(3, 2, 5, 1).carve(&mut grid, &mut rng);

            assert_eq!(rooms.len(), 3);
            for room in rooms.iter() {
                assert!(room.width < 5 && room.height < 5);
                for x in room.x..room.x + room.width {
                    for y in room.y..room.y + room.height {
                        assert_eq!(grid.get_cell(x, y), CellKind::Empty);
                    }
                }
            }
            for x in 0..20 {
                for y in 0..20 {
                    if !grid.is_set(x, y) {
                        assert!((1..19).contains(&x) && (1..19).contains(&y));
                        assert!(rooms.iter().any(|room| {
                            (room.x..room.x + room.width).contains(&x)
                                && (room.y..room.y + room.height).contains(&y)
                        }));
                    }
                }
            }
        }
    }

    #[test]
    fn overwrites_existing_paths_and_walls() {
        // rooms at least as wide as the grid always reach the far corner
        let mut grid = BlockGrid::walled(10, 10);
        grid.unset_cell(8, 9);
        let mut rng = MazeRng::new(3);
        let rooms = carver(2, 10, 11, 0).carve(&mut grid, &mut rng);

        assert_eq!(grid.get_cell(9, 9), CellKind::Empty);
        assert_eq!(grid.get_cell(8, 9), CellKind::Empty);
        assert!(rooms.iter().all(|room| room.x + room.width == 10));
    }

    #[test]
    fn zero_rooms_is_a_no_op() {
        let mut grid = BlockGrid::walled(20, 20);
        let mut rng = MazeRng::new(3);
        assert!(carver(0, 0, 0, 0).carve(&mut grid, &mut rng).is_empty());
        assert_eq!(grid.open_cell_count(), 0);
    }
}
