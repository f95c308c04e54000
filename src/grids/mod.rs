pub mod block_grid;
pub mod padded_grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

/// An (x, y) cell coordinate. Doubles as a relative offset when stepping between cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn neighbor(self, direction: Direction) -> Point {
        self + direction.offset()
    }

    pub fn neighbors(self) -> [Point; 4] {
        let mut out = [self; 4];
        for (slot, direction) in out.iter_mut().zip(Direction::ALL.iter()) {
            *slot = self.neighbor(*direction);
        }
        out
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    East = 0,
    North = 1,
    West = 2,
    South = 3,
}

impl Direction {
    /// Ordering matters: generators index into this with random draws.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    pub fn offset(self) -> Point {
        match self {
            Direction::East => Point::new(1, 0),
            Direction::North => Point::new(0, 1),
            Direction::West => Point::new(-1, 0),
            Direction::South => Point::new(0, -1),
        }
    }
}

impl From<usize> for Direction {
    fn from(dir: usize) -> Self {
        Direction::ALL[dir % 4]
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum CellKind {
    Empty = 0,
    Wall = 1,
    /// Only ever present on a Wilson's working grid: committed to the spanning tree.
    InProgress = 2,
}

impl CellKind {
    pub fn is_open(self) -> bool {
        self == CellKind::Empty
    }
}

impl From<CellKind> for u8 {
    fn from(kind: CellKind) -> Self {
        kind as u8
    }
}

#[cfg(test)]
mod test_grids {
    use super::*;

    #[test]
    fn directions_are_unit_offsets() {
        let mut sum = Point::new(0, 0);
        for direction in Direction::ALL.iter() {
            let offset = direction.offset();
            assert_eq!(offset.x.abs() + offset.y.abs(), 1);
            sum = sum + offset;
        }
        assert_eq!(sum, Point::new(0, 0));
        assert_eq!(Direction::from(6), Direction::West);
    }

    #[test]
    fn neighbors_follow_direction_order() {
        let around = Point::new(3, 3).neighbors();
        assert_eq!(
            around,
            [
                Point::new(4, 3),
                Point::new(3, 4),
                Point::new(2, 3),
                Point::new(3, 2)
            ]
        );
    }

    #[test]
    fn cell_bytes() {
        assert_eq!(u8::from(CellKind::Empty), 0);
        assert_eq!(u8::from(CellKind::Wall), 1);
        assert_eq!(u8::from(CellKind::InProgress), 2);
    }
}
