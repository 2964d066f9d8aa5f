use std::ops::{Add, Sub};

use super::direction::Direction;

/// An integer (row, col) cell coordinate on the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPosition {
    pub row: i32,
    pub col: i32,
}

impl GridPosition {
    pub fn new(row: i32, col: i32) -> GridPosition {
        GridPosition { row, col }
    }
}

impl Add<Direction> for GridPosition {
    type Output = GridPosition;
    fn add(self, rhs: Direction) -> GridPosition {
        let (drow, dcol) = rhs.delta();
        GridPosition::new(self.row + drow, self.col + dcol)
    }
}

impl Sub<Direction> for GridPosition {
    type Output = GridPosition;
    fn sub(self, rhs: Direction) -> GridPosition {
        self + (-rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_by_direction() {
        let p = GridPosition::new(2, 3);
        assert_eq!(p + Direction::Up, GridPosition::new(1, 3));
        assert_eq!(p + Direction::Down, GridPosition::new(3, 3));
        assert_eq!(p + Direction::Left, GridPosition::new(2, 2));
        assert_eq!(p + Direction::Right, GridPosition::new(2, 4));
    }

    #[test]
    fn sub_is_add_of_opposite() {
        let p = GridPosition::new(0, 0);
        for &d in Direction::ALL.iter() {
            assert_eq!(p - d, p + (-d));
            assert_eq!((p + d) - d, p);
        }
    }
}
