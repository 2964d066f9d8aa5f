use std::ops::Neg;

use failure_derive::Fail;

/// One of the four unit compass directions on the grid.
///
/// The domain is closed: every valid direction is one of these four
/// values, and negation maps each to its opposite.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Fail, PartialEq, Eq)]
pub enum DirectionError {
    #[fail(display = "invalid direction: ({}, {})", _0, _1)]
    Invalid(i32, i32),
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The unit (drow, dcol) displacement of this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn from_delta(drow: i32, dcol: i32) -> Result<Direction, DirectionError> {
        match (drow, dcol) {
            (-1, 0) => Ok(Direction::Up),
            (1, 0) => Ok(Direction::Down),
            (0, -1) => Ok(Direction::Left),
            (0, 1) => Ok(Direction::Right),
            _ => Err(DirectionError::Invalid(drow, dcol)),
        }
    }
}

impl Neg for Direction {
    type Output = Direction;
    fn neg(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_is_involutive() {
        for &d in Direction::ALL.iter() {
            assert_eq!(-(-d), d);
        }
    }

    #[test]
    fn deltas_are_units() {
        for &d in Direction::ALL.iter() {
            let (drow, dcol) = d.delta();
            assert_eq!(drow.abs() + dcol.abs(), 1);
            assert_eq!(Direction::from_delta(drow, dcol), Ok(d));
        }
    }

    #[test]
    fn invalid_deltas_rejected() {
        assert_eq!(Direction::from_delta(0, 0), Err(DirectionError::Invalid(0, 0)));
        assert_eq!(Direction::from_delta(1, 1), Err(DirectionError::Invalid(1, 1)));
        assert_eq!(Direction::from_delta(0, 2), Err(DirectionError::Invalid(0, 2)));
        assert_eq!(Direction::from_delta(-2, 0), Err(DirectionError::Invalid(-2, 0)));
    }
}
