use std::ops::{Add, Mul, Neg, Sub};

use super::direction::Direction;

/// A number of clockwise quarter-turns, normalized to 0..4.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rotation(u8);

impl Rotation {
    pub fn new(n: i32) -> Rotation {
        Rotation(n.rem_euclid(4) as u8)
    }

    /// Number of clockwise quarter-turns, in 0..4.
    pub fn steps(self) -> u8 {
        self.0
    }
}

impl Neg for Rotation {
    type Output = Rotation;
    fn neg(self) -> Rotation {
        Rotation::new(-(self.0 as i32))
    }
}

impl Add for Rotation {
    type Output = Rotation;
    fn add(self, rhs: Rotation) -> Rotation {
        Rotation::new(self.0 as i32 + rhs.0 as i32)
    }
}

impl Sub for Rotation {
    type Output = Rotation;
    fn sub(self, rhs: Rotation) -> Rotation {
        self + (-rhs)
    }
}

impl Mul<Direction> for Rotation {
    type Output = Direction;

    /// Rotate a direction clockwise by this many quarter-turns.
    ///
    /// Pure 4-cycle table, no trigonometry: Left -> Up -> Right -> Down.
    fn mul(self, rhs: Direction) -> Direction {
        let mut result = rhs;
        for _ in 0..self.0 {
            result = match result {
                Direction::Left => Direction::Up,
                Direction::Up => Direction::Right,
                Direction::Right => Direction::Down,
                Direction::Down => Direction::Left,
            };
        }
        result
    }
}
