//! Grid-space algebra: the four compass directions, quarter-turn
//! rotations acting on them, and integer cell coordinates.

pub mod direction;
pub mod position;
pub mod rotation;

pub use self::direction::{Direction, DirectionError};
pub use self::position::GridPosition;
pub use self::rotation::Rotation;
