use std::f64::consts::PI;
use std::ops::{Add, Mul, Neg, Sub};

use super::geom::ScreenOffset;
use crate::grid::Direction;

/// A screen-space rotation in radians, normalized to [-pi, pi).
///
/// Distinct from [`crate::grid::Rotation`], which is the discrete
/// quarter-turn group on the grid; this is the continuous angle used
/// for projecting headings to the screen.
#[derive(Debug, Copy, Clone)]
pub struct Angle(f64);

impl Angle {
    fn normalize(th: f64) -> f64 {
        (th + PI * 3.0).rem_euclid(PI * 2.0) - PI
    }

    pub fn from_radians(radians: f64) -> Angle {
        Angle(Angle::normalize(radians))
    }

    pub fn from_degrees(degrees: f64) -> Angle {
        Angle::from_radians(degrees.to_radians())
    }

    /// Screen-space heading of a grid direction: Right is 0, and y
    /// grows downward, so Up is -90 degrees.
    pub fn from_direction(direction: Direction) -> Angle {
        match direction {
            Direction::Right => Angle::from_degrees(0.0),
            Direction::Down => Angle::from_degrees(90.0),
            Direction::Up => Angle::from_degrees(-90.0),
            Direction::Left => Angle::from_degrees(-180.0),
        }
    }

    pub fn radians(self) -> f64 {
        self.0
    }

    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }

    pub fn lerp(self, rhs: Angle, u: f64) -> Angle {
        self + (rhs - self) * u
    }

    pub fn approx_eq(self, rhs: Angle) -> bool {
        (self.0 - rhs.0).abs() < 1e-5
    }
}

impl Neg for Angle {
    type Output = Angle;
    fn neg(self) -> Angle {
        Angle::from_radians(-self.0)
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.0 - rhs.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Angle;
    fn mul(self, rhs: f64) -> Angle {
        Angle::from_radians(self.0 * rhs)
    }
}

impl Mul<ScreenOffset> for Angle {
    type Output = ScreenOffset;

    /// Rotate an offset by this angle, preserving its length.
    fn mul(self, rhs: ScreenOffset) -> ScreenOffset {
        let th = (rhs.as_angle() + self).radians();
        let len = rhs.length();
        ScreenOffset::new(
            (th.cos() * len).round() as i32,
            (th.sin() * len).round() as i32,
        )
    }
}
