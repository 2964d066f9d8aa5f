use std::ops::{Add, Mul, Neg, Sub};

use super::angle::Angle;

/// A screen-space pixel position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ScreenPos {
    pub x: i32,
    pub y: i32,
}

/// A displacement between screen positions.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ScreenOffset {
    pub dx: i32,
    pub dy: i32,
}

impl ScreenPos {
    pub fn new(x: i32, y: i32) -> ScreenPos {
        ScreenPos { x, y }
    }

    pub fn lerp(self, rhs: ScreenPos, u: f64) -> ScreenPos {
        self + (rhs - self) * u
    }

    /// Screen-space angle pointing from self toward rhs.
    pub fn angle_to(self, rhs: ScreenPos) -> Angle {
        (rhs - self).as_angle()
    }
}

impl ScreenOffset {
    pub fn new(dx: i32, dy: i32) -> ScreenOffset {
        ScreenOffset { dx, dy }
    }

    pub fn length(self) -> f64 {
        f64::from(self.dx * self.dx + self.dy * self.dy).sqrt()
    }

    pub fn as_angle(self) -> Angle {
        Angle::from_radians(f64::from(self.dy).atan2(f64::from(self.dx)))
    }

    pub fn lerp(self, rhs: ScreenOffset, u: f64) -> ScreenOffset {
        self + (rhs - self) * u
    }
}

impl Add<ScreenOffset> for ScreenPos {
    type Output = ScreenPos;
    fn add(self, rhs: ScreenOffset) -> ScreenPos {
        ScreenPos::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Sub for ScreenPos {
    type Output = ScreenOffset;
    fn sub(self, rhs: ScreenPos) -> ScreenOffset {
        ScreenOffset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Sub<ScreenOffset> for ScreenPos {
    type Output = ScreenPos;
    fn sub(self, rhs: ScreenOffset) -> ScreenPos {
        self + (-rhs)
    }
}

impl Neg for ScreenOffset {
    type Output = ScreenOffset;
    fn neg(self) -> ScreenOffset {
        ScreenOffset::new(-self.dx, -self.dy)
    }
}

impl Add for ScreenOffset {
    type Output = ScreenOffset;
    fn add(self, rhs: ScreenOffset) -> ScreenOffset {
        ScreenOffset::new(self.dx + rhs.dx, self.dy + rhs.dy)
    }
}

impl Sub for ScreenOffset {
    type Output = ScreenOffset;
    fn sub(self, rhs: ScreenOffset) -> ScreenOffset {
        self + (-rhs)
    }
}

impl Mul<f64> for ScreenOffset {
    type Output = ScreenOffset;
    fn mul(self, rhs: f64) -> ScreenOffset {
        ScreenOffset::new(
            (f64::from(self.dx) * rhs) as i32,
            (f64::from(self.dy) * rhs) as i32,
        )
    }
}
