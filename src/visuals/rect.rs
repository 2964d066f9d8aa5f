use failure_derive::Fail;

use super::geom::{ScreenOffset, ScreenPos};

#[derive(Debug, Fail, PartialEq)]
pub enum VisualError {
    #[fail(display = "invalid rect bounds: {:?} exceeds {:?}", min, max)]
    InvalidRect { min: ScreenPos, max: ScreenPos },
}

/// An axis-aligned screen rectangle, half-open on the max edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScreenRect {
    pub min: ScreenPos,
    pub max: ScreenPos,
}

impl ScreenRect {
    pub fn new(min: ScreenPos, max: ScreenPos) -> Result<ScreenRect, VisualError> {
        if min.x > max.x || min.y > max.y {
            return Err(VisualError::InvalidRect { min, max });
        }
        Ok(ScreenRect { min, max })
    }

    pub fn size(self) -> ScreenOffset {
        self.max - self.min
    }

    pub fn width(self) -> i32 {
        self.size().dx
    }

    pub fn height(self) -> i32 {
        self.size().dy
    }

    pub fn contains(self, pos: ScreenPos) -> bool {
        self.min.x <= pos.x && pos.x < self.max.x && self.min.y <= pos.y && pos.y < self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_bounds() {
        let err = ScreenRect::new(ScreenPos::new(10, 0), ScreenPos::new(0, 10)).unwrap_err();
        assert_eq!(
            err,
            VisualError::InvalidRect {
                min: ScreenPos::new(10, 0),
                max: ScreenPos::new(0, 10),
            }
        );
    }

    #[test]
    fn contains_is_half_open() {
        let r = ScreenRect::new(ScreenPos::new(0, 0), ScreenPos::new(10, 10)).unwrap();
        assert!(r.contains(ScreenPos::new(0, 0)));
        assert!(r.contains(ScreenPos::new(9, 9)));
        assert!(!r.contains(ScreenPos::new(10, 0)));
        assert!(!r.contains(ScreenPos::new(0, 10)));
        assert!(!r.contains(ScreenPos::new(-1, 5)));
        assert_eq!(r.width(), 10);
        assert_eq!(r.height(), 10);
    }
}
