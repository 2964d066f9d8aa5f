//! Screen-space projection of the track network: pixel positions and
//! offsets, continuous angles, rectangles, and the grid-to-screen
//! mapping. Pure functions over the layout; rendering backends live
//! elsewhere.

pub mod angle;
pub mod geom;
pub mod projection;
pub mod rect;

pub use self::angle::Angle;
pub use self::geom::{ScreenOffset, ScreenPos};
pub use self::projection::Projection;
pub use self::rect::{ScreenRect, VisualError};
