//! Pure projection from grid and track coordinates to screen space.
//! Reads the layout, never mutates it.

use super::angle::Angle;
use super::geom::{ScreenOffset, ScreenPos};
use super::rect::ScreenRect;
use crate::grid::{Direction, GridPosition};
use crate::track::{ConnId, Layout, Shape, TrackPosition};

#[derive(Debug, Copy, Clone)]
pub struct Projection {
    pub screen_rect: ScreenRect,
    pub grid_origin: GridPosition,
    pub tile_size: i32,
}

impl Projection {
    pub fn new(screen_rect: ScreenRect, grid_origin: GridPosition, tile_size: i32) -> Projection {
        Projection {
            screen_rect,
            grid_origin,
            tile_size,
        }
    }

    pub fn grid_num_cols(&self) -> i32 {
        self.screen_rect.width() / self.tile_size
    }

    pub fn grid_num_rows(&self) -> i32 {
        self.screen_rect.height() / self.tile_size
    }

    /// Top-left pixel of a cell; None if it falls off screen.
    pub fn grid_to_screen(&self, position: GridPosition) -> Option<ScreenPos> {
        let result = self.screen_rect.min
            + ScreenOffset::new(
                (position.col - self.grid_origin.col) * self.tile_size,
                (position.row - self.grid_origin.row) * self.tile_size,
            );
        if self.screen_rect.contains(result) {
            Some(result)
        } else {
            None
        }
    }

    pub fn screen_to_grid(&self, position: ScreenPos) -> Option<GridPosition> {
        if !self.screen_rect.contains(position) {
            return None;
        }
        let rel = position - self.screen_rect.min;
        Some(GridPosition::new(
            rel.dy / self.tile_size + self.grid_origin.row,
            rel.dx / self.tile_size + self.grid_origin.col,
        ))
    }

    pub fn tile_center(&self, position: GridPosition) -> Option<ScreenPos> {
        let half = self.tile_size / 2;
        Some(self.grid_to_screen(position)? + ScreenOffset::new(half, half))
    }

    /// Midpoint of a tile edge, where track meets the cell boundary.
    pub fn tile_side(&self, position: GridPosition, direction: Direction) -> Option<ScreenPos> {
        let pos = self.grid_to_screen(position)?;
        let (half, full) = (self.tile_size / 2, self.tile_size);
        Some(match direction {
            Direction::Left => pos + ScreenOffset::new(0, half),
            Direction::Up => pos + ScreenOffset::new(half, 0),
            Direction::Right => pos + ScreenOffset::new(full, half),
            Direction::Down => pos + ScreenOffset::new(half, full),
        })
    }

    /// The tile corner between two perpendicular directions; None for
    /// a parallel pair (no corner) or an off-screen tile.
    pub fn tile_corner(
        &self,
        position: GridPosition,
        directions: (Direction, Direction),
    ) -> Option<ScreenPos> {
        use crate::grid::Direction::*;
        let pos = self.grid_to_screen(position)?;
        let full = self.tile_size;
        let offset = match directions {
            (Up, Left) | (Left, Up) => ScreenOffset::new(0, 0),
            (Up, Right) | (Right, Up) => ScreenOffset::new(full, 0),
            (Down, Left) | (Left, Down) => ScreenOffset::new(0, full),
            (Down, Right) | (Right, Down) => ScreenOffset::new(full, full),
            _ => return None,
        };
        Some(pos + offset)
    }

    /// Screen endpoints of a connection: the tile-side anchors of its
    /// reverse and forward directions. None if the connection is
    /// unattached or its tile is off screen.
    pub fn connection_ends(
        &self,
        layout: &Layout,
        conn: ConnId,
    ) -> Option<(ScreenPos, ScreenPos)> {
        let position = layout.conn_position(conn)?;
        let reverse = self.tile_side(position, layout.conn(conn).reverse_direction)?;
        let forward = self.tile_side(position, layout.conn(conn).forward_direction)?;
        Some((reverse, forward))
    }

    /// Point `u` of the way along a connection. Straight connections
    /// interpolate end to end; curved ones bend through the shared
    /// tile corner (quadratic Bezier).
    pub fn connection_lerp(&self, layout: &Layout, conn: ConnId, u: f64) -> Option<ScreenPos> {
        let (reverse, forward) = self.connection_ends(layout, conn)?;
        let c = layout.conn(conn);
        if c.shape == Shape::Curved {
            if let Some(position) = layout.conn_position(conn) {
                if let Some(corner) =
                    self.tile_corner(position, (c.reverse_direction, c.forward_direction))
                {
                    return Some(bezier2(reverse, corner, forward, u));
                }
            }
        }
        Some(reverse.lerp(forward, u))
    }

    pub fn track_to_screen(&self, layout: &Layout, position: TrackPosition) -> Option<ScreenPos> {
        self.connection_lerp(layout, position.conn, position.u)
    }

    /// Heading of forward travel at point `u` of a connection. Straight
    /// connections hold one heading; curved ones sweep from the entry
    /// heading to the exit heading.
    pub fn connection_angle(&self, layout: &Layout, conn: ConnId, u: f64) -> Angle {
        let c = layout.conn(conn);
        let entry = Angle::from_direction(-c.reverse_direction);
        let exit = Angle::from_direction(c.forward_direction);
        if c.shape == Shape::Curved {
            entry.lerp(exit, u)
        } else {
            exit
        }
    }

    pub fn track_angle(&self, layout: &Layout, position: TrackPosition) -> Angle {
        self.connection_angle(layout, position.conn, position.u)
    }
}

fn bezier2(p0: ScreenPos, control: ScreenPos, p1: ScreenPos, u: f64) -> ScreenPos {
    let w0 = (1.0 - u) * (1.0 - u);
    let w1 = 2.0 * u * (1.0 - u);
    let w2 = u * u;
    ScreenPos::new(
        (w0 * f64::from(p0.x) + w1 * f64::from(control.x) + w2 * f64::from(p1.x)).round() as i32,
        (w0 * f64::from(p0.y) + w1 * f64::from(control.y) + w2 * f64::from(p1.y)).round() as i32,
    )
}
