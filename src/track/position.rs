//! The continuous coordinate along the network: a connection plus a
//! fractional offset, normalized by walking across piece boundaries.

use super::layout::{ConnId, GridId, Layout, PieceId};
use super::TrackError;
use crate::grid::GridPosition;

/// A point along the track: offset `u` along a connection, with `u = 0`
/// at the reverse end and `u = 1` at the forward end. Normalized form
/// keeps `u` in `[0, 1)`.
///
/// A `TrackPosition` does not own anything; it references a connection
/// in a [`Layout`] and is invalidated if that connection is later
/// detached. Arithmetic re-resolves each boundary crossing by direction
/// (see [`Layout::reverse_connection`]), so `add` then `sub` of the
/// same distance returns to the same connection only when every
/// junction crossed is symmetric.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TrackPosition {
    pub conn: ConnId,
    pub u: f64,
}

impl TrackPosition {
    pub fn new(conn: ConnId, u: f64) -> TrackPosition {
        TrackPosition { conn, u }
    }

    /// Normalize to `u` within `[0, 1)`, stepping one connection per
    /// whole unit. Fails at a dead end.
    pub fn with_u(self, layout: &Layout, u: f64) -> Result<TrackPosition, TrackError> {
        let mut conn = self.conn;
        let mut u = u;
        while u >= 1.0 {
            u -= 1.0;
            conn = layout
                .forward_connection(conn)
                .ok_or(TrackError::NoForwardConnection(conn))?;
        }
        while u < 0.0 {
            u += 1.0;
            conn = layout
                .reverse_connection(conn)
                .ok_or(TrackError::NoReverseConnection(conn))?;
        }
        Ok(TrackPosition { conn, u })
    }

    pub fn add(self, layout: &Layout, du: f64) -> Result<TrackPosition, TrackError> {
        self.with_u(layout, self.u + du)
    }

    pub fn sub(self, layout: &Layout, du: f64) -> Result<TrackPosition, TrackError> {
        self.add(layout, -du)
    }

    pub fn piece(self, layout: &Layout) -> Option<PieceId> {
        layout.conn(self.conn).piece
    }

    pub fn grid_position(self, layout: &Layout) -> Option<GridPosition> {
        layout.conn_position(self.conn)
    }

    pub fn grid(self, layout: &Layout) -> Option<GridId> {
        layout.conn_grid(self.conn)
    }
}
