//! The track network: a mutable arena of grids, pieces and connections,
//! plus the continuous track coordinate that travels across them.

pub mod catalog;
pub mod layout;
pub mod position;
pub mod traverse;

pub use self::layout::{ConnId, Connection, Grid, GridId, Layout, Piece, PieceId, Shape};
pub use self::position::TrackPosition;

use failure_derive::Fail;

use crate::grid::{Direction, GridPosition};

/// A structural invariant was broken by a mutation. The offending
/// entities are named by their arena ids.
#[derive(Debug, Fail, PartialEq, Eq)]
pub enum ValidationError {
    #[fail(display = "piece {} not attached back to grid {}", piece, grid)]
    PieceNotInGrid { grid: GridId, piece: PieceId },
    #[fail(
        display = "pieces {} and {} both at {:?} in grid {}",
        first, second, position, grid
    )]
    DuplicatePosition {
        grid: GridId,
        position: GridPosition,
        first: PieceId,
        second: PieceId,
    },
    #[fail(display = "connection {} not attached back to piece {}", conn, piece)]
    ConnectionNotInPiece { piece: PieceId, conn: ConnId },
    #[fail(
        display = "connections {} and {} on piece {} both enter from {:?}",
        first, second, piece, direction
    )]
    DuplicateReverseDirection {
        piece: PieceId,
        direction: Direction,
        first: ConnId,
        second: ConnId,
    },
    #[fail(display = "loop of {}x{} cells too small, need at least 2x2", rows, cols)]
    LoopTooSmall { rows: i32, cols: i32 },
}

/// Lookup and traversal failures on the track graph.
///
/// The `NoSuch*` variants come from the indexed-access style accessors
/// where the caller expects presence; the `No*Connection` variants are
/// dead ends hit by track-position arithmetic, and are expected,
/// recoverable conditions for the physics layer.
#[derive(Debug, Fail, PartialEq, Eq)]
pub enum TrackError {
    #[fail(display = "no piece at {:?} in grid {}", _1, _0)]
    NoSuchPiece(GridId, GridPosition),
    #[fail(display = "no connection entering piece {} from {:?}", _0, _1)]
    NoSuchConnection(PieceId, Direction),
    #[fail(display = "no forward connection from connection {}", _0)]
    NoForwardConnection(ConnId),
    #[fail(display = "no reverse connection from connection {}", _0)]
    NoReverseConnection(ConnId),
}
