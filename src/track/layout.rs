//! The entity arena for the track graph.
//!
//! Grids, pieces and connections reference each other both ways: the
//! forward collections (a grid's piece set, a piece's connection list)
//! are authoritative, and the back-references (`Piece::grid`,
//! `Connection::piece`) are plain id fields kept in sync by the
//! mutators here. Every composite mutation runs inside a paused
//! validation scope, so observers only ever see fully consistent
//! state, or the mutation has failed and the touched entities must be
//! treated as suspect.

use std::collections::HashMap;

use smallvec::SmallVec;

use super::ValidationError;
use crate::grid::{Direction, GridPosition};

pub type GridId = usize;
pub type PieceId = usize;
pub type ConnId = usize;

/// Curve shape of a connection, consumed only by the projection layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shape {
    Straight,
    Curved,
}

/// A directed traversal edge through one piece: enter from
/// `reverse_direction`, leave toward `forward_direction`.
#[derive(Debug)]
pub struct Connection {
    pub reverse_direction: Direction,
    pub forward_direction: Direction,
    pub shape: Shape,
    pub piece: Option<PieceId>,
}

/// A network node occupying one grid cell, owning at most one
/// connection per entering direction.
#[derive(Debug)]
pub struct Piece {
    pub position: GridPosition,
    pub connections: SmallVec<[ConnId; 4]>,
    pub grid: Option<GridId>,
}

/// A set of pieces, at most one per grid position.
#[derive(Debug, Default)]
pub struct Grid {
    pub pieces: Vec<PieceId>,
}

/// Arena owning every grid, piece and connection, addressed by stable
/// indices. Entities are never deallocated, only detached from their
/// owner's set, so ids stay valid for the lifetime of the layout.
#[derive(Debug, Default)]
pub struct Layout {
    grids: Vec<Grid>,
    pieces: Vec<Piece>,
    connections: Vec<Connection>,
    pause_depth: usize,
}

impl Layout {
    pub fn new() -> Layout {
        Default::default()
    }

    pub fn grid(&self, id: GridId) -> &Grid {
        &self.grids[id]
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id]
    }

    pub fn conn(&self, id: ConnId) -> &Connection {
        &self.connections[id]
    }

    pub fn num_grids(&self) -> usize {
        self.grids.len()
    }

    pub fn num_pieces(&self) -> usize {
        self.pieces.len()
    }

    pub fn add_grid(&mut self) -> GridId {
        let id = self.grids.len();
        self.grids.push(Grid::default());
        id
    }

    /// Create an unattached piece at a grid position.
    pub fn new_piece(&mut self, position: GridPosition) -> PieceId {
        let id = self.pieces.len();
        self.pieces.push(Piece {
            position,
            connections: SmallVec::new(),
            grid: None,
        });
        id
    }

    /// Create an unattached connection.
    pub fn new_connection(
        &mut self,
        reverse_direction: Direction,
        forward_direction: Direction,
        shape: Shape,
    ) -> ConnId {
        let id = self.connections.len();
        self.connections.push(Connection {
            reverse_direction,
            forward_direction,
            shape,
            piece: None,
        });
        id
    }

    /// Run a composite mutation with validation paused, re-validating
    /// when the outermost scope closes. The closure's own error wins
    /// over any deferred validation failure.
    pub fn with_paused_validation<T>(
        &mut self,
        f: impl FnOnce(&mut Layout) -> Result<T, ValidationError>,
    ) -> Result<T, ValidationError> {
        self.pause_depth += 1;
        let result = f(self);
        self.pause_depth -= 1;
        let value = result?;
        self.validate_if_enabled()?;
        Ok(value)
    }

    fn validate_if_enabled(&self) -> Result<(), ValidationError> {
        if self.pause_depth == 0 {
            self.validate()
        } else {
            Ok(())
        }
    }

    /// Move a piece between grids (or detach it). Both sides of the
    /// relation are updated in one paused scope.
    pub fn set_piece_grid(
        &mut self,
        piece: PieceId,
        grid: Option<GridId>,
    ) -> Result<(), ValidationError> {
        if self.pieces[piece].grid == grid {
            return Ok(());
        }
        self.with_paused_validation(|l| {
            if let Some(old) = l.pieces[piece].grid {
                l.grids[old].pieces.retain(|&p| p != piece);
            }
            l.pieces[piece].grid = grid;
            if let Some(new) = grid {
                l.grids[new].pieces.push(piece);
            }
            Ok(())
        })
    }

    pub fn add_piece(&mut self, grid: GridId, piece: PieceId) -> Result<(), ValidationError> {
        self.set_piece_grid(piece, Some(grid))
    }

    pub fn remove_piece(&mut self, grid: GridId, piece: PieceId) -> Result<(), ValidationError> {
        if self.pieces[piece].grid == Some(grid) {
            self.set_piece_grid(piece, None)
        } else {
            Ok(())
        }
    }

    /// Move a connection between pieces (or detach it).
    pub fn set_connection_piece(
        &mut self,
        conn: ConnId,
        piece: Option<PieceId>,
    ) -> Result<(), ValidationError> {
        if self.connections[conn].piece == piece {
            return Ok(());
        }
        self.with_paused_validation(|l| {
            if let Some(old) = l.connections[conn].piece {
                l.pieces[old].connections.retain(|c| *c != conn);
            }
            l.connections[conn].piece = piece;
            if let Some(new) = piece {
                l.pieces[new].connections.push(conn);
            }
            Ok(())
        })
    }

    pub fn add_connection(&mut self, piece: PieceId, conn: ConnId) -> Result<(), ValidationError> {
        self.set_connection_piece(conn, Some(piece))
    }

    pub fn remove_connection(
        &mut self,
        piece: PieceId,
        conn: ConnId,
    ) -> Result<(), ValidationError> {
        if self.connections[conn].piece == Some(piece) {
            self.set_connection_piece(conn, None)
        } else {
            Ok(())
        }
    }

    /// Check every structural invariant of the graph. Idempotent, no
    /// side effects.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (gid, grid) in self.grids.iter().enumerate() {
            let mut by_position: HashMap<GridPosition, PieceId> = HashMap::new();
            for &pid in &grid.pieces {
                if self.pieces[pid].grid != Some(gid) {
                    return Err(ValidationError::PieceNotInGrid { grid: gid, piece: pid });
                }
                if let Some(&other) = by_position.get(&self.pieces[pid].position) {
                    return Err(ValidationError::DuplicatePosition {
                        grid: gid,
                        position: self.pieces[pid].position,
                        first: other,
                        second: pid,
                    });
                }
                by_position.insert(self.pieces[pid].position, pid);
            }
        }
        for (pid, piece) in self.pieces.iter().enumerate() {
            if let Some(gid) = piece.grid {
                if !self.grids[gid].pieces.contains(&pid) {
                    return Err(ValidationError::PieceNotInGrid { grid: gid, piece: pid });
                }
            }
            let mut by_direction: HashMap<Direction, ConnId> = HashMap::new();
            for &cid in &piece.connections {
                if self.connections[cid].piece != Some(pid) {
                    return Err(ValidationError::ConnectionNotInPiece { piece: pid, conn: cid });
                }
                let dir = self.connections[cid].reverse_direction;
                if let Some(&other) = by_direction.get(&dir) {
                    return Err(ValidationError::DuplicateReverseDirection {
                        piece: pid,
                        direction: dir,
                        first: other,
                        second: cid,
                    });
                }
                by_direction.insert(dir, cid);
            }
        }
        for (cid, conn) in self.connections.iter().enumerate() {
            if let Some(pid) = conn.piece {
                if !self.pieces[pid].connections.contains(&cid) {
                    return Err(ValidationError::ConnectionNotInPiece { piece: pid, conn: cid });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction::*;

    #[test]
    fn attach_and_detach_piece() {
        let mut l = Layout::new();
        let g = l.add_grid();
        let p = l.new_piece(GridPosition::new(0, 0));
        l.add_piece(g, p).unwrap();
        assert_eq!(l.piece(p).grid, Some(g));
        assert_eq!(l.grid(g).pieces, vec![p]);

        l.remove_piece(g, p).unwrap();
        assert_eq!(l.piece(p).grid, None);
        assert!(l.grid(g).pieces.is_empty());
    }

    #[test]
    fn move_piece_between_grids() {
        let mut l = Layout::new();
        let g1 = l.add_grid();
        let g2 = l.add_grid();
        let p = l.new_piece(GridPosition::new(0, 0));
        l.add_piece(g1, p).unwrap();
        l.set_piece_grid(p, Some(g2)).unwrap();
        assert!(l.grid(g1).pieces.is_empty());
        assert_eq!(l.grid(g2).pieces, vec![p]);
        assert_eq!(l.piece(p).grid, Some(g2));
    }

    #[test]
    fn duplicate_position_rejected() {
        let mut l = Layout::new();
        let g = l.add_grid();
        let p1 = l.new_piece(GridPosition::new(0, 0));
        let p2 = l.new_piece(GridPosition::new(0, 0));
        l.add_piece(g, p1).unwrap();
        let err = l.add_piece(g, p2).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicatePosition {
                grid: g,
                position: GridPosition::new(0, 0),
                first: p1,
                second: p2,
            }
        );
    }

    #[test]
    fn duplicate_reverse_direction_rejected() {
        let mut l = Layout::new();
        let p = l.new_piece(GridPosition::new(0, 0));
        let c1 = l.new_connection(Up, Down, Shape::Straight);
        let c2 = l.new_connection(Up, Right, Shape::Curved);
        l.add_connection(p, c1).unwrap();
        let err = l.add_connection(p, c2).unwrap_err();
        assert_eq!(
            err,
            ValidationError::DuplicateReverseDirection {
                piece: p,
                direction: Up,
                first: c1,
                second: c2,
            }
        );
    }

    #[test]
    fn move_connection_between_pieces() {
        let mut l = Layout::new();
        let p1 = l.new_piece(GridPosition::new(0, 0));
        let p2 = l.new_piece(GridPosition::new(0, 1));
        let c = l.new_connection(Left, Right, Shape::Straight);
        l.add_connection(p1, c).unwrap();
        l.set_connection_piece(c, Some(p2)).unwrap();
        assert!(l.piece(p1).connections.is_empty());
        assert_eq!(l.piece(p2).connections.as_slice(), &[c]);
        assert_eq!(l.conn(c).piece, Some(p2));
    }

    #[test]
    fn paused_scope_defers_validation() {
        let mut l = Layout::new();
        let g = l.add_grid();
        let p1 = l.new_piece(GridPosition::new(0, 0));
        let p2 = l.new_piece(GridPosition::new(0, 0));
        // Inside the scope the grid may transiently hold both pieces at
        // the same position; swapping them is one atomic edit.
        l.add_piece(g, p1).unwrap();
        l.with_paused_validation(|l| {
            l.add_piece(g, p2)?;
            l.remove_piece(g, p1)?;
            Ok(())
        })
        .unwrap();
        assert_eq!(l.grid(g).pieces, vec![p2]);
    }

    #[test]
    fn validate_is_idempotent() {
        let mut l = Layout::new();
        let g = l.add_grid();
        let p = l.new_piece(GridPosition::new(1, 2));
        l.add_piece(g, p).unwrap();
        assert!(l.validate().is_ok());
        assert!(l.validate().is_ok());
    }
}
