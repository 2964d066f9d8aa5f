//! Derived lookups and the directional traversal rules that track
//! position arithmetic walks over: connection -> piece -> grid ->
//! neighboring piece -> connection.

use super::layout::{ConnId, GridId, Layout, PieceId};
use super::TrackError;
use crate::grid::{Direction, GridPosition};

impl Layout {
    /// Grid position of a connection's owning piece. None while the
    /// connection is unattached.
    pub fn conn_position(&self, conn: ConnId) -> Option<GridPosition> {
        let piece = self.conn(conn).piece?;
        Some(self.piece(piece).position)
    }

    pub fn conn_grid(&self, conn: ConnId) -> Option<GridId> {
        let piece = self.conn(conn).piece?;
        self.piece(piece).grid
    }

    pub fn reverse_position(&self, conn: ConnId) -> Option<GridPosition> {
        Some(self.conn_position(conn)? + self.conn(conn).reverse_direction)
    }

    pub fn forward_position(&self, conn: ConnId) -> Option<GridPosition> {
        Some(self.conn_position(conn)? + self.conn(conn).forward_direction)
    }

    fn occupant(&self, conn: ConnId, position: Option<GridPosition>) -> Option<PieceId> {
        self.get_piece_at(self.conn_grid(conn)?, position?)
    }

    pub fn reverse_piece(&self, conn: ConnId) -> Option<PieceId> {
        self.occupant(conn, self.reverse_position(conn))
    }

    pub fn forward_piece(&self, conn: ConnId) -> Option<PieceId> {
        self.occupant(conn, self.forward_position(conn))
    }

    /// The connection that receives you as you step forward: on the
    /// forward neighbor, the one entered from the direction facing back
    /// at us. None if there is no neighbor or no matching entrance.
    pub fn forward_connection(&self, conn: ConnId) -> Option<ConnId> {
        let neighbor = self.forward_piece(conn)?;
        self.get_connection(neighbor, -self.conn(conn).forward_direction)
    }

    /// The connection reached by backing up one step, resolved so that
    /// the current facing direction is preserved.
    ///
    /// Deliberately not the structural inverse of
    /// [`forward_connection`](Layout::forward_connection): first find
    /// the incoming connection on the reverse neighbor (the one that
    /// would have sent you forward into this connection), then take the
    /// neighbor's connection entered from the incoming connection's own
    /// forward direction. This resolves a trailing switch to the route
    /// it is currently set for, and starves the reverse direction of a
    /// one-way piece.
    pub fn reverse_connection(&self, conn: ConnId) -> Option<ConnId> {
        let neighbor = self.reverse_piece(conn)?;
        let incoming = self.get_connection(neighbor, -self.conn(conn).reverse_direction)?;
        self.get_connection(neighbor, self.conn(incoming).forward_direction)
    }

    /// The connection entering `piece` from `direction`. Absence means
    /// "no track that way" and is a lookup error here; use
    /// [`get_connection`](Layout::get_connection) for the optional
    /// variant.
    pub fn connection(&self, piece: PieceId, direction: Direction) -> Result<ConnId, TrackError> {
        self.get_connection(piece, direction)
            .ok_or(TrackError::NoSuchConnection(piece, direction))
    }

    pub fn get_connection(&self, piece: PieceId, direction: Direction) -> Option<ConnId> {
        self.piece(piece)
            .connections
            .iter()
            .cloned()
            .find(|&c| self.conn(c).reverse_direction == direction)
    }

    pub fn piece_at(&self, grid: GridId, position: GridPosition) -> Result<PieceId, TrackError> {
        self.get_piece_at(grid, position)
            .ok_or(TrackError::NoSuchPiece(grid, position))
    }

    pub fn get_piece_at(&self, grid: GridId, position: GridPosition) -> Option<PieceId> {
        self.grid(grid)
            .pieces
            .iter()
            .cloned()
            .find(|&p| self.piece(p).position == position)
    }

    /// Neighbor queries from a piece via its connection for a given
    /// entering direction; None on any missing link (no such
    /// connection, unattached piece, empty neighbor cell).
    pub fn piece_reverse_position(
        &self,
        piece: PieceId,
        direction: Direction,
    ) -> Option<GridPosition> {
        let conn = self.get_connection(piece, direction)?;
        Some(self.piece(piece).position + self.conn(conn).reverse_direction)
    }

    pub fn piece_forward_position(
        &self,
        piece: PieceId,
        direction: Direction,
    ) -> Option<GridPosition> {
        let conn = self.get_connection(piece, direction)?;
        Some(self.piece(piece).position + self.conn(conn).forward_direction)
    }

    pub fn piece_reverse_piece(&self, piece: PieceId, direction: Direction) -> Option<PieceId> {
        let position = self.piece_reverse_position(piece, direction)?;
        self.get_piece_at(self.piece(piece).grid?, position)
    }

    pub fn piece_forward_piece(&self, piece: PieceId, direction: Direction) -> Option<PieceId> {
        let position = self.piece_forward_position(piece, direction)?;
        self.get_piece_at(self.piece(piece).grid?, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction::*;
    use crate::track::Shape;

    #[test]
    fn forward_connection_on_a_line() {
        let mut l = Layout::new();
        let g = l.add_grid();
        let pieces = l.create_line(g, GridPosition::new(0, 0), Right, 2).unwrap();
        let c1 = l.connection(pieces[0], Left).unwrap();
        let c2 = l.connection(pieces[1], Left).unwrap();
        assert_eq!(l.forward_connection(c1), Some(c2));
        // End of the line.
        assert_eq!(l.forward_connection(c2), None);
    }

    #[test]
    fn reverse_connection_on_a_line() {
        let mut l = Layout::new();
        let g = l.add_grid();
        let pieces = l.create_line(g, GridPosition::new(0, 0), Right, 2).unwrap();
        let c1 = l.connection(pieces[0], Left).unwrap();
        let c2 = l.connection(pieces[1], Left).unwrap();
        assert_eq!(l.reverse_connection(c2), Some(c1));
        assert_eq!(l.reverse_connection(c1), None);
    }

    #[test]
    fn reverse_connection_follows_trailing_switch() {
        // A switch joining Left and Up to Right, currently routed
        // Right -> Up.
        let mut l = Layout::new();
        let g = l.add_grid();
        let sw = l.new_piece(GridPosition::new(0, 0));
        let left_to_right = l.new_connection(Left, Right, Shape::Straight);
        let up_to_right = l.new_connection(Up, Right, Shape::Curved);
        let right_to_up = l.new_connection(Right, Up, Shape::Curved);
        l.add_connection(sw, left_to_right).unwrap();
        l.add_connection(sw, up_to_right).unwrap();
        l.add_connection(sw, right_to_up).unwrap();
        l.add_piece(g, sw).unwrap();
        let straight = l.create_piece(GridPosition::new(0, 1), Left, Right).unwrap();
        l.add_piece(g, straight).unwrap();

        // Backing off the straight piece lands on the connection the
        // switch is pointed at, not whichever one we came in on.
        let from = l.connection(straight, Left).unwrap();
        assert_eq!(l.reverse_connection(from), Some(up_to_right));
    }

    #[test]
    fn reverse_connection_starved_by_derailer() {
        // A one-way piece: traversable Left -> Right only.
        let mut l = Layout::new();
        let g = l.add_grid();
        let derailer = l.new_piece(GridPosition::new(0, 0));
        let one_way = l.new_connection(Left, Right, Shape::Straight);
        l.add_connection(derailer, one_way).unwrap();
        l.add_piece(g, derailer).unwrap();
        let straight = l.create_piece(GridPosition::new(0, 1), Left, Right).unwrap();
        l.add_piece(g, straight).unwrap();

        // No entrance from the Right, so there is no way back...
        let from = l.connection(straight, Left).unwrap();
        assert_eq!(l.reverse_connection(from), None);
        // ...while forward traversal out of the derailer still works.
        assert_eq!(
            l.forward_connection(one_way),
            Some(l.connection(straight, Left).unwrap())
        );
    }

    #[test]
    fn lookup_errors_name_the_missing_key() {
        let mut l = Layout::new();
        let g = l.add_grid();
        let p = l.create_piece(GridPosition::new(0, 0), Left, Right).unwrap();
        l.add_piece(g, p).unwrap();
        assert_eq!(
            l.connection(p, Up),
            Err(TrackError::NoSuchConnection(p, Up))
        );
        assert_eq!(
            l.piece_at(g, GridPosition::new(5, 5)),
            Err(TrackError::NoSuchPiece(g, GridPosition::new(5, 5)))
        );
        assert!(l.get_connection(p, Up).is_none());
        assert!(l.get_piece_at(g, GridPosition::new(5, 5)).is_none());
    }

    #[test]
    fn neighbor_queries_are_optional() {
        let mut l = Layout::new();
        let g = l.add_grid();
        let pieces = l.create_line(g, GridPosition::new(0, 0), Right, 2).unwrap();
        assert_eq!(l.piece_forward_piece(pieces[0], Left), Some(pieces[1]));
        assert_eq!(l.piece_reverse_piece(pieces[1], Left), Some(pieces[0]));
        // Off the end of the line there is no neighbor, but the derived
        // position still exists.
        assert_eq!(
            l.piece_forward_position(pieces[1], Left),
            Some(GridPosition::new(0, 2))
        );
        assert_eq!(l.piece_forward_piece(pieces[1], Left), None);
        // Unattached pieces have no grid to look in.
        let lone = l.create_piece(GridPosition::new(9, 9), Left, Right).unwrap();
        assert_eq!(l.piece_forward_piece(lone, Left), None);
    }
}
