//! Piece factories and shape matching for catalog placement: build the
//! common piece kinds, rotate a piece into an arbitrary orientation,
//! and find the rotation (if any) relating two piece shapes.

use smallvec::SmallVec;

use super::layout::{ConnId, GridId, Layout, PieceId, Shape};
use super::ValidationError;
use crate::grid::{Direction, GridPosition, Rotation};

fn shape_between(reverse: Direction, forward: Direction) -> Shape {
    if forward == -reverse {
        Shape::Straight
    } else {
        Shape::Curved
    }
}

type PieceSignature = SmallVec<[(Direction, Direction, Shape); 4]>;

impl Layout {
    /// A plain bidirectional piece joining two boundary directions:
    /// one connection each way. Unattached to any grid.
    pub fn create_piece(
        &mut self,
        position: GridPosition,
        reverse_direction: Direction,
        forward_direction: Direction,
    ) -> Result<PieceId, ValidationError> {
        let shape = shape_between(reverse_direction, forward_direction);
        let piece = self.new_piece(position);
        let there = self.new_connection(reverse_direction, forward_direction, shape);
        let back = self.new_connection(forward_direction, reverse_direction, shape);
        self.with_paused_validation(|l| {
            l.add_connection(piece, there)?;
            l.add_connection(piece, back)?;
            Ok(piece)
        })
    }

    /// A run of straight pieces along one direction, attached to a grid.
    pub fn create_line(
        &mut self,
        grid: GridId,
        start: GridPosition,
        direction: Direction,
        length: usize,
    ) -> Result<Vec<PieceId>, ValidationError> {
        let mut position = start;
        let mut pieces = Vec::with_capacity(length);
        for _ in 0..length {
            let piece = self.create_piece(position, -direction, direction)?;
            self.add_piece(grid, piece)?;
            pieces.push(piece);
            position = position + direction;
        }
        Ok(pieces)
    }

    /// A closed rectangular ring: straight edges, curved corners.
    pub fn create_loop(
        &mut self,
        rows: i32,
        cols: i32,
        start: GridPosition,
    ) -> Result<GridId, ValidationError> {
        use crate::grid::Direction::*;
        if rows < 2 || cols < 2 {
            return Err(ValidationError::LoopTooSmall { rows, cols });
        }
        let grid = self.add_grid();
        let (top, left) = (start.row, start.col);
        let (bottom, right) = (top + rows - 1, left + cols - 1);
        let mut ring = Vec::new();
        for col in (left + 1)..right {
            ring.push(self.create_piece(GridPosition::new(top, col), Left, Right)?);
            ring.push(self.create_piece(GridPosition::new(bottom, col), Left, Right)?);
        }
        for row in (top + 1)..bottom {
            ring.push(self.create_piece(GridPosition::new(row, left), Up, Down)?);
            ring.push(self.create_piece(GridPosition::new(row, right), Up, Down)?);
        }
        ring.push(self.create_piece(GridPosition::new(top, left), Down, Right)?);
        ring.push(self.create_piece(GridPosition::new(top, right), Left, Down)?);
        ring.push(self.create_piece(GridPosition::new(bottom, right), Up, Left)?);
        ring.push(self.create_piece(GridPosition::new(bottom, left), Up, Right)?);
        for piece in ring {
            self.add_piece(grid, piece)?;
        }
        Ok(grid)
    }

    /// A structurally transformed unattached copy of a connection.
    pub fn rotate_connection(&mut self, conn: ConnId, rotation: Rotation) -> ConnId {
        let (reverse, forward, shape) = {
            let c = self.conn(conn);
            (c.reverse_direction, c.forward_direction, c.shape)
        };
        self.new_connection(rotation * reverse, rotation * forward, shape)
    }

    /// A structurally transformed unattached copy of a piece: same
    /// position, each connection rotated.
    pub fn rotate_piece(
        &mut self,
        piece: PieceId,
        rotation: Rotation,
    ) -> Result<PieceId, ValidationError> {
        let position = self.piece(piece).position;
        let conns: SmallVec<[ConnId; 4]> = self.piece(piece).connections.clone();
        let copy = self.new_piece(position);
        self.with_paused_validation(|l| {
            for conn in conns {
                let rotated = l.rotate_connection(conn, rotation);
                l.add_connection(copy, rotated)?;
            }
            Ok(copy)
        })
    }

    fn piece_signature(&self, piece: PieceId, rotation: Rotation) -> PieceSignature {
        let mut signature: PieceSignature = self
            .piece(piece)
            .connections
            .iter()
            .map(|&c| {
                let c = self.conn(c);
                (
                    rotation * c.reverse_direction,
                    rotation * c.forward_direction,
                    c.shape,
                )
            })
            .collect();
        signature.sort();
        signature
    }

    /// Direct structural comparison of two pieces' connection sets; not
    /// rotation-aware.
    pub fn piece_same_as(&self, lhs: PieceId, rhs: PieceId) -> bool {
        self.piece_signature(lhs, Rotation::new(0)) == self.piece_signature(rhs, Rotation::new(0))
    }

    /// The first of the four rotations that maps `lhs` onto `rhs`, if
    /// any. Brute force over the whole (tiny, fixed) rotation group.
    pub fn rotation_to(&self, lhs: PieceId, rhs: PieceId) -> Option<Rotation> {
        let target = self.piece_signature(rhs, Rotation::new(0));
        (0..4)
            .map(Rotation::new)
            .find(|&r| self.piece_signature(lhs, r) == target)
    }

    /// Smallest and largest grid positions of a grid's pieces; None for
    /// an empty grid.
    pub fn bounds(&self, grid: GridId) -> Option<(GridPosition, GridPosition)> {
        let positions = || self.grid(grid).pieces.iter().map(|&p| self.piece(p).position);
        let first = positions().next()?;
        let fold = positions().fold((first, first), |(min, max), p| {
            (
                GridPosition::new(min.row.min(p.row), min.col.min(p.col)),
                GridPosition::new(max.row.max(p.row), max.col.max(p.col)),
            )
        });
        Some(fold)
    }

    /// One character per cell: straights, corner glyphs, `?` for
    /// anything else, space for empty cells.
    pub fn debug_render(&self, grid: GridId) -> String {
        use crate::grid::Direction::*;
        let (min, max) = match self.bounds(grid) {
            Some(bounds) => bounds,
            None => return String::new(),
        };
        let glyph = |piece: PieceId| {
            let is = |a: Direction, b: Direction| {
                let mut expected: PieceSignature = SmallVec::new();
                let shape = shape_between(a, b);
                expected.push((a, b, shape));
                expected.push((b, a, shape));
                expected.sort();
                self.piece_signature(piece, Rotation::new(0)) == expected
            };
            if is(Up, Down) {
                '|'
            } else if is(Left, Right) {
                '-'
            } else if is(Up, Left) {
                '┘'
            } else if is(Up, Right) {
                '└'
            } else if is(Down, Left) {
                '┐'
            } else if is(Down, Right) {
                '┌'
            } else {
                '?'
            }
        };
        let mut s = String::new();
        for row in min.row..=max.row {
            for col in min.col..=max.col {
                match self.get_piece_at(grid, GridPosition::new(row, col)) {
                    Some(piece) => s.push(glyph(piece)),
                    None => s.push(' '),
                }
            }
            s.push('\n');
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction::*;

    #[test]
    fn create_piece_wires_both_ways() {
        let mut l = Layout::new();
        let p = l.create_piece(GridPosition::new(0, 0), Left, Right).unwrap();
        let there = l.connection(p, Left).unwrap();
        let back = l.connection(p, Right).unwrap();
        assert_eq!(l.conn(there).forward_direction, Right);
        assert_eq!(l.conn(back).forward_direction, Left);
        assert_eq!(l.conn(there).shape, Shape::Straight);
        assert_eq!(l.conn(there).piece, Some(p));
        assert_eq!(l.piece(p).grid, None);
    }

    #[test]
    fn corner_pieces_are_curved() {
        let mut l = Layout::new();
        let p = l.create_piece(GridPosition::new(0, 0), Down, Right).unwrap();
        let c = l.connection(p, Down).unwrap();
        assert_eq!(l.conn(c).shape, Shape::Curved);
    }

    #[test]
    fn create_line_lays_pieces_along_direction() {
        let mut l = Layout::new();
        let g = l.add_grid();
        let pieces = l.create_line(g, GridPosition::new(1, 1), Down, 3).unwrap();
        assert_eq!(pieces.len(), 3);
        for (i, &p) in pieces.iter().enumerate() {
            assert_eq!(l.piece(p).position, GridPosition::new(1 + i as i32, 1));
            assert_eq!(l.piece(p).grid, Some(g));
        }
    }

    #[test]
    fn create_loop_is_closed() {
        let mut l = Layout::new();
        let g = l.create_loop(3, 4, GridPosition::new(0, 0)).unwrap();
        assert_eq!(l.grid(g).pieces.len(), 2 * 3 + 2 * 4 - 4);
        // Walking forward from any connection comes back around.
        let start_piece = l.piece_at(g, GridPosition::new(0, 1)).unwrap();
        let start = l.connection(start_piece, Left).unwrap();
        let mut conn = start;
        for _ in 0..l.grid(g).pieces.len() {
            conn = l.forward_connection(conn).expect("loop should be closed");
        }
        assert_eq!(conn, start);
    }

    #[test]
    fn create_loop_rejects_undersized_rings() {
        let mut l = Layout::new();
        assert_eq!(
            l.create_loop(1, 6, GridPosition::new(0, 0)),
            Err(ValidationError::LoopTooSmall { rows: 1, cols: 6 })
        );
        assert_eq!(
            l.create_loop(2, 1, GridPosition::new(0, 0)),
            Err(ValidationError::LoopTooSmall { rows: 2, cols: 1 })
        );
        // Nothing was constructed on the failure path.
        assert_eq!(l.num_pieces(), 0);
    }

    #[test]
    fn loop_covers_expected_cells() {
        use maplit::hashset;
        use std::collections::HashSet;
        let mut l = Layout::new();
        let g = l.create_loop(2, 2, GridPosition::new(0, 0)).unwrap();
        let cells: HashSet<_> = l
            .grid(g)
            .pieces
            .iter()
            .map(|&p| l.piece(p).position)
            .collect();
        assert_eq!(
            cells,
            hashset! {
                GridPosition::new(0, 0),
                GridPosition::new(0, 1),
                GridPosition::new(1, 0),
                GridPosition::new(1, 1),
            }
        );
    }

    #[test]
    fn debug_render_draws_the_loop() {
        let mut l = Layout::new();
        let g = l.create_loop(3, 4, GridPosition::new(0, 0)).unwrap();
        assert_eq!(l.debug_render(g), "┌--┐\n|  |\n└--┘\n");
    }

    #[test]
    fn bounds_cover_all_pieces() {
        let mut l = Layout::new();
        let g = l.create_loop(2, 2, GridPosition::new(-1, 2)).unwrap();
        assert_eq!(
            l.bounds(g),
            Some((GridPosition::new(-1, 2), GridPosition::new(0, 3)))
        );
        let empty = l.add_grid();
        assert_eq!(l.bounds(empty), None);
    }

    #[test]
    fn rotate_piece_transforms_connections() {
        let mut l = Layout::new();
        let p = l.create_piece(GridPosition::new(0, 0), Left, Right).unwrap();
        let rotated = l.rotate_piece(p, Rotation::new(1)).unwrap();
        assert!(l.get_connection(rotated, Up).is_some());
        assert!(l.get_connection(rotated, Down).is_some());
        assert!(l.get_connection(rotated, Left).is_none());
    }

    #[test]
    fn rotation_to_finds_quarter_turn() {
        let mut l = Layout::new();
        let straight = l.create_piece(GridPosition::new(0, 0), Left, Right).unwrap();
        let vertical = l.create_piece(GridPosition::new(0, 0), Up, Down).unwrap();
        assert_eq!(l.rotation_to(straight, vertical), Some(Rotation::new(1)));
        assert_eq!(l.rotation_to(straight, straight), Some(Rotation::new(0)));
    }

    #[test]
    fn rotation_to_rejects_incompatible_shapes() {
        let mut l = Layout::new();
        let straight = l.create_piece(GridPosition::new(0, 0), Left, Right).unwrap();
        let corner = l.create_piece(GridPosition::new(0, 0), Down, Right).unwrap();
        assert_eq!(l.rotation_to(straight, corner), None);
        assert!(!l.piece_same_as(straight, corner));
    }

    #[test]
    fn same_as_is_not_rotation_aware() {
        let mut l = Layout::new();
        let straight = l.create_piece(GridPosition::new(0, 0), Left, Right).unwrap();
        let vertical = l.create_piece(GridPosition::new(0, 0), Up, Down).unwrap();
        assert!(!l.piece_same_as(straight, vertical));
        let rotated = l.rotate_piece(straight, Rotation::new(1)).unwrap();
        assert!(l.piece_same_as(rotated, vertical));
    }
}
