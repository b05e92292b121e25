//! Movement rules - pure legality checks for every piece kind
//!
//! Legality depends only on the piece kind, the two squares and the board; nothing
//! here mutates state. Ownership is always derived from the board half, so a
//! piece's owner is the owner of the square it currently stands on.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{PieceKind, Position, BOARD_SIZE, MAX_DESTINATIONS};

/// Cached destination set of a selected piece
pub type Destinations = ArrayVec<Position, MAX_DESTINATIONS>;

/// Whether a `kind` piece standing on `from` may move to `to`.
///
/// Stones never move. The destination may be empty or hold an opponent's
/// non-Stone piece (a capture); a Stone or a piece of the mover's own side
/// blocks it.
pub fn legal_move(kind: PieceKind, from: Position, to: Position, board: &Board) -> bool {
    if from == to || !from.in_bounds() || !to.in_bounds() {
        return false;
    }

    if !destination_open(from, to, board) {
        return false;
    }

    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let (ax, ay) = (dx.abs(), dy.abs());

    match kind {
        PieceKind::Stone => false,
        PieceKind::King => ax <= 1 && ay <= 1,
        PieceKind::Knight => (ax == 2 && ay == 1) || (ax == 1 && ay == 2),
        PieceKind::Bishop => ax == ay && path_clear(from, to, board),
        PieceKind::Rook => (dx == 0) != (dy == 0) && path_clear(from, to, board),
    }
}

/// Every square a `kind` piece on `from` may move to, in row-major order.
pub fn destinations(kind: PieceKind, from: Position, board: &Board) -> Destinations {
    let mut out = Destinations::new();
    if !kind.is_movable() {
        return out;
    }

    for y in 0..BOARD_SIZE as i8 {
        for x in 0..BOARD_SIZE as i8 {
            let to = Position::new(x, y);
            if legal_move(kind, from, to, board) && !out.is_full() {
                out.push(to);
            }
        }
    }
    out
}

/// Destination is empty, or holds a non-Stone piece of the opponent.
fn destination_open(from: Position, to: Position, board: &Board) -> bool {
    match board.get(to) {
        Some(None) => true,
        Some(Some(PieceKind::Stone)) | None => false,
        Some(Some(_)) => to.owner() != from.owner(),
    }
}

/// All cells strictly between `from` and `to` are empty.
///
/// Only meaningful for straight or diagonal lines; callers check alignment.
fn path_clear(from: Position, to: Position, board: &Board) -> bool {
    let step_x = (to.x - from.x).signum();
    let step_y = (to.y - from.y).signum();

    let mut cur = from.offset(step_x, step_y);
    while cur != to {
        if !board.is_empty(cur) {
            return false;
        }
        cur = cur.offset(step_x, step_y);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(pieces: &[(i8, i8, PieceKind)]) -> Board {
        let mut board = Board::new();
        for &(x, y, kind) in pieces {
            board.set(Position::new(x, y), Some(kind));
        }
        board
    }

    #[test]
    fn test_king_steps_one_square() {
        let board = board_with(&[(5, 2, PieceKind::King)]);
        let from = Position::new(5, 2);

        assert!(legal_move(PieceKind::King, from, Position::new(6, 3), &board));
        assert!(legal_move(PieceKind::King, from, Position::new(5, 1), &board));
        assert!(!legal_move(PieceKind::King, from, Position::new(7, 2), &board));
        assert!(!legal_move(PieceKind::King, from, from, &board));
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let board = board_with(&[
            (0, 1, PieceKind::Knight),
            (0, 2, PieceKind::Stone),
            (1, 1, PieceKind::Rook),
            (1, 2, PieceKind::Bishop),
        ]);
        let from = Position::new(0, 1);

        assert!(legal_move(PieceKind::Knight, from, Position::new(1, 3), &board));
        assert!(legal_move(PieceKind::Knight, from, Position::new(2, 0), &board));
        assert!(legal_move(PieceKind::Knight, from, Position::new(2, 2), &board));
        assert!(!legal_move(PieceKind::Knight, from, Position::new(2, 3), &board));
    }

    #[test]
    fn test_bishop_blocked_by_piece_in_path() {
        let board = board_with(&[(1, 0, PieceKind::Bishop), (3, 2, PieceKind::Stone)]);
        let from = Position::new(1, 0);

        assert!(legal_move(PieceKind::Bishop, from, Position::new(2, 1), &board));
        assert!(!legal_move(PieceKind::Bishop, from, Position::new(3, 2), &board));
        assert!(!legal_move(PieceKind::Bishop, from, Position::new(4, 3), &board));
        assert!(!legal_move(PieceKind::Bishop, from, Position::new(1, 3), &board));
    }

    #[test]
    fn test_rook_needs_straight_clear_line() {
        let board = board_with(&[(2, 0, PieceKind::Rook), (2, 4, PieceKind::King)]);
        let from = Position::new(2, 0);

        assert!(legal_move(PieceKind::Rook, from, Position::new(2, 3), &board));
        assert!(legal_move(PieceKind::Rook, from, Position::new(10, 0), &board));
        assert!(!legal_move(PieceKind::Rook, from, Position::new(2, 5), &board));
        assert!(!legal_move(PieceKind::Rook, from, Position::new(3, 1), &board));
    }

    #[test]
    fn test_capture_only_opponent_pieces() {
        let board = board_with(&[
            (2, 4, PieceKind::Rook),
            (2, 5, PieceKind::Knight),
            (3, 4, PieceKind::Knight),
        ]);
        let from = Position::new(2, 4);

        // (2,5) is row 5: same half, blocked.
        assert!(!legal_move(PieceKind::Rook, from, Position::new(2, 5), &board));
        assert!(!legal_move(PieceKind::Rook, from, Position::new(3, 4), &board));

        let board = board_with(&[(2, 5, PieceKind::Rook), (2, 6, PieceKind::Knight)]);
        assert!(legal_move(
            PieceKind::Rook,
            Position::new(2, 5),
            Position::new(2, 6),
            &board
        ));
    }

    #[test]
    fn test_stone_never_moves_nor_is_captured() {
        let board = board_with(&[(5, 5, PieceKind::Stone), (5, 6, PieceKind::King)]);

        assert!(!legal_move(
            PieceKind::Stone,
            Position::new(5, 5),
            Position::new(5, 4),
            &board
        ));
        assert!(!legal_move(
            PieceKind::King,
            Position::new(5, 6),
            Position::new(5, 5),
            &board
        ));
        assert!(destinations(PieceKind::Stone, Position::new(5, 5), &board).is_empty());
    }

    #[test]
    fn test_destinations_of_open_rook_and_bishop_fill_capacity() {
        let board = board_with(&[(5, 5, PieceKind::Rook)]);
        assert_eq!(
            destinations(PieceKind::Rook, Position::new(5, 5), &board).len(),
            MAX_DESTINATIONS
        );

        let board = board_with(&[(5, 5, PieceKind::Bishop)]);
        assert_eq!(
            destinations(PieceKind::Bishop, Position::new(5, 5), &board).len(),
            MAX_DESTINATIONS
        );
    }

    #[test]
    fn test_destinations_of_corner_king() {
        let board = board_with(&[(0, 0, PieceKind::King)]);
        let dests = destinations(PieceKind::King, Position::new(0, 0), &board);
        assert_eq!(
            dests.as_slice(),
            &[Position::new(1, 0), Position::new(0, 1), Position::new(1, 1)]
        );
    }
}
