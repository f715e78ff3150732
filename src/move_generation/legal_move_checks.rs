//! Check analysis over the raw threat layer.
//!
//! A square is attacked when any enemy piece's threat squares contain it.
//! Threats never include castling, so these entry points are safe to call
//! from castling generation itself.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::move_generation::move_generator::threat_squares;

/// Locate the color's king. `None` if absent; the engine assumes at most
/// one king per color and does not verify it.
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    let king = Piece::new(color, PieceKind::King);
    Square::all().find(|&square| board.get(square) == Some(king))
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|(from, piece)| threat_squares(board, piece, from).contains(&square))
}

/// A missing king reads as "not in check".
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match king_square(board, color) {
        Some(square) => is_square_attacked(board, square, color.opposite()),
        None => false,
    }
}
