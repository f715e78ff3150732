use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};

/// True when `to` is empty or holds an opponent of `color`. Own pieces
/// block without becoming a move target.
#[inline]
pub fn is_empty_or_enemy(board: &Board, color: Color, to: Square) -> bool {
    match board.get(to) {
        None => true,
        Some(piece) => piece.color != color,
    }
}

/// True when `to` holds an opponent of `color`.
#[inline]
pub fn is_enemy(board: &Board, color: Color, to: Square) -> bool {
    matches!(board.get(to), Some(piece) if piece.color != color)
}
