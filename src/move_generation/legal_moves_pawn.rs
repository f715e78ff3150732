use crate::game_state::board::Board;
use crate::game_state::chess_rules::{forward_row_delta, pawn_row};
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_shared::is_enemy;
use crate::moves::pawn_moves::pawn_attacks;

/// Pseudo-legal pawn destinations: single push onto an empty square, double
/// push from the home rank with both squares empty, and diagonal captures.
/// No en-passant and no promotion handling.
pub fn pawn_moves(board: &Board, color: Color, from: Square, out: &mut Vec<Square>) {
    let forward = forward_row_delta(color);

    if let Some(one) = from.offset(forward, 0) {
        if board.get(one).is_none() {
            out.push(one);
        }
    }

    if from.row() == pawn_row(color) {
        if let (Some(one), Some(two)) = (from.offset(forward, 0), from.offset(2 * forward, 0)) {
            if board.get(one).is_none() && board.get(two).is_none() {
                out.push(two);
            }
        }
    }

    for target in pawn_attacks(color, from) {
        if is_enemy(board, color, target) {
            out.push(target);
        }
    }
}
