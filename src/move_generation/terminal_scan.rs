//! Side-wide legal-move scans and terminal classification.
//!
//! Checkmate detection is the legality filter repeated across every piece
//! of the scanned color: if no move survives, the position is terminal, and
//! whether the king is attacked decides checkmate versus stalemate.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::CastlingRule;
use crate::game_state::chess_types::{CastlingRights, Color, GameStatus, Square};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_filter::legal_moves;

/// Every legal `(from, to)` pair for `color`, in board order.
pub fn enumerate_legal_moves(
    board: &Board,
    rights: &CastlingRights,
    rule: CastlingRule,
    color: Color,
) -> Vec<(Square, Square)> {
    let mut moves = Vec::new();
    for (from, piece) in board.pieces_of(color) {
        for to in legal_moves(board, piece, from, rights, rule) {
            moves.push((from, to));
        }
    }
    moves
}

/// Early-exit variant of the scan used for terminal detection.
pub fn side_has_legal_move(
    board: &Board,
    rights: &CastlingRights,
    rule: CastlingRule,
    color: Color,
) -> bool {
    board
        .pieces_of(color)
        .any(|(from, piece)| !legal_moves(board, piece, from, rights, rule).is_empty())
}

/// Classify the position for the side to move.
pub fn evaluate_position(
    board: &Board,
    rights: &CastlingRights,
    rule: CastlingRule,
    color: Color,
) -> GameStatus {
    if side_has_legal_move(board, rights, rule, color) {
        return GameStatus::Ongoing;
    }
    if is_king_in_check(board, color) {
        GameStatus::Checkmate {
            winner: color.opposite(),
        }
    } else {
        GameStatus::Stalemate
    }
}
