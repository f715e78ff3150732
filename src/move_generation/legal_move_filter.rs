//! Self-check legality filter.
//!
//! Narrows the pseudo-legal set to moves that do not leave the mover's own
//! king attacked, by simulating each candidate on a scratch copy of the
//! board. The scratch move is origin-cleared / destination-set only; a
//! castling candidate's rook is not relocated in the simulation, so the
//! candidate is vetted against the king's destination square alone.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::CastlingRule;
use crate::game_state::chess_types::{CastlingRights, Piece, Square};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::pseudo_moves;

/// The only gate preventing a player from moving into or ignoring check.
pub fn legal_moves(
    board: &Board,
    piece: Piece,
    from: Square,
    rights: &CastlingRights,
    rule: CastlingRule,
) -> Vec<Square> {
    let candidates = pseudo_moves(board, piece, from, rights, rule);
    let mut legal = Vec::with_capacity(candidates.len());

    for to in candidates {
        let mut scratch = board.clone();
        scratch.set(from, None);
        scratch.set(to, Some(piece));

        // Illegal if own king is in check after the move.
        if is_king_in_check(&scratch, piece.color) {
            continue;
        }
        legal.push(to);
    }

    legal
}
