//! King pseudo-move generation: unit steps plus castling candidates.
//!
//! Castling is offered while king and wing rook are both unmoved, the rook
//! still sits on its home column, and the file between them is clear. Under
//! `CastlingRule::GuardedPath` the king must additionally not castle out
//! of, through, or into attack; `ClearPath` skips those attack probes.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castle_col_delta, rook_home_col, CastlingRule, KING_HOME_COL};
use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind, Square, Wing};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::is_empty_or_enemy;
use crate::moves::king_moves::king_attacks;

pub fn king_moves(
    board: &Board,
    color: Color,
    from: Square,
    rights: &CastlingRights,
    rule: CastlingRule,
    out: &mut Vec<Square>,
) {
    for target in king_attacks(from) {
        if is_empty_or_enemy(board, color, target) {
            out.push(target);
        }
    }

    castling_candidates(board, color, from, rights, rule, out);
}

fn castling_candidates(
    board: &Board,
    color: Color,
    from: Square,
    rights: &CastlingRights,
    rule: CastlingRule,
    out: &mut Vec<Square>,
) {
    let side = rights.side(color);
    if side.king_moved || from.col() != KING_HOME_COL {
        return;
    }
    if rule == CastlingRule::GuardedPath && is_square_attacked(board, from, color.opposite()) {
        return;
    }

    for wing in [Wing::Queenside, Wing::Kingside] {
        if side.rook_moved(wing) {
            continue;
        }

        let rook_home = Square::at(from.row(), rook_home_col(wing));
        if board.get(rook_home) != Some(Piece::new(color, PieceKind::Rook)) {
            continue;
        }
        if !file_between_is_empty(board, from, rook_home) {
            continue;
        }

        let step = castle_col_delta(wing);
        let (Some(crossed), Some(target)) = (from.offset(0, step), from.offset(0, 2 * step))
        else {
            continue;
        };

        if rule == CastlingRule::GuardedPath {
            let enemy = color.opposite();
            if is_square_attacked(board, crossed, enemy) || is_square_attacked(board, target, enemy)
            {
                continue;
            }
        }

        out.push(target);
    }
}

/// Every square strictly between two squares on the same row is empty.
fn file_between_is_empty(board: &Board, a: Square, b: Square) -> bool {
    let (low, high) = if a.col() < b.col() {
        (a.col(), b.col())
    } else {
        (b.col(), a.col())
    };
    (low + 1..high).all(|col| board.get(Square::at(a.row(), col)).is_none())
}
