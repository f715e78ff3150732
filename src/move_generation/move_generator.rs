//! Dispatch seams for pseudo-move and raw-threat generation.
//!
//! `pseudo_moves` answers "where may this piece go, ignoring self-check";
//! `threat_squares` answers "which squares does this piece attack". The two
//! differ for kings (castling is a move, never a threat) and pawns (pushes
//! are moves, diagonals are threats), which keeps check detection decoupled
//! from castling-rights logic.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::CastlingRule;
use crate::game_state::chess_types::{CastlingRights, Piece, PieceKind, Square};
use crate::move_generation::legal_moves_bishop::bishop_moves;
use crate::move_generation::legal_moves_king::king_moves;
use crate::move_generation::legal_moves_knight::knight_moves;
use crate::move_generation::legal_moves_pawn::pawn_moves;
use crate::move_generation::legal_moves_queen::queen_moves;
use crate::move_generation::legal_moves_rook::rook_moves;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

/// Pseudo-legal destinations for `piece` on `from`: movement pattern and
/// occupancy only, with no self-check filtering.
pub fn pseudo_moves(
    board: &Board,
    piece: Piece,
    from: Square,
    rights: &CastlingRights,
    rule: CastlingRule,
) -> Vec<Square> {
    let mut out = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, piece.color, from, &mut out),
        PieceKind::Knight => knight_moves(board, piece.color, from, &mut out),
        PieceKind::Bishop => bishop_moves(board, piece.color, from, &mut out),
        PieceKind::Rook => rook_moves(board, piece.color, from, &mut out),
        PieceKind::Queen => queen_moves(board, piece.color, from, &mut out),
        PieceKind::King => king_moves(board, piece.color, from, rights, rule, &mut out),
    }
    out
}

/// Squares `piece` on `from` attacks. Never contains castling steps.
pub fn threat_squares(board: &Board, piece: Piece, from: Square) -> Vec<Square> {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, from),
        PieceKind::Knight => knight_attacks(from),
        PieceKind::Bishop => bishop_attacks(board, from),
        PieceKind::Rook => rook_attacks(board, from),
        PieceKind::Queen => queen_attacks(board, from),
        PieceKind::King => king_attacks(from),
    }
}
