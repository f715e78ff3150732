use crate::game_state::board::Board;
use crate::game_state::chess_types::{CastlingRights, Color, GameStatus, Piece, Square};

/// Single history record for `apply_move` / `undo_move`.
///
/// Snapshots the full pre-move position (board, rights, turn, status) so an
/// undo restores the game exactly, plus the move itself for introspection.
#[derive(Debug, Clone)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,

    pub prev_board: Board,
    pub prev_castling_rights: CastlingRights,
    pub prev_side_to_move: Color,
    pub prev_status: GameStatus,
}
