//! Move application and undo on the aggregate game state.
//!
//! `apply_move` trusts its caller to have validated legality; it records
//! history, handles the castling rook relocation and rights bookkeeping,
//! moves the piece, flips the turn, and classifies the resulting position.
//! `undo_move` restores the most recent snapshot exactly.

use tracing::{debug, info};

use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{back_row, rook_castle_col, rook_home_col};
use crate::game_state::chess_types::{GameStatus, Piece, PieceKind, Square, Wing};
use crate::game_state::game_state::GameState;
use crate::game_state::undo_state::MoveRecord;
use crate::move_generation::terminal_scan::evaluate_position;

/// What a successful `apply_move` produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub captured: Option<Piece>,
    pub castled: Option<Wing>,
    pub status: GameStatus,
}

pub fn apply_move(state: &mut GameState, from: Square, to: Square) -> ChessResult<AppliedMove> {
    let piece = state
        .board
        .get(from)
        .ok_or(ChessError::NoPieceAtSquare(from))?;
    let captured = state.board.get(to);

    // Snapshot before any mutation so undo restores the position exactly.
    state.history.push(MoveRecord {
        from,
        to,
        moved_piece: piece,
        captured_piece: captured,
        prev_board: state.board.clone(),
        prev_castling_rights: state.castling_rights,
        prev_side_to_move: state.side_to_move,
        prev_status: state.status,
    });

    // Castling bookkeeping before the piece itself moves.
    let castled = update_castling_state(state, piece, from, to);

    state.board.set(to, Some(piece));
    state.board.set(from, None);

    state.side_to_move = state.side_to_move.opposite();
    state.status = evaluate_position(
        &state.board,
        &state.castling_rights,
        state.castling_rule,
        state.side_to_move,
    );

    debug!(
        mover = %piece.color,
        kind = ?piece.kind,
        %from,
        %to,
        captured = ?captured.map(|p| p.kind),
        castled = ?castled,
        "move applied"
    );
    if state.status.is_over() {
        info!(status = ?state.status, "game over");
    }

    Ok(AppliedMove {
        captured,
        castled,
        status: state.status,
    })
}

/// Relocate the castling rook and maintain the moved-flags. Returns the
/// wing when the move was a castling move (a two-column king step).
fn update_castling_state(
    state: &mut GameState,
    piece: Piece,
    from: Square,
    to: Square,
) -> Option<Wing> {
    let color = piece.color;
    let home = back_row(color);

    match piece.kind {
        PieceKind::King if from.col().abs_diff(to.col()) == 2 => {
            let wing = if to.col() < from.col() {
                Wing::Queenside
            } else {
                Wing::Kingside
            };

            let rook_from = Square::at(from.row(), rook_home_col(wing));
            let rook_to = Square::at(from.row(), rook_castle_col(wing));
            let rook = state.board.get(rook_from);
            state.board.set(rook_to, rook);
            state.board.set(rook_from, None);

            let side = state.castling_rights.side_mut(color);
            side.king_moved = true;
            side.mark_rook_moved(wing);
            Some(wing)
        }
        PieceKind::King => {
            state.castling_rights.side_mut(color).king_moved = true;
            None
        }
        PieceKind::Rook if from.row() == home && from.col() == rook_home_col(Wing::Queenside) => {
            state
                .castling_rights
                .side_mut(color)
                .mark_rook_moved(Wing::Queenside);
            None
        }
        PieceKind::Rook if from.row() == home && from.col() == rook_home_col(Wing::Kingside) => {
            state
                .castling_rights
                .side_mut(color)
                .mark_rook_moved(Wing::Kingside);
            None
        }
        _ => None,
    }
}

/// Pop and restore the most recent history record. `false` on empty
/// history, leaving the state untouched.
pub fn undo_move(state: &mut GameState) -> bool {
    let Some(record) = state.history.pop() else {
        return false;
    };

    state.board = record.prev_board;
    state.castling_rights = record.prev_castling_rights;
    state.side_to_move = record.prev_side_to_move;
    state.status = record.prev_status;

    debug!(
        mover = %record.moved_piece.color,
        from = %record.from,
        to = %record.to,
        "move undone"
    );
    true
}

#[cfg(test)]
mod tests {
    use super::{apply_move, undo_move};
    use crate::game_state::chess_types::{Color, GameStatus, Piece, PieceKind, Square, Wing};
    use crate::game_state::game_state::GameState;

    #[test]
    fn apply_moves_the_piece_and_flips_the_turn() {
        let mut state = GameState::new_game(Color::White);
        let e2 = Square::at(6, 4);
        let e4 = Square::at(4, 4);
        let outcome = apply_move(&mut state, e2, e4).expect("pawn push should apply");

        assert_eq!(outcome.captured, None);
        assert_eq!(outcome.status, GameStatus::Ongoing);
        assert_eq!(state.board.get(e2), None);
        assert_eq!(
            state.board.get(e4),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(state.side_to_move, Color::Black);
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn apply_reports_the_captured_piece() {
        let mut state = GameState::new_game(Color::White);
        // Contrive a capture: plant a black knight on e4's diagonal.
        state.board.set(
            Square::at(5, 5),
            Some(Piece::new(Color::Black, PieceKind::Knight)),
        );
        let outcome =
            apply_move(&mut state, Square::at(6, 4), Square::at(5, 5)).expect("capture applies");
        assert_eq!(
            outcome.captured,
            Some(Piece::new(Color::Black, PieceKind::Knight))
        );
    }

    #[test]
    fn kingside_castle_relocates_the_rook_and_sets_flags() {
        let mut state = GameState::new_game(Color::White);
        // Clear f1 and g1.
        state.board.set(Square::at(7, 5), None);
        state.board.set(Square::at(7, 6), None);

        let outcome = apply_move(&mut state, Square::at(7, 4), Square::at(7, 6))
            .expect("castling move should apply");

        assert_eq!(outcome.castled, Some(Wing::Kingside));
        assert_eq!(
            state.board.get(Square::at(7, 6)),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            state.board.get(Square::at(7, 5)),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(state.board.get(Square::at(7, 7)), None);

        let side = state.castling_rights.side(Color::White);
        assert!(side.king_moved);
        assert!(side.kingside_rook_moved);
        assert!(!side.queenside_rook_moved);
    }

    #[test]
    fn queenside_castle_uses_the_far_rook() {
        let mut state = GameState::new_game(Color::White);
        state.board.set(Square::at(7, 1), None);
        state.board.set(Square::at(7, 2), None);
        state.board.set(Square::at(7, 3), None);

        let outcome = apply_move(&mut state, Square::at(7, 4), Square::at(7, 2))
            .expect("castling move should apply");

        assert_eq!(outcome.castled, Some(Wing::Queenside));
        assert_eq!(
            state.board.get(Square::at(7, 3)),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(state.board.get(Square::at(7, 0)), None);
    }

    #[test]
    fn rook_leaving_home_sets_only_its_wing_flag() {
        let mut state = GameState::new_game(Color::White);
        state.board.set(Square::at(6, 0), None);
        apply_move(&mut state, Square::at(7, 0), Square::at(5, 0))
            .expect("rook lift should apply");

        let side = state.castling_rights.side(Color::White);
        assert!(side.queenside_rook_moved);
        assert!(!side.kingside_rook_moved);
        assert!(!side.king_moved);
    }

    #[test]
    fn undo_restores_board_rights_and_turn() {
        let mut state = GameState::new_game(Color::White);
        state.board.set(Square::at(6, 0), None);
        let before_board = state.board.clone();
        let before_rights = state.castling_rights;

        apply_move(&mut state, Square::at(7, 0), Square::at(5, 0))
            .expect("rook lift should apply");
        assert!(state.castling_rights.side(Color::White).queenside_rook_moved);

        assert!(undo_move(&mut state));
        assert_eq!(state.board, before_board);
        assert_eq!(state.castling_rights, before_rights);
        assert_eq!(state.side_to_move, Color::White);
        assert!(state.history.is_empty());
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let mut state = GameState::new_game(Color::White);
        let before = state.board.clone();
        assert!(!undo_move(&mut state));
        assert_eq!(state.board, before);
        assert_eq!(state.side_to_move, Color::White);
    }

    #[test]
    fn apply_rejects_an_empty_origin() {
        let mut state = GameState::new_game(Color::White);
        let err = apply_move(&mut state, Square::at(4, 4), Square::at(3, 4))
            .expect_err("empty origin must be rejected");
        assert_eq!(
            err,
            crate::game_state::chess_errors::ChessError::NoPieceAtSquare(Square::at(4, 4))
        );
        assert!(state.history.is_empty());
    }
}
