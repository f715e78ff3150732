//! Aggregate game state.
//!
//! `GameState` is the single value every operation threads through: board,
//! turn, castling rights, rule variant, history stack, and terminal status.
//! It is mutated only by the controller's apply/undo entry points.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::CastlingRule;
use crate::game_state::chess_types::{CastlingRights, Color, GameStatus};
use crate::game_state::undo_state::MoveRecord;

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub castling_rule: CastlingRule,

    /// Which side the local player drives; presentation uses it for board
    /// orientation. White always moves first regardless.
    pub player_color: Color,

    pub history: Vec<MoveRecord>,
    pub status: GameStatus,
}

impl GameState {
    pub fn new_game(player_color: Color) -> Self {
        Self::with_castling_rule(player_color, CastlingRule::default())
    }

    pub fn with_castling_rule(player_color: Color, castling_rule: CastlingRule) -> Self {
        Self {
            board: Board::starting_position(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::default(),
            castling_rule,
            player_color,
            history: Vec::new(),
            status: GameStatus::Ongoing,
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.status.winner()
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_types::{Color, GameStatus};

    #[test]
    fn new_game_starts_with_white_to_move_and_clear_rights() {
        let state = GameState::new_game(Color::Black);
        assert_eq!(state.side_to_move, Color::White);
        assert_eq!(state.player_color, Color::Black);
        assert_eq!(state.status, GameStatus::Ongoing);
        assert!(state.history.is_empty());
        assert!(!state.castling_rights.side(Color::White).king_moved);
        assert!(!state.castling_rights.side(Color::Black).king_moved);
    }
}
