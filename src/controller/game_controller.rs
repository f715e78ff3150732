//! Interface layer between a front-end and the rules core.
//!
//! The controller owns the single `GameState` plus the in-progress
//! selection, and is the only entry point that mutates them. A front-end
//! drives it in two steps: `select` a square holding the mover's piece to
//! learn its legal destinations, then `submit_move` one of them. Undo and
//! restart round out the surface; everything else is read-only accessors.

use tracing::debug;

use crate::game_state::board::Board;
use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::CastlingRule;
use crate::game_state::chess_types::{Color, GameStatus, Piece, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, undo_move, AppliedMove};
use crate::move_generation::legal_move_filter::legal_moves;
use crate::move_generation::terminal_scan::enumerate_legal_moves;

/// An in-progress selection: a piece and its cached legal destinations.
#[derive(Debug, Clone)]
pub struct Selection {
    pub origin: Square,
    pub piece: Piece,
    pub targets: Vec<Square>,
}

#[derive(Debug, Clone)]
pub struct GameController {
    state: GameState,
    selection: Option<Selection>,
}

impl GameController {
    pub fn new_game(player_color: Color) -> Self {
        Self::from_state(GameState::new_game(player_color))
    }

    pub fn with_castling_rule(player_color: Color, rule: CastlingRule) -> Self {
        Self::from_state(GameState::with_castling_rule(player_color, rule))
    }

    /// Adopt an externally prepared state (custom positions, tests).
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            selection: None,
        }
    }

    /// Select the piece on `square` for the side to move and compute its
    /// legal destinations. Any previous selection is replaced; a rejected
    /// selection clears it.
    pub fn select(&mut self, square: Square) -> ChessResult<&[Square]> {
        if self.state.is_game_over() {
            self.selection = None;
            return Err(ChessError::GameFinished);
        }
        let piece = match self.state.board.get(square) {
            Some(piece) => piece,
            None => {
                self.selection = None;
                return Err(ChessError::NoPieceAtSquare(square));
            }
        };
        if piece.color != self.state.side_to_move {
            self.selection = None;
            return Err(ChessError::WrongTurnColor(square));
        }

        let targets = legal_moves(
            &self.state.board,
            piece,
            square,
            &self.state.castling_rights,
            self.state.castling_rule,
        );
        debug!(%square, kind = ?piece.kind, targets = targets.len(), "piece selected");

        let selection = self.selection.insert(Selection {
            origin: square,
            piece,
            targets,
        });
        Ok(&selection.targets)
    }

    /// Apply `origin -> destination` for the side to move. The selection is
    /// consumed either way: a destination outside the legal set answers
    /// `IllegalMove` and mutates nothing, returning the controller to the
    /// awaiting-selection state.
    pub fn submit_move(&mut self, origin: Square, destination: Square) -> ChessResult<AppliedMove> {
        if self.state.is_game_over() {
            return Err(ChessError::GameFinished);
        }
        let selection = self.selection.take();

        let piece = self
            .state
            .board
            .get(origin)
            .ok_or(ChessError::NoPieceAtSquare(origin))?;
        if piece.color != self.state.side_to_move {
            return Err(ChessError::WrongTurnColor(origin));
        }

        // Reuse the selection's cached targets when it matches this origin.
        let targets = match selection {
            Some(selection) if selection.origin == origin => selection.targets,
            _ => legal_moves(
                &self.state.board,
                piece,
                origin,
                &self.state.castling_rights,
                self.state.castling_rule,
            ),
        };

        if !targets.contains(&destination) {
            return Err(ChessError::IllegalMove {
                from: origin,
                to: destination,
            });
        }

        apply_move(&mut self.state, origin, destination)
    }

    /// Take back the most recent move. `false` on empty history; any
    /// in-progress selection is discarded either way.
    pub fn undo(&mut self) -> bool {
        self.selection = None;
        undo_move(&mut self.state)
    }

    /// Back to the canonical starting position, keeping the player color
    /// and rule variant.
    pub fn restart(&mut self) {
        debug!("game restarted");
        self.state =
            GameState::with_castling_rule(self.state.player_color, self.state.castling_rule);
        self.selection = None;
    }

    /// Every legal `(from, to)` pair for the side to move.
    pub fn enumerate_turn_moves(&self) -> Vec<(Square, Square)> {
        enumerate_legal_moves(
            &self.state.board,
            &self.state.castling_rights,
            self.state.castling_rule,
            self.state.side_to_move,
        )
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    /// Independent copy for presentation layers that keep their own model.
    pub fn board_snapshot(&self) -> Board {
        self.state.board.clone()
    }

    #[inline]
    pub fn current_turn(&self) -> Color {
        self.state.side_to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    #[inline]
    pub fn winner(&self) -> Option<Color> {
        self.state.winner()
    }

    #[inline]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }
}
