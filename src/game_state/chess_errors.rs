//! Typed results surfaced to the presentation layer.
//!
//! Nothing in the core panics on malformed boundary input; every rejection
//! is one of these variants and the caller branches on it.

use thiserror::Error;

use crate::game_state::chess_types::Square;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Raw coordinates outside the 8x8 extent; a caller contract violation.
    #[error("coordinates ({row}, {col}) are outside the board")]
    InvalidSquare { row: u8, col: u8 },

    /// Selection of an empty square.
    #[error("no piece to select on {0}")]
    NoPieceAtSquare(Square),

    /// Selection of an opponent piece on the mover's turn.
    #[error("the piece on {0} belongs to the opponent")]
    WrongTurnColor(Square),

    /// Submitted destination is not in the piece's legal set.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// Board input after the game reached a terminal state.
    #[error("the game is already decided; restart to play again")]
    GameFinished,
}
