//! Canonical chess-rule constants and rule variants.
//!
//! Board geometry literals (home rows, castling columns, pawn direction)
//! plus the castling-safety variant flag threaded through move generation.

use crate::game_state::chess_types::{Color, Wing};

/// Column the kings start on.
pub const KING_HOME_COL: u8 = 4;

/// Rank row a color's pieces start on (row 0 is Black's back rank).
#[inline]
pub const fn back_row(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Rank row a color's pawns start on; double pushes are keyed on it.
#[inline]
pub const fn pawn_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row delta of a single pawn push. White advances toward row 0.
#[inline]
pub const fn forward_row_delta(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Column a wing's rook starts on.
#[inline]
pub const fn rook_home_col(wing: Wing) -> u8 {
    match wing {
        Wing::Kingside => 7,
        Wing::Queenside => 0,
    }
}

/// Column the castling rook lands on.
#[inline]
pub const fn rook_castle_col(wing: Wing) -> u8 {
    match wing {
        Wing::Kingside => 5,
        Wing::Queenside => 3,
    }
}

/// Column direction of the king's two-square castling step.
#[inline]
pub const fn castle_col_delta(wing: Wing) -> i8 {
    match wing {
        Wing::Kingside => 1,
        Wing::Queenside => -1,
    }
}

/// Castling-safety variant.
///
/// `ClearPath` admits castling whenever both participants are unmoved and
/// the file between them is empty, without asking whether the king crosses
/// an attacked square. `GuardedPath` additionally rejects castling out of,
/// through, or into attack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CastlingRule {
    #[default]
    ClearPath,
    GuardedPath,
}
