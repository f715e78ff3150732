use crate::game_state::chess_rules::forward_row_delta;
use crate::game_state::chess_types::{Color, Square};

/// Squares a pawn of `color` on `from` attacks: the two forward diagonals,
/// irrespective of occupancy. Pushes are not attacks.
pub fn pawn_attacks(color: Color, from: Square) -> Vec<Square> {
    let forward = forward_row_delta(color);
    [-1, 1]
        .into_iter()
        .filter_map(|col_delta| from.offset(forward, col_delta))
        .collect()
}
