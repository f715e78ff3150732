use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Squares a rook on `from` attacks: each orthogonal ray up to and
/// including the first occupied square.
pub fn rook_attacks(board: &Board, from: Square) -> Vec<Square> {
    let mut attacks = Vec::new();
    for (row_delta, col_delta) in ROOK_DIRECTIONS {
        let mut cursor = from;
        while let Some(next) = cursor.offset(row_delta, col_delta) {
            attacks.push(next);
            if board.get(next).is_some() {
                break;
            }
            cursor = next;
        }
    }
    attacks
}
