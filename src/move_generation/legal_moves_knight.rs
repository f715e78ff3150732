use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_shared::is_empty_or_enemy;
use crate::moves::knight_moves::knight_attacks;

pub fn knight_moves(board: &Board, color: Color, from: Square, out: &mut Vec<Square>) {
    for target in knight_attacks(from) {
        if is_empty_or_enemy(board, color, target) {
            out.push(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::knight_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Square};

    #[test]
    fn knight_cannot_land_on_own_pieces() {
        let board = Board::starting_position();
        let mut out = Vec::new();
        knight_moves(&board, Color::White, Square::at(7, 1), &mut out);
        assert_eq!(out, vec![Square::at(5, 2), Square::at(5, 0)]);
    }
}
