use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_shared::is_empty_or_enemy;
use crate::moves::bishop_moves::bishop_attacks;

pub fn bishop_moves(board: &Board, color: Color, from: Square, out: &mut Vec<Square>) {
    for target in bishop_attacks(board, from) {
        if is_empty_or_enemy(board, color, target) {
            out.push(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::bishop_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Square};

    #[test]
    fn bishop_is_boxed_in_at_the_start() {
        let board = Board::starting_position();
        let mut out = Vec::new();
        bishop_moves(&board, Color::White, Square::at(7, 2), &mut out);
        assert!(out.is_empty());
    }
}
