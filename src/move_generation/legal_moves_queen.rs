use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_shared::is_empty_or_enemy;
use crate::moves::queen_moves::queen_attacks;

pub fn queen_moves(board: &Board, color: Color, from: Square, out: &mut Vec<Square>) {
    for target in queen_attacks(board, from) {
        if is_empty_or_enemy(board, color, target) {
            out.push(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::queen_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn lone_queen_covers_rank_file_and_diagonals() {
        let mut board = Board::empty();
        let d4 = Square::at(4, 3);
        board.set(d4, Some(Piece::new(Color::Black, PieceKind::Queen)));
        let mut out = Vec::new();
        queen_moves(&board, Color::Black, d4, &mut out);
        assert_eq!(out.len(), 27);
    }
}
