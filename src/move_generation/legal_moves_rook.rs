use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::legal_move_shared::is_empty_or_enemy;
use crate::moves::rook_moves::rook_attacks;

pub fn rook_moves(board: &Board, color: Color, from: Square, out: &mut Vec<Square>) {
    for target in rook_attacks(board, from) {
        if is_empty_or_enemy(board, color, target) {
            out.push(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::rook_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn rook_ray_captures_enemy_blocker_but_not_own() {
        let mut board = Board::empty();
        let a4 = Square::at(4, 0);
        board.set(a4, Some(Piece::new(Color::White, PieceKind::Rook)));
        board.set(
            Square::at(4, 3),
            Some(Piece::new(Color::Black, PieceKind::Bishop)),
        );
        board.set(
            Square::at(6, 0),
            Some(Piece::new(Color::White, PieceKind::Pawn)),
        );
        let mut out = Vec::new();
        rook_moves(&board, Color::White, a4, &mut out);
        assert!(out.contains(&Square::at(4, 3)));
        assert!(!out.contains(&Square::at(4, 4)));
        assert!(out.contains(&Square::at(5, 0)));
        assert!(!out.contains(&Square::at(6, 0)));
    }
}
