//! Leaf evaluation shared by the depth-bounded searches.

use crate::player::Player;

/// Weight of corner mobility relative to raw score difference.
const CORNER_WEIGHT: f64 = 2.0;

/// Greedy positional estimate from `player`'s perspective.
///
/// Score difference measures material already committed to the board;
/// the corner-count difference is a cheap proxy for future mobility,
/// counted across all four diagonal senses.
pub fn greedy_evaluate(player: &Player, opponent: &Player) -> f64 {
    let score_diff = (player.score() - opponent.score()) as f64;
    let corner_diff = player.corners().count() as f64 - opponent.corners().count() as f64;
    score_diff + CORNER_WEIGHT * corner_diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, BoardConfig, Move};
    use crate::player::Color;
    use crate::AiKind;

    #[test]
    fn placing_a_piece_improves_the_movers_evaluation() {
        let mut board = Board::new(BoardConfig::duo());
        let mut players = vec![
            Player::new(1, Color::Blue, AiKind::Human),
            Player::new(2, Color::Yellow, AiKind::Human),
        ];
        let before = greedy_evaluate(&players[0], &players[1]);
        assert_eq!(before, 0.0);
        assert!(board.apply_move(&Move::new(14, 0, (0, 0)), 0, &mut players));
        let after = greedy_evaluate(&players[0], &players[1]);
        assert!(after > before);
        assert_eq!(greedy_evaluate(&players[1], &players[0]), -after);
    }
}
