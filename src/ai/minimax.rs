//! Depth-bounded minimax with alpha-beta pruning.

use crate::ai::evaluate::greedy_evaluate;
use crate::board::{Board, Move};
use crate::movegen::{enumerate_moves, has_any_move};
use crate::player::Player;

/// Score assigned to a side that is out of moves; dominates any greedy leaf
/// value, so reaching a stuck line is treated like winning or losing it.
const INFINITY: f64 = 10_000.0;

/// Two-seat alpha-beta searcher. The maximizing seat is always index 0 of
/// the cloned player pair, the minimizing seat index 1.
pub struct Minimax {
    depth: u32,
}

impl Minimax {
    pub fn new(depth: u32) -> Self {
        Minimax { depth }
    }

    /// Best move for `player` against `opponent`, or `None` when stuck.
    ///
    /// Candidate moves are ordered by descending piece size before search;
    /// the sort is stable, so ties keep enumeration order and the result is
    /// deterministic for a given position.
    pub fn find_best_move(&self, board: &Board, player: &Player, opponent: &Player) -> Option<Move> {
        let players = [player.clone(), opponent.clone()];
        let (_, best) = self.alpha_beta(board, &players, self.depth, -INFINITY, INFINITY, true);
        best
    }

    fn alpha_beta(
        &self,
        board: &Board,
        players: &[Player; 2],
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> (f64, Option<Move>) {
        if depth == 0 {
            return (greedy_evaluate(&players[0], &players[1]), None);
        }

        let idx = if maximizing { 0 } else { 1 };
        let mut moves = enumerate_moves(board, &players[idx]);
        if moves.is_empty() {
            // Both sides out of moves is a finished game, not a stuck line:
            // score it like a depth-exhausted leaf.
            if !has_any_move(board, &players[1 - idx]) {
                return (greedy_evaluate(&players[0], &players[1]), None);
            }
            return (if maximizing { -INFINITY } else { INFINITY }, None);
        }
        // Big pieces first: committing more squares early tightens the
        // pruning window fastest.
        moves.sort_by(|a, b| b.size().cmp(&a.size()));

        let mut best_value = if maximizing { -INFINITY } else { INFINITY };
        let mut best_move = None;

        for mv in moves {
            let mut next_board = board.clone();
            let mut next_players = players.clone();
            if !next_board.apply_move(&mv, idx, &mut next_players) {
                continue;
            }
            let (value, _) =
                self.alpha_beta(&next_board, &next_players, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                if value > best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best_value);
            } else {
                if value < best_value {
                    best_value = value;
                    best_move = Some(mv);
                }
                beta = beta.min(best_value);
            }
            if beta <= alpha {
                break;
            }
        }
        (best_value, best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardConfig;
    use crate::player::Color;
    use crate::AiKind;

    fn duo_players() -> [Player; 2] {
        [
            Player::new(1, Color::Blue, AiKind::Minimax { depth: 1 }),
            Player::new(2, Color::Yellow, AiKind::Minimax { depth: 1 }),
        ]
    }

    #[test]
    fn opening_move_is_legal_and_uses_a_pentomino() {
        let board = Board::new(BoardConfig::duo());
        let players = duo_players();
        let mv = Minimax::new(1)
            .find_best_move(&board, &players[0], &players[1])
            .unwrap();
        assert!(board.is_legal_first_move(mv.footprint(), mv.anchor, &players[0]));
        assert_eq!(mv.size(), 5);
    }

    #[test]
    fn search_is_deterministic() {
        let mut board = Board::new(BoardConfig::new(8, 8, 2));
        let mut players = duo_players().to_vec();
        assert!(board.apply_move(&Move::new(14, 0, (0, 0)), 0, &mut players));
        assert!(board.apply_move(&Move::new(14, 3, (5, 5)), 1, &mut players));

        let search = Minimax::new(2);
        let first = search.find_best_move(&board, &players[0], &players[1]);
        let second = search.find_best_move(&board, &players[0], &players[1]);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn stuck_player_gets_no_move() {
        let board = Board::new(BoardConfig::duo());
        let mut players = duo_players();
        for id in 0..crate::pieces::PIECE_COUNT {
            players[0].discard_piece(Move::new(id, 0, (0, 0)));
        }
        assert!(Minimax::new(2)
            .find_best_move(&board, &players[0], &players[1])
            .is_none());
    }
}
