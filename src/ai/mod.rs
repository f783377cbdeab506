//! Move-selection algorithms and the uniform `choose_move` entry point.
//!
//! All AIs consume the same engine surface: they clone the authoritative
//! (board, player, opponent) state, ask the move generator for candidates,
//! apply candidates to the clones and score or sample the results. The
//! chosen move is returned to the caller, who applies it to the real board
//! through the same `apply_move` contract human moves use.

pub mod evaluate;
pub mod mcts;
pub mod minimax;
pub mod random_bot;

use crate::board::{Board, Move};
use crate::player::Player;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Who controls a seat, with algorithm parameters where relevant.
///
/// A closed enum: dispatch happens in `choose_move`, and there is no other
/// way to plug in a move selector.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AiKind {
    /// Moves come from an external UI layer; `choose_move` yields `None`.
    Human,
    /// Uniform corner/orientation sampling baseline.
    Random,
    /// Depth-bounded alpha-beta search.
    Minimax { depth: u32 },
    /// UCT tree search with the given iteration budget.
    Mcts { iterations: u32 },
}

impl fmt::Display for AiKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiKind::Human => write!(f, "human"),
            AiKind::Random => write!(f, "random"),
            AiKind::Minimax { depth } => write!(f, "minimax:{depth}"),
            AiKind::Mcts { iterations } => write!(f, "mcts:{iterations}"),
        }
    }
}

impl FromStr for AiKind {
    type Err = String;

    /// Parses `human`, `random`, `minimax[:depth]` or `mcts[:iterations]`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, param) = match s.split_once(':') {
            Some((name, param)) => (name, Some(param)),
            None => (s, None),
        };
        let parse = |default: u32| -> Result<u32, String> {
            match param {
                Some(p) => p
                    .parse::<u32>()
                    .map_err(|e| format!("bad parameter for {name}: {e}")),
                None => Ok(default),
            }
        };
        match name {
            "human" => Ok(AiKind::Human),
            "random" => Ok(AiKind::Random),
            "minimax" => Ok(AiKind::Minimax { depth: parse(2)? }),
            "mcts" => Ok(AiKind::Mcts { iterations: parse(300)? }),
            _ => Err(format!("unknown player kind: {s}")),
        }
    }
}

/// Selects a move for `player` with the given algorithm.
///
/// `None` means "no move available" (or a human seat) and is an expected
/// outcome, not an error; callers skip the turn. Every `Some` move is drawn
/// from the legal-move space, so the subsequent `apply_move` on the
/// authoritative board must succeed — a rejection there is a programming
/// error, not a game state.
pub fn choose_move<R: Rng>(
    kind: AiKind,
    board: &Board,
    player: &Player,
    opponent: &Player,
    rng: &mut R,
) -> Option<Move> {
    match kind {
        AiKind::Human => None,
        AiKind::Random => random_bot::choose_move(board, player, rng),
        AiKind::Minimax { depth } => minimax::Minimax::new(depth).find_best_move(board, player, opponent),
        AiKind::Mcts { iterations } => {
            mcts::Mcts::new(iterations).find_best_move(board, player, opponent, rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ai_kind_parses_with_and_without_params() {
        assert_eq!("human".parse::<AiKind>(), Ok(AiKind::Human));
        assert_eq!("random".parse::<AiKind>(), Ok(AiKind::Random));
        assert_eq!("minimax:3".parse::<AiKind>(), Ok(AiKind::Minimax { depth: 3 }));
        assert_eq!("minimax".parse::<AiKind>(), Ok(AiKind::Minimax { depth: 2 }));
        assert_eq!("mcts:500".parse::<AiKind>(), Ok(AiKind::Mcts { iterations: 500 }));
        assert!("alphabeta".parse::<AiKind>().is_err());
        assert!("mcts:lots".parse::<AiKind>().is_err());
    }

    #[test]
    fn ai_kind_round_trips_through_display() {
        for kind in [
            AiKind::Human,
            AiKind::Random,
            AiKind::Minimax { depth: 4 },
            AiKind::Mcts { iterations: 64 },
        ] {
            assert_eq!(kind.to_string().parse::<AiKind>(), Ok(kind));
        }
    }
}
