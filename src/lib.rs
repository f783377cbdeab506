//! # Blokus Rules Engine
//!
//! A 2-4 player Blokus engine: the full 21-piece set, placement legality
//! with incremental corner tracking, scoring, terminal detection and three
//! move-selection algorithms (random baseline, alpha-beta minimax, UCT
//! Monte Carlo tree search).
//!
//! The library is deterministic given a seeded RNG; every random component
//! takes `&mut impl Rng` rather than owning entropy. The `play` binary
//! drives AI-vs-AI matches on top of this crate.

pub mod ai;
pub mod board;
pub mod movegen;
pub mod pieces;
pub mod player;
pub mod snapshot;

pub use ai::{choose_move, AiKind};
pub use board::{Board, BoardConfig, Move, EMPTY};
pub use movegen::{enumerate_moves, has_any_move, is_game_over};
pub use player::{get_winners, scoring_fn, Color, Player, PlayerCorners};
pub use snapshot::{GameSnapshot, PlayerSnapshot};
