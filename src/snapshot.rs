//! Plain-data snapshots of a game in progress.
//!
//! A snapshot stores only primitives (grid bytes, piece id lists, counters),
//! so it is trivially serializable; enable the `serde` feature for derived
//! `Serialize`/`Deserialize`. Corner sets and discard stacks are not stored:
//! corners are recomputed from the grid on restore, and a restored game
//! simply starts with an empty undo history.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ai::AiKind;
use crate::board::{Board, BoardConfig, EMPTY};
use crate::pieces::PIECE_COUNT;
use crate::player::{Color, Player};

/// Per-seat persisted state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlayerSnapshot {
    pub id: u8,
    /// `AiKind` in its textual form, e.g. `"mcts:300"`.
    pub ai: String,
    pub remaining: Vec<usize>,
    pub score: i32,
    pub turn_number: u32,
    pub first_move: bool,
}

/// Complete persisted game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub start_points: Vec<(usize, usize)>,
    pub grid: Vec<Vec<u8>>,
    pub turn_number: u32,
    pub active_player: usize,
    pub players: Vec<PlayerSnapshot>,
}

impl GameSnapshot {
    /// Captures the current game state. `active_player` is an index into
    /// `players`, the seat whose turn it is.
    pub fn capture(board: &Board, players: &[Player], active_player: usize) -> Self {
        GameSnapshot {
            rows: board.rows(),
            cols: board.cols(),
            start_points: board.config().start_points.clone(),
            grid: board.grid().clone(),
            turn_number: board.turn_number(),
            active_player,
            players: players
                .iter()
                .map(|p| PlayerSnapshot {
                    id: p.id(),
                    ai: p.ai().to_string(),
                    remaining: p.remaining_pieces().to_vec(),
                    score: p.score(),
                    turn_number: p.turn_number(),
                    first_move: p.is_first_move(),
                })
                .collect(),
        }
    }

    /// Validates the snapshot and rebuilds the live game state.
    ///
    /// Corner sets are reconstructed with a full board rescan, so a restored
    /// game is move-for-move equivalent to the captured one.
    pub fn restore(&self) -> Result<(Board, Vec<Player>, usize), String> {
        let player_count = self.players.len();
        if !(2..=4).contains(&player_count) {
            return Err(format!("unsupported player count: {player_count}"));
        }
        if self.rows == 0 || self.cols == 0 {
            return Err("board dimensions must be nonzero".to_string());
        }
        if self.start_points.len() != player_count {
            return Err(format!(
                "{} start points for {} players",
                self.start_points.len(),
                player_count
            ));
        }
        if self.grid.len() != self.rows || self.grid.iter().any(|row| row.len() != self.cols) {
            return Err(format!("grid does not match {}x{}", self.rows, self.cols));
        }
        if self.active_player >= player_count {
            return Err(format!("active player {} out of range", self.active_player));
        }
        for (seat, ps) in self.players.iter().enumerate() {
            if ps.id as usize != seat + 1 {
                return Err(format!("seat {} holds player id {}", seat, ps.id));
            }
            if ps.remaining.iter().any(|&piece| piece >= PIECE_COUNT) {
                return Err(format!("player {} lists an unknown piece id", ps.id));
            }
        }
        for row in &self.grid {
            for &cell in row {
                if cell != EMPTY && cell as usize > player_count {
                    return Err(format!("grid cell owned by unknown player {cell}"));
                }
            }
        }

        let mut players = Vec::with_capacity(player_count);
        for (seat, ps) in self.players.iter().enumerate() {
            let ai: AiKind = ps.ai.parse()?;
            players.push(Player::from_snapshot_parts(
                ps.id,
                Color::ALL[seat],
                ai,
                ps.remaining.clone(),
                ps.score,
                ps.turn_number,
                ps.first_move,
            ));
        }

        let config = BoardConfig {
            rows: self.rows,
            cols: self.cols,
            player_count,
            start_points: self.start_points.clone(),
        };
        let board = Board::from_parts(config, self.grid.clone(), self.turn_number);
        board.recompute_all_corners(&mut players);
        Ok((board, players, self.active_player))
    }
}
