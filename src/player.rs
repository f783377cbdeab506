//! Per-player game state: remaining pieces, discard history, score,
//! first-move flag and the corner sets that drive placement legality.

use crate::ai::AiKind;
use crate::board::Move;
use crate::pieces::{self, Diagonal, MONOMINO, PIECE_COUNT};
use std::collections::BTreeSet;

/// Score before any piece is placed: one point per unplaced square, 89 total.
pub const STARTING_SCORE: i32 = 89;

/// Bonus for placing all 21 pieces.
const ALL_PIECES_BONUS: i32 = 15;

/// Extra bonus when the monomino was the very last piece placed.
const MONOMINO_LAST_BONUS: i32 = 5;

/// Standard Blokus player colors, assigned by seat order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Color {
    Blue,
    Yellow,
    Red,
    Green,
}

impl Color {
    pub const ALL: [Color; 4] = [Color::Blue, Color::Yellow, Color::Red, Color::Green];

    pub fn name(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Red => "red",
            Color::Green => "green",
        }
    }
}

/// Four sets of board coordinates, one per diagonal direction, holding the
/// cells where this player may legally make corner contact.
///
/// Ordered sets keep iteration deterministic, which keeps seeded searches
/// reproducible run to run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerCorners {
    sets: [BTreeSet<(usize, usize)>; 4],
}

impl PlayerCorners {
    pub fn contains(&self, d: Diagonal, coord: (usize, usize)) -> bool {
        self.sets[d.index()].contains(&coord)
    }

    pub fn insert(&mut self, d: Diagonal, coord: (usize, usize)) {
        self.sets[d.index()].insert(coord);
    }

    pub fn remove(&mut self, d: Diagonal, coord: (usize, usize)) {
        self.sets[d.index()].remove(&coord);
    }

    pub fn clear(&mut self) {
        for set in &mut self.sets {
            set.clear();
        }
    }

    /// Total cardinality across all four directions.
    pub fn count(&self) -> usize {
        self.sets.iter().map(|s| s.len()).sum()
    }

    /// All recorded coordinates in diagonal-direction order. A coordinate
    /// reachable in two senses appears once per sense.
    pub fn iter_all(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.sets.iter().flat_map(|s| s.iter().copied())
    }

    pub fn set(&self, d: Diagonal) -> &BTreeSet<(usize, usize)> {
        &self.sets[d.index()]
    }
}

/// One seat at the table.
#[derive(Clone, Debug)]
pub struct Player {
    id: u8,
    color: Color,
    ai: AiKind,
    remaining: Vec<usize>,
    discarded: Vec<Move>,
    score: i32,
    turn_number: u32,
    first_move: bool,
    corners: PlayerCorners,
}

impl Player {
    pub fn new(id: u8, color: Color, ai: AiKind) -> Self {
        let remaining: Vec<usize> = (0..PIECE_COUNT).collect();
        let score = scoring_fn(&remaining);
        Player {
            id,
            color,
            ai,
            remaining,
            discarded: Vec::new(),
            score,
            turn_number: 1,
            first_move: true,
            corners: PlayerCorners::default(),
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn ai(&self) -> AiKind {
        self.ai
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    /// Remaining piece ids, always sorted ascending.
    pub fn remaining_pieces(&self) -> &[usize] {
        &self.remaining
    }

    /// Applied moves, oldest first; only the most recent supports undo.
    pub fn discarded_pieces(&self) -> &[Move] {
        &self.discarded
    }

    pub fn has_piece(&self, piece: usize) -> bool {
        self.remaining.binary_search(&piece).is_ok()
    }

    pub fn corners(&self) -> &PlayerCorners {
        &self.corners
    }

    pub(crate) fn corners_mut(&mut self) -> &mut PlayerCorners {
        &mut self.corners
    }

    pub(crate) fn clear_first_move(&mut self) {
        self.first_move = false;
    }

    pub(crate) fn advance_turn(&mut self) {
        self.turn_number += 1;
    }

    pub(crate) fn rewind_turn(&mut self) {
        self.turn_number -= 1;
    }

    pub(crate) fn update_score(&mut self) {
        self.score = scoring_fn(&self.remaining);
    }

    /// Moves a piece from the remaining set onto the discard stack.
    pub(crate) fn discard_piece(&mut self, mv: Move) {
        if let Ok(pos) = self.remaining.binary_search(&mv.piece) {
            self.remaining.remove(pos);
            self.discarded.push(mv);
        }
    }

    /// Pops the most recent discard and returns the piece to the remaining
    /// set. Undoing the opening move restores the first-move flag.
    pub(crate) fn retrieve_last_piece(&mut self) -> Option<Move> {
        let mv = self.discarded.pop()?;
        if let Err(pos) = self.remaining.binary_search(&mv.piece) {
            self.remaining.insert(pos, mv.piece);
        }
        if self.discarded.is_empty() {
            self.first_move = true;
        }
        Some(mv)
    }

    /// Rebuilds a player from persisted primitives. Corner sets are left
    /// empty; the caller recomputes them against the restored board.
    pub(crate) fn from_snapshot_parts(
        id: u8,
        color: Color,
        ai: AiKind,
        mut remaining: Vec<usize>,
        score: i32,
        turn_number: u32,
        first_move: bool,
    ) -> Self {
        remaining.sort_unstable();
        remaining.dedup();
        Player {
            id,
            color,
            ai,
            remaining,
            discarded: Vec::new(),
            score,
            turn_number,
            first_move,
            corners: PlayerCorners::default(),
        }
    }
}

/// Final-score rule: 89 minus the squares still unplaced, +15 for placing
/// everything, and +5 more when the single leftover was the monomino and the
/// pre-bonus score sits exactly at 88.
pub fn scoring_fn(remaining: &[usize]) -> i32 {
    let mut score = STARTING_SCORE;
    if remaining.is_empty() {
        score += ALL_PIECES_BONUS;
    } else {
        score -= remaining
            .iter()
            .map(|&id| pieces::piece(id).size as i32)
            .sum::<i32>();
    }
    if remaining.len() == 1 && remaining[0] == MONOMINO && score == STARTING_SCORE - 1 {
        score += MONOMINO_LAST_BONUS;
    }
    score
}

/// Recomputes every player's score and returns the ids of the highest
/// scorers; ties return multiple winners.
pub fn get_winners(players: &mut [Player]) -> Vec<u8> {
    for p in players.iter_mut() {
        p.update_score();
    }
    let max_score = players.iter().map(|p| p.score).max().unwrap_or(0);
    players
        .iter()
        .filter(|p| p.score == max_score)
        .map(|p| p.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AiKind;

    #[test]
    fn scoring_boundaries() {
        assert_eq!(scoring_fn(&(0..PIECE_COUNT).collect::<Vec<_>>()), 0);
        assert_eq!(scoring_fn(&[]), 104);
        // Lone monomino: 89 - 1 = 88, plus the exact-88 bonus.
        assert_eq!(scoring_fn(&[MONOMINO]), 93);
        // Lone domino gets no bonus.
        assert_eq!(scoring_fn(&[1]), 87);
        // Monomino plus another piece: no bonus either.
        assert_eq!(scoring_fn(&[MONOMINO, 1]), 86);
    }

    #[test]
    fn winners_handle_ties() {
        let mut players = vec![
            Player::new(1, Color::Blue, AiKind::Human),
            Player::new(2, Color::Yellow, AiKind::Human),
        ];
        players[0].remaining = vec![];
        players[1].remaining = vec![MONOMINO];
        assert_eq!(get_winners(&mut players), vec![1]);
        assert_eq!(players[0].score(), 104);
        assert_eq!(players[1].score(), 93);

        players[0].remaining = vec![MONOMINO];
        assert_eq!(get_winners(&mut players), vec![1, 2]);
    }

    #[test]
    fn discard_and_retrieve_keep_remaining_sorted() {
        let mut player = Player::new(1, Color::Blue, AiKind::Human);
        let mv = Move::new(7, 0, (0, 0));
        player.discard_piece(mv);
        assert!(!player.has_piece(7));
        assert_eq!(player.discarded_pieces(), &[mv]);

        assert_eq!(player.retrieve_last_piece(), Some(mv));
        assert!(player.has_piece(7));
        let mut sorted = player.remaining_pieces().to_vec();
        sorted.sort_unstable();
        assert_eq!(player.remaining_pieces(), &sorted[..]);
        assert!(player.retrieve_last_piece().is_none());
    }
}
