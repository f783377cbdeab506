//! The board: cell ownership grid, placement rules and corner bookkeeping.
//!
//! The legality fast-path is the per-player corner sets maintained by
//! [`Player`]: a non-first move is only legal when one of its footprint's
//! convex corners lands on a recorded corner coordinate of the opposite
//! diagonal sense, and none of its cells touches the player's own cells
//! edge-to-edge. `apply_move` keeps those sets up to date incrementally,
//! restricted to the placed piece's bounding box grown by one cell; undo and
//! load fall back to a full rescan.

use crate::pieces::{self, Diagonal, Footprint};
use crate::player::Player;
use std::fmt;
use std::str::FromStr;

/// Owner value of an empty cell.
pub const EMPTY: u8 = 0;

const ORTHOGONAL: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Board construction parameters.
///
/// Start points are indexed by player id minus one; each player's first piece
/// must cover their start point. Two-player games default to opposite
/// corners, four-player games to all four corners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub player_count: usize,
    pub start_points: Vec<(usize, usize)>,
}

impl BoardConfig {
    pub fn new(rows: usize, cols: usize, player_count: usize) -> Self {
        assert!(rows > 0 && cols > 0, "board dimensions must be nonzero");
        assert!(
            (2..=4).contains(&player_count),
            "Blokus supports 2 to 4 players"
        );
        let corners = [
            (0, 0),
            (0, cols - 1),
            (rows - 1, cols - 1),
            (rows - 1, 0),
        ];
        let start_points = if player_count == 2 {
            vec![corners[0], corners[2]]
        } else {
            corners[..player_count].to_vec()
        };
        BoardConfig { rows, cols, player_count, start_points }
    }

    /// The 14x14 two-player board.
    pub fn duo() -> Self {
        BoardConfig::new(14, 14, 2)
    }

    /// The 20x20 four-player board.
    pub fn classic() -> Self {
        BoardConfig::new(20, 20, 4)
    }
}

/// A candidate placement: piece, orientation and top-left board anchor.
///
/// The anchor is signed because corner-aligned candidates are produced by
/// subtracting a footprint offset from a board coordinate; validation rejects
/// anything that puts an occupied cell out of bounds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub piece: usize,
    pub orientation: usize,
    pub anchor: (i32, i32),
}

impl Move {
    pub fn new(piece: usize, orientation: usize, anchor: (i32, i32)) -> Self {
        Move { piece, orientation, anchor }
    }

    pub fn footprint(&self) -> &'static Footprint {
        pieces::piece(self.piece).orientation(self.orientation)
    }

    /// Number of squares this move places.
    pub fn size(&self) -> usize {
        pieces::piece(self.piece).size
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{},{},{})",
            pieces::piece(self.piece).name,
            self.orientation,
            self.anchor.0,
            self.anchor.1
        )
    }
}

impl FromStr for Move {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !(s.starts_with('(') && s.ends_with(')')) {
            return Err("expected format: (piece,orientation,row,col)".to_string());
        }
        let parts: Vec<&str> = s[1..s.len() - 1].split(',').map(|p| p.trim()).collect();
        if parts.len() != 4 {
            return Err("expected format: (piece,orientation,row,col)".to_string());
        }
        let piece = pieces::piece_by_name(parts[0])
            .ok_or_else(|| format!("unknown piece: {}", parts[0]))?;
        let orientation = parts[1].parse::<usize>().map_err(|e| e.to_string())?;
        if orientation >= piece.orientations().len() {
            return Err(format!("{} has no orientation {}", piece.name, orientation));
        }
        let r = parts[2].parse::<i32>().map_err(|e| e.to_string())?;
        let c = parts[3].parse::<i32>().map_err(|e| e.to_string())?;
        Ok(Move::new(piece.id, orientation, (r, c)))
    }
}

/// The authoritative game grid.
///
/// The board owns cell ownership and the start-point table but not the
/// players; operations that change corner sets take the player list as a
/// mutable slice and update it in place, an explicit documented side effect.
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    grid: Vec<Vec<u8>>,
    turn_number: u32,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        assert_eq!(config.start_points.len(), config.player_count);
        let grid = vec![vec![EMPTY; config.cols]; config.rows];
        Board { config, grid, turn_number: 1 }
    }

    /// Rebuilds a board from persisted primitives. The caller has already
    /// validated grid dimensions against the config.
    pub(crate) fn from_parts(config: BoardConfig, grid: Vec<Vec<u8>>, turn_number: u32) -> Self {
        Board { config, grid, turn_number }
    }

    pub fn rows(&self) -> usize {
        self.config.rows
    }

    pub fn cols(&self) -> usize {
        self.config.cols
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn grid(&self) -> &Vec<Vec<u8>> {
        &self.grid
    }

    /// Owner of a cell, `EMPTY` if unoccupied.
    pub fn cell(&self, r: usize, c: usize) -> u8 {
        self.grid[r][c]
    }

    /// Start point assigned to a player id (1-based).
    pub fn start_point(&self, player_id: u8) -> (usize, usize) {
        self.config.start_points[(player_id - 1) as usize]
    }

    fn in_bounds(&self, r: i32, c: i32) -> bool {
        r >= 0 && c >= 0 && (r as usize) < self.config.rows && (c as usize) < self.config.cols
    }

    /// First-move rule: the footprint must lie fully on empty cells and one
    /// of its occupied cells must cover the player's start point.
    pub fn is_legal_first_move(
        &self,
        footprint: &Footprint,
        anchor: (i32, i32),
        player: &Player,
    ) -> bool {
        let start = self.start_point(player.id());
        let mut covers_start = false;
        for &(r, c) in footprint.cells() {
            let br = anchor.0 + r as i32;
            let bc = anchor.1 + c as i32;
            if !self.in_bounds(br, bc) || self.grid[br as usize][bc as usize] != EMPTY {
                return false;
            }
            if (br as usize, bc as usize) == start {
                covers_start = true;
            }
        }
        covers_start
    }

    /// Regular placement rule: in bounds, over empty cells, touching one of
    /// the player's recorded corners and never edge-adjacent to the player's
    /// own cells. A cell that donates a corner but also edge-touches the
    /// player is excluded outright; edge contact anywhere vetoes the move.
    pub fn is_legal_move(
        &self,
        footprint: &Footprint,
        anchor: (i32, i32),
        player: &Player,
    ) -> bool {
        let mut corner_contact = false;
        for (idx, &(r, c)) in footprint.cells().iter().enumerate() {
            let br = anchor.0 + r as i32;
            let bc = anchor.1 + c as i32;
            if !self.in_bounds(br, bc) || self.grid[br as usize][bc as usize] != EMPTY {
                return false;
            }
            let flags = footprint.corner_flags()[idx];
            for d in Diagonal::ALL {
                if flags[d.index()]
                    && player.corners().contains(d.opposite(), (br as usize, bc as usize))
                {
                    corner_contact = true;
                }
            }
            for (dr, dc) in ORTHOGONAL {
                let (ar, ac) = (br + dr, bc + dc);
                if self.in_bounds(ar, ac) && self.grid[ar as usize][ac as usize] == player.id() {
                    return false;
                }
            }
        }
        corner_contact
    }

    /// Validates and applies a move for `players[player_idx]`.
    ///
    /// On success the grid gains the player's id on every covered cell, the
    /// piece moves from the player's remaining set onto their discard stack,
    /// scores and turn counters advance, and every player's corner sets are
    /// updated incrementally around the placed piece. Returns `false` for an
    /// illegal move without touching any state; failure is the normal signal,
    /// not an error.
    pub fn apply_move(&mut self, mv: &Move, player_idx: usize, players: &mut [Player]) -> bool {
        let footprint = mv.footprint();
        {
            let player = &players[player_idx];
            if !player.has_piece(mv.piece) {
                return false;
            }
            let legal = if player.is_first_move() {
                self.is_legal_first_move(footprint, mv.anchor, player)
            } else {
                self.is_legal_move(footprint, mv.anchor, player)
            };
            if !legal {
                return false;
            }
        }

        let id = players[player_idx].id();
        for &(r, c) in footprint.cells() {
            let br = (mv.anchor.0 + r as i32) as usize;
            let bc = (mv.anchor.1 + c as i32) as usize;
            self.grid[br][bc] = id;
        }

        let player = &mut players[player_idx];
        player.discard_piece(*mv);
        player.clear_first_move();
        player.advance_turn();
        player.update_score();
        self.turn_number += 1;

        self.update_corners_around(footprint, mv.anchor, players);
        true
    }

    /// Reverses the most recent move of `players[player_idx]`.
    ///
    /// Undo is rare (search backtracking, takebacks), so corner sets are
    /// rebuilt with a full rescan rather than incrementally. Returns `false`
    /// when the player has no discarded piece to take back.
    pub fn undo_last_move(&mut self, player_idx: usize, players: &mut [Player]) -> bool {
        let Some(mv) = players[player_idx].retrieve_last_piece() else {
            return false;
        };
        for &(r, c) in mv.footprint().cells() {
            let br = (mv.anchor.0 + r as i32) as usize;
            let bc = (mv.anchor.1 + c as i32) as usize;
            self.grid[br][bc] = EMPTY;
        }
        let player = &mut players[player_idx];
        player.rewind_turn();
        player.update_score();
        self.turn_number -= 1;

        self.recompute_all_corners(players);
        true
    }

    /// Full corner rebuild for every player: O(rows x cols) scan. Used on
    /// load and undo.
    pub fn recompute_all_corners(&self, players: &mut [Player]) {
        for player in players.iter_mut() {
            let id = player.id();
            player.corners_mut().clear();
            for r in 0..self.config.rows {
                for c in 0..self.config.cols {
                    if self.grid[r][c] == id {
                        let donors = self.donor_corners(r, c, id);
                        for d in Diagonal::ALL {
                            if donors[d.index()] {
                                let (dr, dc) = d.offset();
                                let (cr, cc) = (r as i32 + dr, c as i32 + dc);
                                if self.in_bounds(cr, cc) {
                                    player.corners_mut().insert(d, (cr as usize, cc as usize));
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    /// Incremental corner update covering the placed footprint's bounding box
    /// expanded by one cell. A new piece can only create or destroy corners
    /// within one cell of its own bounding box, so the window is sufficient;
    /// the equivalence with a full rescan is asserted by tests.
    fn update_corners_around(
        &self,
        footprint: &Footprint,
        anchor: (i32, i32),
        players: &mut [Player],
    ) {
        let r_low = (anchor.0 - 1).max(0) as usize;
        let c_low = (anchor.1 - 1).max(0) as usize;
        let r_high = ((anchor.0 + footprint.rows() as i32 + 1) as usize).min(self.config.rows);
        let c_high = ((anchor.1 + footprint.cols() as i32 + 1) as usize).min(self.config.cols);

        for player in players.iter_mut() {
            let id = player.id();
            for r in r_low..r_high {
                for c in c_low..c_high {
                    if self.grid[r][c] != id {
                        continue;
                    }
                    let donors = self.donor_corners(r, c, id);
                    for d in Diagonal::ALL {
                        let (dr, dc) = d.offset();
                        let (cr, cc) = (r as i32 + dr, c as i32 + dc);
                        if !self.in_bounds(cr, cc) {
                            continue;
                        }
                        let coord = (cr as usize, cc as usize);
                        if donors[d.index()] {
                            player.corners_mut().insert(d, coord);
                        } else {
                            player.corners_mut().remove(d, coord);
                        }
                    }
                }
            }
        }
    }

    /// Corner-donor test for a cell owned by `owner`: a diagonal direction
    /// donates a corner iff the diagonal cell is empty and neither orthogonal
    /// neighbor sharing that diagonal belongs to `owner`. Out of bounds
    /// counts as "no corner" at the insertion site.
    fn donor_corners(&self, r: usize, c: usize, owner: u8) -> [bool; 4] {
        let (r, c) = (r as i32, c as i32);
        let occupied = |dr: i32, dc: i32| {
            self.in_bounds(r + dr, c + dc)
                && self.grid[(r + dr) as usize][(c + dc) as usize] != EMPTY
        };
        let own = |dr: i32, dc: i32| {
            self.in_bounds(r + dr, c + dc)
                && self.grid[(r + dr) as usize][(c + dc) as usize] == owner
        };
        let mut donors = [false; 4];
        for d in Diagonal::ALL {
            let (dr, dc) = d.offset();
            donors[d.index()] = !occupied(dr, dc) && !own(dr, 0) && !own(0, dc);
        }
        donors
    }
}
