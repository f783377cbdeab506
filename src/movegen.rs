//! Legal-move enumeration and the fast "has any move" existence probe.
//!
//! Full enumeration is the dominant cost of tree search (piece orientations
//! x board cells) and is only run when a move must actually be chosen.
//! Terminal detection runs every ply, so it uses a much narrower probe that
//! anchors footprint cells directly on the player's recorded corner
//! coordinates and short-circuits on the first hit. The asymmetry is
//! deliberate.

use crate::board::{Board, Move};
use crate::pieces;
use crate::player::Player;
use std::collections::HashSet;

/// All legal moves for `player` on `board`.
///
/// First moves anchor every footprint cell onto the player's start point;
/// regular moves scan the whole grid per orientation. Every returned move is
/// guaranteed to pass `apply_move`.
pub fn enumerate_moves(board: &Board, player: &Player) -> Vec<Move> {
    let mut moves = Vec::new();
    if player.is_first_move() {
        let start = board.start_point(player.id());
        for &piece_id in player.remaining_pieces() {
            let piece = pieces::piece(piece_id);
            for (oi, fp) in piece.orientations().iter().enumerate() {
                for &(r, c) in fp.cells() {
                    let anchor = (start.0 as i32 - r as i32, start.1 as i32 - c as i32);
                    if board.is_legal_first_move(fp, anchor, player) {
                        moves.push(Move::new(piece_id, oi, anchor));
                    }
                }
            }
        }
    } else {
        for &piece_id in player.remaining_pieces() {
            let piece = pieces::piece(piece_id);
            for (oi, fp) in piece.orientations().iter().enumerate() {
                for r in 0..board.rows() {
                    for c in 0..board.cols() {
                        let anchor = (r as i32, c as i32);
                        if board.is_legal_move(fp, anchor, player) {
                            moves.push(Move::new(piece_id, oi, anchor));
                        }
                    }
                }
            }
        }
    }
    moves
}

/// Whether `player` has at least one legal move.
///
/// Instead of scanning the grid, this tries only anchors that put some
/// footprint cell on a recorded corner coordinate (every legal non-first
/// move must do exactly that), deduplicating repeated anchors per
/// orientation and returning on the first legal placement.
pub fn has_any_move(board: &Board, player: &Player) -> bool {
    if player.remaining_pieces().is_empty() {
        return false;
    }

    if player.is_first_move() {
        let start = board.start_point(player.id());
        for &piece_id in player.remaining_pieces() {
            for fp in pieces::piece(piece_id).orientations() {
                for &(r, c) in fp.cells() {
                    let anchor = (start.0 as i32 - r as i32, start.1 as i32 - c as i32);
                    if board.is_legal_first_move(fp, anchor, player) {
                        return true;
                    }
                }
            }
        }
        return false;
    }

    let corners: Vec<(usize, usize)> = player.corners().iter_all().collect();
    if corners.is_empty() {
        return false;
    }

    for &piece_id in player.remaining_pieces() {
        for fp in pieces::piece(piece_id).orientations() {
            let mut checked: HashSet<(i32, i32)> = HashSet::new();
            for &(cr, cc) in &corners {
                for &(r, c) in fp.cells() {
                    let anchor = (cr as i32 - r as i32, cc as i32 - c as i32);
                    if !checked.insert(anchor) {
                        continue;
                    }
                    if board.is_legal_move(fp, anchor, player) {
                        return true;
                    }
                }
            }
        }
    }
    false
}

/// The game is over iff no player can move.
pub fn is_game_over<'a, I>(board: &Board, players: I) -> bool
where
    I: IntoIterator<Item = &'a Player>,
{
    players.into_iter().all(|p| !has_any_move(board, p))
}
