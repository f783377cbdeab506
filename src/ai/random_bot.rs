//! Uniformly shuffled move sampling, also used as the rollout policy.
//!
//! Rather than enumerating the full move list and indexing into it, the bot
//! shuffles each choice axis (piece, orientation, footprint cell, corner)
//! and takes the first placement the board accepts. That keeps the common
//! case cheap while still returning `None` exactly when no legal move
//! exists, because the nested loops cover the complete anchor space that
//! legal moves can occupy.

use crate::board::{Board, Move};
use crate::pieces;
use crate::player::Player;
use rand::seq::SliceRandom;
use rand::Rng;

/// Picks a random legal move for `player`, or `None` if there is none.
pub fn choose_move<R: Rng>(board: &Board, player: &Player, rng: &mut R) -> Option<Move> {
    if player.is_first_move() {
        return choose_first_move(board, player, rng);
    }

    let mut piece_ids: Vec<usize> = player.remaining_pieces().to_vec();
    piece_ids.shuffle(rng);

    for piece_id in piece_ids {
        let piece = pieces::piece(piece_id);
        let mut orientations: Vec<usize> = (0..piece.orientations().len()).collect();
        orientations.shuffle(rng);

        for oi in orientations {
            let fp = &piece.orientations()[oi];
            let mut cells: Vec<(usize, usize)> = fp.cells().to_vec();
            cells.shuffle(rng);
            let mut corners: Vec<(usize, usize)> = player.corners().iter_all().collect();
            corners.shuffle(rng);

            for (cr, cc) in corners {
                for &(r, c) in &cells {
                    let anchor = (cr as i32 - r as i32, cc as i32 - c as i32);
                    if board.is_legal_move(fp, anchor, player) {
                        return Some(Move::new(piece_id, oi, anchor));
                    }
                }
            }
        }
    }
    None
}

/// Opening placement: anchor a random footprint cell onto the start point.
/// Only distinct orientations are sampled, so one pass is exhaustive.
fn choose_first_move<R: Rng>(board: &Board, player: &Player, rng: &mut R) -> Option<Move> {
    let start = board.start_point(player.id());
    let mut piece_ids: Vec<usize> = player.remaining_pieces().to_vec();
    piece_ids.shuffle(rng);

    for piece_id in piece_ids {
        let piece = pieces::piece(piece_id);
        let mut orientations: Vec<usize> = (0..piece.orientations().len()).collect();
        orientations.shuffle(rng);

        for oi in orientations {
            let fp = &piece.orientations()[oi];
            let mut cells: Vec<(usize, usize)> = fp.cells().to_vec();
            cells.shuffle(rng);
            for (r, c) in cells {
                let anchor = (start.0 as i32 - r as i32, start.1 as i32 - c as i32);
                if board.is_legal_first_move(fp, anchor, player) {
                    return Some(Move::new(piece_id, oi, anchor));
                }
            }
        }
    }
    None
}
