//! The incremental corner maintenance must stay equivalent to a full board
//! rescan at every point of a game, and every recorded corner must satisfy
//! the donor rule against the live grid.

use blokus::pieces::Diagonal;
use blokus::{choose_move, is_game_over, AiKind, Board, BoardConfig, Color, Player, EMPTY};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

fn assert_matches_full_recompute(board: &Board, players: &[Player]) {
    let mut rescanned = players.to_vec();
    board.recompute_all_corners(&mut rescanned);
    for (incremental, full) in players.iter().zip(&rescanned) {
        assert_eq!(
            incremental.corners(),
            full.corners(),
            "corner drift for player {} on turn {}",
            incremental.id(),
            board.turn_number()
        );
    }
}

fn assert_corners_satisfy_donor_rule(board: &Board, players: &[Player]) {
    for player in players {
        let id = player.id();
        for d in Diagonal::ALL {
            for &(r, c) in player.corners().set(d) {
                assert_eq!(board.cell(r, c), EMPTY, "corner on occupied cell");
                // The donor sits one step against the diagonal sense.
                let (dr, dc) = d.offset();
                let donor = ((r as i32 - dr) as usize, (c as i32 - dc) as usize);
                assert_eq!(board.cell(donor.0, donor.1), id, "corner without donor");
                // Neither orthogonal neighbor shared with the donor may be
                // the player's own cell, otherwise edge contact would be
                // possible there.
                assert_ne!(board.cell(donor.0, c), id);
                assert_ne!(board.cell(r, donor.1), id);
            }
        }
    }
}

/// Orthogonally adjacent same-owner cells are only ever part of the same
/// placement; the discard stacks recover which placement covered each cell.
fn assert_no_cross_piece_edge_contact(board: &Board, players: &[Player]) {
    use std::collections::HashMap;

    let mut placement: HashMap<(usize, usize), (u8, usize)> = HashMap::new();
    for player in players {
        for (n, mv) in player.discarded_pieces().iter().enumerate() {
            for &(r, c) in mv.footprint().cells() {
                let coord = (
                    (mv.anchor.0 + r as i32) as usize,
                    (mv.anchor.1 + c as i32) as usize,
                );
                placement.insert(coord, (player.id(), n));
            }
        }
    }

    for r in 0..board.rows() {
        for c in 0..board.cols() {
            let owner = board.cell(r, c);
            if owner == EMPTY {
                continue;
            }
            for (nr, nc) in [(r + 1, c), (r, c + 1)] {
                if nr < board.rows() && nc < board.cols() && board.cell(nr, nc) == owner {
                    assert_eq!(
                        placement.get(&(r, c)),
                        placement.get(&(nr, nc)),
                        "player {owner} edge-touches itself across placements at ({r},{c})"
                    );
                }
            }
        }
    }
}

fn run_seeded_game(seed: u64, config: BoardConfig) {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut board = Board::new(config);
    let count = board.config().player_count;
    let mut players: Vec<Player> = (0..count)
        .map(|i| Player::new(i as u8 + 1, Color::ALL[i], AiKind::Random))
        .collect();

    for _ in 0..300 {
        if is_game_over(&board, players.iter()) {
            break;
        }
        for seat in 0..count {
            let opponent = (seat + 1) % count;
            if let Some(mv) =
                choose_move(AiKind::Random, &board, &players[seat], &players[opponent], &mut rng)
            {
                assert!(board.apply_move(&mv, seat, &mut players));
                assert_matches_full_recompute(&board, &players);
                assert_corners_satisfy_donor_rule(&board, &players);
                assert_no_cross_piece_edge_contact(&board, &players);
            }
        }
    }
    assert!(is_game_over(&board, players.iter()));
}

#[test]
fn incremental_update_equals_rescan_two_players() {
    for seed in [1, 17, 99] {
        run_seeded_game(seed, BoardConfig::duo());
    }
}

#[test]
fn incremental_update_equals_rescan_four_players() {
    run_seeded_game(5, BoardConfig::new(12, 12, 4));
}

#[test]
fn undo_heavy_sequence_stays_consistent() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(23);
    let mut board = Board::new(BoardConfig::new(9, 9, 2));
    let mut players = vec![
        Player::new(1, Color::Blue, AiKind::Random),
        Player::new(2, Color::Yellow, AiKind::Random),
    ];

    // Interleave plays with undo/replay cycles.
    for round in 0..10 {
        for seat in 0..2 {
            let opponent = 1 - seat;
            let Some(mv) =
                choose_move(AiKind::Random, &board, &players[seat], &players[opponent], &mut rng)
            else {
                continue;
            };
            assert!(board.apply_move(&mv, seat, &mut players));
            if round % 2 == 0 {
                assert!(board.undo_last_move(seat, &mut players));
                assert_matches_full_recompute(&board, &players);
                assert!(board.apply_move(&mv, seat, &mut players));
            }
            assert_matches_full_recompute(&board, &players);
            assert_corners_satisfy_donor_rule(&board, &players);
        }
    }
}
