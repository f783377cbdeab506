//! End-to-end rules checks driven through the public API only.

use blokus::pieces::Diagonal;
use blokus::{
    choose_move, enumerate_moves, get_winners, has_any_move, is_game_over, AiKind, Board,
    BoardConfig, Color, GameSnapshot, Move, Player, PlayerSnapshot, EMPTY,
};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

#[test]
fn x_pentomino_donates_exactly_four_corners() {
    // 4x4 board with an inset start point so the X fits flush against the
    // top-left; every reachable corner coordinate is then hand-checkable.
    let config = BoardConfig {
        rows: 4,
        cols: 4,
        player_count: 2,
        start_points: vec![(1, 1), (3, 3)],
    };
    let mut board = Board::new(config);
    let mut players = vec![
        Player::new(1, Color::Blue, AiKind::Human),
        Player::new(2, Color::Yellow, AiKind::Human),
    ];

    let mv = Move::new(17, 0, (0, 0));
    assert!(board.apply_move(&mv, 0, &mut players));

    for &(r, c) in [(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)].iter() {
        assert_eq!(board.cell(r, c), 1);
    }
    assert!(!players[0].has_piece(17));
    assert_eq!(players[0].discarded_pieces(), &[mv]);
    // 84 squares still unplaced.
    assert_eq!(players[0].score(), 5);
    assert!(!players[0].is_first_move());

    let corners = &players[0];
    let mut all: Vec<(usize, usize)> = corners.corners().iter_all().collect();
    all.sort_unstable();
    assert_eq!(all, vec![(0, 3), (2, 3), (3, 0), (3, 2)]);
    // The arm tips block the top-left quadrant entirely.
    assert!(corners.corners().set(Diagonal::TopLeft).is_empty());
    assert_eq!(
        corners.corners().set(Diagonal::TopRight).iter().copied().collect::<Vec<_>>(),
        vec![(0, 3)]
    );
}

#[test]
fn bonuses_decide_the_winner() {
    let finished = GameSnapshot {
        rows: 5,
        cols: 5,
        start_points: vec![(0, 0), (4, 4)],
        grid: vec![vec![EMPTY; 5]; 5],
        turn_number: 43,
        active_player: 0,
        players: vec![
            PlayerSnapshot {
                id: 1,
                ai: "random".to_string(),
                remaining: vec![],
                score: 0,
                turn_number: 22,
                first_move: false,
            },
            PlayerSnapshot {
                id: 2,
                ai: "random".to_string(),
                remaining: vec![0],
                score: 0,
                turn_number: 21,
                first_move: false,
            },
        ],
    };
    let (_board, mut players, _active) = finished.restore().unwrap();

    assert_eq!(get_winners(&mut players), vec![1]);
    // All pieces placed: 89 + 15. Monomino left: 88 + 5.
    assert_eq!(players[0].score(), 104);
    assert_eq!(players[1].score(), 93);
}

#[test]
fn seeded_playout_keeps_probe_and_enumeration_agreeing() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(2024);
    let mut board = Board::new(BoardConfig::new(7, 7, 2));
    let mut players = vec![
        Player::new(1, Color::Blue, AiKind::Random),
        Player::new(2, Color::Yellow, AiKind::Random),
    ];

    let mut seat = 0;
    for _ in 0..200 {
        if is_game_over(&board, players.iter()) {
            break;
        }
        for p in &players {
            let moves = enumerate_moves(&board, p);
            assert_eq!(
                has_any_move(&board, p),
                !moves.is_empty(),
                "probe and enumeration disagree on turn {}",
                board.turn_number()
            );
        }
        if let Some(mv) = choose_move(AiKind::Random, &board, &players[seat], &players[1 - seat], &mut rng) {
            assert!(board.apply_move(&mv, seat, &mut players));
        }
        seat = 1 - seat;
    }

    assert!(is_game_over(&board, players.iter()));
    for p in &players {
        assert!(enumerate_moves(&board, p).is_empty());
    }
}

#[test]
fn four_player_game_runs_to_completion() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    let mut board = Board::new(BoardConfig::new(10, 10, 4));
    let mut players: Vec<Player> = (0..4)
        .map(|i| Player::new(i as u8 + 1, Color::ALL[i], AiKind::Random))
        .collect();

    for _ in 0..200 {
        if is_game_over(&board, players.iter()) {
            break;
        }
        for seat in 0..4 {
            let opponent = (seat + 1) % 4;
            if let Some(mv) =
                choose_move(AiKind::Random, &board, &players[seat], &players[opponent], &mut rng)
            {
                assert!(board.apply_move(&mv, seat, &mut players));
            }
        }
    }

    assert!(is_game_over(&board, players.iter()));
    let winners = get_winners(&mut players);
    assert!(!winners.is_empty());
    for p in &players {
        // Everyone placed their opening piece on a 10x10 board.
        assert!(!p.is_first_move());
    }
}
