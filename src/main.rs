//! AI-vs-AI Blokus match runner.
//!
//! Seats are filled with the engine's move selectors and played to
//! completion; a seed makes the whole match reproducible. Human seats are
//! rejected here, they need an interactive frontend this binary does not
//! provide.

use blokus::{
    choose_move, get_winners, has_any_move, is_game_over, AiKind, Board, BoardConfig, Color,
    Player, EMPTY,
};
use clap::Parser;
use colored::Colorize;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

#[derive(Parser)]
#[command(name = "play", about = "Run an AI-vs-AI Blokus match")]
struct Args {
    /// Number of players (2 or 4)
    #[arg(long, default_value_t = 2)]
    players: usize,

    /// Board rows (defaults: 14 for two players, 20 for four)
    #[arg(long)]
    rows: Option<usize>,

    /// Board columns (defaults: 14 for two players, 20 for four)
    #[arg(long)]
    cols: Option<usize>,

    /// Seat 1 AI: random, minimax[:depth] or mcts[:iterations]
    #[arg(long, default_value = "mcts:300")]
    p1: String,

    /// Seat 2 AI
    #[arg(long, default_value = "mcts:300")]
    p2: String,

    /// Seat 3 AI (four-player games)
    #[arg(long, default_value = "random")]
    p3: String,

    /// Seat 4 AI (four-player games)
    #[arg(long, default_value = "random")]
    p4: String,

    /// RNG seed; omit for a fresh match every run
    #[arg(long)]
    seed: Option<u64>,

    /// Safety cap on full turn rounds
    #[arg(long, default_value_t = 200)]
    max_rounds: u32,

    /// Only print the final position and scores
    #[arg(long, short)]
    quiet: bool,
}

fn parse_seats(args: &Args) -> Result<Vec<AiKind>, String> {
    if args.players != 2 && args.players != 4 {
        return Err(format!("supported player counts are 2 and 4, got {}", args.players));
    }
    let specs = [&args.p1, &args.p2, &args.p3, &args.p4];
    let mut kinds = Vec::with_capacity(args.players);
    for (seat, spec) in specs.iter().take(args.players).enumerate() {
        let kind: AiKind = spec.parse()?;
        if kind == AiKind::Human {
            return Err(format!("seat {} is human; this runner only drives AIs", seat + 1));
        }
        kinds.push(kind);
    }
    Ok(kinds)
}

fn colored_cell(owner: u8) -> colored::ColoredString {
    match owner {
        EMPTY => "·".normal().dimmed(),
        1 => "■".blue(),
        2 => "■".yellow(),
        3 => "■".red(),
        _ => "■".green(),
    }
}

fn render(board: &Board) {
    for r in 0..board.rows() {
        let mut line = String::new();
        for c in 0..board.cols() {
            line.push_str(&format!("{} ", colored_cell(board.cell(r, c))));
        }
        println!("{line}");
    }
}

fn colored_name(player: &Player) -> colored::ColoredString {
    let name = player.color().name();
    match player.color() {
        Color::Blue => name.blue(),
        Color::Yellow => name.yellow(),
        Color::Red => name.red(),
        Color::Green => name.green(),
    }
}

fn main() {
    let args = Args::parse();
    let kinds = match parse_seats(&args) {
        Ok(kinds) => kinds,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let mut config = if args.players == 2 {
        BoardConfig::duo()
    } else {
        BoardConfig::classic()
    };
    if let Some(rows) = args.rows {
        config = BoardConfig::new(rows, args.cols.unwrap_or(rows), args.players);
    } else if let Some(cols) = args.cols {
        config = BoardConfig::new(cols, cols, args.players);
    }

    let mut rng = match args.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_os_rng(),
    };

    let mut board = Board::new(config);
    let mut players: Vec<Player> = kinds
        .iter()
        .enumerate()
        .map(|(i, &kind)| Player::new(i as u8 + 1, Color::ALL[i], kind))
        .collect();

    'game: for _round in 0..args.max_rounds {
        for seat in 0..players.len() {
            if is_game_over(&board, players.iter()) {
                break 'game;
            }
            if !has_any_move(&board, &players[seat]) {
                continue;
            }
            let opponent = (seat + 1) % players.len();
            let mv = choose_move(
                players[seat].ai(),
                &board,
                &players[seat],
                &players[opponent],
                &mut rng,
            );
            let Some(mv) = mv else { continue };
            if !board.apply_move(&mv, seat, &mut players) {
                // An AI move must come from the legal-move space.
                panic!("board rejected {} chosen for {}", mv, players[seat].color().name());
            }
            if !args.quiet {
                println!("{} plays {}", colored_name(&players[seat]), mv);
                render(&board);
                println!();
            }
        }
    }

    render(&board);
    let winners = get_winners(&mut players);
    println!();
    for player in &players {
        let marker = if winners.contains(&player.id()) { " (winner)" } else { "" };
        println!(
            "{:>6}  {} [{}]{}",
            player.score(),
            colored_name(player),
            player.ai(),
            marker
        );
    }
}
