//! Monte Carlo tree search with UCB1 selection.
//!
//! Nodes live in a flat arena indexed by `usize`; parent links are indices,
//! which sidesteps the shared-ownership gymnastics a pointer-based tree
//! would need. Each node owns a full (board, players) snapshot with the
//! side to move at slot 0, so expansion is clone-apply-swap and rollouts
//! start from the node's own state.

use crate::ai::random_bot;
use crate::board::{Board, Move};
use crate::movegen::{enumerate_moves, is_game_over};
use crate::player::Player;
use rand::Rng;

/// UCB1 exploration constant, sqrt(2) to three decimals.
const EXPLORATION: f64 = 1.414;

/// Rollouts are cut off after this many half-moves and scored as they stand.
const ROLLOUT_LIMIT: u32 = 40;

struct Node {
    parent: Option<usize>,
    /// Move that produced this node; `None` only at the root.
    mv: Option<Move>,
    board: Board,
    /// `players[0]` is to move here, `players[1]` just moved.
    players: [Player; 2],
    untried: Vec<Move>,
    children: Vec<usize>,
    wins: f64,
    visits: u32,
}

pub struct Mcts {
    iterations: u32,
    exploration: f64,
}

impl Mcts {
    pub fn new(iterations: u32) -> Self {
        Mcts {
            iterations,
            exploration: EXPLORATION,
        }
    }

    /// Runs the iteration budget and returns the most-visited root child's
    /// move, or `None` when `player` has no legal move at all.
    pub fn find_best_move<R: Rng>(
        &self,
        board: &Board,
        player: &Player,
        opponent: &Player,
        rng: &mut R,
    ) -> Option<Move> {
        let untried = enumerate_moves(board, player);
        if untried.is_empty() {
            return None;
        }
        let mut nodes = vec![Node {
            parent: None,
            mv: None,
            board: board.clone(),
            players: [player.clone(), opponent.clone()],
            untried,
            children: Vec::new(),
            wins: 0.0,
            visits: 0,
        }];

        for _ in 0..self.iterations {
            let mut idx = 0;

            // Selection: descend through fully expanded nodes by UCB1.
            while nodes[idx].untried.is_empty() && !nodes[idx].children.is_empty() {
                idx = self.select_child(&nodes, idx);
            }

            // Expansion: try one untried move, creating a new leaf.
            if !nodes[idx].untried.is_empty() {
                idx = expand(&mut nodes, idx, rng);
            }

            // Rollout from the leaf, scored for the player who moved into it.
            let result = rollout(&nodes[idx], rng);

            // Backpropagation: each level up flips the perspective.
            backpropagate(&mut nodes, idx, result);
        }

        let root = &nodes[0];
        root.children
            .iter()
            .max_by_key(|&&child| nodes[child].visits)
            .and_then(|&child| nodes[child].mv)
    }

    fn select_child(&self, nodes: &[Node], idx: usize) -> usize {
        let parent_visits = nodes[idx].visits.max(1) as f64;
        let mut best = nodes[idx].children[0];
        let mut best_value = f64::NEG_INFINITY;
        for &child in &nodes[idx].children {
            let node = &nodes[child];
            let value = if node.visits == 0 {
                f64::INFINITY
            } else {
                node.wins / node.visits as f64
                    + self.exploration * (parent_visits.ln() / node.visits as f64).sqrt()
            };
            if value > best_value {
                best_value = value;
                best = child;
            }
        }
        best
    }
}

fn expand<R: Rng>(nodes: &mut Vec<Node>, idx: usize, rng: &mut R) -> usize {
    let (board, players, mv) = {
        let node = &mut nodes[idx];
        let pick = rng.random_range(0..node.untried.len());
        let mv = node.untried.swap_remove(pick);
        let mut board = node.board.clone();
        let mut players = node.players.clone();
        let applied = board.apply_move(&mv, 0, &mut players);
        debug_assert!(applied);
        players.swap(0, 1);
        (board, players, mv)
    };
    let untried = enumerate_moves(&board, &players[0]);
    let child = nodes.len();
    nodes.push(Node {
        parent: Some(idx),
        mv: Some(mv),
        board,
        players,
        untried,
        children: Vec::new(),
        wins: 0.0,
        visits: 0,
    });
    nodes[idx].children.push(child);
    child
}

/// Plays random moves from the node's state for up to `ROLLOUT_LIMIT`
/// half-moves (a pass still consumes one) and scores the position for the
/// node's last mover: 1 for ahead, 0 for behind, 0.5 for level.
fn rollout<R: Rng>(node: &Node, rng: &mut R) -> f64 {
    let mut board = node.board.clone();
    let mut players = node.players.clone();

    let mut to_move = 0;
    for _ in 0..ROLLOUT_LIMIT {
        if is_game_over(&board, players.iter()) {
            break;
        }
        if let Some(mv) = random_bot::choose_move(&board, &players[to_move], rng) {
            let applied = board.apply_move(&mv, to_move, &mut players);
            debug_assert!(applied);
        }
        to_move = 1 - to_move;
    }

    let (mine, theirs) = (players[1].score(), players[0].score());
    if mine > theirs {
        1.0
    } else if mine < theirs {
        0.0
    } else {
        0.5
    }
}

fn backpropagate(nodes: &mut [Node], mut idx: usize, mut result: f64) {
    loop {
        let node = &mut nodes[idx];
        node.visits += 1;
        node.wins += result;
        result = 1.0 - result;
        match node.parent {
            Some(parent) => idx = parent,
            None => break,
        }
    }
}
