//! An agent to pick columns by depth-limited game tree search

use crate::{eval::evaluate, rules::has_four_in_a_row, Color, Grid, WIDTH};

use std::cmp::Ordering;

/// The number of plies the engine looks ahead by default
pub const DEFAULT_DEPTH: u8 = 8;

/// The outcome of a search branch
///
/// # Ordering
/// Scores order `Loss < Draw < Heuristic < Win`. Within the decisive
/// variants the distance from the root breaks ties: a win in fewer plies
/// beats a later one, and a loss further away beats an imminent one. The
/// heuristic never goes negative, so `Draw` sits below every quiet score.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Score {
    /// The opponent connects four, `in_plies` moves from the root
    Loss { in_plies: u8 },
    /// The grid fills with no winner
    Draw,
    /// Depth ran out, positional estimate only
    Heuristic(i32),
    /// The searching side connects four, `in_plies` moves from the root
    Win { in_plies: u8 },
}

impl Score {
    /// A score no branch can go below, the starting alpha
    pub const MIN: Score = Score::Loss { in_plies: 0 };
    /// A score no branch can exceed, the starting beta
    pub const MAX: Score = Score::Win { in_plies: 0 };

    // total order as (class, within-class) so the variant outranks magnitude
    fn rank(&self) -> (u8, i32) {
        match *self {
            Score::Loss { in_plies } => (0, in_plies as i32),
            Score::Draw => (1, 0),
            Score::Heuristic(value) => (2, value),
            Score::Win { in_plies } => (3, -(in_plies as i32)),
        }
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A fixed-depth minimax player
///
/// # Notes
/// The searcher maximizes for its own color and assumes the opponent picks
/// the reply that minimizes it. Every branch forks on a copy of the grid,
/// so the caller's grid is never touched. Terminal checks run in a fixed
/// order at every node: exhausted depth first, then a finished four for
/// whichever side moved last, then a full grid.
pub struct Searcher {
    side: Color,
    max_depth: u8,
    /// The number of nodes visited by the last search (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a searcher playing `side` at the default depth
    pub fn new(side: Color) -> Self {
        Self::with_depth(side, DEFAULT_DEPTH)
    }

    /// Creates a searcher playing `side`, looking `max_depth` plies ahead
    pub fn with_depth(side: Color, max_depth: u8) -> Self {
        Self {
            side,
            max_depth,
            node_count: 0,
        }
    }

    /// Searches every playable column and returns the best one
    ///
    /// Columns are tried in ascending order and ties keep the first
    /// candidate, so the choice is deterministic. `None` means the grid has
    /// no playable column at all.
    pub fn choose_column(&mut self, grid: &Grid) -> Option<usize> {
        self.node_count = 0;

        let mut alpha = Score::MIN;
        let beta = Score::MAX;
        let mut best: Option<(usize, Score)> = None;

        for column in 0..WIDTH {
            let mut child = *grid;
            if !child.place_move(column, self.side) {
                continue;
            }
            let value = self.minimax(
                &child,
                self.max_depth.saturating_sub(1),
                alpha,
                beta,
                self.side.opponent(),
            );
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((column, value));
            }
            if value > alpha {
                alpha = value;
            }
            if beta < alpha {
                break;
            }
        }

        best.map(|(column, _)| column)
    }

    fn minimax(
        &mut self,
        grid: &Grid,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        to_move: Color,
    ) -> Score {
        self.node_count += 1;

        // exhausted depth comes first: a four landing exactly on the horizon
        // is scored by the heuristic, not as a decisive outcome
        if depth == 0 {
            return Score::Heuristic(evaluate(grid, self.side));
        }
        // the branch ends as soon as the side that just moved has connected
        let last_mover = to_move.opponent();
        if has_four_in_a_row(grid, last_mover) {
            let in_plies = self.max_depth - depth;
            return if last_mover == self.side {
                Score::Win { in_plies }
            } else {
                Score::Loss { in_plies }
            };
        }
        // check for a drawn branch
        if grid.is_full() {
            return Score::Draw;
        }

        if to_move == self.side {
            // own turn: raise alpha over the best reply
            let mut value = Score::MIN;
            for column in 0..WIDTH {
                let mut child = *grid;
                if !child.place_move(column, to_move) {
                    continue;
                }
                let score = self.minimax(&child, depth - 1, alpha, beta, to_move.opponent());
                if score > value {
                    value = score;
                }
                if score > alpha {
                    alpha = score;
                }
                if beta < alpha {
                    break;
                }
            }
            value
        } else {
            // opponent's turn: lower beta under the worst reply
            let mut value = Score::MAX;
            for column in 0..WIDTH {
                let mut child = *grid;
                if !child.place_move(column, to_move) {
                    continue;
                }
                let score = self.minimax(&child, depth - 1, alpha, beta, to_move.opponent());
                if score < value {
                    value = score;
                }
                if score < beta {
                    beta = score;
                }
                if beta <= alpha {
                    break;
                }
            }
            value
        }
    }
}
