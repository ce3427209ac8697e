//! Depth-limited minimax with alpha-beta pruning and per-decision memoization

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Mark};
use crate::evaluate::evaluate;
use crate::transposition_table::TranspositionTable;

/// Terminal win/loss scores. Must dominate any sum the heuristic evaluator
/// can produce, so a found win always outranks a good-looking position.
pub const BIG: i64 = 100_000_000_000_000;

/// A depth-limited game tree search agent
///
/// # Position Scoring
/// A position already won for the searching mark scores `BIG` plus the
/// remaining depth, so a win found closer to the root scores strictly
/// higher than a deeper one. A lost position mirrors this at `-BIG` minus
/// the remaining depth, preferring the slowest loss. Draws score 0 and
/// depth-exhausted positions fall back to the heuristic evaluator.
pub struct Searcher {
    transposition_table: TranspositionTable,
    rng: StdRng,

    /// The number of nodes visited by the last search (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates a `Searcher` with a deterministic tie-break sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            transposition_table: TranspositionTable::new(),
            rng,
            node_count: 0,
        }
    }

    /// Picks a uniformly random legal column, `None` on a full board.
    pub fn random_legal(&mut self, board: &Board) -> Option<usize> {
        let legal = board.legal_columns();
        if legal.is_empty() {
            None
        } else {
            Some(legal[self.rng.gen_range(0..legal.len())])
        }
    }

    /// Searches `depth` plies ahead for the best column for `mark`.
    ///
    /// Returns the chosen column and its score. The column is `None` only
    /// when the position is already terminal or the depth is 0, where there
    /// is nothing to choose; callers should not invoke this on a full board.
    pub fn choose_column(
        &mut self,
        board: &Board,
        depth: u32,
        mark: Mark,
    ) -> (Option<usize>, i64) {
        // the memo table only lives for one decision, stale entries from a
        // different live board must never be consulted
        self.transposition_table.clear();
        self.node_count = 0;
        self.minimax(board, depth, i64::MIN, i64::MAX, true, mark)
    }

    fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
        mark: Mark,
    ) -> (Option<usize>, i64) {
        self.node_count += 1;

        let key = board.key();
        if let Some((column, score)) = self.transposition_table.get(key, maximizing) {
            return (Some(column), score);
        }

        let winner = board.winner();
        let terminal = winner.is_some() || board.is_full();

        if depth == 0 || terminal {
            let score = match winner {
                Some(w) if w == mark => BIG + i64::from(depth),
                Some(_) => -BIG - i64::from(depth),
                None if terminal => 0,
                None => evaluate(board, mark),
            };
            return (None, score);
        }

        let legal = board.legal_columns();
        let mover = if maximizing { mark } else { mark.opponent() };

        // start from a random legal column; only a strictly better score
        // replaces it, so ties go to the first column evaluated
        let mut best_column = legal[self.rng.gen_range(0..legal.len())];
        let mut best_score = if maximizing { i64::MIN } else { i64::MAX };

        for &column in &legal {
            let mut child = board.clone();
            let row = child.drop_mark(column, mover).expect("column is legal");

            let score = if child.check_win(mover, row, column) {
                // an immediate win ends the branch at the current depth
                if maximizing {
                    BIG + i64::from(depth)
                } else {
                    -BIG - i64::from(depth)
                }
            } else {
                self.minimax(&child, depth - 1, alpha, beta, !maximizing, mark)
                    .1
            };

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_column = column;
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_column = column;
                }
                beta = beta.min(score);
            }
            if alpha >= beta {
                break;
            }
        }

        self.transposition_table
            .set(key, maximizing, best_column, best_score);
        (Some(best_column), best_score)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
