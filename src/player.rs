use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Mark};
use crate::error::GameError;
use crate::search::Searcher;

/// External collaborator supplying human moves.
///
/// The implementor owns the raw input handling and re-prompts on malformed
/// entry; the returned column is still checked for legality by the player
/// loop before it reaches the board.
pub trait MoveSource {
    fn request_move(&mut self, board: &Board) -> Result<usize>;
}

enum Policy {
    Human(Box<dyn MoveSource>),
    Random(StdRng),
    Search { searcher: Searcher, depth: u32 },
}

/// One seat in a match: a mark plus the policy that picks its columns.
pub struct Player {
    mark: Mark,
    policy: Policy,
}

impl Player {
    pub fn human(mark: Mark, source: Box<dyn MoveSource>) -> Self {
        Self {
            mark,
            policy: Policy::Human(source),
        }
    }

    pub fn random(mark: Mark) -> Self {
        Self {
            mark,
            policy: Policy::Random(StdRng::from_entropy()),
        }
    }

    pub fn random_seeded(mark: Mark, seed: u64) -> Self {
        Self {
            mark,
            policy: Policy::Random(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn search(mark: Mark, depth: u32) -> Self {
        Self {
            mark,
            policy: Policy::Search {
                searcher: Searcher::new(),
                depth,
            },
        }
    }

    pub fn search_seeded(mark: Mark, depth: u32, seed: u64) -> Self {
        Self {
            mark,
            policy: Policy::Search {
                searcher: Searcher::with_seed(seed),
                depth,
            },
        }
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    pub fn is_human(&self) -> bool {
        matches!(self.policy, Policy::Human(_))
    }

    /// Produces a legal column for the current board.
    ///
    /// The human policy blocks until its collaborator supplies a legal
    /// column. The random and search policies never return an illegal one;
    /// on a full board they fail with `NoLegalMoves`.
    pub fn choose_column(&mut self, board: &Board) -> Result<usize> {
        let mark = self.mark;
        match &mut self.policy {
            Policy::Human(source) => loop {
                let column = source.request_move(board)?;
                if board.is_column_legal(column) {
                    return Ok(column);
                }
                // the collaborator returned a full or out-of-range column, ask again
            },
            Policy::Random(rng) => {
                let legal = board.legal_columns();
                if legal.is_empty() {
                    return Err(GameError::NoLegalMoves.into());
                }
                Ok(legal[rng.gen_range(0..legal.len())])
            }
            Policy::Search { searcher, depth } => {
                let (column, _score) = searcher.choose_column(board, *depth, mark);
                match column {
                    Some(column) => Ok(column),
                    None => {
                        // should be unreachable on a playable board, fall back
                        // to a random legal move and flag the defect
                        eprintln!("warning: search returned no column, playing randomly");
                        searcher
                            .random_legal(board)
                            .ok_or(GameError::NoLegalMoves)
                            .map_err(Into::into)
                    }
                }
            }
        }
    }
}
