use thiserror::Error;

/// Errors surfaced by the game engine.
///
/// A human seat recovers from `InvalidMove` by asking for another column.
/// Coming from a random or search seat it means the legality filtering is
/// broken, so the match is aborted rather than silently retried.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid move, column {0} is full or out of range")]
    InvalidMove(usize),

    #[error("no legal columns remain")]
    NoLegalMoves,

    #[error("the match is already over")]
    MatchOver,
}
