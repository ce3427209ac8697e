//! Positional heuristic for non-terminal, depth-exhausted positions.
//!
//! The score is the sum of a centre-column bonus and a score for every
//! axis-aligned 4-cell window on the board. The weights are tuned for the
//! 6x7 board and are asymmetric: an open opposing three counts against us,
//! but less than our own open three counts for us, so the agent builds
//! threats slightly ahead of blocking them.

use crate::board::{Board, Mark};
use crate::{HEIGHT, WIDTH};

/// Bonus per own mark in the centre column.
const CENTRE_BONUS: i64 = 3;

fn score_window(own: usize, opp: usize, empty: usize) -> i64 {
    if own == 4 {
        100
    } else if own == 3 && empty == 1 {
        5
    } else if own == 2 && empty == 2 {
        2
    } else if opp == 3 && empty == 1 {
        -4
    } else {
        0
    }
}

/// Scores `board` from the perspective of `mark`. Pure, no board mutation.
pub fn evaluate(board: &Board, mark: Mark) -> i64 {
    let tally = |cells: [Option<Mark>; 4]| -> i64 {
        let mut own = 0;
        let mut opp = 0;
        let mut empty = 0;
        for cell in cells.iter() {
            match cell {
                Some(m) if *m == mark => own += 1,
                Some(_) => opp += 1,
                None => empty += 1,
            }
        }
        score_window(own, opp, empty)
    };

    let mut score = 0;

    // centre column bonus
    let centre = WIDTH / 2;
    for row in 0..HEIGHT {
        if board.cell(row, centre) == Some(mark) {
            score += CENTRE_BONUS;
        }
    }

    // horizontal windows
    for row in 0..HEIGHT {
        for col in 0..=WIDTH - 4 {
            score += tally([
                board.cell(row, col),
                board.cell(row, col + 1),
                board.cell(row, col + 2),
                board.cell(row, col + 3),
            ]);
        }
    }

    // vertical windows
    for col in 0..WIDTH {
        for row in 0..=HEIGHT - 4 {
            score += tally([
                board.cell(row, col),
                board.cell(row + 1, col),
                board.cell(row + 2, col),
                board.cell(row + 3, col),
            ]);
        }
    }

    // both diagonals
    for row in 0..=HEIGHT - 4 {
        for col in 0..=WIDTH - 4 {
            score += tally([
                board.cell(row, col),
                board.cell(row + 1, col + 1),
                board.cell(row + 2, col + 2),
                board.cell(row + 3, col + 3),
            ]);
            score += tally([
                board.cell(row + 3, col),
                board.cell(row + 2, col + 1),
                board.cell(row + 1, col + 2),
                board.cell(row, col + 3),
            ]);
        }
    }

    score
}
