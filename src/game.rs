use anyhow::Result;

use crate::board::{Board, Mark};
use crate::error::GameError;
use crate::player::Player;

/// Match status. `Won` and `Draw` are terminal, no further ticks are accepted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won(Mark),
    Draw,
}

/// The turn loop: alternates two players over a shared board until terminal.
pub struct Game {
    board: Board,
    players: [Player; 2],
    turn: usize,
    status: Status,
}

impl Game {
    /// Creates a match on an empty board. `first` moves first.
    pub fn new(first: Player, second: Player) -> Self {
        Self {
            board: Board::new(),
            players: [first, second],
            turn: 0,
            status: Status::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.turn]
    }

    pub fn current_mark(&self) -> Mark {
        self.players[self.turn].mark()
    }

    /// Runs one turn: the current player picks a column, the mark is
    /// dropped, and the status is updated from the landed cell.
    ///
    /// Fails if the match is already over, or if a non-human policy
    /// produced an illegal move, which indicates a logic defect and aborts
    /// the match rather than being retried.
    pub fn tick(&mut self) -> Result<Status> {
        if self.status != Status::InProgress {
            return Err(GameError::MatchOver.into());
        }

        let mark = self.players[self.turn].mark();
        let column = self.players[self.turn].choose_column(&self.board)?;
        let row = self.board.drop_mark(column, mark)?;

        if self.board.check_win(mark, row, column) {
            self.status = Status::Won(mark);
        } else if self.board.is_full() {
            self.status = Status::Draw;
        } else {
            self.turn = 1 - self.turn;
        }
        Ok(self.status)
    }

    /// Ticks until the match ends, notifying `on_move` after every
    /// successful move. The callback is fire-and-forget, typically a
    /// renderer.
    pub fn play_to_end(&mut self, mut on_move: impl FnMut(&Board)) -> Result<Status> {
        while self.status == Status::InProgress {
            self.tick()?;
            on_move(&self.board);
        }
        Ok(self.status)
    }
}
