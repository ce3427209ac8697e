use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdin, stdout, Stdin, Write};

use connect4_minimax::board::{Board, Mark};
use connect4_minimax::game::{Game, Status};
use connect4_minimax::player::{MoveSource, Player};
use connect4_minimax::{HEIGHT, WIDTH};

/// Human move collaborator reading columns from stdin.
///
/// Malformed and illegal entries are re-prompted here, so only legal
/// columns ever reach the game.
struct StdinMoves;

impl MoveSource for StdinMoves {
    fn request_move(&mut self, board: &Board) -> Result<usize> {
        let stdin = stdin();
        loop {
            print!("Move input (0-{}) > ", WIDTH - 1);
            stdout().flush()?;

            let mut input = String::new();
            stdin.read_line(&mut input)?;

            match input.trim().parse::<usize>() {
                Ok(column) if board.is_column_legal(column) => return Ok(column),
                Ok(column) => println!("Invalid move, column {} full or out of range", column),
                Err(_) => println!("Invalid number: {}", input.trim()),
            }
        }
    }
}

fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (0..WIDTH).map(|x| x.to_string()).collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..HEIGHT {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    let (origin_x, origin_y) = crossterm::cursor::position()?;

    // row 0 is the bottom of the board, draw upwards from the origin
    for row in 0..HEIGHT {
        for column in 0..WIDTH {
            let (pos_x, pos_y) = (origin_x + column as u16, origin_y - row as u16);

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match board.cell(row, column) {
                            Some(Mark::X) => Color::Red,
                            Some(Mark::O) => Color::Yellow,
                            None => Color::DarkBlue,
                        }),
                ))?;
        }
    }
    stdout
        .queue(MoveTo(origin_x + WIDTH as u16, origin_y))?
        .queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}

fn choose_depth(stdin: &Stdin) -> Result<u32> {
    loop {
        print!("Agent search depth (1-12, default 6): ");
        stdout().flush()?;

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;
        let trimmed = buffer.trim();
        if trimmed.is_empty() {
            return Ok(6);
        }
        match trimmed.parse::<u32>() {
            Ok(depth) if (1..=12).contains(&depth) => return Ok(depth),
            _ => println!("Depth must be a number between 1 and 12"),
        }
    }
}

fn choose_policy(stdin: &Stdin, seat: usize, mark: Mark, depth: u32) -> Result<Player> {
    loop {
        print!("Player {} ({}): (h)uman, (r)andom or (a)gent? ", seat, mark);
        stdout().flush()?;

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;

        match buffer.to_lowercase().chars().next() {
            Some('h') => return Ok(Player::human(mark, Box::new(StdinMoves))),
            Some('r') => return Ok(Player::random(mark)),
            Some('a') => return Ok(Player::search(mark, depth)),
            _ => println!("Unknown answer given"),
        }
    }
}

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let depth = choose_depth(&stdin)?;
    let first = choose_policy(&stdin, 1, Mark::X, depth)?;
    let second = choose_policy(&stdin, 2, Mark::O, depth)?;

    let mut game = Game::new(first, second);

    // game loop
    loop {
        display(game.board())?;

        match game.status() {
            Status::InProgress => {
                if !game.current_player().is_human() {
                    println!("Player {} is thinking...", game.current_mark());
                    stdout().flush()?;
                }
                game.tick()?;
            }

            // end states
            Status::Won(mark) => {
                println!("Player {} wins!", mark);
                break;
            }
            Status::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
