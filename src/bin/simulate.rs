//! Batch match simulator: search agent vs random baseline.
//!
//! Usage: `simulate [games] [depth]`. Matches run in parallel and the agent
//! alternates seats so first-mover advantage cancels out.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use connect4_minimax::board::Mark;
use connect4_minimax::game::{Game, Status};
use connect4_minimax::player::Player;

#[derive(Copy, Clone, PartialEq, Eq)]
enum Outcome {
    Agent,
    Random,
    Draw,
    Error,
}

fn play_match(id: usize, depth: u32) -> Outcome {
    let agent_first = id % 2 == 0;
    let (first, second) = if agent_first {
        (Player::search(Mark::X, depth), Player::random(Mark::O))
    } else {
        (Player::random(Mark::X), Player::search(Mark::O, depth))
    };
    let agent_mark = if agent_first { Mark::X } else { Mark::O };

    let mut game = Game::new(first, second);
    match game.play_to_end(|_board| {}) {
        Ok(Status::Won(mark)) if mark == agent_mark => Outcome::Agent,
        Ok(Status::Won(_)) => Outcome::Random,
        Ok(Status::Draw) => Outcome::Draw,
        // still running or a policy produced an illegal move
        Ok(Status::InProgress) | Err(_) => Outcome::Error,
    }
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let games: usize = match args.next() {
        Some(arg) => arg.parse()?,
        None => 100,
    };
    let depth: u32 = match args.next() {
        Some(arg) => arg.parse()?,
        None => 6,
    };

    println!(
        "Simulating {} matches: agent (depth {}) vs random\n",
        games, depth
    );

    let progress = ProgressBar::new(games as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Playing: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let outcomes: Vec<Outcome> = (0..games)
        .into_par_iter()
        .map(|id| {
            let outcome = play_match(id, depth);
            progress.inc(1);
            outcome
        })
        .collect();
    progress.finish();

    let count = |wanted: Outcome| outcomes.iter().filter(|&&o| o == wanted).count();
    let percent = |n: usize| 100.0 * n as f64 / games as f64;

    let agent = count(Outcome::Agent);
    let random = count(Outcome::Random);
    let draws = count(Outcome::Draw);
    let errors = count(Outcome::Error);

    println!("\nResults over {} matches:", games);
    println!("  Agent wins:  {:4} ({:.1}%)", agent, percent(agent));
    println!("  Random wins: {:4} ({:.1}%)", random, percent(random));
    println!("  Draws:       {:4} ({:.1}%)", draws, percent(draws));
    if errors > 0 {
        println!("  Errors:      {:4} ({:.1}%)", errors, percent(errors));
    }
    Ok(())
}
