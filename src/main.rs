mod cli;
mod render;

use std::{
    io::{self, Write},
    process::exit,
    time::Duration,
};

use anyhow::Context;
use crossterm::tty::IsTty;
use eighttile::{load_board, Outcome, Solver};

use render::Playback;

const HOLD_LAST_FRAME: Duration = Duration::from_secs(3);

fn run() -> anyhow::Result<bool> {
    let args = cli::parse_args(std::env::args())?;
    let board = load_board(&args.path).with_context(|| format!("Cannot load {}", args.path))?;

    println!("Solving puzzle...");
    let mut solver = Solver::new(board, args.config);
    solver.run().context("Search failed")?;

    let outcome = solver.into_outcome().context("Cannot replay solution")?;
    let (solution, expansions, expanded) = match outcome {
        Outcome::Solved {
            solution,
            expansions,
            expanded,
        } => (solution, expansions, expanded),
        Outcome::Exhausted { .. } => {
            println!("There is no solution to this puzzle");
            return Ok(false);
        }
    };

    println!("Generated {} boards (expanded {}).", expansions, expanded);

    let playback = Playback {
        delay: args.delay,
        hold: HOLD_LAST_FRAME,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !args.plain && stdout.is_tty() {
        render::animate(&mut out, &solution, &playback)?;
    } else {
        render::print(&mut out, &solution, &playback)?;
    }
    out.flush()?;

    Ok(true)
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit(1);
        }
    }
}
