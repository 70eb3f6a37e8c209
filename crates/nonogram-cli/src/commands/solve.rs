//! Solve command for clue sheets in either layout.

use std::path::Path;

use anyhow::{Context, Result};
use nonogram_core::{Puzzle, SolveOutcome, SolverOptions, render_solution, solve};
use tracing::{info, warn};

use crate::input::read_input;

pub fn run(input: &Path, options: SolverOptions) -> Result<()> {
    let text = read_input(input)?;
    let puzzle = Puzzle::parse(&text).context("Failed to parse clue text")?;
    info!(
        "Solving {}x{} puzzle (max {} solutions)",
        puzzle.width, puzzle.height, options.max_solutions
    );

    let outcome = solve(&puzzle, &options)?;
    if !outcome.complete {
        warn!("Search stopped before exploring every branch");
    }
    print!("{}", report(&outcome, puzzle.multicolor));
    Ok(())
}

fn report(outcome: &SolveOutcome, multicolor: bool) -> String {
    let mut out = String::new();
    for solution in &outcome.solutions {
        out.push_str(&render_solution(solution, multicolor));
        out.push('\n');
    }
    out.push_str(&format!("Nodes {}\n", outcome.nodes));
    out.push_str(&format!("Solutions {}\n", outcome.solutions.len()));
    out
}
