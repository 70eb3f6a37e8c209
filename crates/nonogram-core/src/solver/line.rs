//! Single-line deduction.
//!
//! For one row or column, find every color each cell can still take over all
//! placements of the clue runs that agree with the current candidates.
//!
//! `reach_fwd[i][p]`: runs `0..i` fit in cells `0..p`.
//! `reach_bwd[i][p]`: runs `i..k` fit in cells `p..n`.
//!
//! A run of the same color as its predecessor needs an empty cell between
//! them; runs of different colors may touch.

use crate::clue::Clue;

use super::{Candidates, EMPTY_BIT, color_bit};

struct LineState<'a> {
    clues: &'a [Clue],
    cells: &'a [Candidates],
    /// `blocked_empty[p]`: cells before `p` that cannot be empty
    blocked_empty: Vec<usize>,
    /// `blocked_run[r][p]`: cells before `p` that cannot take run `r`'s color
    blocked_run: Vec<Vec<usize>>,
}

impl<'a> LineState<'a> {
    fn new(clues: &'a [Clue], cells: &'a [Candidates]) -> Self {
        let blocked_empty = prefix_blocked(cells, EMPTY_BIT);
        let blocked_run = clues
            .iter()
            .map(|clue| prefix_blocked(cells, color_bit(clue.color)))
            .collect();
        Self {
            clues,
            cells,
            blocked_empty,
            blocked_run,
        }
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn can_be_empty(&self, index: usize) -> bool {
        self.cells[index] & EMPTY_BIT != 0
    }

    fn all_empty(&self, start: usize, end: usize) -> bool {
        self.blocked_empty[end] == self.blocked_empty[start]
    }

    /// Run `run` can cover `start..start + length`
    fn fits(&self, run: usize, start: usize) -> bool {
        let end = start + self.clues[run].length;
        end <= self.len() && self.blocked_run[run][end] == self.blocked_run[run][start]
    }

    fn needs_gap(&self, left: usize, right: usize) -> bool {
        self.clues[left].color == self.clues[right].color
    }
}

fn prefix_blocked(cells: &[Candidates], bit: Candidates) -> Vec<usize> {
    let mut prefix = Vec::with_capacity(cells.len() + 1);
    prefix.push(0);
    let mut blocked = 0;
    for &cell in cells {
        if cell & bit == 0 {
            blocked += 1;
        }
        prefix.push(blocked);
    }
    prefix
}

/// Narrow the candidates of one line.
///
/// Returns `None` when no placement of `clues` agrees with `cells`.
pub(super) fn solve_line(clues: &[Clue], cells: &[Candidates]) -> Option<Vec<Candidates>> {
    let state = LineState::new(clues, cells);
    let n = state.len();
    let k = clues.len();

    let reach_fwd = forward(&state);
    if !reach_fwd[k][n] {
        return None;
    }
    let reach_bwd = backward(&state);

    let before = |run: usize, start: usize| -> bool {
        if run == 0 {
            reach_fwd[0][start]
        } else if state.needs_gap(run - 1, run) {
            start >= 1 && state.can_be_empty(start - 1) && reach_fwd[run][start - 1]
        } else {
            reach_fwd[run][start]
        }
    };
    let after = |run: usize, end: usize| -> bool {
        if run + 1 == k {
            reach_bwd[k][end]
        } else if state.needs_gap(run, run + 1) {
            end < n && state.can_be_empty(end) && reach_bwd[run + 1][end + 1]
        } else {
            reach_bwd[run + 1][end]
        }
    };

    let mut possible = vec![0 as Candidates; n];

    for (run, clue) in clues.iter().enumerate() {
        // coverage[p] counts valid placements covering cell p
        let mut coverage = vec![0i64; n + 1];
        for start in 0..n {
            let end = start + clue.length;
            if state.fits(run, start) && before(run, start) && after(run, end) {
                coverage[start] += 1;
                coverage[end] -= 1;
            }
        }
        let bit = color_bit(clue.color);
        let mut covered = 0;
        for (cell, delta) in possible.iter_mut().zip(&coverage) {
            covered += delta;
            if covered > 0 {
                *cell |= bit;
            }
        }
    }

    for (index, cell) in possible.iter_mut().enumerate() {
        let between_runs =
            (0..=k).any(|runs| reach_fwd[runs][index] && reach_bwd[runs][index + 1]);
        if state.can_be_empty(index) && between_runs {
            *cell |= EMPTY_BIT;
        }
    }

    let narrowed: Vec<Candidates> = possible
        .iter()
        .zip(cells)
        .map(|(possible, current)| possible & current)
        .collect();
    if narrowed.contains(&0) {
        return None;
    }
    Some(narrowed)
}

fn forward(state: &LineState<'_>) -> Vec<Vec<bool>> {
    let n = state.len();
    let k = state.clues.len();
    let mut reach = vec![vec![false; n + 1]; k + 1];

    for end in 0..=n {
        reach[0][end] = state.all_empty(0, end);
    }

    for runs in 1..=k {
        let run = runs - 1;
        let length = state.clues[run].length;
        for end in 0..=n {
            let trailing_empty = end > 0 && reach[runs][end - 1] && state.can_be_empty(end - 1);
            let run_ends_here = end >= length && {
                let start = end - length;
                state.fits(run, start)
                    && if run == 0 {
                        reach[0][start]
                    } else if state.needs_gap(run - 1, run) {
                        start >= 1 && state.can_be_empty(start - 1) && reach[run][start - 1]
                    } else {
                        reach[run][start]
                    }
            };
            reach[runs][end] = trailing_empty || run_ends_here;
        }
    }

    reach
}

fn backward(state: &LineState<'_>) -> Vec<Vec<bool>> {
    let n = state.len();
    let k = state.clues.len();
    let mut reach = vec![vec![false; n + 1]; k + 1];

    for start in 0..=n {
        reach[k][start] = state.all_empty(start, n);
    }

    for run in (0..k).rev() {
        let length = state.clues[run].length;
        for start in (0..=n).rev() {
            let leading_empty = start < n && state.can_be_empty(start) && reach[run][start + 1];
            let run_starts_here = state.fits(run, start) && {
                let end = start + length;
                if run + 1 == k {
                    reach[k][end]
                } else if state.needs_gap(run, run + 1) {
                    end < n && state.can_be_empty(end) && reach[run + 1][end + 1]
                } else {
                    reach[run + 1][end]
                }
            };
            reach[run][start] = leading_empty || run_starts_here;
        }
    }

    reach
}
