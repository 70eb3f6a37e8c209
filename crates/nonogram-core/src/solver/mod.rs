//! Nonogram solver.
//!
//! Every cell holds a bitset of colors it can still take (bit 0 is empty).
//! Lines are narrowed one at a time until nothing changes, then the search
//! branches on the open cell with the fewest candidates. Search state lives
//! on an explicit stack so large grids do not recurse deeply.

mod line;

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::grid::{Axis, EMPTY, Grid};
use crate::puzzle::Puzzle;

use line::solve_line;

/// Bitset of possible colors for one cell
pub(crate) type Candidates = u64;

pub(crate) const EMPTY_BIT: Candidates = 1;

/// Highest color id the candidate bitset can hold
pub const MAX_COLOR: u32 = Candidates::BITS - 1;

pub(crate) fn color_bit(color: u32) -> Candidates {
    1 << color
}

/// Search limits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverOptions {
    /// Stop after this many solutions
    pub max_solutions: usize,
    /// Stop after visiting this many search nodes
    pub node_limit: Option<u64>,
}

impl Default for SolverOptions {
    fn default() -> Self {
        // Two solutions are enough to tell whether a puzzle is unique
        Self {
            max_solutions: 2,
            node_limit: None,
        }
    }
}

/// Result of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    pub solutions: Vec<Grid>,
    /// Search nodes visited
    pub nodes: u64,
    /// True when the whole search space was explored
    pub complete: bool,
}

impl SolveOutcome {
    pub fn is_unique(&self) -> bool {
        self.complete && self.solutions.len() == 1
    }
}

#[derive(Debug, Clone)]
struct Board {
    width: usize,
    height: usize,
    cells: Vec<Candidates>,
}

impl Board {
    fn cell_index(&self, axis: Axis, line: usize, offset: usize) -> usize {
        match axis {
            Axis::Row => line * self.width + offset,
            Axis::Column => offset * self.width + line,
        }
    }

    fn line(&self, axis: Axis, line: usize, length: usize) -> Vec<Candidates> {
        (0..length)
            .map(|offset| self.cells[self.cell_index(axis, line, offset)])
            .collect()
    }

    /// Open cell with the fewest candidates
    fn branch_cell(&self) -> Option<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.count_ones() > 1)
            .min_by_key(|(_, cell)| cell.count_ones())
            .map(|(index, _)| index)
    }

    fn to_grid(&self) -> Grid {
        let mut grid = Grid::new(self.width, self.height);
        for (index, cell) in self.cells.iter().enumerate() {
            grid.set(index / self.width, index % self.width, cell.trailing_zeros());
        }
        grid
    }
}

struct Solver<'a> {
    puzzle: &'a Puzzle,
    options: SolverOptions,
    nodes: u64,
    solutions: Vec<Grid>,
}

impl<'a> Solver<'a> {
    fn initial_board(&self) -> Board {
        let mut mask = EMPTY_BIT;
        for clue in self.puzzle.rows.iter().chain(&self.puzzle.columns).flatten() {
            mask |= color_bit(clue.color);
        }
        Board {
            width: self.puzzle.width,
            height: self.puzzle.height,
            cells: vec![mask; self.puzzle.width * self.puzzle.height],
        }
    }

    /// Narrow lines until a fixpoint; false on contradiction
    fn propagate(&self, board: &mut Board) -> bool {
        let mut queue: VecDeque<(Axis, usize)> = VecDeque::new();
        let mut queued = [vec![true; board.height], vec![true; board.width]];
        queue.extend((0..board.height).map(|row| (Axis::Row, row)));
        queue.extend((0..board.width).map(|column| (Axis::Column, column)));

        while let Some((axis, index)) = queue.pop_front() {
            queued[axis_slot(axis)][index] = false;

            let length = self.puzzle.line_length(axis);
            let cells = board.line(axis, index, length);
            let Some(narrowed) = solve_line(&self.puzzle.lines(axis)[index], &cells) else {
                return false;
            };

            let cross = match axis {
                Axis::Row => Axis::Column,
                Axis::Column => Axis::Row,
            };
            for (offset, (old, new)) in cells.iter().zip(&narrowed).enumerate() {
                if old == new {
                    continue;
                }
                let cell = board.cell_index(axis, index, offset);
                board.cells[cell] = *new;
                if !queued[axis_slot(cross)][offset] {
                    queued[axis_slot(cross)][offset] = true;
                    queue.push_back((cross, offset));
                }
            }
        }

        true
    }

    fn run(&mut self) -> bool {
        let mut stack = vec![self.initial_board()];

        while let Some(mut board) = stack.pop() {
            if self
                .options
                .node_limit
                .is_some_and(|limit| self.nodes >= limit)
            {
                debug!("Node limit reached after {} nodes", self.nodes);
                return false;
            }
            self.nodes += 1;

            if !self.propagate(&mut board) {
                continue;
            }

            let Some(cell) = board.branch_cell() else {
                self.solutions.push(board.to_grid());
                if self.solutions.len() >= self.options.max_solutions {
                    return stack.is_empty();
                }
                continue;
            };

            // Push in reverse so the lowest color is explored first
            let candidates = board.cells[cell];
            for color in (0..Candidates::BITS).rev() {
                let bit = color_bit(color);
                if candidates & bit != 0 {
                    let mut child = board.clone();
                    child.cells[cell] = bit;
                    stack.push(child);
                }
            }
        }

        true
    }
}

fn axis_slot(axis: Axis) -> usize {
    match axis {
        Axis::Row => 0,
        Axis::Column => 1,
    }
}

/// Solve a clue sheet
pub fn solve(puzzle: &Puzzle, options: &SolverOptions) -> Result<SolveOutcome> {
    let max_color = puzzle.max_color();
    if max_color > MAX_COLOR {
        return Err(Error::TooManyColors(max_color));
    }

    let mut solver = Solver {
        puzzle,
        options: SolverOptions {
            max_solutions: options.max_solutions.max(1),
            ..*options
        },
        nodes: 0,
        solutions: Vec::new(),
    };
    let complete = solver.run();
    debug!(
        "Search finished: {} nodes, {} solutions, complete={}",
        solver.nodes,
        solver.solutions.len(),
        complete
    );

    Ok(SolveOutcome {
        solutions: solver.solutions,
        nodes: solver.nodes,
        complete,
    })
}

/// Draw a solution, one text line per row
pub fn render_solution(grid: &Grid, multicolor: bool) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for row in grid.rows() {
        for &cell in row {
            out.push(match cell {
                EMPTY => ' ',
                _ if !multicolor => '*',
                color => char::from_digit(color - 1, 36).unwrap_or('?'),
            });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::parse_bitmap;

    fn options(max_solutions: usize) -> SolverOptions {
        SolverOptions {
            max_solutions,
            node_limit: None,
        }
    }

    #[test]
    fn test_solve_scenario() {
        let puzzle = Puzzle::parse(r#"<p>2<br/>2<br/>0<br/>"2","1"<br/>"1","2"</p>"#).unwrap();
        let outcome = solve(&puzzle, &SolverOptions::default()).unwrap();
        assert!(outcome.is_unique());
        assert_eq!(
            outcome.solutions[0],
            Grid::from_rows(&[vec![1, 0], vec![1, 1]]).unwrap()
        );
        assert_eq!(render_solution(&outcome.solutions[0], false), "* \n**\n");
    }

    #[test]
    fn test_ambiguous_puzzle() {
        let puzzle = Puzzle::parse("2\n2\n0\n\"1\",\"1\"\n\"1\",\"1\"\n").unwrap();
        let outcome = solve(&puzzle, &options(10)).unwrap();
        assert!(outcome.complete);
        assert_eq!(outcome.solutions.len(), 2);
        assert!(!outcome.is_unique());

        let capped = solve(&puzzle, &options(1)).unwrap();
        assert_eq!(capped.solutions.len(), 1);
        assert!(!capped.complete);
    }

    #[test]
    fn test_unsolvable_puzzle() {
        let puzzle = Puzzle::parse("2\n2\n0\n\"2\",\"2\"\n\"1\",\"0\"\n").unwrap();
        let outcome = solve(&puzzle, &SolverOptions::default()).unwrap();
        assert!(outcome.complete);
        assert!(outcome.solutions.is_empty());
    }

    #[test]
    fn test_solutions_satisfy_clues() {
        let grid = parse_bitmap(
            "0110110\n\
             1111111\n\
             1111111\n\
             0111110\n\
             0011100\n\
             0001000\n",
        )
        .unwrap();
        let puzzle = Puzzle::from_grid(&grid, false);
        let outcome = solve(&puzzle, &options(50)).unwrap();
        assert!(outcome.complete);
        assert!(outcome.solutions.contains(&grid));
        for solution in &outcome.solutions {
            assert!(puzzle.is_solved_by(solution));
        }
    }

    #[test]
    fn test_solve_multicolor() {
        let grid = Grid::from_rows(&[vec![1, 1, 2], vec![0, 2, 2], vec![3, 3, 0]]).unwrap();
        let puzzle = Puzzle::from_grid(&grid, true);
        let outcome = solve(&puzzle, &options(10)).unwrap();
        assert!(outcome.complete);
        assert!(outcome.solutions.contains(&grid));
        for solution in &outcome.solutions {
            assert!(puzzle.is_solved_by(solution));
        }
        assert_eq!(render_solution(&grid, true), "001\n 11\n22 \n");
    }

    #[test]
    fn test_node_limit_stops_search() {
        let puzzle = Puzzle::parse(
            "4\n4\n0\n\"1\",\"1\",\"1\",\"1\"\n\"1\",\"1\",\"1\",\"1\"\n",
        )
        .unwrap();
        let limited = SolverOptions {
            max_solutions: 100,
            node_limit: Some(3),
        };
        let outcome = solve(&puzzle, &limited).unwrap();
        assert!(!outcome.complete);
        assert_eq!(outcome.nodes, 3);

        let full = solve(&puzzle, &options(100)).unwrap();
        assert!(full.complete);
        // permutation matrices of size 4
        assert_eq!(full.solutions.len(), 24);
    }

    #[test]
    fn test_too_many_colors() {
        let puzzle = Puzzle::parse("1\n1\n1\n\"1-70\"\n\"1-70\"\n").unwrap();
        assert!(matches!(
            solve(&puzzle, &SolverOptions::default()),
            Err(Error::TooManyColors(71))
        ));
    }
}
