//! Run-length clue extraction.

use serde::{Deserialize, Serialize};

use crate::grid::{Axis, EMPTY, Grid};

/// One block of consecutive same-colored cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Clue {
    pub length: usize,
    pub color: u32,
}

impl Clue {
    pub fn new(length: usize, color: u32) -> Self {
        Self { length, color }
    }
}

/// Clues of one row or column, in scan order
pub type ClueLine = Vec<Clue>;

/// Run-length encode one line, dropping empty runs
pub fn encode_line<I>(cells: I) -> ClueLine
where
    I: IntoIterator<Item = u32>,
{
    let mut line = ClueLine::new();
    let mut current: Option<Clue> = None;

    for cell in cells {
        match current.as_mut() {
            Some(run) if run.color == cell => run.length += 1,
            _ => {
                line.extend(current.take().filter(is_filled));
                current = Some(Clue::new(1, cell));
            }
        }
    }
    line.extend(current.filter(is_filled));

    line
}

fn is_filled(run: &Clue) -> bool {
    run.length > 0 && run.color != EMPTY
}

/// Clue lines for every row or every column of `grid`
pub fn extract_clues(grid: &Grid, axis: Axis) -> Vec<ClueLine> {
    (0..grid.line_count(axis))
        .map(|index| encode_line(grid.line(axis, index)))
        .collect()
}

/// Smallest number of cells that can hold `line`.
///
/// Adjacent clues of the same color need one empty cell between them.
pub fn min_length(line: &[Clue]) -> usize {
    let total: usize = line.iter().map(|clue| clue.length).sum();
    let gaps = line
        .windows(2)
        .filter(|pair| pair[0].color == pair[1].color)
        .count();
    total + gaps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_line_groups_runs() {
        assert_eq!(
            encode_line([1, 1, 0, 2, 2, 2, 1]),
            vec![Clue::new(2, 1), Clue::new(3, 2), Clue::new(1, 1)]
        );
    }

    #[test]
    fn test_encode_line_skips_empty() {
        assert!(encode_line([0, 0, 0]).is_empty());
        assert!(encode_line(std::iter::empty()).is_empty());
        assert_eq!(encode_line([0, 4, 0]), vec![Clue::new(1, 4)]);
    }

    #[test]
    fn test_extract_clues_both_axes() {
        let grid = Grid::from_rows(&[vec![1, 0], vec![1, 1]]).unwrap();
        assert_eq!(
            extract_clues(&grid, Axis::Row),
            vec![vec![Clue::new(1, 1)], vec![Clue::new(2, 1)]]
        );
        assert_eq!(
            extract_clues(&grid, Axis::Column),
            vec![vec![Clue::new(2, 1)], vec![Clue::new(1, 1)]]
        );
    }

    #[test]
    fn test_row_clues_describe_fill_pattern() {
        let rows = vec![
            vec![1, 1, 0, 1, 0, 0, 1, 1, 1],
            vec![0, 0, 0, 0, 0, 0, 0, 0, 0],
            vec![1, 0, 1, 0, 1, 0, 1, 0, 1],
        ];
        let grid = Grid::from_rows(&rows).unwrap();
        for (row, clues) in rows.iter().zip(extract_clues(&grid, Axis::Row)) {
            let filled: usize = row.iter().filter(|&&cell| cell != EMPTY).count();
            let clued: usize = clues.iter().map(|clue| clue.length).sum();
            assert_eq!(filled, clued);
            assert_eq!(encode_line(row.iter().copied()), clues);
        }
    }

    #[test]
    fn test_min_length_counts_same_color_gaps() {
        assert_eq!(min_length(&[]), 0);
        assert_eq!(min_length(&[Clue::new(2, 1), Clue::new(3, 1)]), 6);
        assert_eq!(min_length(&[Clue::new(2, 1), Clue::new(3, 2)]), 5);
    }
}
