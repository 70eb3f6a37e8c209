use tracing::debug;

use crate::clue::{Clue, ClueLine, min_length};
use crate::error::{Error, Result};
use crate::grid::Axis;

use super::{Layout, Puzzle};

const CLUE_DELIMITER: char = '"';
const COLOR_SEPARATOR: char = '-';

impl Puzzle {
    /// Parse a clue sheet in either [`Layout`].
    ///
    /// Multicolor clues carry a 0-based color after `-`; they are stored
    /// 1-based so that color 0 stays reserved for empty cells.
    pub fn parse(text: &str) -> Result<Self> {
        let fields = split_fields(text);
        let [width, height, flag, columns, rows] = fields.as_slice() else {
            return Err(invalid(format!("expected 5 fields, found {}", fields.len())));
        };

        let width = parse_dimension("width", width)?;
        let height = parse_dimension("height", height)?;
        let multicolor = match flag.trim() {
            "0" => false,
            "1" => true,
            other => return Err(invalid(format!("invalid color flag {:?}", other))),
        };

        let puzzle = Self {
            width,
            height,
            multicolor,
            columns: parse_lines(columns, multicolor)?,
            rows: parse_lines(rows, multicolor)?,
        };
        puzzle.check_lines(Axis::Column)?;
        puzzle.check_lines(Axis::Row)?;

        debug!(
            "Parsed {}x{} {} clue sheet",
            width,
            height,
            if multicolor { "multicolor" } else { "monochrome" }
        );
        Ok(puzzle)
    }

    fn check_lines(&self, axis: Axis) -> Result<()> {
        let lines = self.lines(axis);
        let expected = match axis {
            Axis::Row => self.height,
            Axis::Column => self.width,
        };
        if lines.len() != expected {
            return Err(invalid(format!(
                "expected {} {} clues, found {}",
                expected,
                axis,
                lines.len()
            )));
        }

        let available = self.line_length(axis);
        for (index, line) in lines.iter().enumerate() {
            let required = min_length(line);
            if required > available {
                return Err(Error::IncompatibleClue {
                    axis: axis.name(),
                    index,
                    required,
                    available,
                });
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidClueText(message)
}

fn split_fields(text: &str) -> Vec<&str> {
    let text = text.trim();
    match text
        .strip_prefix("<p>")
        .and_then(|body| body.strip_suffix("</p>"))
    {
        Some(body) => body.split(Layout::Html.separator()).collect(),
        None => text.lines().collect(),
    }
}

fn parse_dimension(name: &str, field: &str) -> Result<usize> {
    field
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&value| value >= 1)
        .ok_or_else(|| invalid(format!("invalid {} {:?}", name, field)))
}

/// Parse `"a,b","c"...` into one clue line per quoted field
fn parse_lines(field: &str, multicolor: bool) -> Result<Vec<ClueLine>> {
    let mut lines = Vec::new();
    let mut rest = field.trim();

    while !rest.is_empty() {
        let body = rest
            .strip_prefix(CLUE_DELIMITER)
            .ok_or_else(|| invalid(format!("double quote expected at {:?}", rest)))?;
        let end = body
            .find(CLUE_DELIMITER)
            .ok_or_else(|| invalid("unterminated clue".to_string()))?;
        lines.push(parse_line(&body[..end], multicolor)?);

        rest = &body[end + 1..];
        if let Some(next) = rest.strip_prefix(',') {
            if next.is_empty() {
                return Err(invalid("trailing clue separator".to_string()));
            }
            rest = next;
        } else if !rest.is_empty() {
            return Err(invalid(format!("invalid clue separator at {:?}", rest)));
        }
    }

    Ok(lines)
}

fn parse_line(content: &str, multicolor: bool) -> Result<ClueLine> {
    let mut line = ClueLine::new();
    for token in content.split(',') {
        let token = token.trim();
        let (length, color) = match token.split_once(COLOR_SEPARATOR) {
            Some((length, color)) if multicolor => (length, Some(color)),
            _ => (token, None),
        };

        let length: usize = length
            .parse()
            .map_err(|_| invalid(format!("invalid clue length {:?}", token)))?;
        if length == 0 {
            continue;
        }

        let color = match color {
            Some(color) => color
                .parse::<u32>()
                .ok()
                .and_then(|color| color.checked_add(1))
                .ok_or_else(|| invalid(format!("invalid clue color {:?}", token)))?,
            None if multicolor => {
                return Err(invalid(format!("missing clue color in {:?}", token)));
            }
            None => 1,
        };
        line.push(Clue::new(length, color));
    }
    Ok(line)
}
