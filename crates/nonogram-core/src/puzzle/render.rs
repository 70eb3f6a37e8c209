use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::clue::Clue;

use super::Puzzle;

/// Text layout of a rendered clue sheet
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// `<p>W<br/>H<br/>F<br/>COLUMNS<br/>ROWS</p>`
    #[default]
    Html,
    /// The same five fields, one per line
    Plain,
}

impl Layout {
    pub(super) fn separator(&self) -> &'static str {
        match self {
            Self::Html => "<br/>",
            Self::Plain => "\n",
        }
    }
}

impl Puzzle {
    /// Render the clue sheet
    pub fn render(&self, layout: Layout) -> String {
        let fields = [
            self.width.to_string(),
            self.height.to_string(),
            if self.multicolor { "1" } else { "0" }.to_string(),
            self.format_lines(&self.columns),
            self.format_lines(&self.rows),
        ];
        let body = fields.join(layout.separator());

        match layout {
            Layout::Html => format!("<p>{}</p>", body),
            Layout::Plain => format!("{}\n", body),
        }
    }

    fn format_lines(&self, lines: &[Vec<Clue>]) -> String {
        lines
            .iter()
            .map(|line| format!("\"{}\"", self.format_line(line)))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn format_line(&self, line: &[Clue]) -> String {
        if line.is_empty() {
            return "0".to_string();
        }
        line.iter()
            .map(|clue| {
                if self.multicolor {
                    format!("{}-{}", clue.length, clue.color.saturating_sub(1))
                } else {
                    clue.length.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}
