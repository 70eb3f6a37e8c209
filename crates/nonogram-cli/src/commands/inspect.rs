//! Inspect command for dumping a decoded record stream.

use std::path::Path;

use anyhow::Result;

use super::convert::decode_text;
use crate::input::read_input;

pub fn run(input: &Path) -> Result<()> {
    let text = read_input(input)?;
    println!("{}", inspect_text(&text)?);
    Ok(())
}

fn inspect_text(text: &str) -> Result<String> {
    let decoded = decode_text(text)?;
    Ok(serde_json::to_string_pretty(&decoded)?)
}
