use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Read a whole input file, or stdin when the path is `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        debug!("Read {} bytes from stdin", content.len());
        return Ok(content);
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    debug!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}
