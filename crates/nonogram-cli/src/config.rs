//! Optional TOML settings.
//!
//! ```toml
//! layout = "plain"
//! max_solutions = 2
//! node_limit = 1000000
//! color_preview = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nonogram_core::{Layout, SolverOptions};
use serde::Deserialize;
use tracing::{debug, info, warn};

const LOCAL_CONFIG: &str = "nonoconv.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub layout: Layout,
    pub max_solutions: usize,
    pub node_limit: Option<u64>,
    pub color_preview: bool,
}

impl Default for Config {
    fn default() -> Self {
        let solver = SolverOptions::default();
        Self {
            layout: Layout::default(),
            max_solutions: solver.max_solutions,
            node_limit: solver.node_limit,
            color_preview: true,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Load the explicit config, or the first default location that exists.
    ///
    /// Any failure falls back to defaults with a warning.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        let Some(path) = explicit.map(Path::to_path_buf).or_else(default_path) else {
            debug!("No config file found, using defaults");
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => {
                info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to load config: {:#}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn solver_options(&self) -> SolverOptions {
        SolverOptions {
            max_solutions: self.max_solutions,
            node_limit: self.node_limit,
        }
    }
}

fn default_path() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG);
    if local.is_file() {
        return Some(local);
    }
    let user = dirs::config_dir()?.join("nonoconv").join("config.toml");
    user.is_file().then_some(user)
}
