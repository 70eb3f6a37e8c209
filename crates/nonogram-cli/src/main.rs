mod cli;
mod commands;
mod config;
mod input;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use config::Config;

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = if args.verbose { "debug" } else { "info" };
    let core_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("nonoconv={}", level).parse()?)
                .add_directive(format!("nonogram_core={}", core_level).parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::resolve(args.config.as_deref());

    match args.command {
        Command::Convert {
            input,
            layout,
            json,
            preview,
        } => commands::convert::run(&input, layout, json, preview, &config),
        Command::Inspect { input } => commands::inspect::run(&input),
        Command::Bitmap { input, layout } => {
            commands::bitmap::run(&input, layout.unwrap_or(config.layout))
        }
        Command::Solve {
            input,
            max_solutions,
            node_limit,
        } => {
            let mut options = config.solver_options();
            if let Some(max_solutions) = max_solutions {
                options.max_solutions = max_solutions;
            }
            if node_limit.is_some() {
                options.node_limit = node_limit;
            }
            commands::solve::run(&input, options)
        }
    }
}
