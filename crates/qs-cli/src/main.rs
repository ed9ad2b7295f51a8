//! QlikScan CLI - classify Qlik Sense YAML exports and map their dependencies

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

mod cli;
mod commands;
mod discovery;
mod loader;

use cli::Cli;
use commands::{analyze, lint};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.global.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match &cli.command {
        cli::Commands::Analyze(args) => analyze::execute(args, &cli.global),
        cli::Commands::Lint(args) => lint::execute(args, &cli.global),
    }
}
