//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// QlikScan - dependency and schema analysis for Qlik Sense YAML exports
#[derive(Parser, Debug)]
#[command(name = "qs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose (DEBUG) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a directory tree for Qlik apps and analyze each one
    Analyze(AnalyzeArgs),

    /// Lint a standalone QVS load script
    Lint(LintArgs),
}

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Root directory to scan for app folders (those containing App.yaml)
    pub root_dir: String,

    /// Base directory for all outputs (per-app and aggregated)
    #[arg(short, long, default_value = "qs_output")]
    pub out_dir: String,

    /// Also produce a Markdown report
    #[arg(long)]
    pub md_report: bool,
}

/// Arguments for the lint command
#[derive(Args, Debug)]
pub struct LintArgs {
    /// Path to the .qvs script to lint
    pub script: String,

    /// Directory to write script_lint.yaml into
    #[arg(short, long, default_value = ".")]
    pub out_dir: String,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
