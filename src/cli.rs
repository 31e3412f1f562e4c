//! CLI Argument Parsing
//!
//! A single command: every argument is optional, and anything missing is
//! asked for interactively (or defaulted with `--yes`).

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Create a new Decent App project from the template repository
#[derive(Parser, Debug)]
#[command(name = "create-decent-app")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Name of the project subfolder to create
    pub project_name: Option<String>,

    /// App display name shown on web pages
    #[arg(long, value_name = "NAME")]
    pub display_name: Option<String>,

    /// Template repository URL to clone
    #[arg(long, value_name = "URL")]
    pub template: Option<String>,

    /// Config file (default: <config dir>/create-decent-app/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Accept defaults instead of prompting
    #[arg(short, long)]
    pub yes: bool,

    /// Emit NDJSON events instead of text
    #[arg(long)]
    pub json: bool,

    /// Color output
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v lists unchanged files)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
