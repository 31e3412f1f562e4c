//! create-decent-app CLI
//!
//! Usage: create-decent-app [PROJECT_NAME] [OPTIONS]
//!
//! Asks for a folder name and a display name, clones the template into the
//! new folder and replaces the template's placeholder names.

use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::Cli;
use ui::context::UiContext;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout and are not failures.
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, cli.yes);

    if let Err(err) = commands::create::cmd_create(&cli, &ui) {
        ui::error::print_error(&err, &ui);
        std::process::exit(1);
    }
}
