// viva-review: terminal study aid for PhD viva questions and a glossary.
// Parses the command line, sets up logging, and runs the TUI.

mod app;
mod config;
mod data;
mod error;
mod logging;
mod state;
mod ui;

use std::process::ExitCode;

use clap::Parser;

use crate::app::App;
use crate::config::{Config, Overrides};
use crate::error::Result;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    overrides: Overrides,
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(&cli.overrides)?;
    let mut app = App::load(&config);

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    result?;
    tracing::info!("exiting");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fatal");
            eprintln!("viva-review: {}", e);
            ExitCode::FAILURE
        }
    }
}
