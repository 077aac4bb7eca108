//! # WeekFlow - weekly to-do list for the terminal
//!
//! Pick a day, add, toggle and remove its tasks, and see a row of completion markers
//! next to every collapsed day.
//!
//! ## Key Features
//!
//! - **Two selection modes**: `single` keeps exactly one day open, `multi` lets any
//!   number of days expand at once
//! - **Keyboard and mouse**: every clickable element has a key binding
//! - **Explicit input capture**: typing only edits the new-task line after it is focused
//! - **Seeded start**: initial tasks, date labels and the default-task preset come from a
//!   JSON seed; nothing is ever saved
//!
//! ## Quick Start
//!
//! ```bash
//! # Open the sample week
//! weekflow
//!
//! # Expand several days at once, labelled with the current week
//! weekflow --mode multi --week-of 2025-01-20
//!
//! # Dump the built-in seed, edit it, and start from it
//! weekflow seed --output week.json
//! weekflow --seed week.json
//!
//! # Print completion counts without opening the view
//! weekflow summary
//! ```

use std::process;

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod error;
pub mod fields;
pub mod flow;
pub mod logging;
pub mod seed;
pub mod selection;
pub mod task;
pub mod week;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod utils;
}

use cli::Cli;
use cmd::*;
use error::Result;
use flow::WeekFlow;

fn main() {
    let mut cli = Cli::parse();
    let command = cli.command.take().unwrap_or(Commands::Ui);

    logging::init(cli.log_file.as_deref(), matches!(command, Commands::Ui));

    if let Err(e) = run(&cli, command) {
        log::error!("{e}");
        eprintln!("weekflow: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli, command: Commands) -> Result<()> {
    match command {
        Commands::Completions { shell } => {
            cmd_completions(shell);
            Ok(())
        }
        Commands::Seed { output } => cmd_seed(&cli.load_seed()?, output.as_deref()),
        Commands::Summary => {
            cmd_summary(&cli.load_seed()?.build_week());
            Ok(())
        }
        Commands::Ui => {
            let seed = cli.load_seed()?;
            cmd_ui(WeekFlow::from_seed(&seed, cli.mode, cli.char_limit()))
        }
    }
}
