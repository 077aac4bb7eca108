use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;
use crate::error::Result;
use crate::fields::SelectionMode;
use crate::seed::{parse_date, Seed};

/// Weekly to-do list for the terminal.
/// Nothing is saved: every run starts from the seed.
#[derive(Parser)]
#[command(name = "weekflow", version, about = "Weekly to-do list for the terminal")]
pub struct Cli {
    /// Selection mode: single | multi.
    #[arg(long, value_enum, global = true, default_value_t = SelectionMode::Single)]
    pub mode: SelectionMode,

    /// JSON seed file with initial tasks, date labels and default tasks.
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    /// Label the days with the Monday to Friday week containing this date (YYYY-MM-DD).
    #[arg(long, global = true)]
    pub week_of: Option<String>,

    /// Maximum task length in characters; 0 removes the limit.
    #[arg(long, global = true)]
    pub char_limit: Option<usize>,

    /// Append logs to this file. Filter with WEEKFLOW_LOG.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Input limit after applying the mode default.
    pub fn char_limit(&self) -> Option<usize> {
        match self.char_limit {
            Some(0) => None,
            Some(limit) => Some(limit),
            None => self.mode.default_char_limit(),
        }
    }

    /// The seed file, or the built-in week, with `--week-of` labels applied.
    pub fn load_seed(&self) -> Result<Seed> {
        let seed = match &self.seed {
            Some(path) => Seed::load(path)?,
            None => Seed::default(),
        };
        match &self.week_of {
            Some(date) => seed.with_week_of(parse_date(date)?),
            None => Ok(seed),
        }
    }
}
