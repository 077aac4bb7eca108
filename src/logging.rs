//! Logger setup.
//!
//! The week view owns the terminal, so log lines only go to stderr for the plain
//! commands. The view logs to `--log-file` when one is given and is silent otherwise.

use std::fs::OpenOptions;
use std::path::Path;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Environment variable holding the log filter, in `env_logger` syntax.
pub const LOG_ENV: &str = "WEEKFLOW_LOG";

/// Install the global logger, writing to `log_file` when given.
///
/// Without a file the interactive view logs nothing and the other commands log to stderr.
pub fn init(log_file: Option<&Path>, interactive: bool) {
    let mut builder = Builder::from_env(Env::default().filter_or(LOG_ENV, "info"));
    builder.format_timestamp_secs();

    match log_file {
        Some(path) => match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => {
                builder.target(Target::Pipe(Box::new(file)));
            }
            Err(e) => {
                eprintln!("Failed to open log file {}: {}", path.display(), e);
                builder.filter_level(LevelFilter::Off);
            }
        },
        None if interactive => {
            builder.filter_level(LevelFilter::Off);
        }
        None => {
            builder.target(Target::Stderr);
        }
    }

    if let Err(e) = builder.try_init() {
        eprintln!("Logger already initialised: {e}");
    }
}
