//! Command implementations for the CLI interface.
//!
//! The interactive week view is the default command; the others print the seed or a
//! plain-text summary without touching the terminal state.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::error::Result;
use crate::fields::Day;
use crate::flow::WeekFlow;
use crate::seed::Seed;
use crate::tui::run::run_tui;
use crate::week::WeekState;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive week view (default).
    Ui,

    /// Print the effective seed as JSON, ready to edit and pass back with --seed.
    Seed {
        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print completion counts for every day of the seeded week.
    Summary,

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Launch the terminal user interface.
pub fn cmd_ui(flow: WeekFlow) -> Result<()> {
    log::info!(
        "Starting week view in {:?} mode, input limit {:?}",
        flow.mode(),
        flow.input().limit
    );
    run_tui(flow)?;
    log::info!("Week view closed");
    Ok(())
}

/// Print or write the seed as JSON.
pub fn cmd_seed(seed: &Seed, output: Option<&Path>) -> Result<()> {
    let json = seed.to_json()?;
    match output {
        Some(path) => {
            fs::write(path, json + "\n")?;
            println!("Seed written to {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Print one line per day with completion counts and task markers.
pub fn cmd_summary(week: &WeekState) {
    print!("{}", format_summary(week));
}

/// `x` marks a completed task, `.` a pending one.
pub fn format_summary(week: &WeekState) -> String {
    let mut out = String::new();
    for day in Day::ALL {
        let summary = week.summary(day);
        let markers: String = week
            .tasks(day)
            .iter()
            .map(|t| if t.completed { 'x' } else { '.' })
            .collect();
        let mut line = format!("{:<10} {}/{}", day.name(), summary.completed, summary.total);
        if !markers.is_empty() {
            line.push(' ');
            line.push_str(&markers);
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_of_builtin_week() {
        let week = Seed::default().build_week();
        let summary = format_summary(&week);
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "MONDAY     1/5 x....");
        assert_eq!(lines[1], "TUESDAY    0/0");
        assert_eq!(lines[4], "FRIDAY     0/0");
    }

    #[test]
    fn test_seed_written_to_file_loads_back() {
        let path = std::env::temp_dir().join(format!("weekflow-seed-{}.json", std::process::id()));
        let seed = Seed::default().with_week_of(chrono::NaiveDate::from_ymd_opt(2025, 6, 4).unwrap()).unwrap();

        cmd_seed(&seed, Some(path.as_path())).unwrap();
        assert_eq!(Seed::load(&path).unwrap(), seed);
        fs::remove_file(&path).unwrap();
    }
}
