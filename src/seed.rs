//! Initial configuration injected into the widget at construction.
//!
//! A seed describes the tasks each day starts with, the date label shown under an open
//! day, the preset used by the add-defaults action and the initially open days.
//! The built-in seed is the sample week of January 2025; a JSON file can replace it.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fields::Day;
use crate::task::{Task, DEFAULT_TASKS};
use crate::week::WeekState;

/// Label format used when labels are generated for a calendar week.
const LABEL_FORMAT: &str = "%B, %-d %Y";

/// A task as written in a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedTask {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// Initial widget configuration.
///
/// Fields missing from a seed file fall back individually: no tasks, the built-in
/// labels, the built-in preset and Tuesday open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub tasks: BTreeMap<Day, Vec<SeedTask>>,
    #[serde(default = "builtin_labels")]
    pub labels: BTreeMap<Day, String>,
    #[serde(default = "builtin_default_tasks")]
    pub default_tasks: Vec<String>,
    #[serde(default = "builtin_selected")]
    pub selected: Vec<Day>,
}

fn builtin_labels() -> BTreeMap<Day, String> {
    BTreeMap::from([
        (Day::Monday, "January, 20 2025".to_string()),
        (Day::Tuesday, "January, 21 2025 - 7:57PM - 84°".to_string()),
        (Day::Wednesday, "January, 22 2025".to_string()),
        (Day::Thursday, "January, 23 2025".to_string()),
        (Day::Friday, "January, 24 2025".to_string()),
    ])
}

fn builtin_default_tasks() -> Vec<String> {
    DEFAULT_TASKS.iter().map(|s| s.to_string()).collect()
}

fn builtin_selected() -> Vec<Day> {
    vec![Day::Tuesday]
}

impl Default for Seed {
    fn default() -> Self {
        let monday = [
            ("5km run", true),
            ("Read 10 pages", false),
            ("Walk the dog", false),
            ("Get groceries", false),
            ("Design a to-do app (?)", false),
        ]
        .into_iter()
        .map(|(text, completed)| SeedTask { text: text.to_string(), completed })
        .collect();

        Seed {
            tasks: BTreeMap::from([(Day::Monday, monday)]),
            labels: builtin_labels(),
            default_tasks: builtin_default_tasks(),
            selected: builtin_selected(),
        }
    }
}

impl Seed {
    /// A seed with no tasks, no labels and the built-in preset.
    pub fn empty() -> Self {
        Seed {
            tasks: BTreeMap::new(),
            labels: BTreeMap::new(),
            default_tasks: builtin_default_tasks(),
            selected: builtin_selected(),
        }
    }

    /// Load a seed from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let buf = fs::read_to_string(path).map_err(|source| Error::SeedRead {
            path: path.to_path_buf(),
            source,
        })?;
        let seed = serde_json::from_str(&buf).map_err(|source| Error::SeedParse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded seed from {}", path.display());
        Ok(seed)
    }

    /// Pretty JSON form, loadable again with [`Seed::load`].
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Replace the labels with the dates of the Monday-to-Friday week containing `date`.
    ///
    /// Fails when that week runs past the calendar range chrono can represent.
    pub fn with_week_of(mut self, date: NaiveDate) -> Result<Self> {
        let out_of_range = || Error::InvalidDate(date.to_string());
        let monday = date
            .checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
            .ok_or_else(out_of_range)?;
        self.labels = Day::ALL
            .into_iter()
            .map(|day| {
                let date = monday.checked_add_days(Days::new(day.index() as u64)).ok_or_else(out_of_range)?;
                Ok((day, date.format(LABEL_FORMAT).to_string()))
            })
            .collect::<Result<_>>()?;
        Ok(self)
    }

    /// Label shown under an open day, empty when none is configured.
    pub fn label(&self, day: Day) -> &str {
        self.labels.get(&day).map(String::as_str).unwrap_or("")
    }

    /// Build the initial week. Days absent from the seed start empty.
    pub fn build_week(&self) -> WeekState {
        let mut week = WeekState::new();
        for (day, tasks) in &self.tasks {
            for task in tasks {
                week.push(*day, Task::with_state(task.text.clone(), task.completed));
            }
        }
        week
    }
}

/// Parse a `YYYY-MM-DD` command line date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| Error::InvalidDate(s.to_string()))
}
