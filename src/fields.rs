//! Enumerations shared across the week model and the CLI.
//!
//! This module defines the fixed set of weekdays the task lists are partitioned by,
//! and the selection mode that decides how day headers react to clicks.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// One of the five fixed weekdays.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Day {
    #[serde(alias = "Monday", alias = "monday")]
    Monday,
    #[serde(alias = "Tuesday", alias = "tuesday")]
    Tuesday,
    #[serde(alias = "Wednesday", alias = "wednesday")]
    Wednesday,
    #[serde(alias = "Thursday", alias = "thursday")]
    Thursday,
    #[serde(alias = "Friday", alias = "friday")]
    Friday,
}

impl Day {
    /// All days in display order.
    pub const ALL: [Day; 5] = [Day::Monday, Day::Tuesday, Day::Wednesday, Day::Thursday, Day::Friday];

    /// Position of the day within the week, Monday being 0.
    pub fn index(self) -> usize {
        match self {
            Day::Monday => 0,
            Day::Tuesday => 1,
            Day::Wednesday => 2,
            Day::Thursday => 3,
            Day::Friday => 4,
        }
    }

    /// Upper-case header name.
    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "MONDAY",
            Day::Tuesday => "TUESDAY",
            Day::Wednesday => "WEDNESDAY",
            Day::Thursday => "THURSDAY",
            Day::Friday => "FRIDAY",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How day headers respond to clicks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ValueEnum, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionMode {
    /// Exactly one day is open at a time.
    #[default]
    Single,
    /// Any number of days can be expanded at once.
    Multi,
}

impl SelectionMode {
    /// Input length limit used when none is configured explicitly.
    pub fn default_char_limit(self) -> Option<usize> {
        match self {
            SelectionMode::Single => Some(crate::task::TASK_CHAR_LIMIT),
            SelectionMode::Multi => None,
        }
    }
}
