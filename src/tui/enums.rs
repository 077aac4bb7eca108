//! Enumerations for TUI state management.

use crate::fields::Day;
use crate::task::TaskId;

/// Screen currently shown.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum AppState {
    Week,
    Help,
}

/// Whether keystrokes navigate the week or edit the input buffer.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum InputMode {
    Browse,
    /// Keys are captured by the input line of the active day.
    Capture,
}

/// A row the keyboard cursor can rest on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Row {
    Header(Day),
    Task(Day, TaskId),
    Input(Day),
}

impl Row {
    pub fn day(self) -> Day {
        match self {
            Row::Header(day) | Row::Task(day, _) | Row::Input(day) => day,
        }
    }
}

/// A clickable region of the rendered week.
///
/// When regions overlap, the one registered last is the most specific and wins.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HitTarget {
    DayHeader(Day),
    AddDefaults(Day),
    ToggleTask(Day, TaskId),
    RemoveTask(Day, TaskId),
    Input(Day),
}
