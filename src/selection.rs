//! Which days currently show their detail panel.
//!
//! The selection is the only state machine in the widget. In single mode it is a
//! one-slot register overwritten on every click; in multi mode it is a set that a
//! click either adds the day to or removes it from.

use std::collections::BTreeSet;

use crate::fields::{Day, SelectionMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(Day),
    Multi(BTreeSet<Day>),
}

impl Selection {
    /// Build a selection for a mode from the configured initial days.
    ///
    /// Single mode keeps the first listed day and falls back to Tuesday when none is given.
    pub fn new(mode: SelectionMode, initial: &[Day]) -> Self {
        match mode {
            SelectionMode::Single => Selection::Single(initial.first().copied().unwrap_or(Day::Tuesday)),
            SelectionMode::Multi => Selection::Multi(initial.iter().copied().collect()),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Selection::Single(_) => SelectionMode::Single,
            Selection::Multi(_) => SelectionMode::Multi,
        }
    }

    /// Apply a click on a day header.
    pub fn click(&mut self, day: Day) {
        match self {
            Selection::Single(selected) => *selected = day,
            Selection::Multi(expanded) => {
                if !expanded.remove(&day) {
                    expanded.insert(day);
                }
            }
        }
    }

    /// Whether the day's detail panel is shown.
    pub fn is_open(&self, day: Day) -> bool {
        match self {
            Selection::Single(selected) => *selected == day,
            Selection::Multi(expanded) => expanded.contains(&day),
        }
    }

    /// The day typed input is committed into.
    ///
    /// In multi mode this only exists while exactly one day is expanded.
    pub fn active_day(&self) -> Option<Day> {
        match self {
            Selection::Single(selected) => Some(*selected),
            Selection::Multi(expanded) if expanded.len() == 1 => expanded.iter().next().copied(),
            Selection::Multi(_) => None,
        }
    }

    /// Open days in display order.
    pub fn open_days(&self) -> Vec<Day> {
        Day::ALL.into_iter().filter(|d| self.is_open(*d)).collect()
    }
}
