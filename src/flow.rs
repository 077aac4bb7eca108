//! The widget's state store and its transitions.
//!
//! `WeekFlow` owns the week, the selection, the shared input buffer and the seeded
//! configuration. Every user action maps to one synchronous method here; the terminal
//! view only reads from it and calls these methods from its event handlers.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::fields::{Day, SelectionMode};
use crate::seed::Seed;
use crate::selection::Selection;
use crate::task::{Task, TaskId};
use crate::tui::input::InputField;
use crate::week::WeekState;

pub struct WeekFlow {
    week: WeekState,
    selection: Selection,
    input: InputField,
    labels: BTreeMap<Day, String>,
    default_tasks: Vec<String>,
}

impl WeekFlow {
    /// Build the widget state from a seed.
    pub fn from_seed(seed: &Seed, mode: SelectionMode, char_limit: Option<usize>) -> Self {
        WeekFlow {
            week: seed.build_week(),
            selection: Selection::new(mode, &seed.selected),
            input: InputField::new(char_limit),
            labels: seed.labels.clone(),
            default_tasks: seed.default_tasks.clone(),
        }
    }

    /// Built-in sample week with the mode's default input limit.
    pub fn with_mode(mode: SelectionMode) -> Self {
        Self::from_seed(&Seed::default(), mode, mode.default_char_limit())
    }

    pub fn week(&self) -> &WeekState {
        &self.week
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    pub fn input(&self) -> &InputField {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputField {
        &mut self.input
    }

    /// Date label for a day.
    pub fn label(&self, day: Day) -> &str {
        self.labels.get(&day).map(String::as_str).unwrap_or("")
    }

    /// Click on a day header.
    pub fn click_day(&mut self, day: Day) {
        self.selection.click(day);
        log::debug!("Clicked {day}, open days: {:?}", self.selection.open_days());
    }

    /// The day input is committed into, if any.
    pub fn active_day(&self) -> Option<Day> {
        self.selection.active_day()
    }

    /// Append a task to a day. Blank text is ignored.
    pub fn add_task(&mut self, day: Day, text: &str) -> Option<TaskId> {
        let id = self.week.add_task(day, text)?;
        log::debug!("Added task {id} to {day}");
        Some(id)
    }

    /// Commit the input buffer as a new task on the active day.
    ///
    /// The buffer is only cleared when a task was actually created.
    pub fn commit_input(&mut self) -> Option<(Day, TaskId)> {
        let day = self.active_day()?;
        let text = self.input.value.clone();
        let id = self.add_task(day, &text)?;
        self.input.clear();
        Some((day, id))
    }

    /// Append the default preset to a day.
    pub fn add_defaults(&mut self, day: Day) -> Vec<TaskId> {
        let ids = self.week.add_defaults(day, &self.default_tasks);
        log::debug!("Added {} default tasks to {day}", ids.len());
        ids
    }

    /// Flip a task's completion flag.
    pub fn toggle_task(&mut self, day: Day, id: TaskId) -> Result<bool> {
        let completed = self.week.toggle(day, id)?;
        log::debug!("Task {id} on {day} completed={completed}");
        Ok(completed)
    }

    pub fn remove_task(&mut self, day: Day, id: TaskId) -> Result<Task> {
        let task = self.week.remove(day, id)?;
        log::debug!("Removed task {id} from {day}");
        Ok(task)
    }
}
