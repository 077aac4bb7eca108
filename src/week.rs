//! In-memory week state: one ordered task list per day.
//!
//! `WeekState` plays the part a database would play in a larger tool, except that
//! nothing here is ever written to disk. Every day always has a list, possibly empty,
//! and the order of a list is the order it is displayed in.

use crate::error::{Error, Result};
use crate::fields::Day;
use crate::task::{Task, TaskId};

/// Tasks for every weekday, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekState {
    days: [Vec<Task>; 5],
}

/// Completion counts for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DaySummary {
    pub total: usize,
    pub completed: usize,
}

impl DaySummary {
    pub fn pending(&self) -> usize {
        self.total - self.completed
    }
}

impl WeekState {
    /// Create a week with no tasks on any day.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks for a day in display order.
    pub fn tasks(&self, day: Day) -> &[Task] {
        &self.days[day.index()]
    }

    /// Get a task by day and identifier.
    pub fn get(&self, day: Day, id: TaskId) -> Option<&Task> {
        self.tasks(day).iter().find(|t| t.id == id)
    }

    /// Position of a task within its day's list.
    pub fn position(&self, day: Day, id: TaskId) -> Option<usize> {
        self.tasks(day).iter().position(|t| t.id == id)
    }

    /// Append an already built task, returning its identifier.
    pub fn push(&mut self, day: Day, task: Task) -> TaskId {
        let id = task.id;
        self.days[day.index()].push(task);
        id
    }

    /// Append a new incomplete task with trimmed text.
    ///
    /// Returns `None` without touching the list when the trimmed text is empty.
    /// Internal whitespace is kept as typed.
    pub fn add_task(&mut self, day: Day, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(self.push(day, Task::new(text)))
    }

    /// Append one incomplete task per preset entry. Already present entries are not
    /// skipped, so repeated calls duplicate the preset.
    pub fn add_defaults<S: AsRef<str>>(&mut self, day: Day, preset: &[S]) -> Vec<TaskId> {
        preset
            .iter()
            .map(|text| self.push(day, Task::new(text.as_ref())))
            .collect()
    }

    /// Flip the completion flag of a task and return the new value.
    pub fn toggle(&mut self, day: Day, id: TaskId) -> Result<bool> {
        let task = self.days[day.index()]
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(Error::TaskNotFound { day, id })?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    /// Remove a task, keeping the relative order of the others.
    pub fn remove(&mut self, day: Day, id: TaskId) -> Result<Task> {
        let idx = self.position(day, id).ok_or(Error::TaskNotFound { day, id })?;
        Ok(self.days[day.index()].remove(idx))
    }

    /// Completion counts for a day.
    pub fn summary(&self, day: Day) -> DaySummary {
        let tasks = self.tasks(day);
        DaySummary {
            total: tasks.len(),
            completed: tasks.iter().filter(|t| t.completed).count(),
        }
    }
}
