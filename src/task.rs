//! To-do tasks, as stored for a given calendar day

use serde::{Deserialize, Serialize};

/// The identifier of a task. It is assigned by the task store, and is unique within a day
pub type TaskId = u64;

/// A to-do task.
///
/// This is only a display copy of what the task store holds: it is discarded at every reload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Assigned by the task store
    id: TaskId,
    /// The text of the task
    description: String,
    /// Whether this task has been checked
    completed: bool,
}

impl Task {
    pub fn new(id: TaskId, description: String, completed: bool) -> Self {
        Self { id, description, completed }
    }

    pub fn id(&self) -> TaskId          { self.id }
    pub fn description(&self) -> &str   { &self.description }
    pub fn completed(&self) -> bool     { self.completed }

    /// Set the completion status
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
