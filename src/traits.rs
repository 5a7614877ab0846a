use std::error::Error;

use async_trait::async_trait;

use crate::date::CalendarDate;
use crate::task::{Task, TaskId};

/// A source of tasks, organized by calendar day.
///
/// This is usually a remote server (see [`Client`](crate::client::Client)), but it can be mocked by a [`LocalStore`](crate::store::LocalStore)
#[async_trait]
pub trait TaskStore {
    /// Returns the tasks of a given day.
    /// A day that has never been used simply has no task.
    async fn get_tasks(&self, date: &CalendarDate) -> Result<Vec<Task>, Box<dyn Error>>;

    /// Add a new (uncompleted) task to a day
    async fn add_task(&mut self, date: &CalendarDate, description: &str) -> Result<(), Box<dyn Error>>;

    /// Change the completion status of a task
    async fn update_task_status(&mut self, date: &CalendarDate, task_id: TaskId, completed: bool) -> Result<(), Box<dyn Error>>;

    /// Remove a task
    async fn delete_task(&mut self, date: &CalendarDate, task_id: TaskId) -> Result<(), Box<dyn Error>>;
}
