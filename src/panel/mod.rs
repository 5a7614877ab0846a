//! The task list of the selected day
//!
//! The task store is always the source of truth: every change is sent to it, then the whole list is fetched again.
//! Nothing is ever updated locally in advance.

use crate::date::CalendarDate;
use crate::task::{Task, TaskId};
use crate::traits::TaskStore;
use crate::view::{self, ListRow};

pub mod feedback;
use feedback::{FeedbackSender, PanelEvent};

/// What the task list currently shows
#[derive(Clone, Debug, PartialEq)]
pub enum ListState {
    /// No load has been requested yet
    Idle,
    /// A load is in flight
    Loading,
    /// The tasks, as returned by the task store
    Loaded(Vec<Task>),
    /// The last load has failed (either the request or the parsing of its reply)
    Failed,
}

/// A panel that displays and edits the tasks of one selected day
pub struct TaskPanel<S: TaskStore> {
    store: S,
    selected_date: CalendarDate,
    list: ListState,
    /// The text field used to type new tasks
    input: String,

    feedback_channel: Option<FeedbackSender>,
}

impl<S: TaskStore> TaskPanel<S> {
    /// Create a panel. This does not load anything yet
    pub fn new(store: S, selected_date: CalendarDate) -> Self {
        Self {
            store,
            selected_date,
            list: ListState::Idle,
            input: String::new(),
            feedback_channel: None,
        }
    }

    /// Create a panel that reports the state of its list to a [`feedback channel`](feedback::feedback_channel)
    pub fn new_with_feedback_channel(store: S, selected_date: CalendarDate, channel: FeedbackSender) -> Self {
        let mut panel = Self::new(store, selected_date);
        panel.feedback_channel = Some(channel);
        panel
    }

    pub fn store(&self) -> &S                     { &self.store }
    pub fn store_mut(&mut self) -> &mut S         { &mut self.store }
    pub fn selected_date(&self) -> &CalendarDate  { &self.selected_date }
    pub fn list(&self) -> &ListState              { &self.list }
    pub fn input(&self) -> &str                   { &self.input }

    pub fn set_input<T: ToString>(&mut self, text: T) {
        self.input = text.to_string();
    }

    /// Change the day this panel works on. This does not reload anything
    pub fn set_selected_date(&mut self, date: CalendarDate) {
        self.selected_date = date;
    }

    /// The rows that should be displayed for the current list
    pub fn rows(&self) -> Vec<ListRow> {
        view::list_rows(&self.list)
    }

    fn feedback(&self, event: PanelEvent) {
        if let Some(sender) = &self.feedback_channel {
            // Nobody listening anymore is not an error
            let _ = sender.send(event);
        }
    }

    /// Fetch the tasks of `date` and replace the whole list with them
    pub async fn load_tasks(&mut self, date: &CalendarDate) {
        self.list = ListState::Loading;
        self.feedback(PanelEvent::Loading{ date: *date });

        match self.store.get_tasks(date).await {
            Ok(tasks) => {
                log::debug!("Loaded {} task(s) for {}", tasks.len(), date);
                self.feedback(PanelEvent::Loaded{ date: *date, count: tasks.len() });
                self.list = ListState::Loaded(tasks);
            },
            Err(err) => {
                log::warn!("Unable to load tasks for {}: {}", date, err);
                self.feedback(PanelEvent::Failed{ date: *date });
                self.list = ListState::Failed;
            },
        }
    }

    /// Reload the tasks of the selected day
    pub async fn reload(&mut self) {
        let date = self.selected_date;
        self.load_tasks(&date).await;
    }

    /// Add a task to the selected day, then reload.
    ///
    /// Descriptions that are empty (once trimmed) are ignored, and no request is sent.
    /// The reload happens even if the task could not be added
    pub async fn add_task(&mut self, description: &str) {
        let description = description.trim();
        if description.is_empty() {
            log::debug!("Ignoring an empty task");
            return;
        }

        let date = self.selected_date;
        if let Err(err) = self.store.add_task(&date, description).await {
            log::warn!("Unable to add a task to {}: {}", date, err);
        }
        self.input.clear();
        self.load_tasks(&date).await;
    }

    /// Add the content of the input field as a new task (see [`Self::add_task`])
    pub async fn submit_input(&mut self) {
        let text = self.input.clone();
        self.add_task(&text).await;
    }

    /// Check or uncheck a task, then reload `date`
    pub async fn update_task_status(&mut self, date: &CalendarDate, task_id: TaskId, completed: bool) {
        if let Err(err) = self.store.update_task_status(date, task_id, completed).await {
            log::warn!("Unable to update task {} of {}: {}", task_id, date, err);
        }
        self.load_tasks(date).await;
    }

    /// Delete a task, then reload `date`.
    ///
    /// `confirm` is asked first (with the question to display). If it returns `false`, nothing is sent and the list is left untouched
    pub async fn delete_task<F>(&mut self, date: &CalendarDate, task_id: TaskId, confirm: F)
    where
        F: FnOnce(&str) -> bool,
    {
        let question = crate::config::get(&crate::config::DELETE_CONFIRMATION);
        if confirm(&question) == false {
            log::debug!("Deletion of task {} has not been confirmed", task_id);
            return;
        }

        if let Err(err) = self.store.delete_task(date, task_id).await {
            log::warn!("Unable to delete task {} of {}: {}", task_id, date, err);
        }
        self.load_tasks(date).await;
    }
}
