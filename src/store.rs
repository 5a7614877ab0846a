//! This module provides a local task store, that behaves like the remote one.
//!
//! It is mostly useful to mock a server in tests, or to try the front end without any server.

use std::collections::BTreeMap;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::date::CalendarDate;
use crate::mock_behaviour::MockBehaviour;
use crate::task::{Task, TaskId};
use crate::traits::TaskStore;

/// A request that has been received by a [`LocalStore`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreRequest {
    /// `GET /api/calendar/{date}`
    GetTasks(CalendarDate),
    /// `POST /api/calendar/{date}`
    AddTask(CalendarDate, String),
    /// `PUT /api/calendar/{date}/{task_id}`
    UpdateTaskStatus(CalendarDate, TaskId, bool),
    /// `DELETE /api/calendar/{date}/{task_id}`
    DeleteTask(CalendarDate, TaskId),
}

type StoredData = BTreeMap<CalendarDate, Vec<Task>>;

/// A task store that keeps its tasks in memory, and optionally in a JSON file
#[derive(Debug, Default)]
pub struct LocalStore {
    backing_file: Option<PathBuf>,
    data: StoredData,

    mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>,
    requests: Mutex<Vec<StoreRequest>>,
}

impl LocalStore {
    /// Create an empty store, that is not backed by any file
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store, that will be saved to `path` after every change
    pub fn new_with_file(path: &Path) -> Self {
        Self {
            backing_file: Some(PathBuf::from(path)),
            ..Self::default()
        }
    }

    /// Initialize a store from the content of a valid backing file if it exists.
    /// Returns an error otherwise
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let data = match std::fs::File::open(path) {
            Err(err) => {
                return Err(format!("Unable to open file {:?}: {}", path, err).into());
            },
            Ok(file) => serde_json::from_reader(file)?,
        };

        Ok(Self {
            backing_file: Some(PathBuf::from(path)),
            data,
            ..Self::default()
        })
    }

    /// Store the current tasks to the backing file (if any)
    pub fn save_to_file(&self) -> Result<(), Box<dyn Error>> {
        let path = match &self.backing_file {
            None => return Ok(()),
            Some(path) => path,
        };
        let file = std::fs::File::create(path)
            .map_err(|err| format!("Unable to save file {:?}: {}", path, err))?;
        serde_json::to_writer_pretty(file, &self.data)?;
        Ok(())
    }

    fn save_or_warn(&self) {
        if let Err(err) = self.save_to_file() {
            log::warn!("Unable to persist the task store: {}", err);
        }
    }

    /// Make this store fail some requests, according to a [`MockBehaviour`]
    pub fn set_mock_behaviour(&mut self, mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>) {
        self.mock_behaviour = mock_behaviour;
    }

    /// Record `request`, then let the mock behaviour (if any) decide whether it fails
    fn receive(&self, request: StoreRequest) -> Result<(), Box<dyn Error>> {
        self.record(request.clone());
        match &self.mock_behaviour {
            None => Ok(()),
            Some(behaviour) => {
                let mut behaviour = behaviour.lock()
                    .map_err(|_| "Mock behaviour lock is poisoned")?;
                behaviour.allow(&request)
            },
        }
    }

    fn record(&self, request: StoreRequest) {
        match self.requests.lock() {
            Ok(mut requests) => requests.push(request),
            Err(poisoned) => poisoned.into_inner().push(request),
        }
    }

    /// The requests this store has received so far, in order
    pub fn requests(&self) -> Vec<StoreRequest> {
        match self.requests.lock() {
            Ok(requests) => requests.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Forget about the requests received so far
    pub fn clear_requests(&mut self) {
        match self.requests.get_mut() {
            Ok(requests) => requests.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }

    /// The tasks of a day. Unlike [`TaskStore::get_tasks`], this is not recorded as a request
    pub fn tasks(&self, date: &CalendarDate) -> &[Task] {
        self.data.get(date).map(|tasks| tasks.as_slice()).unwrap_or(&[])
    }

    /// Append a new uncompleted task to a day, and returns it.
    ///
    /// Its ID is the current timestamp (in milliseconds), bumped if a task of this day already uses it
    pub fn insert_task(&mut self, date: &CalendarDate, description: String) -> Task {
        let tasks = self.data.entry(*date).or_insert_with(Vec::new);

        let mut id = Utc::now().timestamp_millis().max(0) as TaskId;
        while tasks.iter().any(|task| task.id() == id) {
            id += 1;
        }

        let task = Task::new(id, description, false);
        tasks.push(task.clone());
        self.save_or_warn();
        task
    }

    /// Returns whether a matching task has been found
    pub fn set_task_status(&mut self, date: &CalendarDate, task_id: TaskId, completed: bool) -> bool {
        let task = self.data.get_mut(date)
            .and_then(|tasks| tasks.iter_mut().find(|task| task.id() == task_id));
        match task {
            None => false,
            Some(task) => {
                task.set_completed(completed);
                self.save_or_warn();
                true
            },
        }
    }

    /// Returns whether a matching task has been found
    pub fn remove_task(&mut self, date: &CalendarDate, task_id: TaskId) -> bool {
        let tasks = match self.data.get_mut(date) {
            None => return false,
            Some(tasks) => tasks,
        };
        let original_len = tasks.len();
        tasks.retain(|task| task.id() != task_id);
        if tasks.len() < original_len {
            self.save_or_warn();
            true
        } else {
            false
        }
    }
}

#[async_trait]
impl TaskStore for LocalStore {
    async fn get_tasks(&self, date: &CalendarDate) -> Result<Vec<Task>, Box<dyn Error>> {
        self.receive(StoreRequest::GetTasks(*date))?;
        Ok(self.tasks(date).to_vec())
    }

    async fn add_task(&mut self, date: &CalendarDate, description: &str) -> Result<(), Box<dyn Error>> {
        self.receive(StoreRequest::AddTask(*date, description.to_string()))?;
        let task = self.insert_task(date, description.to_string());
        log::debug!("Added task {} to {}", task.id(), date);
        Ok(())
    }

    async fn update_task_status(&mut self, date: &CalendarDate, task_id: TaskId, completed: bool) -> Result<(), Box<dyn Error>> {
        self.receive(StoreRequest::UpdateTaskStatus(*date, task_id, completed))?;
        if self.set_task_status(date, task_id, completed) == false {
            return Err(format!("No task {} on {}", task_id, date).into());
        }
        Ok(())
    }

    async fn delete_task(&mut self, date: &CalendarDate, task_id: TaskId) -> Result<(), Box<dyn Error>> {
        self.receive(StoreRequest::DeleteTask(*date, task_id))?;
        if self.remove_task(date, task_id) == false {
            return Err(format!("No task {} on {}", task_id, date).into());
        }
        Ok(())
    }
}
