//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The environment variable that can override [`SERVER_URL`] in the `calendar-tasks` binary
pub const SERVER_URL_ENV: &str = "CALENDAR_TASKS_URL";

/// Base URL of the task store (the `/api/calendar/...` paths are appended to it).
/// Feel free to override it when initing this library.
pub static SERVER_URL: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("http://localhost:5000".to_string())));

/// The question asked to the user before a task is deleted
pub static DELETE_CONFIRMATION: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("Are you sure you want to delete this task?".to_string())));

/// Returns the current value of a string setting.
///
/// A poisoned lock still holds a valid `String`, so its value is used anyway
pub fn get(setting: &Lazy<Arc<Mutex<String>>>) -> String {
    match setting.lock() {
        Ok(value) => value.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Overrides a string setting
pub fn set<S: ToString>(setting: &Lazy<Arc<Mutex<String>>>, value: S) {
    let mut guard = match setting.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    *guard = value.to_string();
}
