//! This crate provides a month calendar with a per-day task list.
//!
//! The calendar page itself is pure date math, in the [`grid`] module.
//!
//! Tasks are kept by a task store, that is usually a REST server reached with the [`client`] module.
//! A [`TaskPanel`](panel::TaskPanel) displays the tasks of the selected day, and sends every change to the store before reloading the whole list. \
//! A local store (in the [`store`] module) mimics the server, which is useful for tests and demos.
//!
//! The [`CalendarApp`](app::CalendarApp) ties the calendar and the panel together.

pub mod traits;

mod date;
pub use date::CalendarDate;
mod task;
pub use task::{Task, TaskId};

pub mod grid;
pub mod panel;
pub mod view;
pub mod app;
pub use app::CalendarApp;

pub mod client;
pub mod store;
pub mod mock_behaviour;

pub mod config;
