//! Structured views of the calendar and of the task list
//!
//! The widgets are first described as typed rows and cells, so that they can be checked without any display.
//! They can then be rendered as HTML (`maud` escapes every piece of text) or as plain text for terminals.

use std::fmt::Write;

use maud::{html, Markup};

use crate::date::CalendarDate;
use crate::grid::{CalendarGrid, Cell};
use crate::panel::ListState;
use crate::task::TaskId;

/// The placeholders that replace the task list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placeholder {
    Loading,
    NoTasks,
    Error,
}

impl Placeholder {
    pub fn text(&self) -> &'static str {
        match self {
            Placeholder::Loading => "Loading...",
            Placeholder::NoTasks => "No tasks for this day.",
            Placeholder::Error => "Error loading tasks.",
        }
    }
}

/// One row of the task list
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListRow {
    Placeholder(Placeholder),
    /// A task, with its checkbox and its delete control
    Task {
        id: TaskId,
        description: String,
        completed: bool,
    },
}

/// The rows to display for a task list.
///
/// A list that has never been loaded has no row at all
pub fn list_rows(list: &ListState) -> Vec<ListRow> {
    match list {
        ListState::Idle => Vec::new(),
        ListState::Loading => vec![ListRow::Placeholder(Placeholder::Loading)],
        ListState::Failed => vec![ListRow::Placeholder(Placeholder::Error)],
        ListState::Loaded(tasks) if tasks.is_empty() => vec![ListRow::Placeholder(Placeholder::NoTasks)],
        ListState::Loaded(tasks) => tasks.iter()
            .map(|task| ListRow::Task {
                id: task.id(),
                description: task.description().to_string(),
                completed: task.completed(),
            })
            .collect(),
    }
}

/// Render the `<li>` items of a task list.
///
/// Controls carry `data-date` and `data-task-id` attributes, so that a front end can route their events
pub fn render_list_html(date: &CalendarDate, rows: &[ListRow]) -> Markup {
    html! {
        @for row in rows {
            @match row {
                ListRow::Placeholder(placeholder) => li { (placeholder.text()) },
                ListRow::Task { id, description, completed } => {
                    li.completed[*completed] {
                        input type="checkbox" data-date=(date) data-task-id=(id) checked[*completed];
                        span { (description) }
                        button.btn-sm.btn-danger data-date=(date) data-task-id=(id) { "Delete" }
                    }
                },
            }
        }
    }
}

/// Render the cells of a calendar grid as `<div>`s
pub fn render_grid_html(grid: &CalendarGrid) -> Markup {
    html! {
        @for cell in grid.cells() {
            @match cell {
                Cell::Header(label) => div.calendar-day.calendar-header-day { (label) },
                Cell::Filler => div.calendar-day {},
                Cell::Day(day) => {
                    div.calendar-day.today[day.is_today].selected[day.is_selected] data-date=(day.date) { (day.label) }
                },
            }
        }
    }
}

/// Render a calendar grid for terminals, one line per week.
///
/// Today is marked with a `*`, the selected day is surrounded by brackets
pub fn render_grid_text(grid: &CalendarGrid) -> String {
    let mut text = format!("{:^35}\n", grid.title());
    let mut column = 0;
    for cell in grid.cells() {
        let content = match cell {
            Cell::Header(label) => format!(" {:<3} ", label),
            Cell::Filler => "     ".to_string(),
            Cell::Day(day) => {
                let today = if day.is_today { "*" } else { " " };
                if day.is_selected {
                    format!("[{:>2}]{}", day.label, today)
                } else {
                    format!(" {:>2} {}", day.label, today)
                }
            },
        };
        text.push_str(&content);
        column += 1;
        if column % 7 == 0 {
            text.push('\n');
        }
    }
    if column % 7 != 0 {
        text.push('\n');
    }
    text
}

/// Render a task list for terminals
pub fn render_list_text(rows: &[ListRow]) -> String {
    let mut text = String::new();
    for row in rows {
        match row {
            ListRow::Placeholder(placeholder) => {
                let _ = writeln!(text, "  {}", placeholder.text());
            },
            ListRow::Task { id, description, completed } => {
                let check = if *completed { "✓" } else { " " };
                let _ = writeln!(text, "  [{}] {}\t(#{})", check, description, id);
            },
        }
    }
    text
}
