//! Utilities to observe the task list of a panel

use std::fmt::{Display, Error, Formatter};

use crate::date::CalendarDate;

/// Something that happened to the task list of a [`TaskPanel`](crate::panel::TaskPanel)
#[derive(Clone, Debug, PartialEq)]
pub enum PanelEvent {
    /// Nothing has been loaded yet
    NotStarted,
    /// A reload has been requested and is in flight
    Loading{ date: CalendarDate },
    /// The tasks of a day have been fetched
    Loaded{ date: CalendarDate, count: usize },
    /// The tasks of a day could not be fetched
    Failed{ date: CalendarDate },
}

impl Display for PanelEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            PanelEvent::NotStarted => write!(f, "Not started"),
            PanelEvent::Loading{date} => write!(f, "Loading tasks for {}...", date),
            PanelEvent::Loaded{date, count} => write!(f, "{} task(s) for {}", count, date),
            PanelEvent::Failed{date} => write!(f, "Unable to load tasks for {}", date),
        }
    }
}

impl Default for PanelEvent {
    fn default() -> Self {
        Self::NotStarted
    }
}



/// See [`feedback_channel`]
pub type FeedbackSender = tokio::sync::watch::Sender<PanelEvent>;
/// See [`feedback_channel`]
pub type FeedbackReceiver = tokio::sync::watch::Receiver<PanelEvent>;

/// Create a feeback channel, that can be used to follow the task list of a panel
pub fn feedback_channel() -> (FeedbackSender, FeedbackReceiver) {
    tokio::sync::watch::channel(PanelEvent::default())
}
