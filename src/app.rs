//! The whole widget: a month calendar next to the task list of the selected day

use std::error::Error;

use crate::date::CalendarDate;
use crate::grid::{CalendarGrid, ViewState};
use crate::panel::TaskPanel;
use crate::traits::TaskStore;

/// The state of the calendar widget.
///
/// The displayed month and the selected day are independent: browsing months keeps the selection
pub struct CalendarApp<S: TaskStore> {
    today: CalendarDate,
    view: ViewState,
    grid: CalendarGrid,
    panel: TaskPanel<S>,
}

impl<S: TaskStore> CalendarApp<S> {
    /// Display the month of `today`, with `today` selected. This does not load anything yet (see [`Self::start`])
    pub fn new(store: S, today: CalendarDate) -> Result<Self, Box<dyn Error>> {
        Self::with_panel(TaskPanel::new(store, today), today)
    }

    /// Same as [`Self::new`], with a custom panel (e.g. one that has a feedback channel).
    /// The panel is moved to `today`
    pub fn with_panel(mut panel: TaskPanel<S>, today: CalendarDate) -> Result<Self, Box<dyn Error>> {
        panel.set_selected_date(today);
        let view = ViewState::containing(&today);
        let grid = CalendarGrid::generate(view.month(), view.year(), &today, &today)?;
        Ok(Self { today, view, grid, panel })
    }

    pub fn today(&self) -> &CalendarDate          { &self.today }
    pub fn view(&self) -> &ViewState              { &self.view }
    pub fn grid(&self) -> &CalendarGrid           { &self.grid }
    pub fn panel(&self) -> &TaskPanel<S>          { &self.panel }
    pub fn panel_mut(&mut self) -> &mut TaskPanel<S> { &mut self.panel }
    pub fn selected_date(&self) -> &CalendarDate  { self.panel.selected_date() }

    /// Load the tasks of the selected day
    pub async fn start(&mut self) {
        self.panel.reload().await;
    }

    /// Display `view`. Nothing changes if its grid cannot be generated
    fn show(&mut self, view: ViewState) -> Result<(), Box<dyn Error>> {
        let selected = *self.panel.selected_date();
        let grid = CalendarGrid::generate(view.month(), view.year(), &self.today, &selected)?;
        self.view = view;
        self.grid = grid;
        Ok(())
    }

    /// Display the previous month
    pub fn prev_month(&mut self) -> Result<(), Box<dyn Error>> {
        let mut view = self.view;
        view.prev_month();
        self.show(view)
    }

    /// Display the next month
    pub fn next_month(&mut self) -> Result<(), Box<dyn Error>> {
        let mut view = self.view;
        view.next_month();
        self.show(view)
    }

    /// Select a day of the displayed month, and load its tasks.
    ///
    /// Days that are not in the displayed grid cannot be clicked
    pub async fn click_day(&mut self, date: &CalendarDate) -> Result<(), Box<dyn Error>> {
        if self.grid.select(date) == false {
            // Put the marker back where it was
            let previous = *self.panel.selected_date();
            self.grid.select(&previous);
            return Err(format!("{} is not displayed in {}", date, self.grid.title()).into());
        }
        log::info!("Selected {}", date);
        self.panel.set_selected_date(*date);
        self.panel.load_tasks(date).await;
        Ok(())
    }
}
