//! Month grids: the cells of a 7-column calendar page

use std::error::Error;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;

/// Labels of the header cells, starting on Sunday
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// The month (zero-based) and year that are currently displayed.
///
/// This is independent of the selected date: changing months does not change the selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    month: u32,
    year: i32,
}

impl ViewState {
    pub fn new(month: u32, year: i32) -> Result<Self, Box<dyn Error>> {
        check_month(month)?;
        Ok(Self { month, year })
    }

    /// The month that contains `date`
    pub fn containing(date: &CalendarDate) -> Self {
        Self { month: date.month0(), year: date.year() }
    }

    /// Zero-based (January is 0)
    pub fn month(&self) -> u32 { self.month }
    pub fn year(&self) -> i32  { self.year }

    /// Go back one month, wrapping to December of the previous year
    pub fn prev_month(&mut self) {
        if self.month == 0 {
            self.month = 11;
            self.year -= 1;
        } else {
            self.month -= 1;
        }
    }

    /// Go forward one month, wrapping to January of the next year
    pub fn next_month(&mut self) {
        if self.month == 11 {
            self.month = 0;
            self.year += 1;
        } else {
            self.month += 1;
        }
    }
}

/// A day of the month, as displayed in a grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayCell {
    pub label: String,
    pub date: CalendarDate,
    pub is_today: bool,
    pub is_selected: bool,
}

/// One unit of the grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    /// A weekday name (`Sun`..`Sat`)
    Header(&'static str),
    /// A non-interactive placeholder before the first day of the month
    Filler,
    Day(DayCell),
}

impl Cell {
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            Cell::Day(day) => Some(day),
            _ => None,
        }
    }
}

fn check_month(month: u32) -> Result<(), Box<dyn Error>> {
    if month > 11 {
        return Err(format!("Invalid month index {} (expected 0 to 11)", month).into());
    }
    Ok(())
}

fn first_of_month(month: u32, year: i32) -> Result<NaiveDate, Box<dyn Error>> {
    check_month(month)?;
    NaiveDate::from_ymd_opt(year, month + 1, 1)
        .ok_or_else(|| format!("Year {} is out of range", year).into())
}

/// The weekday of the first day of a month, from 0 (Sunday) to 6 (Saturday)
pub fn first_weekday(month: u32, year: i32) -> Result<u32, Box<dyn Error>> {
    Ok(first_of_month(month, year)?.weekday().num_days_from_sunday())
}

/// The number of days of a month.
///
/// This is the "day 0 of the next month", i.e. the day before the first day of the next month
pub fn days_in_month(month: u32, year: i32) -> Result<u32, Box<dyn Error>> {
    let mut next = ViewState::new(month, year)?;
    next.next_month();
    first_of_month(next.month, next.year)?
        .pred_opt()
        .map(|last_day| last_day.day())
        .ok_or_else(|| format!("Year {} is out of range", year).into())
}

/// The page of a calendar for a given month
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarGrid {
    view: ViewState,
    cells: Vec<Cell>,
}

impl CalendarGrid {
    /// Compute the cells of a month: 7 headers, the fillers that align the first day on its weekday column, then every day.
    pub fn generate(month: u32, year: i32, today: &CalendarDate, selected: &CalendarDate) -> Result<Self, Box<dyn Error>> {
        let view = ViewState::new(month, year)?;
        let n_fillers = first_weekday(month, year)?;
        let n_days = days_in_month(month, year)?;

        let mut cells = Vec::with_capacity(7 + (n_fillers + n_days) as usize);
        cells.extend(WEEKDAY_LABELS.iter().map(|label| Cell::Header(*label)));
        cells.extend((0..n_fillers).map(|_| Cell::Filler));

        for day in 1..=n_days {
            let date = CalendarDate::from_parts(year, month, day)?;
            cells.push(Cell::Day(DayCell {
                label: day.to_string(),
                date,
                is_today: day == today.day() && month == today.month0() && year == today.year(),
                is_selected: date == *selected,
            }));
        }

        log::trace!("Generated grid for {}-{:02}: {} fillers, {} days", year, month + 1, n_fillers, n_days);
        Ok(Self { view, cells })
    }

    pub fn view(&self) -> &ViewState { &self.view }
    pub fn cells(&self) -> &[Cell]   { &self.cells }

    /// The day cells only, without headers or fillers
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(Cell::as_day)
    }

    pub fn n_fillers(&self) -> usize {
        self.cells.iter().filter(|cell| matches!(cell, Cell::Filler)).count()
    }

    /// E.g. `March 2024`
    pub fn title(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.view.month as usize], self.view.year)
    }

    pub fn selected(&self) -> Option<&DayCell> {
        self.days().find(|day| day.is_selected)
    }

    pub fn today(&self) -> Option<&DayCell> {
        self.days().find(|day| day.is_today)
    }

    /// Move the selection marker to `date`.
    ///
    /// Every cell is unmarked first, so that at most one cell is selected.
    /// Returns whether `date` belongs to this grid (and has been marked)
    pub fn select(&mut self, date: &CalendarDate) -> bool {
        let mut found = false;
        for cell in self.cells.iter_mut() {
            if let Cell::Day(day) = cell {
                day.is_selected = false;
            }
        }
        for cell in self.cells.iter_mut() {
            if let Cell::Day(day) = cell {
                if day.date == *date {
                    day.is_selected = true;
                    found = true;
                }
            }
        }
        found
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        s.parse().unwrap()
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(0, 2024).unwrap(), 31);
        assert_eq!(days_in_month(1, 2024).unwrap(), 29);
        assert_eq!(days_in_month(1, 2023).unwrap(), 28);
        assert_eq!(days_in_month(1, 1900).unwrap(), 28);
        assert_eq!(days_in_month(1, 2000).unwrap(), 29);
        assert_eq!(days_in_month(3, 2024).unwrap(), 30);
        assert_eq!(days_in_month(11, 2024).unwrap(), 31);
        assert!(days_in_month(12, 2024).is_err());
    }

    #[test]
    fn cell_counts_match_the_calendar() {
        let today = date("2024-03-15");
        for year in 1999..=2025 {
            for month in 0..12 {
                let grid = CalendarGrid::generate(month, year, &today, &today).unwrap();
                let first = CalendarDate::from_parts(year, month, 1).unwrap();

                assert_eq!(grid.days().count() as u32, days_in_month(month, year).unwrap());
                assert_eq!(grid.n_fillers() as u32, first.as_naive().weekday().num_days_from_sunday());
                assert!(grid.n_fillers() <= 6);

                let headers: Vec<&str> = grid.cells()[..7].iter()
                    .map(|cell| match cell { Cell::Header(h) => *h, other => panic!("unexpected {:?}", other) })
                    .collect();
                assert_eq!(headers, WEEKDAY_LABELS);
            }
        }
    }

    #[test]
    fn march_2024() {
        // March 1st, 2024 is a Friday
        let grid = CalendarGrid::generate(2, 2024, &date("2024-03-15"), &date("2024-03-20")).unwrap();
        assert_eq!(grid.title(), "March 2024");
        assert_eq!(grid.n_fillers(), 5);
        assert_eq!(grid.cells().len(), 7 + 5 + 31);

        let first = grid.days().next().unwrap();
        assert_eq!(first.label, "1");
        assert_eq!(first.date.to_string(), "2024-03-01");

        assert_eq!(grid.today().unwrap().date, date("2024-03-15"));
        assert_eq!(grid.selected().unwrap().date, date("2024-03-20"));
    }

    #[test]
    fn today_flag() {
        let today = date("2024-03-15");
        let grid = CalendarGrid::generate(2, 2024, &today, &today).unwrap();
        assert_eq!(grid.days().filter(|d| d.is_today).count(), 1);

        // Same day and month, other year
        let grid = CalendarGrid::generate(2, 2023, &today, &today).unwrap();
        assert_eq!(grid.days().filter(|d| d.is_today).count(), 0);
        let grid = CalendarGrid::generate(3, 2024, &today, &today).unwrap();
        assert_eq!(grid.days().filter(|d| d.is_today).count(), 0);
    }

    #[test]
    fn selection_is_exclusive() {
        let today = date("2024-03-15");
        let mut grid = CalendarGrid::generate(2, 2024, &today, &today).unwrap();
        assert_eq!(grid.days().filter(|d| d.is_selected).count(), 1);

        assert!(grid.select(&date("2024-03-20")));
        assert_eq!(grid.days().filter(|d| d.is_selected).count(), 1);
        assert_eq!(grid.selected().unwrap().label, "20");

        // Outside of this month: nothing stays selected
        assert_eq!(grid.select(&date("2024-04-02")), false);
        assert_eq!(grid.days().filter(|d| d.is_selected).count(), 0);
    }

    #[test]
    fn navigation_wraps() {
        let mut view = ViewState::new(0, 2024).unwrap();
        view.prev_month();
        assert_eq!(view, ViewState::new(11, 2023).unwrap());
        view.next_month();
        assert_eq!(view, ViewState::new(0, 2024).unwrap());

        let mut view = ViewState::new(11, 2024).unwrap();
        view.next_month();
        assert_eq!((view.month(), view.year()), (0, 2025));
        view.next_month();
        assert_eq!((view.month(), view.year()), (1, 2025));

        assert!(ViewState::new(12, 2024).is_err());
    }
}
