//! Calendar days, as exchanged with the task store (`YYYY-MM-DD`)

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use chrono::{Datelike, Local, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar day, in local time.
///
/// It is always displayed zero-padded (e.g. `2024-03-05`), and this is the form used in the task store URLs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// The current local date, whatever the time of day
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Build a date from its parts. `month0` is zero-based (January is 0)
    pub fn from_parts(year: i32, month0: u32, day: u32) -> Result<Self, Box<dyn Error>> {
        month0.checked_add(1)
            .and_then(|month| NaiveDate::from_ymd_opt(year, month, day))
            .map(Self)
            .ok_or_else(|| format!("Invalid date: year {}, month index {}, day {}", year, month0, day).into())
    }

    pub fn year(&self) -> i32   { self.0.year() }
    /// Zero-based month (January is 0)
    pub fn month0(&self) -> u32 { self.0.month0() }
    pub fn day(&self) -> u32    { self.0.day() }

    pub fn as_naive(&self) -> &NaiveDate { &self.0 }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for CalendarDate {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono would also accept non-padded values, that are not canonical dates for the task store
        if s.len() != 10 {
            return Err(format!("Invalid date {:?}: expected YYYY-MM-DD", s).into());
        }
        let date = NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map_err(|err| format!("Invalid date {:?}: {}", s, err))?;
        Ok(Self(date))
    }
}

impl std::convert::TryFrom<String> for CalendarDate {
    type Error = Box<dyn Error>;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> String {
        date.to_string()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_padded() {
        let date = CalendarDate::from_parts(2024, 2, 5).unwrap();
        assert_eq!(date.to_string(), "2024-03-05");
        assert_eq!(date.month0(), 2);
        assert_eq!(date.day(), 5);
    }

    #[test]
    fn parse() {
        let date: CalendarDate = "2024-03-20".parse().unwrap();
        assert_eq!(date, CalendarDate::from_parts(2024, 2, 20).unwrap());

        assert!("2024-3-20".parse::<CalendarDate>().is_err());
        assert!("2024-02-30".parse::<CalendarDate>().is_err());
        assert!("tomorrow".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn invalid_parts() {
        assert!(CalendarDate::from_parts(2023, 1, 29).is_err());
        assert!(CalendarDate::from_parts(2024, 1, 29).is_ok());
        assert!(CalendarDate::from_parts(2024, 12, 1).is_err());
    }
}
