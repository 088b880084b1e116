use chrono::{Datelike, Local, NaiveDate};
use std::fmt;
use thiserror::Error;

// Lookup tables for month labels. Full names head the monthly transactions screen,
// short names sit under the bars of the yearly graph.
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const MONTH_NAMES_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month within a specific year, e.g. May 2024.
///
/// Every monthly query is keyed by a `YearMonth`, so a month outside 1-12 can never
/// reach them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

#[derive(Error, Debug, PartialEq)]
pub enum MonthError {
    #[error("{0} is not a month; months run from 1 to 12")]
    InvalidMonth(u32),
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, MonthError> {
        if !(1..=12).contains(&month) {
            return Err(MonthError::InvalidMonth(month));
        }

        Ok(YearMonth { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month containing the current local date.
    ///
    /// This reads the clock on every call, so a long running host rolls over into the
    /// next month without being told.
    pub fn current() -> Self {
        YearMonth::of(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// All twelve months of `year`, January first.
    pub fn months_of(year: i32) -> impl Iterator<Item = YearMonth> {
        (1..=12).map(move |month| YearMonth { year, month })
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.month as usize - 1]
    }

    pub fn short_name(&self) -> &'static str {
        MONTH_NAMES_SHORT[self.month as usize - 1]
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        YearMonth::of(date)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_month_rejects_invalid_month() {
        assert_eq!(YearMonth::new(2024, 0), Err(MonthError::InvalidMonth(0)));
        assert_eq!(YearMonth::new(2024, 13), Err(MonthError::InvalidMonth(13)));
        assert!(YearMonth::new(2024, 12).is_ok());
    }

    #[test]
    fn year_month_contains() {
        let may = YearMonth::new(2024, 5).unwrap();
        assert!(may.contains(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));
        assert!(may.contains(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()));
        assert!(!may.contains(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        assert!(!may.contains(NaiveDate::from_ymd_opt(2023, 5, 15).unwrap()));
    }

    #[test]
    fn year_month_of_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(YearMonth::of(date), YearMonth::new(2024, 2).unwrap());
        assert_eq!(YearMonth::from(date), YearMonth::of(date));
    }

    #[test]
    fn year_month_months_of() {
        let months: Vec<u32> = YearMonth::months_of(2024).map(|m| m.month()).collect();
        assert_eq!(months, (1..=12).collect::<Vec<_>>());
        assert!(YearMonth::months_of(2024).all(|m| m.year() == 2024));
    }

    #[test]
    fn year_month_ordering() {
        let dec_2023 = YearMonth::new(2023, 12).unwrap();
        let jan_2024 = YearMonth::new(2024, 1).unwrap();
        assert!(dec_2023 < jan_2024);
    }

    #[test]
    fn year_month_labels() {
        let may = YearMonth::new(2024, 5).unwrap();
        assert_eq!(may.to_string(), "May 2024");
        assert_eq!(YearMonth::new(2024, 9).unwrap().short_name(), "Sep");
        assert_eq!(YearMonth::new(2024, 12).unwrap().name(), "December");
    }

    #[test]
    fn year_month_current_matches_local_clock() {
        let before = YearMonth::of(Local::now().date_naive());
        let current = YearMonth::current();
        let after = YearMonth::of(Local::now().date_naive());
        assert!(current == before || current == after);
    }
}
