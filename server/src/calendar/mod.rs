//! Date-selector calendar kernel.
//!
//! Everything in here is a pure function of its inputs. "Today" is always
//! passed in by the caller so that grids are reproducible.

use chrono::{Datelike, Months, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub mod grid;
pub mod picker;

pub use grid::{
    can_go_to_next_month, can_go_to_previous_month, generate_grid, leading_days, select_date,
    GRID_CELLS,
};
pub use picker::DatePicker;

/// Default length of the booking window, in months from today.
pub const DEFAULT_WINDOW_MONTHS: u32 = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarParseError {
    #[error("expected a month in YYYY-MM form, got '{0}'")]
    InvalidMonth(String),

    #[error("expected a date in YYYY-MM-DD form, got '{0}'")]
    InvalidDate(String),
}

/// A calendar month. Internally anchored on the first day of the month.
///
/// Only months whose full six-week grid fits in chrono's date range can be
/// built, so the first and last representable years are excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    /// Earliest supported year.
    pub fn min_year() -> i32 {
        NaiveDate::MIN.year() + 1
    }

    /// Latest supported year.
    pub fn max_year() -> i32 {
        NaiveDate::MAX.year() - 1
    }

    /// Returns `None` when `month` is outside `1..=12` or `year` is outside
    /// `min_year()..=max_year()`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !(Self::min_year()..=Self::max_year()).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    /// The month containing `date`, saturated to the supported years.
    pub fn of(date: NaiveDate) -> Self {
        let year = date.year().clamp(Self::min_year(), Self::max_year());
        let month = match year.cmp(&date.year()) {
            Ordering::Equal => date.month(),
            Ordering::Greater => 1,
            Ordering::Less => 12,
        };
        Self::new(year, month).unwrap_or(Self(date))
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn first_day(self) -> NaiveDate {
        self.0
    }

    pub fn last_day(self) -> NaiveDate {
        self.0
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(self.0)
    }

    pub fn days_in_month(self) -> u32 {
        self.last_day().day()
    }

    /// The previous month. Saturates at the earliest supported month.
    pub fn pred(self) -> Self {
        self.0
            .checked_sub_months(Months::new(1))
            .and_then(|d| Self::new(d.year(), d.month()))
            .unwrap_or(self)
    }

    /// The next month. Saturates at the latest supported month.
    pub fn succ(self) -> Self {
        self.0
            .checked_add_months(Months::new(1))
            .and_then(|d| Self::new(d.year(), d.month()))
            .unwrap_or(self)
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = CalendarParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarParseError::InvalidMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, CalendarParseError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CalendarParseError::InvalidDate(s.to_string()))
}

/// Inclusive booking window.
///
/// Construction never fails: bounds given in the wrong order are swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    min_date: NaiveDate,
    max_date: NaiveDate,
}

impl DateRange {
    pub fn new(min_date: NaiveDate, max_date: NaiveDate) -> Self {
        if min_date > max_date {
            debug!(%min_date, %max_date, "Booking window bounds reversed, swapping");
            return Self {
                min_date: max_date,
                max_date: min_date,
            };
        }

        Self { min_date, max_date }
    }

    /// `[today, today + months]`.
    pub fn window_from(today: NaiveDate, months: u32) -> Self {
        let max_date = today
            .checked_add_months(Months::new(months))
            .unwrap_or(NaiveDate::MAX);
        Self::new(today, max_date)
    }

    /// The default `[today, today + 6 months]` window.
    pub fn default_window(today: NaiveDate) -> Self {
        Self::window_from(today, DEFAULT_WINDOW_MONTHS)
    }

    pub fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    pub fn max_date(&self) -> NaiveDate {
        self.max_date
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min_date <= date && date <= self.max_date
    }
}

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_selectable: bool,
    pub is_today: bool,
    pub is_selected: bool,
}
