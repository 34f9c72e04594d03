use chrono::NaiveDate;
use serde::Serialize;

use super::grid::{can_go_to_next_month, can_go_to_previous_month, generate_grid, select_date};
use super::{CalendarDay, DateRange, YearMonth};

/// State of one date-selector instance.
///
/// Owned by whoever renders the selector; nothing here is shared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatePicker {
    displayed: YearMonth,
    selected: Option<NaiveDate>,
    range: DateRange,
}

impl DatePicker {
    /// Opens on the month containing `today`.
    pub fn new(today: NaiveDate, range: DateRange) -> Self {
        Self {
            displayed: YearMonth::of(today),
            selected: None,
            range,
        }
    }

    pub fn displayed(&self) -> YearMonth {
        self.displayed
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn can_go_previous(&self) -> bool {
        can_go_to_previous_month(self.displayed, self.range.min_date())
    }

    pub fn can_go_next(&self) -> bool {
        can_go_to_next_month(self.displayed, self.range.max_date())
    }

    /// Returns `false` and leaves the state alone when blocked.
    pub fn previous_month(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.displayed = self.displayed.pred();
        true
    }

    /// Returns `false` and leaves the state alone when blocked.
    pub fn next_month(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.displayed = self.displayed.succ();
        true
    }

    /// Returns whether the selection changed.
    pub fn select(&mut self, date: NaiveDate) -> bool {
        let next = select_date(self.selected, date, self.displayed, &self.range);
        let changed = next != self.selected;
        self.selected = next;
        changed
    }

    pub fn grid(&self, today: NaiveDate) -> Vec<CalendarDay> {
        generate_grid(self.displayed, self.selected, &self.range, today)
    }
}
