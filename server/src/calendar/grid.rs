use chrono::{Datelike, Days, NaiveDate};

use super::{CalendarDay, DateRange, YearMonth};

/// Six Monday-first weeks.
pub const GRID_CELLS: usize = 42;

/// Number of trailing days from the previous month shown before the 1st.
pub fn leading_days(displayed: YearMonth) -> u32 {
    displayed.first_day().weekday().num_days_from_monday()
}

/// Builds the 42-cell grid for `displayed`.
///
/// Works for any month, including ones entirely outside `range`; such grids
/// simply have no selectable cells.
pub fn generate_grid(
    displayed: YearMonth,
    selected: Option<NaiveDate>,
    range: &DateRange,
    today: NaiveDate,
) -> Vec<CalendarDay> {
    let first = displayed.first_day();
    // YearMonth never reaches the first or last representable year
    let start = first
        .checked_sub_days(Days::new(u64::from(leading_days(displayed))))
        .unwrap_or(first);

    start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| CalendarDay {
            date,
            is_current_month: displayed.contains(date),
            is_selectable: range.contains(date),
            is_today: date == today,
            is_selected: selected == Some(date),
        })
        .collect()
}

/// Whether stepping back from `displayed` stays within `min_date`'s month.
pub fn can_go_to_previous_month(displayed: YearMonth, min_date: NaiveDate) -> bool {
    displayed.pred() >= YearMonth::of(min_date) && displayed.pred() < displayed
}

/// Whether stepping forward from `displayed` stays within `max_date`'s month.
pub fn can_go_to_next_month(displayed: YearMonth, max_date: NaiveDate) -> bool {
    displayed.succ() <= YearMonth::of(max_date) && displayed.succ() > displayed
}

/// Applies a day click. Returns the new selection, which is `current`
/// unchanged when `candidate` is outside the displayed month or the window.
pub fn select_date(
    current: Option<NaiveDate>,
    candidate: NaiveDate,
    displayed: YearMonth,
    range: &DateRange,
) -> Option<NaiveDate> {
    if displayed.contains(candidate) && range.contains(candidate) {
        Some(candidate)
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month(y: i32, m: u32) -> YearMonth {
        YearMonth::new(y, m).unwrap()
    }

    fn may_window() -> DateRange {
        DateRange::new(date(2024, 5, 1), date(2024, 5, 31))
    }

    #[test]
    fn test_grid_always_has_42_cells() {
        let range = may_window();
        for year in [2021, 2023, 2024] {
            for m in 1..=12 {
                let grid = generate_grid(month(year, m), None, &range, date(2024, 5, 10));
                assert_eq!(grid.len(), GRID_CELLS, "{year}-{m}");
            }
        }
    }

    #[test]
    fn test_grid_is_complete_at_the_edges_of_the_date_range() {
        let range = may_window();
        let today = date(2024, 5, 10);
        let edges = [
            YearMonth::new(YearMonth::min_year(), 1).unwrap(),
            YearMonth::new(YearMonth::max_year(), 12).unwrap(),
            YearMonth::of(NaiveDate::MIN),
            YearMonth::of(NaiveDate::MAX),
        ];

        for displayed in edges {
            let grid = generate_grid(displayed, None, &range, today);
            assert_eq!(grid.len(), GRID_CELLS, "{displayed}");
            assert_eq!(grid[0].date.weekday(), chrono::Weekday::Mon, "{displayed}");

            let first = grid.iter().position(|d| d.is_current_month).unwrap();
            assert_eq!(first as u32, leading_days(displayed));
            assert_eq!(grid[first].date, displayed.first_day());
        }
    }

    #[test]
    fn test_current_month_is_contiguous_and_complete() {
        let range = may_window();
        for m in 1..=12 {
            let displayed = month(2024, m);
            let grid = generate_grid(displayed, None, &range, date(2024, 5, 10));

            let first = grid.iter().position(|d| d.is_current_month).unwrap();
            let count = grid.iter().filter(|d| d.is_current_month).count();
            assert_eq!(count as u32, displayed.days_in_month());
            assert!(grid[first..first + count].iter().all(|d| d.is_current_month));

            let days: Vec<u32> = grid[first..first + count].iter().map(|d| d.date.day()).collect();
            let expected: Vec<u32> = (1..=displayed.days_in_month()).collect();
            assert_eq!(days, expected);
        }
    }

    #[test]
    fn test_grid_starts_on_monday_and_is_consecutive() {
        let grid = generate_grid(month(2024, 9), None, &may_window(), date(2024, 5, 10));
        assert_eq!(grid[0].date.weekday(), chrono::Weekday::Mon);
        for pair in grid.windows(2) {
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }
    }

    #[test]
    fn test_leading_days_follow_monday_first_weeks() {
        // 2024-05-01 is a Wednesday
        assert_eq!(leading_days(month(2024, 5)), 2);
        // 2024-09-01 is a Sunday
        assert_eq!(leading_days(month(2024, 9)), 6);
        // 2021-02-01 is a Monday
        assert_eq!(leading_days(month(2021, 2)), 0);

        let grid = generate_grid(month(2024, 5), None, &may_window(), date(2024, 5, 10));
        assert_eq!(grid[0].date, date(2024, 4, 29));
        assert_eq!(grid[1].date, date(2024, 4, 30));
        assert_eq!(grid[2].date, date(2024, 5, 1));
        assert_eq!(grid[41].date, date(2024, 6, 9));
        assert!(!grid[41].is_current_month);
    }

    #[test]
    fn test_adjacent_months_chain() {
        let range = may_window();
        let today = date(2024, 5, 10);
        let mut displayed = month(2023, 11);
        for _ in 0..14 {
            let this = generate_grid(displayed, None, &range, today);
            let next = generate_grid(displayed.succ(), None, &range, today);

            let last = this.iter().rev().find(|d| d.is_current_month).unwrap().date;
            let first = next.iter().find(|d| d.is_current_month).unwrap().date;
            assert_eq!(last.succ_opt(), Some(first));

            displayed = displayed.succ();
        }
    }

    #[test]
    fn test_selectable_respects_window_bounds() {
        let grid = generate_grid(month(2024, 5), None, &may_window(), date(2024, 5, 10));
        let cell = |d: NaiveDate| grid.iter().find(|c| c.date == d).unwrap();

        assert!(!cell(date(2024, 4, 30)).is_selectable);
        assert!(cell(date(2024, 5, 1)).is_selectable);
        assert!(cell(date(2024, 5, 31)).is_selectable);
        assert!(!cell(date(2024, 6, 1)).is_selectable);
    }

    #[test]
    fn test_today_and_selected_flags() {
        let grid = generate_grid(
            month(2024, 5),
            Some(date(2024, 5, 20)),
            &may_window(),
            date(2024, 5, 10),
        );

        let today: Vec<_> = grid.iter().filter(|d| d.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, date(2024, 5, 10));

        let selected: Vec<_> = grid.iter().filter(|d| d.is_selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date, date(2024, 5, 20));

        let unselected = generate_grid(month(2024, 5), None, &may_window(), date(2024, 5, 10));
        assert!(unselected.iter().all(|d| !d.is_selected));
    }

    #[test]
    fn test_out_of_window_month_still_renders() {
        let grid = generate_grid(month(2030, 1), None, &may_window(), date(2024, 5, 10));
        assert_eq!(grid.len(), GRID_CELLS);
        assert!(grid.iter().all(|d| !d.is_selectable));
    }

    #[test]
    fn test_generation_is_idempotent() {
        let args = (month(2024, 2), Some(date(2024, 2, 14)), may_window(), date(2024, 2, 1));
        let a = generate_grid(args.0, args.1, &args.2, args.3);
        let b = generate_grid(args.0, args.1, &args.2, args.3);
        assert_eq!(a, b);
    }

    #[test]
    fn test_navigation_guards() {
        let min = date(2024, 5, 10);
        let max = date(2024, 11, 10);

        assert!(!can_go_to_previous_month(month(2024, 5), min));
        assert!(can_go_to_previous_month(month(2024, 6), min));
        assert!(!can_go_to_previous_month(month(2024, 3), min));

        assert!(!can_go_to_next_month(month(2024, 11), max));
        assert!(can_go_to_next_month(month(2024, 10), max));
        assert!(!can_go_to_next_month(month(2025, 1), max));
    }

    #[test]
    fn test_select_date_rejects_invalid_candidates() {
        let range = DateRange::new(date(2024, 5, 10), date(2024, 6, 30));
        let displayed = month(2024, 5);
        let current = Some(date(2024, 5, 15));

        // before the window
        assert_eq!(select_date(current, date(2024, 5, 9), displayed, &range), current);
        // adjacent month cell, even though it is inside the window
        assert_eq!(select_date(current, date(2024, 6, 2), displayed, &range), current);
        assert_eq!(select_date(None, date(2024, 6, 2), displayed, &range), None);

        assert_eq!(
            select_date(current, date(2024, 5, 31), displayed, &range),
            Some(date(2024, 5, 31))
        );
    }
}
