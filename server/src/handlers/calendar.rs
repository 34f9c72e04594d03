use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::Response;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendar::{
    can_go_to_next_month, can_go_to_previous_month, generate_grid, select_date, CalendarDay,
    DateRange, YearMonth,
};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

/// Column headers, Monday first.
const WEEKDAY_LABELS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

#[derive(Debug, Default, Deserialize)]
pub struct CalendarQuery {
    pub month: Option<YearMonth>,
    pub selected: Option<NaiveDate>,
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct CalendarView {
    pub month: YearMonth,
    pub today: NaiveDate,
    pub range: DateRange,
    pub selected: Option<NaiveDate>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub weekdays: [&'static str; 7],
    pub days: Vec<CalendarDay>,
}

#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    pub month: YearMonth,
    pub selected: Option<NaiveDate>,
    pub candidate: NaiveDate,
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct SelectResult {
    pub selected: Option<NaiveDate>,
    pub changed: bool,
}

/// Explicit bounds win; missing ones come from the configured window.
fn resolve_range(state: &AppState, min: Option<NaiveDate>, max: Option<NaiveDate>) -> DateRange {
    let window = state.booking_window();
    DateRange::new(
        min.unwrap_or(window.min_date()),
        max.unwrap_or(window.max_date()),
    )
}

pub async fn month_grid(
    State(state): State<AppState>,
    query: Result<Query<CalendarQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let today = state.clock.today();
    let range = resolve_range(&state, query.min, query.max);
    let month = query.month.unwrap_or_else(|| YearMonth::of(today));

    debug!(%month, min = %range.min_date(), max = %range.max_date(), "Building calendar grid");

    let view = CalendarView {
        month,
        today,
        range,
        selected: query.selected,
        can_go_previous: can_go_to_previous_month(month, range.min_date()),
        can_go_next: can_go_to_next_month(month, range.max_date()),
        weekdays: WEEKDAY_LABELS,
        days: generate_grid(month, query.selected, &range, today),
    };

    Ok(success(view, "Calendar generated"))
}

pub async fn select_day(
    State(state): State<AppState>,
    body: Result<Json<SelectRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = body?;
    let range = resolve_range(&state, request.min, request.max);

    let selected = select_date(request.selected, request.candidate, request.month, &range);
    let changed = selected != request.selected;
    if !changed {
        debug!(candidate = %request.candidate, month = %request.month, "Ignoring day selection");
    }

    Ok(success(SelectResult { selected, changed }, "Selection applied"))
}
