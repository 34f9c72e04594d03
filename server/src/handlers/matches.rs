use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Response;
use serde::Deserialize;

use crate::calendar::parse_date;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

/// Empty strings mean "any", like an unselected dropdown.
#[derive(Debug, Default, Deserialize)]
pub struct MatchQuery {
    pub date: Option<String>,
    pub venue: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub async fn list_matches(
    State(state): State<AppState>,
    query: Result<Query<MatchQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let date = non_empty(query.date.as_deref()).map(parse_date).transpose()?;
    let venue = non_empty(query.venue.as_deref());

    let matches = state.catalog.filter_matches(date, venue);
    Ok(success(matches, "Matches retrieved"))
}

pub async fn match_filters(State(state): State<AppState>) -> Response {
    success(state.catalog.match_filters(), "Match filters retrieved")
}
