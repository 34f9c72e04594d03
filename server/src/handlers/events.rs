use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::catalog::{EventFilter, CATEGORIES};
use crate::models::Event;
use crate::pricing::{
    checkout_summary, compute_total, price_tiers, CheckoutSummary, PricedTier, SelectionLine,
    TicketSelection, TierId,
};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

#[derive(Debug, Serialize)]
pub struct EventDetail<'a> {
    #[serde(flatten)]
    pub event: &'a Event,
    pub tiers: Vec<PricedTier>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TiersQuery {
    pub base_price: Option<Decimal>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    /// Requested count per tier; any JSON number is accepted and clamped.
    #[serde(default)]
    pub quantities: BTreeMap<TierId, Number>,
    pub base_price: Option<Decimal>,
}

#[derive(Debug, Serialize)]
pub struct Quote {
    pub event_id: String,
    pub lines: Vec<SelectionLine>,
    pub total_quantity: u64,
    pub total_price: Decimal,
    pub checkout: CheckoutSummary,
}

/// Reads a requested quantity, saturating at the `i64` bounds. Fractions
/// are truncated toward zero.
fn requested_quantity(value: &Number) -> i64 {
    match (value.as_i64(), value.as_u64(), value.as_f64()) {
        (Some(n), _, _) => n,
        (None, Some(_), _) => i64::MAX,
        // `as` saturates out-of-range floats and maps NaN to zero
        (None, None, Some(f)) => f as i64,
        (None, None, None) => 0,
    }
}

/// Picks the base price for `event_id`.
///
/// An explicit price always wins, so events missing from the catalog can
/// still be priced.
fn resolve_base_price(
    state: &AppState,
    event_id: &str,
    explicit: Option<Decimal>,
) -> Result<Decimal, AppError> {
    match explicit {
        Some(price) if price < Decimal::ZERO => Err(
            AppError::ValidationError(format!("base_price must not be negative, got {price}")),
        ),
        Some(price) => Ok(price),
        None => state
            .catalog
            .find(event_id)
            .map(|e| e.price)
            .ok_or_else(|| AppError::NotFound(format!("Event with id '{}' was not found", event_id))),
    }
}

pub async fn list_categories() -> Response {
    success(CATEGORIES, "Categories retrieved")
}

pub async fn list_events(
    State(state): State<AppState>,
    filter: Result<Query<EventFilter>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(filter) = filter?;
    let events = state.catalog.filter_events(&filter);
    debug!(count = events.len(), ?filter, "Filtered events");

    Ok(success(events, "Events retrieved"))
}

pub async fn event_detail(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Result<Response, AppError> {
    let event = state
        .catalog
        .find(&event_id)
        .ok_or_else(|| AppError::NotFound(format!("Event with id '{}' was not found", event_id)))?;

    let detail = EventDetail {
        event,
        tiers: state.catalog.tiers_for(event),
    };

    Ok(success(detail, "Event retrieved"))
}

pub async fn event_tiers(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    query: Result<Query<TiersQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(query) = query?;
    let base_price = resolve_base_price(&state, &event_id, query.base_price)?;
    let tiers = price_tiers(base_price, &event_id, state.catalog.inventory());

    Ok(success(tiers, "Ticket tiers priced"))
}

pub async fn quote(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    body: Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = body?;
    let base_price = resolve_base_price(&state, &event_id, request.base_price)?;
    let tiers = price_tiers(base_price, &event_id, state.catalog.inventory());

    let mut selection = TicketSelection::new(&tiers);
    for (&tier, value) in &request.quantities {
        let requested = requested_quantity(value);
        let stored = selection.set_quantity(tier, requested);
        if i64::from(stored) != requested {
            debug!(%tier, requested, stored, "Clamped ticket quantity");
        }
    }

    let total = compute_total(&selection);
    let checkout = checkout_summary(&total, state.config.service_fee_percent);
    info!(
        event_id = %event_id,
        tickets = total.total_quantity,
        total = %checkout.total,
        "Quote computed"
    );

    let quote = Quote {
        event_id,
        lines: selection.lines().to_vec(),
        total_quantity: total.total_quantity,
        total_price: total.total_price,
        checkout,
    };

    Ok(success(quote, "Quote computed"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number(raw: &str) -> Number {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_requested_quantity_saturates() {
        assert_eq!(requested_quantity(&number("3")), 3);
        assert_eq!(requested_quantity(&number("-5")), -5);
        assert_eq!(requested_quantity(&number("18446744073709551615")), i64::MAX);
        assert_eq!(requested_quantity(&number("100000000000000000000")), i64::MAX);
        assert_eq!(requested_quantity(&number("-100000000000000000000")), i64::MIN);
        assert_eq!(requested_quantity(&number("2.9")), 2);
    }
}
