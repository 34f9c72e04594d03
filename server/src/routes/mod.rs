use axum::{
    routing::{get, post},
    Router,
};

use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::{calendar, events, health_check, matches};
use crate::middleware;
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .route("/calendar", get(calendar::month_grid))
        .route("/calendar/select", post(calendar::select_day))
        .route("/categories", get(events::list_categories))
        .route("/events", get(events::list_events))
        .route("/events/:id", get(events::event_detail))
        .route("/events/:id/tiers", get(events::event_tiers))
        .route("/events/:id/quote", post(events::quote))
        .route("/matches", get(matches::list_matches))
        .route("/matches/filters", get(matches::match_filters))
        .with_state(state)
        .layer(create_security_headers_layer())
        .layer(create_cors_layer());

    middleware::apply(router)
}
