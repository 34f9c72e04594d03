//! Booking core for the Ticketbay storefront: calendar grids for the date
//! selector, tiered ticket pricing and the static event catalogs, served
//! over a small JSON API.

pub mod calendar;
pub mod catalog;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pricing;
pub mod routes;
pub mod state;
pub mod utils;
