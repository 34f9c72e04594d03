use std::sync::Arc;

use crate::calendar::DateRange;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::utils::clock::Clock;

/// Read-only state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog, clock: impl Clock + 'static) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            clock: Arc::new(clock),
        }
    }

    /// `[today, today + booking_window_months]`.
    pub fn booking_window(&self) -> DateRange {
        DateRange::window_from(self.clock.today(), self.config.booking_window_months)
    }
}
