//! Tiered ticket pricing.
//!
//! Prices are derived from an event's base price through a fixed multiplier
//! table. Nothing here fails: unknown events fall back to the default
//! inventory and out-of-range quantities are clamped.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub mod selection;

pub use selection::{
    checkout_summary, compute_total, CheckoutSummary, SelectionLine, SelectionTotal,
    TicketSelection, DEFAULT_SERVICE_FEE_PERCENT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierId {
    Platinum,
    Gold,
    Silver,
    General,
}

impl TierId {
    /// Display order.
    pub const ALL: [TierId; 4] = [
        TierId::Platinum,
        TierId::Gold,
        TierId::Silver,
        TierId::General,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TierId::Platinum => "platinum",
            TierId::Gold => "gold",
            TierId::Silver => "silver",
            TierId::General => "general",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TierId::Platinum => "Platinum",
            TierId::Gold => "Gold",
            TierId::Silver => "Silver",
            TierId::General => "General",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TierId::Platinum => "Premium seating with best view and complimentary refreshments",
            TierId::Gold => "Excellent views with comfortable seating",
            TierId::Silver => "Good seating with decent views of the field",
            TierId::General => "Standard seating with basic amenities",
        }
    }

    pub fn multiplier(self) -> Decimal {
        match self {
            TierId::Platinum => Decimal::new(25, 1),
            TierId::Gold => Decimal::new(18, 1),
            TierId::Silver => Decimal::new(12, 1),
            TierId::General => Decimal::ONE,
        }
    }

    /// Seats on sale when an event carries no inventory override.
    pub fn default_available(self) -> u32 {
        match self {
            TierId::Platinum => 150,
            TierId::Gold => 500,
            TierId::Silver => 1000,
            TierId::General => 2500,
        }
    }

    /// `round(base_price * multiplier)`, halves rounded away from zero.
    pub fn unit_price(self, base_price: Decimal) -> Decimal {
        base_price
            .saturating_mul(self.multiplier())
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-tier seat counts for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierInventory {
    pub platinum: u32,
    pub gold: u32,
    pub silver: u32,
    pub general: u32,
}

impl TierInventory {
    pub fn get(&self, tier: TierId) -> u32 {
        match tier {
            TierId::Platinum => self.platinum,
            TierId::Gold => self.gold,
            TierId::Silver => self.silver,
            TierId::General => self.general,
        }
    }
}

impl Default for TierInventory {
    fn default() -> Self {
        Self {
            platinum: TierId::Platinum.default_available(),
            gold: TierId::Gold.default_available(),
            silver: TierId::Silver.default_available(),
            general: TierId::General.default_available(),
        }
    }
}

/// Event-specific inventory overrides keyed by event id.
#[derive(Debug, Clone, Default)]
pub struct InventoryTable {
    by_event: HashMap<String, TierInventory>,
}

impl InventoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(mut self, event_id: impl Into<String>, inventory: TierInventory) -> Self {
        self.by_event.insert(event_id.into(), inventory);
        self
    }

    pub fn for_event(&self, event_id: &str) -> TierInventory {
        self.by_event.get(event_id).copied().unwrap_or_default()
    }
}

/// A tier priced for a specific event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PricedTier {
    pub tier: TierId,
    pub name: &'static str,
    pub description: &'static str,
    pub unit_price: Decimal,
    pub available: u32,
}

/// Prices all four tiers, in display order, for `base_price`.
///
/// `event_id` only selects the inventory; an id without an override (or one
/// no catalog knows about) gets the default seat counts.
pub fn price_tiers(base_price: Decimal, event_id: &str, inventory: &InventoryTable) -> Vec<PricedTier> {
    let seats = inventory.for_event(event_id);

    TierId::ALL
        .into_iter()
        .map(|tier| PricedTier {
            tier,
            name: tier.name(),
            description: tier.description(),
            unit_price: tier.unit_price(base_price),
            available: seats.get(tier),
        })
        .collect()
}
