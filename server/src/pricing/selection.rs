use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use super::{PricedTier, TierId};

pub const DEFAULT_SERVICE_FEE_PERCENT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionLine {
    pub tier: TierId,
    pub unit_price: Decimal,
    pub available: u32,
    pub quantity: u32,
}

impl SelectionLine {
    pub fn line_total(&self) -> Decimal {
        self.unit_price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Requested quantities per tier, opened against one set of priced tiers.
///
/// Every line keeps `0 <= quantity <= available`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketSelection {
    lines: Vec<SelectionLine>,
}

impl TicketSelection {
    pub fn new(tiers: &[PricedTier]) -> Self {
        let lines = tiers
            .iter()
            .map(|t| SelectionLine {
                tier: t.tier,
                unit_price: t.unit_price,
                available: t.available,
                quantity: 0,
            })
            .collect();

        Self { lines }
    }

    /// Stores `requested` clamped to `[0, available]` and returns the stored
    /// value. Tiers that are not part of the selection stay at zero.
    pub fn set_quantity(&mut self, tier: TierId, requested: i64) -> u32 {
        let Some(line) = self.lines.iter_mut().find(|l| l.tier == tier) else {
            return 0;
        };

        line.quantity = requested.clamp(0, i64::from(line.available)) as u32;
        line.quantity
    }

    pub fn quantity(&self, tier: TierId) -> u32 {
        self.lines
            .iter()
            .find(|l| l.tier == tier)
            .map_or(0, |l| l.quantity)
    }

    pub fn lines(&self) -> &[SelectionLine] {
        &self.lines
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectionTotal {
    pub total_quantity: u64,
    pub total_price: Decimal,
}

pub fn compute_total(selection: &TicketSelection) -> SelectionTotal {
    selection.lines().iter().fold(
        SelectionTotal {
            total_quantity: 0,
            total_price: Decimal::ZERO,
        },
        |acc, line| SelectionTotal {
            total_quantity: acc.total_quantity + u64::from(line.quantity),
            total_price: acc.total_price.saturating_add(line.line_total()),
        },
    )
}

/// Amounts shown on the checkout page, to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckoutSummary {
    pub subtotal: Decimal,
    pub service_fee: Decimal,
    pub total: Decimal,
}

pub fn checkout_summary(total: &SelectionTotal, fee_percent: Decimal) -> CheckoutSummary {
    let mut subtotal = total.total_price;
    let mut service_fee = (subtotal.saturating_mul(fee_percent) / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let mut grand_total = subtotal.saturating_add(service_fee);

    subtotal.rescale(2);
    service_fee.rescale(2);
    grand_total.rescale(2);

    CheckoutSummary {
        subtotal,
        service_fee,
        total: grand_total,
    }
}
