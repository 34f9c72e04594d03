use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;

/// The two teams of a league match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fixture {
    pub home_team: String,
    pub away_team: String,
    pub venue_capacity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub starts_at: NaiveDateTime,
    pub location: String,
    pub image_url: String,
    /// Base ticket price; tier prices are derived from it.
    pub price: Decimal,
    pub category: String,
    pub attendees: u32,
    #[serde(flatten)]
    pub fixture: Option<Fixture>,
}

impl Event {
    pub fn is_match(&self) -> bool {
        self.fixture.is_some()
    }

    pub fn date(&self) -> NaiveDate {
        self.starts_at.date()
    }

    /// Location text before the first comma.
    pub fn venue(&self) -> &str {
        self.location
            .split(',')
            .next()
            .unwrap_or_default()
            .trim()
    }
}
