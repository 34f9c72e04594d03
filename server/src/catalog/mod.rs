//! In-memory event catalogs.
//!
//! The catalog is built once at startup and only ever read afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::Event;
use crate::pricing::{price_tiers, InventoryTable, PricedTier};

mod data;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
}

pub const ALL_CATEGORIES: &str = "all";

pub const CATEGORIES: [Category; 7] = [
    Category { id: ALL_CATEGORIES, name: "All Events" },
    Category { id: "music", name: "Music" },
    Category { id: "comedy", name: "Comedy" },
    Category { id: "workshops", name: "Workshops" },
    Category { id: "theatre", name: "Theatre" },
    Category { id: "exhibition", name: "Exhibition" },
    Category { id: "sports", name: "Sports" },
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Recommended,
    Date,
    PriceLow,
    PriceHigh,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventFilter {
    pub category: Option<String>,
    #[serde(rename = "q")]
    pub query: Option<String>,
    #[serde(default)]
    pub sort: SortOrder,
}

impl EventFilter {
    fn matches(&self, event: &Event) -> bool {
        let category_ok = match self.category.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(c) if c.eq_ignore_ascii_case(ALL_CATEGORIES) => true,
            Some(c) => event.category.eq_ignore_ascii_case(c),
        };

        let query_ok = match self.query.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(q) => {
                let needle = q.to_lowercase();
                [&event.title, &event.description, &event.location]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
        };

        category_ok && query_ok
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchFilters {
    pub dates: Vec<NaiveDate>,
    pub venues: Vec<String>,
}

pub struct Catalog {
    events: Vec<Event>,
    matches: Vec<Event>,
    inventory: InventoryTable,
}

impl Catalog {
    pub fn new(events: Vec<Event>, matches: Vec<Event>, inventory: InventoryTable) -> Self {
        Self {
            events,
            matches,
            inventory,
        }
    }

    /// The bundled sample catalogs.
    pub fn builtin() -> Self {
        Self::new(
            data::general_events(),
            data::league_matches(),
            data::inventory_overrides(),
        )
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn matches(&self) -> &[Event] {
        &self.matches
    }

    pub fn inventory(&self) -> &InventoryTable {
        &self.inventory
    }

    /// Looks the id up in the match catalog first, then the general one.
    pub fn find(&self, id: &str) -> Option<&Event> {
        self.matches
            .iter()
            .chain(self.events.iter())
            .find(|e| e.id == id)
    }

    /// Tier prices for a known event, from its own base price.
    pub fn tiers_for(&self, event: &Event) -> Vec<PricedTier> {
        price_tiers(event.price, &event.id, &self.inventory)
    }

    pub fn filter_events(&self, filter: &EventFilter) -> Vec<&Event> {
        let mut found: Vec<&Event> = self.events.iter().filter(|e| filter.matches(e)).collect();

        match filter.sort {
            SortOrder::Recommended => {}
            SortOrder::Date => found.sort_by_key(|e| e.starts_at),
            SortOrder::PriceLow => found.sort_by_key(|e| e.price),
            SortOrder::PriceHigh => found.sort_by(|a, b| b.price.cmp(&a.price)),
        }

        found
    }

    pub fn filter_matches(&self, date: Option<NaiveDate>, venue: Option<&str>) -> Vec<&Event> {
        self.matches
            .iter()
            .filter(|m| date.map_or(true, |d| m.date() == d))
            .filter(|m| venue.map_or(true, |v| m.venue() == v.trim()))
            .collect()
    }

    /// Sorted, de-duplicated match dates and venues.
    pub fn match_filters(&self) -> MatchFilters {
        let dates: BTreeSet<NaiveDate> = self.matches.iter().map(Event::date).collect();
        let venues: BTreeSet<&str> = self.matches.iter().map(Event::venue).collect();

        MatchFilters {
            dates: dates.into_iter().collect(),
            venues: venues.into_iter().map(str::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn filter(category: Option<&str>, query: Option<&str>, sort: SortOrder) -> EventFilter {
        EventFilter {
            category: category.map(str::to_string),
            query: query.map(str::to_string),
            sort,
        }
    }

    fn ids(events: &[&Event]) -> Vec<String> {
        events.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_builtin_catalog_sizes() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.events().len(), 10);
        assert_eq!(catalog.matches().len(), 6);
        assert!(catalog.matches().iter().all(Event::is_match));
    }

    #[test]
    fn test_match_titles_name_both_teams() {
        let catalog = Catalog::builtin();
        for event in catalog.matches() {
            let fixture = event.fixture.as_ref().unwrap();
            assert_eq!(
                event.title,
                format!("{} vs {}", fixture.home_team, fixture.away_team)
            );
        }
    }

    #[test]
    fn test_find_searches_both_catalogs() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find("ipl-3").unwrap().venue(), "Arun Jaitley Stadium");
        assert_eq!(catalog.find("theatre-1").unwrap().title, "Romeo and Juliet");
        assert!(catalog.find("missing").is_none());
    }

    #[test]
    fn test_filter_by_category_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let comedy = catalog.filter_events(&filter(Some("COMEDY"), None, SortOrder::default()));
        assert_eq!(ids(&comedy), vec!["comedy-1", "comedy-2"]);

        let all = catalog.filter_events(&filter(Some("all"), None, SortOrder::default()));
        assert_eq!(all.len(), 10);
    }

    #[test]
    fn test_filter_by_query_searches_title_description_and_location() {
        let catalog = Catalog::builtin();

        let by_title = catalog.filter_events(&filter(None, Some("romeo"), SortOrder::default()));
        assert_eq!(ids(&by_title), vec!["theatre-1"]);

        let by_location = catalog.filter_events(&filter(None, Some("town hall"), SortOrder::default()));
        assert_eq!(ids(&by_location), vec!["music-2"]);

        let combined = catalog.filter_events(&filter(Some("music"), Some("rock"), SortOrder::default()));
        assert_eq!(ids(&combined), vec!["music-1"]);

        let none = catalog.filter_events(&filter(Some("theatre"), Some("rock"), SortOrder::default()));
        assert!(none.is_empty());
    }

    #[test]
    fn test_sort_orders() {
        let catalog = Catalog::builtin();

        let cheap_first = catalog.filter_events(&filter(None, None, SortOrder::PriceLow));
        assert_eq!(cheap_first[0].id, "exhibition-1");
        assert!(cheap_first.windows(2).all(|w| w[0].price <= w[1].price));

        let pricey_first = catalog.filter_events(&filter(None, None, SortOrder::PriceHigh));
        assert_eq!(pricey_first[0].id, "workshop-1");

        let by_date = catalog.filter_events(&filter(None, None, SortOrder::Date));
        assert!(by_date.windows(2).all(|w| w[0].starts_at <= w[1].starts_at));
    }

    #[test]
    fn test_filter_matches_by_date_and_venue() {
        let catalog = Catalog::builtin();
        let day = NaiveDate::from_ymd_opt(2024, 4, 24).unwrap();

        let on_day = catalog.filter_matches(Some(day), None);
        assert_eq!(ids(&on_day), vec!["ipl-2"]);

        let at_venue = catalog.filter_matches(None, Some("Wankhede Stadium"));
        assert_eq!(ids(&at_venue), vec!["ipl-6"]);

        assert!(catalog.filter_matches(Some(day), Some("Wankhede Stadium")).is_empty());
        assert_eq!(catalog.filter_matches(None, None).len(), 6);
    }

    #[test]
    fn test_match_filters_are_sorted_and_unique() {
        let filters = Catalog::builtin().match_filters();
        assert_eq!(filters.dates.len(), 6);
        assert!(filters.dates.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(filters.venues.first().map(String::as_str), Some("Arun Jaitley Stadium"));
        assert_eq!(filters.venues.len(), 6);
    }

    #[test]
    fn test_tiers_for_uses_event_price_and_overrides() {
        let catalog = Catalog::builtin();
        let event = catalog.find("ipl-6").unwrap();
        let tiers = catalog.tiers_for(event);

        assert_eq!(tiers[0].unit_price, Decimal::from(8748));
        assert_eq!(tiers[0].available, 0);
        assert_eq!(tiers[3].unit_price, Decimal::from(3499));
    }
}
