use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::{Event, Fixture};
use crate::pricing::{InventoryTable, TierInventory};

const IMAGE_HOST: &str = "https://images.unsplash.com";

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn listing(
    id: &str,
    title: &str,
    description: &str,
    starts_at: NaiveDateTime,
    location: &str,
    photo: &str,
    price: i64,
    category: &str,
    attendees: u32,
) -> Event {
    Event {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        starts_at,
        location: location.to_string(),
        image_url: format!("{IMAGE_HOST}/{photo}"),
        price: Decimal::from(price),
        category: category.to_string(),
        attendees,
        fixture: None,
    }
}

fn fixture(mut event: Event, home: &str, away: &str, venue_capacity: u32) -> Event {
    event.title = format!("{home} vs {away}");
    event.fixture = Some(Fixture {
        home_team: home.to_string(),
        away_team: away.to_string(),
        venue_capacity,
    });
    event
}

pub(super) fn general_events() -> Vec<Event> {
    vec![
        listing(
            "music-1",
            "Rock Music Festival",
            "Experience the best rock bands performing live on one stage.",
            at(2024, 5, 15, 0, 0),
            "Concert Arena, Bengaluru",
            "photo-1470229722913-7c0e2dbbafd3",
            1499,
            "Music",
            3500,
        ),
        listing(
            "music-2",
            "Classical Music Night",
            "A soothing evening with classical maestros from around the country.",
            at(2024, 5, 22, 0, 0),
            "Town Hall, Bengaluru",
            "photo-1514320291840-2e0a9bf2a9ae",
            999,
            "Music",
            1200,
        ),
        listing(
            "comedy-1",
            "Stand-up Comedy Night",
            "Laugh till you drop with the funniest comedians in town.",
            at(2024, 5, 18, 0, 0),
            "Comedy Club, Bengaluru",
            "photo-1527224857830-43a7acc85260",
            799,
            "Comedy",
            450,
        ),
        listing(
            "comedy-2",
            "Improv Comedy Workshop",
            "Learn the art of improvisational comedy with industry professionals.",
            at(2024, 5, 25, 0, 0),
            "Cultural Center, Bengaluru",
            "photo-1610890690846-5149750c8634",
            1299,
            "Comedy",
            120,
        ),
        listing(
            "workshop-1",
            "Photography Masterclass",
            "Master the art of photography with renowned photographers.",
            at(2024, 6, 5, 0, 0),
            "Creative Studios, Bengaluru",
            "photo-1542038784456-1ea8e935640e",
            2499,
            "Workshops",
            80,
        ),
        listing(
            "workshop-2",
            "Culinary Workshop",
            "Learn to cook gourmet meals with expert chefs.",
            at(2024, 6, 12, 0, 0),
            "Culinary Institute, Bengaluru",
            "photo-1556910103-1c02745aae4d",
            1899,
            "Workshops",
            35,
        ),
        listing(
            "theatre-1",
            "Romeo and Juliet",
            "A modern adaptation of Shakespeare's classic love tragedy.",
            at(2024, 6, 18, 0, 0),
            "City Theatre, Bengaluru",
            "photo-1503095396549-807759245b35",
            699,
            "Theatre",
            500,
        ),
        listing(
            "theatre-2",
            "The Miracle Worker",
            "An inspiring play about overcoming disabilities and finding hope.",
            at(2024, 6, 25, 0, 0),
            "Drama Society, Bengaluru",
            "photo-1460723237483-7a6dc9d0b212",
            599,
            "Theatre",
            320,
        ),
        listing(
            "exhibition-1",
            "Modern Art Exhibition",
            "Explore contemporary art from emerging artists around the country.",
            at(2024, 7, 10, 0, 0),
            "Art Gallery, Bengaluru",
            "photo-1531058020387-3be344556be6",
            349,
            "Exhibition",
            1500,
        ),
        listing(
            "exhibition-2",
            "Science and Technology Expo",
            "Discover the latest innovations in science and technology.",
            at(2024, 7, 18, 0, 0),
            "Convention Center, Bengaluru",
            "photo-1581092918056-0c4c3acd3789",
            499,
            "Exhibition",
            2200,
        ),
    ]
}

pub(super) fn league_matches() -> Vec<Event> {
    vec![
        fixture(
            listing(
                "ipl-1",
                "",
                "Opening match of the season featuring a classic rivalry between CSK and MI.",
                at(2024, 4, 22, 19, 30),
                "M.A. Chidambaram Stadium, Chennai",
                "photo-1531415074968-036ba1b575da",
                2499,
                "Sports",
                45000,
            ),
            "Chennai Super Kings",
            "Mumbai Indians",
            50000,
        ),
        fixture(
            listing(
                "ipl-2",
                "",
                "RCB takes on KKR in this exciting matchup at the Chinnaswamy Stadium.",
                at(2024, 4, 24, 19, 30),
                "M. Chinnaswamy Stadium, Bangalore",
                "photo-1624880357913-a08c7f127910",
                2999,
                "Sports",
                38000,
            ),
            "Royal Challengers Bangalore",
            "Kolkata Knight Riders",
            40000,
        ),
        fixture(
            listing(
                "ipl-3",
                "",
                "Delhi Capitals host Punjab Kings in this north India derby match.",
                at(2024, 4, 26, 15, 30),
                "Arun Jaitley Stadium, Delhi",
                "photo-1540747913346-19e32dc3e97e",
                1999,
                "Sports",
                35000,
            ),
            "Delhi Capitals",
            "Punjab Kings",
            41000,
        ),
        fixture(
            listing(
                "ipl-4",
                "",
                "Rajasthan Royals face off against Sunrisers Hyderabad in this exciting encounter.",
                at(2024, 4, 27, 19, 30),
                "Sawai Mansingh Stadium, Jaipur",
                "photo-1531415074968-036ba1b575da",
                1799,
                "Sports",
                30000,
            ),
            "Rajasthan Royals",
            "Sunrisers Hyderabad",
            35000,
        ),
        fixture(
            listing(
                "ipl-5",
                "",
                "The two newest franchises face off in an exciting contest.",
                at(2024, 4, 29, 19, 30),
                "Narendra Modi Stadium, Ahmedabad",
                "photo-1540747913346-19e32dc3e97e",
                2299,
                "Sports",
                75000,
            ),
            "Gujarat Titans",
            "Lucknow Super Giants",
            132000,
        ),
        fixture(
            listing(
                "ipl-6",
                "",
                "Mumbai Indians take on Royal Challengers Bangalore in this high-octane clash.",
                at(2024, 5, 2, 19, 30),
                "Wankhede Stadium, Mumbai",
                "photo-1624880357913-a08c7f127910",
                3499,
                "Sports",
                33000,
            ),
            "Mumbai Indians",
            "Royal Challengers Bangalore",
            33000,
        ),
    ]
}

/// Matches whose allocation differs from the default seat counts.
pub(super) fn inventory_overrides() -> InventoryTable {
    InventoryTable::new()
        .with_override(
            "ipl-2",
            TierInventory {
                platinum: 80,
                gold: 320,
                silver: 640,
                general: 1200,
            },
        )
        .with_override(
            "ipl-6",
            TierInventory {
                platinum: 0,
                gold: 24,
                silver: 180,
                general: 450,
            },
        )
}
