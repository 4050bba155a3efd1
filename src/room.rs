// Room inventory: one bookable unit with a flat nightly rate

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    pub number: u32,
    pub category: String,
    pub price_per_night: f64,
    available: bool,
}

impl Room {
    // Rooms always start out bookable
    pub fn new(number: u32, category: impl Into<String>, price_per_night: f64) -> Self {
        Self {
            number,
            category: category.into(),
            price_per_night,
            available: true,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    // Category labels are compared case-insensitively ("suite" == "Suite")
    pub fn matches_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.trim().to_lowercase()
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Room {{ number: {}, category: {}, price_per_night: {:.2}, available: {} }}",
            self.number, self.category, self.price_per_night, self.available
        )
    }
}

// The fixed inventory every hotel starts with unless configured otherwise
pub fn seed_inventory() -> Vec<Room> {
    vec![
        Room::new(101, "Single", 100.00),
        Room::new(102, "Double", 150.00),
        Room::new(103, "Suite", 300.00),
        Room::new(104, "Single", 100.00),
        Room::new(105, "Suite", 300.00),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_seed_inventory_starts_available() {
        let rooms = seed_inventory();
        assert_eq!(rooms.len(), 5);
        assert!(rooms.iter().all(|room| room.is_available()));

        let numbers: Vec<u32> = rooms.iter().map(|room| room.number).collect();
        assert_eq!(numbers, vec![101, 102, 103, 104, 105]);
    }

    #[test]
    fn test_set_available_toggles_flag() {
        let mut room = Room::new(201, "Double", 150.0);
        room.set_available(false);
        assert!(!room.is_available());
        room.set_available(true);
        assert!(room.is_available());
    }

    #[test_case("Suite", true; "#1 exact label")]
    #[test_case("suite", true; "#2 lower case")]
    #[test_case("SUITE", true; "#3 upper case")]
    #[test_case(" Suite ", true; "#4 surrounding whitespace")]
    #[test_case("Single", false; "#5 other category")]
    #[test_case("Suites", false; "#6 not a prefix match")]
    fn test_matches_category(input: &str, expected: bool) {
        let room = Room::new(103, "Suite", 300.0);
        assert_eq!(room.matches_category(input), expected);
    }

    #[test]
    fn test_display_dumps_fields() {
        let room = Room::new(101, "Single", 100.0);
        assert_eq!(
            room.to_string(),
            "Room { number: 101, category: Single, price_per_night: 100.00, available: true }"
        );
    }

    #[test]
    fn test_serialize_includes_availability() {
        let mut room = Room::new(104, "Single", 100.0);
        room.set_available(false);
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["number"], 104);
        assert_eq!(json["available"], false);
    }
}
