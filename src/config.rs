// Hotel configuration: name and room inventory, optionally loaded from JSON

use crate::room::{seed_inventory, Room};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Inventory has no rooms")]
    EmptyInventory,

    #[error("Duplicate room number: {0}")]
    DuplicateRoom(u32),

    #[error("Invalid price for room {number}: {price}")]
    InvalidPrice { number: u32, price: f64 },

    #[error("Room {0} has a blank category")]
    BlankCategory(u32),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RoomSpec {
    pub number: u32,
    pub category: String,
    pub price_per_night: f64,
}

impl From<&Room> for RoomSpec {
    fn from(room: &Room) -> Self {
        Self {
            number: room.number,
            category: room.category.clone(),
            price_per_night: room.price_per_night,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct HotelConfig {
    #[serde(default = "default_name")]
    pub name: String,
    pub rooms: Vec<RoomSpec>,
}

fn default_name() -> String {
    "Hotel".to_string()
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            rooms: seed_inventory().iter().map(RoomSpec::from).collect(),
        }
    }
}

impl HotelConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: HotelConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::JsonParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading room inventory");
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    // Room numbers must stay unique for the lifetime of the hotel
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rooms.is_empty() {
            return Err(ConfigError::EmptyInventory);
        }

        let mut seen = HashSet::new();
        for spec in &self.rooms {
            if !seen.insert(spec.number) {
                return Err(ConfigError::DuplicateRoom(spec.number));
            }
            if !spec.price_per_night.is_finite() || spec.price_per_night < 0.0 {
                return Err(ConfigError::InvalidPrice {
                    number: spec.number,
                    price: spec.price_per_night,
                });
            }
            if spec.category.trim().is_empty() {
                return Err(ConfigError::BlankCategory(spec.number));
            }
        }

        Ok(())
    }

    pub fn build_rooms(&self) -> Vec<Room> {
        self.rooms
            .iter()
            .map(|spec| Room::new(spec.number, spec.category.trim(), spec.price_per_night))
            .collect()
    }
}
