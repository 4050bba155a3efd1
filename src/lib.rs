// In-memory hotel booking: room inventory, reservations and payment tracking

pub mod config;
pub mod hotel;
pub mod reservation;
pub mod room;
pub mod shell;

// Re-export key types for convenience
pub use config::{ConfigError, HotelConfig, RoomSpec};
pub use hotel::{Hotel, HotelError};
pub use reservation::{BookingQuote, Reservation, ReservationId, ReservationSequence};
pub use room::{seed_inventory, Room};
pub use shell::{MenuChoice, Shell};
