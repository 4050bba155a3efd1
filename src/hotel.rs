// Hotel registry: owns the room inventory and the append-only reservation list

use crate::config::{ConfigError, HotelConfig};
use crate::reservation::{BookingQuote, Reservation, ReservationId, ReservationSequence};
use crate::room::Room;
use std::io::Write;
use thiserror::Error;
use tracing::{debug, info, warn};

// Expected booking outcomes. The message of each variant is what the guest sees.
#[derive(Error, Debug)]
pub enum HotelError {
    #[error("No available rooms in the category: {category}")]
    NoAvailableRoom { category: String },

    #[error("Reservation not found with ID: {0}")]
    ReservationNotFound(ReservationId),

    #[error("Payment already made for this reservation.")]
    AlreadyPaid(ReservationId),

    #[error("Number of nights must be at least 1, got {0}")]
    InvalidNights(u32),

    #[error("Guest name must not be blank")]
    InvalidGuestName,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug)]
pub struct Hotel {
    name: String,
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,
    sequence: ReservationSequence,
}

impl Default for Hotel {
    fn default() -> Self {
        let config = HotelConfig::default();
        Self {
            rooms: config.build_rooms(),
            name: config.name,
            reservations: Vec::new(),
            sequence: ReservationSequence::new(),
        }
    }
}

impl Hotel {
    // Hotel with the standard five-room seed inventory
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HotelConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(name = %config.name, rooms = config.rooms.len(), "building hotel");
        Ok(Self {
            rooms: config.build_rooms(),
            name: config.name,
            reservations: Vec::new(),
            sequence: ReservationSequence::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    pub fn available_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|room| room.is_available())
    }

    pub fn display_available_rooms<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Available Rooms:")?;
        for room in self.available_rooms() {
            writeln!(out, "{}", room)?;
        }
        Ok(())
    }

    // Distinct category labels in inventory order
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for room in &self.rooms {
            if !categories
                .iter()
                .any(|known| known.to_lowercase() == room.category.to_lowercase())
            {
                categories.push(&room.category);
            }
        }
        categories
    }

    fn available_room_index(&self, category: &str) -> Option<usize> {
        self.rooms
            .iter()
            .position(|room| room.is_available() && room.matches_category(category))
    }

    /// First available room of the category, in inventory order.
    pub fn find_available_room(&self, category: &str) -> Option<&Room> {
        let room = self
            .available_room_index(category)
            .map(|index| &self.rooms[index]);
        debug!(category, found = ?room.map(|r| r.number), "room lookup");
        room
    }

    /// Books the first available room of `category` for `guest_name`.
    ///
    /// Quoting is pure; the commit step flips the room's availability and
    /// records the reservation together. A rejected request consumes no id.
    pub fn make_reservation(
        &mut self,
        guest_name: &str,
        category: &str,
        nights: u32,
    ) -> Result<&Reservation, HotelError> {
        let guest_name = guest_name.trim();
        if guest_name.is_empty() {
            return Err(HotelError::InvalidGuestName);
        }
        if nights == 0 {
            return Err(HotelError::InvalidNights(nights));
        }

        let Some(index) = self.available_room_index(category) else {
            warn!(category, "no available room");
            return Err(HotelError::NoAvailableRoom {
                category: category.to_string(),
            });
        };

        let quote = BookingQuote::new(&self.rooms[index], guest_name, nights);
        let id = self.sequence.next_id();

        self.rooms[index].set_available(false);
        self.reservations.push(Reservation::from_quote(id, quote));

        let reservation = &self.reservations[self.reservations.len() - 1];
        info!(
            id = %reservation.id,
            room = reservation.room_number,
            nights,
            total = reservation.total_amount,
            "reservation made"
        );
        Ok(reservation)
    }

    pub fn reservation(&self, id: ReservationId) -> Result<&Reservation, HotelError> {
        self.reservations
            .iter()
            .find(|reservation| reservation.id == id)
            .ok_or_else(|| {
                warn!(%id, "reservation not found");
                HotelError::ReservationNotFound(id)
            })
    }

    // Writes either the reservation dump or the not-found sentence
    pub fn display_reservation_details<W: Write>(
        &self,
        id: ReservationId,
        out: &mut W,
    ) -> Result<&Reservation, HotelError> {
        match self.reservation(id) {
            Ok(reservation) => {
                writeln!(out, "{}", reservation)?;
                Ok(reservation)
            }
            Err(e) => {
                writeln!(out, "{}", e)?;
                Err(e)
            }
        }
    }

    /// Marks a reservation paid. Paying twice is reported, not applied.
    pub fn process_payment(&mut self, id: ReservationId) -> Result<&Reservation, HotelError> {
        let Some(reservation) = self
            .reservations
            .iter_mut()
            .find(|reservation| reservation.id == id)
        else {
            warn!(%id, "payment for unknown reservation");
            return Err(HotelError::ReservationNotFound(id));
        };

        if reservation.is_paid() {
            warn!(%id, "reservation already paid");
            return Err(HotelError::AlreadyPaid(id));
        }

        reservation.set_paid(true);
        info!(%id, amount = reservation.total_amount, "payment processed");
        Ok(reservation)
    }
}
