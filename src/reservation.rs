// Reservations: the pure booking quote, the id sequence and the booked record

use crate::room::Room;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ReservationId(pub u32);

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReservationId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ReservationId)
    }
}

/// Hands out reservation ids in creation order, starting at 1.
///
/// Ids are never reused or reset while the sequence lives; each hotel owns
/// exactly one sequence.
#[derive(Debug)]
pub struct ReservationSequence {
    next: u32,
}

impl Default for ReservationSequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl ReservationSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> ReservationId {
        let id = ReservationId(self.next);
        self.next += 1;
        id
    }

    // The id the next booking will receive, without consuming it
    pub fn peek(&self) -> ReservationId {
        ReservationId(self.next)
    }
}

/// Everything a reservation needs, computed without touching the room.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingQuote {
    pub room_number: u32,
    pub category: String,
    pub price_per_night: f64,
    pub guest_name: String,
    pub nights: u32,
    pub total_amount: f64,
}

impl BookingQuote {
    pub fn new(room: &Room, guest_name: impl Into<String>, nights: u32) -> Self {
        Self {
            room_number: room.number,
            category: room.category.clone(),
            price_per_night: room.price_per_night,
            guest_name: guest_name.into(),
            nights,
            total_amount: room.price_per_night * f64::from(nights),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub room_number: u32,
    pub category: String,
    pub guest_name: String,
    pub nights: u32,
    pub total_amount: f64,
    paid: bool,
    pub booked_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}

impl Reservation {
    pub fn from_quote(id: ReservationId, quote: BookingQuote) -> Self {
        Self {
            id,
            room_number: quote.room_number,
            category: quote.category,
            guest_name: quote.guest_name,
            nights: quote.nights,
            total_amount: quote.total_amount,
            paid: false,
            booked_at: Utc::now(),
            paid_at: None,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.paid
    }

    // No business rule here: the hotel decides when paying is allowed
    pub fn set_paid(&mut self, paid: bool) {
        self.paid = paid;
        self.paid_at = paid.then(Utc::now);
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation {{ id: {}, room: {} ({}), guest_name: {}, nights: {}, total_amount: {:.2}, paid: {} }}",
            self.id,
            self.room_number,
            self.category,
            self.guest_name,
            self.nights,
            self.total_amount,
            self.paid
        )
    }
}
