// Interactive text menu driving a Hotel over any line-based reader and writer

use crate::hotel::{Hotel, HotelError};
use crate::reservation::ReservationId;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

const MENU: &str = "\nHotel Reservation System
1. Display Available Rooms
2. Make a Reservation
3. View Reservation Details
4. Process Payment
5. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    DisplayRooms,
    MakeReservation,
    ViewReservation,
    ProcessPayment,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::DisplayRooms),
            "2" => Ok(MenuChoice::MakeReservation),
            "3" => Ok(MenuChoice::ViewReservation),
            "4" => Ok(MenuChoice::ProcessPayment),
            "5" => Ok(MenuChoice::Exit),
            _ => Err(()),
        }
    }
}

pub struct Shell<R, W> {
    hotel: Hotel,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(hotel: Hotel, input: R, output: W) -> Self {
        Self {
            hotel,
            input,
            output,
        }
    }

    pub fn hotel(&self) -> &Hotel {
        &self.hotel
    }

    pub fn into_parts(self) -> (Hotel, W) {
        (self.hotel, self.output)
    }

    /// Runs the menu until the guest picks Exit or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                tracing::debug!("input closed, leaving menu");
                return Ok(());
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::DisplayRooms) => {
                    self.hotel.display_available_rooms(&mut self.output)?
                }
                Ok(MenuChoice::MakeReservation) => {
                    if !self.make_reservation()? {
                        return Ok(());
                    }
                }
                Ok(MenuChoice::ViewReservation) => {
                    if !self.view_reservation()? {
                        return Ok(());
                    }
                }
                Ok(MenuChoice::ProcessPayment) => {
                    if !self.process_payment()? {
                        return Ok(());
                    }
                }
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    self.output.flush()?;
                    return Ok(());
                }
                Err(()) => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    // Each action returns false when input ran out mid-prompt

    fn make_reservation(&mut self) -> Result<bool> {
        let Some(guest_name) = self.prompt("Enter your name: ")? else {
            return Ok(false);
        };

        let category_prompt = format!(
            "Enter room category ({}): ",
            self.hotel.categories().join(", ")
        );
        let Some(category) = self.prompt(&category_prompt)? else {
            return Ok(false);
        };

        let Some(nights) = self.prompt_number::<u32>("Enter number of nights: ")? else {
            return Ok(false);
        };

        match self
            .hotel
            .make_reservation(&guest_name, category.trim(), nights)
        {
            Ok(reservation) => writeln!(
                self.output,
                "Reservation made successfully. Your reservation ID is {}",
                reservation.id
            )?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(true)
    }

    fn view_reservation(&mut self) -> Result<bool> {
        let Some(id) = self.prompt_number::<ReservationId>("Enter reservation ID: ")? else {
            return Ok(false);
        };

        // Not-found is already written by the hotel; only I/O failures matter here
        if let Err(HotelError::Io(e)) =
            self.hotel.display_reservation_details(id, &mut self.output)
        {
            return Err(e).context("writing reservation details");
        }
        Ok(true)
    }

    fn process_payment(&mut self) -> Result<bool> {
        let Some(id) =
            self.prompt_number::<ReservationId>("Enter reservation ID to process payment: ")?
        else {
            return Ok(false);
        };

        match self.hotel.process_payment(id) {
            Ok(reservation) => writeln!(
                self.output,
                "Payment processed successfully for reservation ID: {}",
                reservation.id
            )?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(true)
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("reading from input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    // Re-prompts until the line parses, instead of giving up on bad input
    fn prompt_number<T: FromStr>(&mut self, text: &str) -> Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(text)? else {
                return Ok(None);
            };
            match line.trim().parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Invalid number: {}", line.trim())?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str) -> (Hotel, String) {
        let mut shell = Shell::new(Hotel::new(), Cursor::new(input.to_string()), Vec::new());
        shell.run().unwrap();
        let (hotel, output) = shell.into_parts();
        (hotel, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::DisplayRooms));
        assert_eq!(" 5 ".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert!("6".parse::<MenuChoice>().is_err());
        assert!("exit".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_full_session() {
        let input = "2\nAlice\nSingle\n3\n2\nBob\nsingle\n2\n2\nCarl\nSingle\n1\n4\n1\n4\n1\n3\n99\n5\n";
        let (hotel, output) = run_session(input);

        assert!(output.contains("Reservation made successfully. Your reservation ID is 1"));
        assert!(output.contains("Reservation made successfully. Your reservation ID is 2"));
        assert!(output.contains("No available rooms in the category: Single"));
        assert!(output.contains("Payment processed successfully for reservation ID: 1"));
        assert!(output.contains("Payment already made for this reservation."));
        assert!(output.contains("Reservation not found with ID: 99"));
        assert!(output.ends_with("Exiting...\n"));

        assert_eq!(hotel.reservations().len(), 2);
        assert_eq!(hotel.reservations()[1].room_number, 104);
        assert!(hotel.reservations()[0].is_paid());
    }

    #[test]
    fn test_display_rooms_after_booking() {
        let (_, output) = run_session("2\nDana\nSuite\n1\n1\n5\n");
        assert!(output.contains("Available Rooms:"));
        assert!(!output.contains("number: 103"));
        assert!(output.contains("number: 105"));
    }

    #[test]
    fn test_category_prompt_lists_inventory() {
        let (_, output) = run_session("2\nEve\nDouble\n1\n5\n");
        assert!(output.contains("Enter room category (Single, Double, Suite): "));
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let (_, output) = run_session("9\nhello\n5\n");
        assert_eq!(output.matches("Invalid choice. Please try again.").count(), 2);
        assert_eq!(output.matches("Enter your choice: ").count(), 3);
    }

    #[test]
    fn test_malformed_number_reprompts() {
        let (hotel, output) = run_session("2\nFrank\nDouble\nthree\n-2\n3\n3\nabc\n1\n5\n");

        assert!(output.contains("Invalid number: three"));
        assert!(output.contains("Invalid number: -2"));
        assert!(output.contains("Invalid number: abc"));
        assert!(output.contains("Reservation made successfully. Your reservation ID is 1"));
        assert!(output.contains("total_amount: 450.00"));
        assert_eq!(hotel.reservations()[0].nights, 3);
    }

    #[test]
    fn test_zero_nights_is_reported() {
        let (hotel, output) = run_session("2\nGina\nSingle\n0\n5\n");
        assert!(output.contains("Number of nights must be at least 1"));
        assert!(hotel.reservations().is_empty());
    }

    #[test]
    fn test_end_of_input_stops_cleanly() {
        let (hotel, output) = run_session("2\nHank\n");
        assert!(output.ends_with("Enter room category (Single, Double, Suite): "));
        assert!(hotel.reservations().is_empty());

        let (_, output) = run_session("");
        assert!(output.ends_with("Enter your choice: "));
    }
}
