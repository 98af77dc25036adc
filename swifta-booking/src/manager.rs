use crate::models::{generate_reference, Booking, BookingStatus, Passenger};
use chrono::Utc;
use std::collections::HashMap;
use swifta_core::SelectionPayload;
use tracing::info;
use uuid::Uuid;

/// Manages booking lifecycle and state transitions
pub struct BookingManager {
    bookings: HashMap<Uuid, Booking>,
}

impl BookingManager {
    pub fn new() -> Self {
        Self {
            bookings: HashMap::new(),
        }
    }

    /// Create a Draft booking from a finalized seat selection.
    ///
    /// The passenger list must line up with the payload: one passenger
    /// per seat, count equal to the payload's passenger count.
    pub fn create_booking(
        &mut self,
        journey_id: Uuid,
        contact: String,
        passengers: Vec<Passenger>,
        payload: &SelectionPayload,
        total_naira: i64,
    ) -> Result<Booking, BookingError> {
        if passengers.len() as u32 != payload.passenger_count
            || passengers.len() != payload.seat_ids.len()
        {
            return Err(BookingError::PassengerMismatch {
                expected: payload.passenger_count,
                got: passengers.len() as u32,
            });
        }

        let now = Utc::now();
        let booking = Booking {
            id: Uuid::new_v4(),
            reference: generate_reference(),
            journey_id,
            contact,
            passengers,
            seat_ids: payload.seat_ids.clone(),
            total_naira,
            status: BookingStatus::Draft,
            created_at: now,
            updated_at: now,
        };

        self.bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    pub fn get_booking(&self, booking_id: &Uuid) -> Option<&Booking> {
        self.bookings.get(booking_id)
    }

    /// Bookings held under a contact, newest first
    pub fn list_by_contact(&self, contact: &str) -> Vec<&Booking> {
        let mut found: Vec<&Booking> = self
            .bookings
            .values()
            .filter(|b| b.contact.eq_ignore_ascii_case(contact))
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        found
    }

    /// Transition: Draft -> Confirmed
    pub fn confirm_booking(&mut self, booking_id: &Uuid) -> Result<&Booking, BookingError> {
        let booking = self.get_booking_mut(booking_id)?;

        if booking.status != BookingStatus::Draft {
            return Err(BookingError::InvalidTransition {
                from: format!("{:?}", booking.status),
                to: "CONFIRMED".to_string(),
            });
        }

        booking.update_status(BookingStatus::Confirmed);
        info!(reference = %booking.reference, "booking confirmed");
        Ok(&*booking)
    }

    /// Cancel a booking (any status except Cancelled)
    pub fn cancel_booking(&mut self, booking_id: &Uuid) -> Result<&Booking, BookingError> {
        let booking = self.get_booking_mut(booking_id)?;

        if booking.status == BookingStatus::Cancelled {
            return Err(BookingError::InvalidTransition {
                from: "CANCELLED".to_string(),
                to: "CANCELLED".to_string(),
            });
        }

        booking.update_status(BookingStatus::Cancelled);
        info!(reference = %booking.reference, "booking cancelled");
        Ok(&*booking)
    }

    fn get_booking_mut(&mut self, booking_id: &Uuid) -> Result<&mut Booking, BookingError> {
        self.bookings
            .get_mut(booking_id)
            .ok_or_else(|| BookingError::NotFound(booking_id.to_string()))
    }
}

impl Default for BookingManager {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Booking not found: {0}")]
    NotFound(String),

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Passenger count mismatch: selection is for {expected}, got {got}")]
    PassengerMismatch { expected: u32, got: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SelectionPayload {
        SelectionPayload {
            seat_ids: vec!["A1".to_string(), "B2".to_string()],
            total_price_naira: 29_700,
            passenger_count: 2,
        }
    }

    fn passengers() -> Vec<Passenger> {
        vec![
            Passenger::new("Adaeze Obi", "+2348030000001"),
            Passenger::new("Tunde Bakare", "+2348030000002"),
        ]
    }

    #[test]
    fn test_booking_lifecycle() {
        let mut manager = BookingManager::new();
        let journey_id = Uuid::new_v4();

        let booking = manager
            .create_booking(
                journey_id,
                "ada@example.com".to_string(),
                passengers(),
                &payload(),
                30_200,
            )
            .unwrap();
        assert_eq!(booking.status, BookingStatus::Draft);
        assert_eq!(booking.seat_ids, ["A1", "B2"]);
        assert_eq!(booking.total_naira, 30_200);

        manager.confirm_booking(&booking.id).unwrap();
        assert_eq!(
            manager.get_booking(&booking.id).unwrap().status,
            BookingStatus::Confirmed
        );

        manager.cancel_booking(&booking.id).unwrap();
        assert_eq!(
            manager.get_booking(&booking.id).unwrap().status,
            BookingStatus::Cancelled
        );
    }

    #[test]
    fn test_confirm_requires_draft() {
        let mut manager = BookingManager::new();
        let booking = manager
            .create_booking(
                Uuid::new_v4(),
                "ada@example.com".to_string(),
                passengers(),
                &payload(),
                30_200,
            )
            .unwrap();

        manager.confirm_booking(&booking.id).unwrap();
        assert!(manager.confirm_booking(&booking.id).is_err());
    }

    #[test]
    fn test_cancel_twice_rejected() {
        let mut manager = BookingManager::new();
        let booking = manager
            .create_booking(
                Uuid::new_v4(),
                "ada@example.com".to_string(),
                passengers(),
                &payload(),
                30_200,
            )
            .unwrap();

        manager.cancel_booking(&booking.id).unwrap();
        assert!(matches!(
            manager.cancel_booking(&booking.id),
            Err(BookingError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_passenger_count_must_match_selection() {
        let mut manager = BookingManager::new();
        let one_passenger = vec![Passenger::new("Adaeze Obi", "+2348030000001")];

        let result = manager.create_booking(
            Uuid::new_v4(),
            "ada@example.com".to_string(),
            one_passenger,
            &payload(),
            30_200,
        );
        assert!(matches!(
            result,
            Err(BookingError::PassengerMismatch { expected: 2, got: 1 })
        ));
    }

    #[test]
    fn test_list_by_contact_newest_first() {
        let mut manager = BookingManager::new();
        let single = SelectionPayload {
            seat_ids: vec!["A1".to_string()],
            total_price_naira: 14_850,
            passenger_count: 1,
        };
        let pax = || vec![Passenger::new("Adaeze Obi", "+2348030000001")];

        let first = manager
            .create_booking(Uuid::new_v4(), "ada@example.com".to_string(), pax(), &single, 15_350)
            .unwrap();
        let second = manager
            .create_booking(Uuid::new_v4(), "ADA@example.com".to_string(), pax(), &single, 15_350)
            .unwrap();
        manager
            .create_booking(Uuid::new_v4(), "other@example.com".to_string(), pax(), &single, 15_350)
            .unwrap();

        let listed = manager.list_by_contact("ada@example.com");
        assert_eq!(listed.len(), 2);
        let ids: Vec<Uuid> = listed.iter().map(|b| b.id).collect();
        assert!(ids.contains(&first.id) && ids.contains(&second.id));
    }
}
