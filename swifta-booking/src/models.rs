use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Booking status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Draft,
    Confirmed,
    Cancelled,
}

/// A traveller on one booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
}

impl Passenger {
    pub fn new(full_name: &str, phone: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            full_name: full_name.to_string(),
            phone: phone.to_string(),
        }
    }
}

/// The record of one purchased trip
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    /// Short human-readable code quoted at the terminal
    pub reference: String,
    pub journey_id: Uuid,
    /// Email or phone the booking is held under
    pub contact: String,
    pub passengers: Vec<Passenger>,
    /// Seat ids in the order they were chosen
    pub seat_ids: Vec<String>,
    pub total_naira: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn update_status(&mut self, new_status: BookingStatus) {
        self.status = new_status;
        self.updated_at = Utc::now();
    }
}

/// Six-character booking reference, unambiguous alphabet (no O/0, I/1)
pub(crate) fn generate_reference() -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
    let mut rng = rand::thread_rng();
    (0..6)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}
