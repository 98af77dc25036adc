use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Status of a single seat within one selection session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatStatus {
    Available,
    Occupied,
    Selected,
}

/// One seat in a journey's seat map
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    /// Row letter + seat number within the row, e.g. "C3"
    pub id: String,
    pub status: SeatStatus,
    /// Fare for this seat in naira (uniform per journey in practice)
    pub price_naira: i64,
}

/// Vehicle floor plan: a grid of rows x columns, with an optional
/// walkway column that produces no seat
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SeatLayout {
    pub rows: u32,
    pub columns: u32,
    /// 1-based grid column reserved as the aisle, if any
    pub aisle_column: Option<u32>,
}

impl SeatLayout {
    pub fn new(rows: u32, columns: u32) -> Self {
        Self {
            rows,
            columns,
            aisle_column: None,
        }
    }

    pub fn with_aisle(rows: u32, columns: u32, aisle_column: u32) -> Self {
        Self {
            rows,
            columns,
            aisle_column: Some(aisle_column),
        }
    }

    /// Seats per row after subtracting the aisle gap
    pub fn seats_per_row(&self) -> u32 {
        match self.aisle_column {
            Some(a) if a >= 1 && a <= self.columns => self.columns - 1,
            _ => self.columns,
        }
    }

    /// Total seat count in the layout
    pub fn capacity(&self) -> u32 {
        self.rows * self.seats_per_row()
    }
}

/// Seats keyed by id, plus the floor-plan order they were generated in.
/// Generated fresh per selection session and discarded with it.
#[derive(Debug, Clone)]
pub struct SeatMap {
    seats: HashMap<String, Seat>,
    order: Vec<String>,
}

impl SeatMap {
    pub(crate) fn new(seats: HashMap<String, Seat>, order: Vec<String>) -> Self {
        Self { seats, order }
    }

    pub fn get(&self, seat_id: &str) -> Option<&Seat> {
        self.seats.get(seat_id)
    }

    pub(crate) fn get_mut(&mut self, seat_id: &str) -> Option<&mut Seat> {
        self.seats.get_mut(seat_id)
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    /// Seats in floor-plan order (row by row)
    pub fn iter_ordered(&self) -> impl Iterator<Item = &Seat> {
        self.order.iter().filter_map(|id| self.seats.get(id))
    }

    /// Count of seats currently in the given status
    pub fn count_in_status(&self, status: SeatStatus) -> usize {
        self.seats.values().filter(|s| s.status == status).count()
    }
}

/// Row label for a 1-based row index: A..Z, then AA, AB, ...
pub(crate) fn row_label(row: u32) -> String {
    let mut n = row;
    let mut label = String::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        label.insert(0, (b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    label
}
