use crate::occupancy::OccupancyOracle;
use crate::seatmap::{row_label, Seat, SeatLayout, SeatMap, SeatStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Seat selection for one journey: a seat map plus the user's picks,
/// capped at the passenger quota.
///
/// Owns all session state explicitly; every transition runs to
/// completion before the next one is applied, so no locking is needed
/// beyond whatever guards the session itself.
#[derive(Debug, Clone)]
pub struct SeatSelection {
    seats: SeatMap,
    selected: Vec<String>,
    quota: u32,
}

/// What a toggle actually did
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// The seat is occupied; toggling it is silently ignored
    Ignored,
}

/// Finalized hand-off to the passenger-details step
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionPayload {
    /// Chosen seat ids in original selection order
    pub seat_ids: Vec<String>,
    pub total_price_naira: i64,
    pub passenger_count: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Invalid seat layout: {0}")]
    InvalidLayout(String),

    #[error("Passenger quota must be at least 1, got {0}")]
    InvalidQuota(u32),

    #[error("Unknown seat: {0}")]
    UnknownSeat(String),

    #[error("Selection quota exceeded: all {quota} seats already chosen")]
    QuotaExceeded { quota: u32 },

    #[error("Incomplete selection: {missing} more seat(s) required")]
    IncompleteSelection { missing: u32 },
}

impl SeatSelection {
    /// Build the seat map for one journey and start with an empty
    /// selection. Initial occupancy comes from the injected oracle;
    /// nothing here performs I/O.
    pub fn initialize(
        layout: SeatLayout,
        passenger_quota: u32,
        fare_per_seat_naira: i64,
        oracle: &mut dyn OccupancyOracle,
    ) -> Result<Self, SelectionError> {
        if layout.rows == 0 || layout.columns == 0 {
            return Err(SelectionError::InvalidLayout(format!(
                "{}x{} grid has no seats",
                layout.rows, layout.columns
            )));
        }
        if layout.seats_per_row() == 0 {
            return Err(SelectionError::InvalidLayout(
                "aisle leaves no seat columns".to_string(),
            ));
        }
        if passenger_quota == 0 {
            return Err(SelectionError::InvalidQuota(passenger_quota));
        }

        let mut seats = HashMap::new();
        let mut order = Vec::with_capacity(layout.capacity() as usize);
        for row in 1..=layout.rows {
            let label = row_label(row);
            let mut seat_no = 0;
            for column in 1..=layout.columns {
                if layout.aisle_column == Some(column) {
                    continue;
                }
                seat_no += 1;
                let id = format!("{}{}", label, seat_no);
                let status = if oracle.is_occupied(&id) {
                    SeatStatus::Occupied
                } else {
                    SeatStatus::Available
                };
                seats.insert(
                    id.clone(),
                    Seat {
                        id: id.clone(),
                        status,
                        price_naira: fare_per_seat_naira,
                    },
                );
                order.push(id);
            }
        }

        Ok(Self {
            seats: SeatMap::new(seats, order),
            selected: Vec::new(),
            quota: passenger_quota,
        })
    }

    /// Flip one seat between available and selected.
    ///
    /// Occupied seats are ignored (not an error); selecting past the
    /// quota is rejected and leaves state untouched.
    pub fn toggle_seat(&mut self, seat_id: &str) -> Result<ToggleOutcome, SelectionError> {
        let status = self
            .seats
            .get(seat_id)
            .map(|s| s.status)
            .ok_or_else(|| SelectionError::UnknownSeat(seat_id.to_string()))?;

        match status {
            SeatStatus::Occupied => Ok(ToggleOutcome::Ignored),
            SeatStatus::Selected => {
                self.selected.retain(|id| id != seat_id);
                if let Some(seat) = self.seats.get_mut(seat_id) {
                    seat.status = SeatStatus::Available;
                }
                debug!(seat_id, remaining = self.selected.len(), "seat deselected");
                Ok(ToggleOutcome::Deselected)
            }
            SeatStatus::Available => {
                if self.selected.len() as u32 == self.quota {
                    return Err(SelectionError::QuotaExceeded { quota: self.quota });
                }
                if let Some(seat) = self.seats.get_mut(seat_id) {
                    seat.status = SeatStatus::Selected;
                }
                self.selected.push(seat_id.to_string());
                debug!(seat_id, chosen = self.selected.len(), "seat selected");
                Ok(ToggleOutcome::Selected)
            }
        }
    }

    /// Running total over currently selected seats
    pub fn compute_total(&self) -> i64 {
        self.selected
            .iter()
            .filter_map(|id| self.seats.get(id))
            .map(|seat| seat.price_naira)
            .sum()
    }

    /// Finalize the selection. Succeeds only when exactly the quota
    /// is chosen; otherwise reports the shortfall without touching
    /// state.
    pub fn confirm(&self) -> Result<SelectionPayload, SelectionError> {
        let chosen = self.selected.len() as u32;
        if chosen != self.quota {
            return Err(SelectionError::IncompleteSelection {
                missing: self.quota.saturating_sub(chosen),
            });
        }
        Ok(SelectionPayload {
            seat_ids: self.selected.clone(),
            total_price_naira: self.compute_total(),
            passenger_count: self.quota,
        })
    }

    pub fn seat_map(&self) -> &SeatMap {
        &self.seats
    }

    /// Selected seat ids in selection order
    pub fn selected_seat_ids(&self) -> &[String] {
        &self.selected
    }

    pub fn passenger_quota(&self) -> u32 {
        self.quota
    }

    /// How many more seats must be chosen before confirm can succeed
    pub fn seats_remaining(&self) -> u32 {
        self.quota.saturating_sub(self.selected.len() as u32)
    }
}
