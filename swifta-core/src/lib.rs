pub mod occupancy;
pub mod seatmap;
pub mod selection;

pub use occupancy::{FixedOccupancy, OccupancyOracle, RandomOccupancy};
pub use seatmap::{Seat, SeatLayout, SeatMap, SeatStatus};
pub use selection::{SeatSelection, SelectionError, SelectionPayload, ToggleOutcome};
