use serde::{Deserialize, Serialize};

/// Fixed-arithmetic fare rules: per-seat fare times seat count, plus a
/// flat booking fee per booking. No dynamic pricing.
#[derive(Debug, Clone)]
pub struct FareSchedule {
    booking_fee_naira: i64,
}

/// Priced breakdown for one prospective booking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FareQuote {
    pub seat_subtotal_naira: i64,
    pub booking_fee_naira: i64,
    pub total_naira: i64,
}

impl FareSchedule {
    pub fn new(booking_fee_naira: i64) -> Self {
        Self { booking_fee_naira }
    }

    pub fn quote(&self, fare_per_seat_naira: i64, seat_count: u32) -> FareQuote {
        let seat_subtotal_naira = fare_per_seat_naira * i64::from(seat_count);
        FareQuote {
            seat_subtotal_naira,
            booking_fee_naira: self.booking_fee_naira,
            total_naira: seat_subtotal_naira + self.booking_fee_naira,
        }
    }

    /// Quote from an already-computed seat subtotal
    pub fn quote_subtotal(&self, seat_subtotal_naira: i64) -> FareQuote {
        FareQuote {
            seat_subtotal_naira,
            booking_fee_naira: self.booking_fee_naira,
            total_naira: seat_subtotal_naira + self.booking_fee_naira,
        }
    }
}
