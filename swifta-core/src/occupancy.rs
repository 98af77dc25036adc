use rand::Rng;
use std::collections::HashSet;

/// Decides which seats start out occupied when a seat map is built.
///
/// Injected at initialization so tests can pin an exact occupancy
/// pattern while the live service keeps its pseudo-random stand-in
/// for a real inventory check.
pub trait OccupancyOracle {
    fn is_occupied(&mut self, seat_id: &str) -> bool;
}

/// Marks each seat occupied with a fixed probability
pub struct RandomOccupancy {
    rate: f64,
}

impl RandomOccupancy {
    /// `rate` is clamped to [0, 1]
    pub fn new(rate: f64) -> Self {
        Self {
            rate: rate.clamp(0.0, 1.0),
        }
    }
}

impl OccupancyOracle for RandomOccupancy {
    fn is_occupied(&mut self, _seat_id: &str) -> bool {
        rand::thread_rng().gen_bool(self.rate)
    }
}

/// Marks exactly the listed seat ids occupied
pub struct FixedOccupancy {
    occupied: HashSet<String>,
}

impl FixedOccupancy {
    pub fn new<I, S>(occupied: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            occupied: occupied.into_iter().map(Into::into).collect(),
        }
    }

    /// All seats start available
    pub fn none() -> Self {
        Self {
            occupied: HashSet::new(),
        }
    }
}

impl OccupancyOracle for FixedOccupancy {
    fn is_occupied(&mut self, seat_id: &str) -> bool {
        self.occupied.contains(seat_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_occupancy() {
        let mut oracle = FixedOccupancy::new(["D4", "A1"]);
        assert!(oracle.is_occupied("D4"));
        assert!(oracle.is_occupied("A1"));
        assert!(!oracle.is_occupied("B2"));
    }

    #[test]
    fn test_random_occupancy_extremes() {
        let mut never = RandomOccupancy::new(0.0);
        let mut always = RandomOccupancy::new(1.0);
        for id in ["A1", "B2", "C3"] {
            assert!(!never.is_occupied(id));
            assert!(always.is_occupied(id));
        }
    }

    #[test]
    fn test_random_occupancy_clamps_rate() {
        // Out-of-range rates must not panic gen_bool
        let mut oracle = RandomOccupancy::new(2.5);
        let _ = oracle.is_occupied("A1");
        let mut oracle = RandomOccupancy::new(-1.0);
        assert!(!oracle.is_occupied("A1"));
    }
}
