use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An intercity route between two terminals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: Uuid,
    pub origin: String,
    pub destination: String,
    pub duration_minutes: u32,
}

impl Route {
    pub fn new(origin: &str, destination: &str, duration_minutes: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin: origin.to_string(),
            destination: destination.to_string(),
            duration_minutes,
        }
    }

    /// Case-insensitive match on the city pair
    pub fn connects(&self, origin: &str, destination: &str) -> bool {
        self.origin.eq_ignore_ascii_case(origin.trim())
            && self.destination.eq_ignore_ascii_case(destination.trim())
    }
}
