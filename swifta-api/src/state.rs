use crate::config::BusinessRules;
use crate::selections::SessionStore;
use std::sync::Arc;
use swifta_booking::{BookingManager, LoyaltyLedger};
use swifta_catalog::{FareSchedule, JourneyRepository};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub journeys: Arc<dyn JourneyRepository>,
    pub sessions: Arc<RwLock<SessionStore>>,
    pub bookings: Arc<RwLock<BookingManager>>,
    pub loyalty: Arc<RwLock<LoyaltyLedger>>,
    pub fares: FareSchedule,
    pub rules: BusinessRules,
}

impl AppState {
    pub fn new(journeys: Arc<dyn JourneyRepository>, rules: BusinessRules) -> Self {
        Self {
            journeys,
            sessions: Arc::new(RwLock::new(SessionStore::new())),
            bookings: Arc::new(RwLock::new(BookingManager::new())),
            loyalty: Arc::new(RwLock::new(LoyaltyLedger::new(
                rules.loyalty_accrual_divisor,
            ))),
            fares: FareSchedule::new(rules.booking_fee_naira),
            rules,
        }
    }
}
