use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

/// One accrual on a loyalty account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoyaltyEntry {
    pub booking_id: Uuid,
    pub points: i64,
    pub amount_naira: i64,
    pub earned_at: DateTime<Utc>,
}

/// Points accounts keyed by contact. Accrual only; the source system
/// has no redemption.
pub struct LoyaltyLedger {
    /// Naira of spend per point earned
    accrual_divisor: i64,
    accounts: HashMap<String, Vec<LoyaltyEntry>>,
}

impl LoyaltyLedger {
    /// `accrual_divisor` below 1 falls back to the default of 100
    pub fn new(accrual_divisor: i64) -> Self {
        Self {
            accrual_divisor: if accrual_divisor < 1 { 100 } else { accrual_divisor },
            accounts: HashMap::new(),
        }
    }

    /// Award points for a confirmed booking: amount / divisor, floored
    pub fn accrue(&mut self, contact: &str, booking_id: Uuid, amount_naira: i64) -> i64 {
        let points = amount_naira.max(0) / self.accrual_divisor;
        let entry = LoyaltyEntry {
            booking_id,
            points,
            amount_naira,
            earned_at: Utc::now(),
        };
        self.accounts
            .entry(contact.to_ascii_lowercase())
            .or_default()
            .push(entry);
        info!(contact, points, "loyalty points accrued");
        points
    }

    pub fn balance(&self, contact: &str) -> i64 {
        self.accounts
            .get(&contact.to_ascii_lowercase())
            .map(|entries| entries.iter().map(|e| e.points).sum())
            .unwrap_or(0)
    }

    /// Accrual history, oldest first
    pub fn history(&self, contact: &str) -> &[LoyaltyEntry] {
        self.accounts
            .get(&contact.to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl Default for LoyaltyLedger {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accrual_floors() {
        let mut ledger = LoyaltyLedger::new(100);
        let earned = ledger.accrue("ada@example.com", Uuid::new_v4(), 30_250);
        assert_eq!(earned, 302);
        assert_eq!(ledger.balance("ada@example.com"), 302);
    }

    #[test]
    fn test_balance_sums_history() {
        let mut ledger = LoyaltyLedger::new(100);
        ledger.accrue("ada@example.com", Uuid::new_v4(), 10_000);
        ledger.accrue("Ada@Example.com", Uuid::new_v4(), 5_000);
        assert_eq!(ledger.balance("ada@example.com"), 150);
        assert_eq!(ledger.history("ada@example.com").len(), 2);
    }

    #[test]
    fn test_unknown_contact_is_zero() {
        let ledger = LoyaltyLedger::default();
        assert_eq!(ledger.balance("nobody@example.com"), 0);
        assert!(ledger.history("nobody@example.com").is_empty());
    }

    #[test]
    fn test_negative_amount_earns_nothing() {
        let mut ledger = LoyaltyLedger::new(100);
        assert_eq!(ledger.accrue("ada@example.com", Uuid::new_v4(), -500), 0);
    }
}
