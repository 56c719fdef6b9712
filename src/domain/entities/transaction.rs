//! Purchase history entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Immutable record of a purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    id: String,
    date: NaiveDate,
    store: String,
    amount: u64,
    points: u64,
}

impl Transaction {
    /// Stars earned per currency unit spent.
    pub const STARS_PER_UNIT: u64 = 1;

    /// Creates a transaction with an explicit Star amount.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        store: impl Into<String>,
        amount: u64,
        points: u64,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            store: store.into(),
            amount,
            points,
        }
    }

    /// Creates a purchase earning Stars at the standard rate.
    #[must_use]
    pub fn purchase(
        id: impl Into<String>,
        date: NaiveDate,
        store: impl Into<String>,
        amount: u64,
    ) -> Self {
        Self::new(
            id,
            date,
            store,
            amount,
            amount.saturating_mul(Self::STARS_PER_UNIT),
        )
    }

    /// Transaction id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Purchase date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Store the purchase was made at.
    #[must_use]
    pub fn store(&self) -> &str {
        &self.store
    }

    /// Amount paid, in whole currency units.
    #[must_use]
    pub const fn amount(&self) -> u64 {
        self.amount
    }

    /// Stars earned.
    #[must_use]
    pub const fn points(&self) -> u64 {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purchase_earns_one_star_per_unit() {
        let date = NaiveDate::from_ymd_opt(2023, 10, 15).unwrap();
        let tx = Transaction::purchase("t1", date, "Central Mall", 35);

        assert_eq!(tx.amount(), 35);
        assert_eq!(tx.points(), 35);
        assert_eq!(tx.date(), date);
    }
}
