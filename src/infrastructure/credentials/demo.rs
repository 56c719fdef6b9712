//! Demo member shown on the sign-in screen.

use chrono::NaiveDate;

use crate::domain::entities::{
    Email, Password, Reward, RewardStatus, Tier, Transaction, User,
};

use super::CredentialRecord;

/// Email of the demo member.
pub const DEMO_EMAIL: &str = "john@example.com";
/// Password of the demo member.
pub const DEMO_PASSWORD: &str = "password123";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Accounts every fresh store starts with.
#[must_use]
pub fn accounts() -> Vec<CredentialRecord> {
    let john = User::new("1", "John Doe", DEMO_EMAIL, date(2022, 5, 15))
        .with_points(230)
        .with_level(Tier::Gold)
        .with_transactions(vec![
            Transaction::purchase("t1", date(2023, 10, 15), "Central Mall", 35),
            Transaction::purchase("t2", date(2023, 10, 10), "Bay Street", 42),
            Transaction::purchase("t3", date(2023, 10, 5), "Harbor View", 28),
        ])
        .with_rewards(vec![
            Reward::new(
                "r1",
                date(2023, 9, 30),
                "Free Drink",
                120,
                RewardStatus::Redeemed,
            ),
            Reward::new(
                "r2",
                date(2023, 9, 15),
                "Cake Slice",
                150,
                RewardStatus::Available,
            ),
        ]);

    vec![CredentialRecord {
        email: Email::new_unchecked(DEMO_EMAIL),
        password: Password::new(DEMO_PASSWORD),
        user: john,
    }]
}
