//! Member data as shown on the tab screens.

use std::fmt::Write;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::domain::entities::{
    Reward, RewardStatus, SessionState, Tier, TierProgress, Transaction, User,
};

/// What a tab screen can render for the current session.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberView {
    /// No member yet; show a placeholder.
    Loading,
    /// Member data ready to render.
    Ready(MemberSummary),
}

impl MemberView {
    /// View for the given session state.
    #[must_use]
    pub fn from_state(state: &SessionState) -> Self {
        state
            .user()
            .map_or(Self::Loading, |user| Self::Ready(MemberSummary::from(user)))
    }
}

/// Purchases made in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthHistory {
    /// Month heading, e.g. "October 2023".
    pub month: String,
    /// Purchases in the month, newest first.
    pub transactions: Vec<Transaction>,
}

impl MonthHistory {
    /// Groups purchases by calendar month, newest month first.
    #[must_use]
    pub fn group(transactions: &[Transaction]) -> Vec<Self> {
        let mut sorted = transactions.to_vec();
        sorted.sort_by(|a, b| b.date().cmp(&a.date()));

        sorted
            .chunk_by(|a, b| {
                (a.date().year(), a.date().month()) == (b.date().year(), b.date().month())
            })
            .map(|month| Self {
                month: month[0].date().format("%B %Y").to_string(),
                transactions: month.to_vec(),
            })
            .collect()
    }
}

/// Everything the member tabs show for one member.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberSummary {
    /// Member id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Sign-in email.
    pub email: String,
    /// Date the account was created.
    pub member_since: NaiveDate,
    /// Star balance.
    pub stars: u64,
    /// Tier label stored on the member record.
    pub level: Tier,
    /// Progress computed from the Star balance.
    pub progress: TierProgress,
    /// Benefits of the tier the Star balance reaches.
    pub benefits: Vec<&'static str>,
    /// Purchases grouped by month, newest first.
    pub history: Vec<MonthHistory>,
    /// Rewards that can still be redeemed.
    pub available_rewards: Vec<Reward>,
    /// Number of rewards already redeemed.
    pub redeemed_rewards: usize,
}

impl From<&User> for MemberSummary {
    fn from(user: &User) -> Self {
        let progress = TierProgress::for_points(user.points());

        Self {
            id: user.id().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            member_since: user.member_since(),
            stars: user.points(),
            level: user.level(),
            progress,
            benefits: progress.current.benefits().to_vec(),
            history: MonthHistory::group(user.transactions()),
            available_rewards: user
                .rewards()
                .iter()
                .filter(|r| r.is_available())
                .cloned()
                .collect(),
            redeemed_rewards: user
                .rewards()
                .iter()
                .filter(|r| r.status() == RewardStatus::Redeemed)
                .count(),
        }
    }
}

impl MemberSummary {
    /// Plain-text rendering for terminals.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} <{}>", self.name, self.email);
        let _ = writeln!(out, "Member since {}", self.member_since);
        let _ = writeln!(out, "{} Stars - {} Level", self.stars, self.level);

        match self.progress.next {
            Some(next) => {
                let _ = writeln!(
                    out,
                    "{} more Stars to {} Level ({:.0}%)",
                    self.progress.points_to_next, next, self.progress.percent
                );
            }
            None => {
                let _ = writeln!(out, "Top tier reached");
            }
        }

        if !self.benefits.is_empty() {
            let _ = writeln!(out, "\n{} Level benefits:", self.progress.current);
            for benefit in &self.benefits {
                let _ = writeln!(out, "  - {benefit}");
            }
        }

        if !self.history.is_empty() {
            let _ = writeln!(out, "\nRecent purchases:");
            for group in &self.history {
                let _ = writeln!(out, "  {}", group.month);
                for tx in &group.transactions {
                    let _ = writeln!(
                        out,
                        "    {}  {:<16} {:>5}  +{} Stars",
                        tx.date(),
                        tx.store(),
                        tx.amount(),
                        tx.points()
                    );
                }
            }
        }

        if !self.available_rewards.is_empty() {
            let _ = writeln!(out, "\nRewards ready:");
            for reward in &self.available_rewards {
                let _ = writeln!(out, "  {} ({} Stars)", reward.name(), reward.points());
            }
        }

        out
    }
}
