//! Points Ledger
//!
//! Owns the session's Boost Point total. The total starts at a seed value
//! and only grows through award events; there is no spend path. Every award
//! re-resolves the tier so callers learn about level-ups immediately.

use super::tiers::{Tier, TierStatus, TierTable};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default starting total, matching the sample dashboard account
pub const DEFAULT_SEED_POINTS: u64 = 1250;

/// Where an award came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardSource {
    Achievement,
    CardDraw,
    Challenge,
    Manual,
}

impl AwardSource {
    /// Source name as stored in the award history
    pub fn as_str(&self) -> &'static str {
        match self {
            AwardSource::Achievement => "achievement",
            AwardSource::CardDraw => "card_draw",
            AwardSource::Challenge => "challenge",
            AwardSource::Manual => "manual",
        }
    }
}

/// A recorded award
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AwardEvent {
    pub source: AwardSource,
    pub detail: String,
    pub amount: u64,
    pub total_after: u64,
    pub timestamp: DateTime<Utc>,
}

/// Result of applying an award
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AwardOutcome {
    pub amount: u64,
    pub total: u64,
    pub previous_tier_id: u32,
    pub tier_id: u32,
    /// Tiers entered by this award, in ascending order
    pub tiers_gained: Vec<String>,
    /// Capabilities unlocked by the tiers entered
    pub unlocked: Vec<String>,
}

impl AwardOutcome {
    /// Whether at least one tier was gained
    pub fn level_up(&self) -> bool {
        self.tier_id > self.previous_tier_id
    }
}

/// Monotonic points counter bound to a tier table
#[derive(Debug, Clone)]
pub struct PointsLedger {
    table: TierTable,
    total: u64,
    history: Vec<AwardEvent>,
}

impl PointsLedger {
    /// Ledger starting at `seed` points
    pub fn new(table: TierTable, seed: u64) -> Self {
        Self {
            table,
            total: seed,
            history: Vec::new(),
        }
    }

    /// Current Boost Point total
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The tier table totals resolve against
    pub fn table(&self) -> &TierTable {
        &self.table
    }

    /// Awards in the order they were made
    pub fn history(&self) -> &[AwardEvent] {
        &self.history
    }

    /// Resolve the current total
    pub fn status(&self) -> TierStatus<'_> {
        self.table.resolve(self.total)
    }

    /// Tier containing the current total
    pub fn current_tier(&self) -> &Tier {
        self.status().current_tier
    }

    /// Add points and report any tier change
    pub fn award(&mut self, source: AwardSource, detail: &str, amount: u64) -> AwardOutcome {
        let previous_tier_id = self.current_tier().id;
        self.total = self.total.saturating_add(amount);
        let tier_id = self.current_tier().id;

        self.history.push(AwardEvent {
            source,
            detail: detail.to_string(),
            amount,
            total_after: self.total,
            timestamp: Utc::now(),
        });

        let entered: Vec<&Tier> = self
            .table
            .tiers()
            .iter()
            .filter(|t| t.id > previous_tier_id && t.id <= tier_id)
            .collect();

        let outcome = AwardOutcome {
            amount,
            total: self.total,
            previous_tier_id,
            tier_id,
            tiers_gained: entered.iter().map(|t| t.display_name.clone()).collect(),
            unlocked: entered
                .iter()
                .flat_map(|t| t.unlocked_capabilities.iter().cloned())
                .collect(),
        };

        debug!(
            "Awarded {} BP from {} ({}), total {}",
            amount,
            source.as_str(),
            detail,
            self.total
        );
        if outcome.level_up() {
            info!(
                "Level up: tier {} -> {} ({} new capabilities)",
                previous_tier_id,
                tier_id,
                outcome.unlocked.len()
            );
        }

        outcome
    }
}

impl Default for PointsLedger {
    fn default() -> Self {
        Self::new(TierTable::default_table(), DEFAULT_SEED_POINTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed() {
        let ledger = PointsLedger::default();
        assert_eq!(ledger.total(), 1250);
        assert_eq!(ledger.current_tier().display_name, "Focuser");
    }

    #[test]
    fn test_award_without_level_up() {
        let mut ledger = PointsLedger::default();
        let outcome = ledger.award(AwardSource::Achievement, "Early Bird", 50);

        assert_eq!(outcome.total, 1300);
        assert!(!outcome.level_up());
        assert!(outcome.unlocked.is_empty());
        assert_eq!(ledger.history().len(), 1);
        assert_eq!(ledger.history()[0].total_after, 1300);
    }

    #[test]
    fn test_award_crossing_boundary() {
        let mut ledger = PointsLedger::default();
        let outcome = ledger.award(AwardSource::Achievement, "Social Butterfly", 251);

        assert!(outcome.level_up());
        assert_eq!(outcome.previous_tier_id, 2);
        assert_eq!(outcome.tier_id, 3);
        assert_eq!(outcome.tiers_gained, vec!["Achiever".to_string()]);
        assert!(outcome.unlocked.contains(&"AI Personal Coach".to_string()));
    }

    #[test]
    fn test_award_skipping_tiers() {
        let mut ledger = PointsLedger::new(TierTable::default_table(), 0);
        let outcome = ledger.award(AwardSource::Manual, "import", 5000);

        assert_eq!(outcome.previous_tier_id, 1);
        assert_eq!(outcome.tier_id, 4);
        assert_eq!(outcome.tiers_gained.len(), 3);
    }

    #[test]
    fn test_award_saturates() {
        let mut ledger = PointsLedger::new(TierTable::default_table(), u64::MAX - 1);
        ledger.award(AwardSource::Manual, "overflow", 10);
        assert_eq!(ledger.total(), u64::MAX);
    }

    #[test]
    fn test_zero_award_recorded() {
        let mut ledger = PointsLedger::default();
        let outcome = ledger.award(AwardSource::Manual, "noop", 0);
        assert_eq!(outcome.total, 1250);
        assert!(!outcome.level_up());
        assert_eq!(ledger.history().len(), 1);
    }
}
