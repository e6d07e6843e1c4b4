//! Tier System
//!
//! Boost Point (BP) totals map onto an ordered table of tiers. Each tier
//! covers an inclusive range of points and unlocks a fixed list of
//! capabilities once reached.
//!
//! ## Default Table
//!
//! | Id | Name     | Points      |
//! |----|----------|-------------|
//! | 1  | Beginner | 0 - 500     |
//! | 2  | Focuser  | 501 - 1500  |
//! | 3  | Achiever | 1501 - 3000 |
//! | 4  | Master   | 3001 - ∞    |
//!
//! A table must partition the non-negative integers: the first tier starts
//! at 0, every bounded tier ends one point before the next begins, and only
//! the last tier is unbounded. `TierTable::new` enforces this so resolution
//! itself cannot fail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default tier bands: (id, min, max, name, title, unlocks)
pub const DEFAULT_TIER_BANDS: &[(u32, u64, Option<u64>, &str, &str, &[&str])] = &[
    (
        1,
        0,
        Some(500),
        "Beginner",
        "Newcomer",
        &["Basic AI Coach", "3 common cards", "Default theme"],
    ),
    (
        2,
        501,
        Some(1500),
        "Focuser",
        "The Focused One",
        &[
            "AI Productivity Tips",
            "5 rare cards",
            "Dark Mode",
            "Advanced Focus Mode",
        ],
    ),
    (
        3,
        1501,
        Some(3000),
        "Achiever",
        "The Achiever",
        &[
            "AI Personal Coach",
            "3 epic cards",
            "Custom Themes",
            "Advanced Analytics",
            "Priority Support",
        ],
    ),
    (
        4,
        3001,
        None,
        "Master",
        "Productivity Master",
        &[
            "AI Mentor Pro",
            "All legendary cards",
            "Premium Themes",
            "API Access",
            "VIP Features",
        ],
    ),
];

/// A named band of point totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub id: u32,
    pub min_points: u64,
    /// Inclusive upper bound, `None` for the unbounded top tier
    #[serde(default)]
    pub max_points: Option<u64>,
    pub display_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub unlocked_capabilities: Vec<String>,
}

impl Tier {
    /// Whether this tier has no upper bound
    pub fn is_unbounded(&self) -> bool {
        self.max_points.is_none()
    }

    /// Whether `points` falls inside this tier's range
    pub fn contains(&self, points: u64) -> bool {
        points >= self.min_points && self.max_points.map_or(true, |max| points <= max)
    }

    /// Range label such as "501 - 1500" or "3001 - ∞"
    pub fn range_label(&self) -> String {
        match self.max_points {
            Some(max) => format!("{} - {}", self.min_points, max),
            None => format!("{} - ∞", self.min_points),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// Reasons a tier table is rejected
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TierTableError {
    #[error("tier table is empty")]
    Empty,

    #[error("first tier must start at 0, found {0}")]
    FirstTierNotZero(u64),

    #[error("tier ids must ascend: {prev} is followed by {next}")]
    IdsNotAscending { prev: u32, next: u32 },

    #[error("tier {id} has max_points {max} below min_points {min}")]
    InvertedRange { id: u32, min: u64, max: u64 },

    #[error("tier {id} must start at {expected}, found {found}")]
    NotContiguous { id: u32, expected: u64, found: u64 },

    #[error("tier {0} is unbounded but is not the last tier")]
    UnboundedNotLast(u32),

    #[error("last tier {0} must be unbounded")]
    LastTierBounded(u32),

    #[error("tier {0} ends at the largest point total, so no tier can follow it")]
    BoundOverflow(u32),
}

/// Validated, immutable tier table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierTable {
    tiers: Vec<Tier>,
}

impl TierTable {
    /// Validate and build a table
    pub fn new(tiers: Vec<Tier>) -> Result<Self, TierTableError> {
        let first = tiers.first().ok_or(TierTableError::Empty)?;
        if first.min_points != 0 {
            return Err(TierTableError::FirstTierNotZero(first.min_points));
        }

        for (i, tier) in tiers.iter().enumerate() {
            if let Some(max) = tier.max_points {
                if max < tier.min_points {
                    return Err(TierTableError::InvertedRange {
                        id: tier.id,
                        min: tier.min_points,
                        max,
                    });
                }
            }

            let Some(next) = tiers.get(i + 1) else {
                if !tier.is_unbounded() {
                    return Err(TierTableError::LastTierBounded(tier.id));
                }
                continue;
            };

            if next.id <= tier.id {
                return Err(TierTableError::IdsNotAscending {
                    prev: tier.id,
                    next: next.id,
                });
            }

            let Some(max) = tier.max_points else {
                return Err(TierTableError::UnboundedNotLast(tier.id));
            };

            let Some(expected) = max.checked_add(1) else {
                return Err(TierTableError::BoundOverflow(tier.id));
            };
            if next.min_points != expected {
                return Err(TierTableError::NotContiguous {
                    id: next.id,
                    expected,
                    found: next.min_points,
                });
            }
        }

        Ok(Self { tiers })
    }

    /// The built-in four-tier table
    pub fn default_table() -> Self {
        let tiers = DEFAULT_TIER_BANDS
            .iter()
            .map(|&(id, min, max, name, title, unlocks)| Tier {
                id,
                min_points: min,
                max_points: max,
                display_name: name.to_string(),
                title: title.to_string(),
                unlocked_capabilities: unlocks.iter().map(|s| s.to_string()).collect(),
            })
            .collect();
        Self { tiers }
    }

    /// Tiers in ascending order
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Number of tiers
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    /// Always false for a validated table
    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Look up a tier by id
    pub fn get(&self, id: u32) -> Option<&Tier> {
        self.tiers.iter().find(|t| t.id == id)
    }

    /// The unbounded top tier
    pub fn last(&self) -> &Tier {
        // Non-empty by construction
        &self.tiers[self.tiers.len() - 1]
    }

    /// Resolve the tier status for a points total
    pub fn resolve(&self, points: u64) -> TierStatus<'_> {
        resolve_tier(points, self)
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::default_table()
    }
}

/// Derived tier state for a points total
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierStatus<'a> {
    pub points: u64,
    pub current_tier: &'a Tier,
    pub next_tier: Option<&'a Tier>,
    /// Position within the current tier's range (0.0 - 1.0)
    pub progress_fraction: f64,
    pub points_to_next: Option<u64>,
}

impl TierStatus<'_> {
    /// Progress as a whole percentage (0-100), rounded like the dashboard does
    pub fn progress_percent(&self) -> u8 {
        (self.progress_fraction * 100.0).round().clamp(0.0, 100.0) as u8
    }

    /// Whether the top tier has been reached
    pub fn is_max_tier(&self) -> bool {
        self.next_tier.is_none()
    }
}

/// Resolve the active tier, next tier and progress for `points`.
///
/// Picks the first tier whose upper bound is at or above `points`, clamping
/// to the last tier if none matches.
pub fn resolve_tier(points: u64, table: &TierTable) -> TierStatus<'_> {
    let tiers = table.tiers();
    let index = tiers
        .iter()
        .position(|t| t.max_points.map_or(true, |max| points <= max))
        .unwrap_or(tiers.len() - 1);

    let current_tier = &tiers[index];
    let next_tier = tiers.get(index + 1);

    let progress_fraction = match current_tier.max_points {
        None => 1.0,
        Some(max) => {
            let span = max.saturating_sub(current_tier.min_points);
            if span == 0 {
                1.0
            } else {
                let into = points.saturating_sub(current_tier.min_points);
                (into as f64 / span as f64).clamp(0.0, 1.0)
            }
        }
    };

    let points_to_next = next_tier
        .map(|next| next.min_points.saturating_sub(points))
        .filter(|&remaining| remaining > 0);

    TierStatus {
        points,
        current_tier,
        next_tier,
        progress_fraction,
        points_to_next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(id: u32, min: u64, max: Option<u64>) -> Tier {
        Tier {
            id,
            min_points: min,
            max_points: max,
            display_name: format!("Tier {}", id),
            title: String::new(),
            unlocked_capabilities: Vec::new(),
        }
    }

    #[test]
    fn test_default_table_is_valid() {
        let table = TierTable::default_table();
        let rebuilt = TierTable::new(table.tiers().to_vec()).unwrap();
        assert_eq!(rebuilt.len(), 4);
        assert_eq!(rebuilt.last().display_name, "Master");
    }

    #[test]
    fn test_resolve_mid_tier() {
        let table = TierTable::default_table();
        let status = resolve_tier(1250, &table);

        assert_eq!(status.current_tier.id, 2);
        assert_eq!(status.next_tier.map(|t| t.id), Some(3));
        assert!((status.progress_fraction - 749.0 / 999.0).abs() < 1e-9);
        assert_eq!(status.points_to_next, Some(251));
        assert_eq!(status.progress_percent(), 75);
    }

    #[test]
    fn test_resolve_top_tier() {
        let table = TierTable::default_table();
        let status = resolve_tier(3001, &table);

        assert_eq!(status.current_tier.id, 4);
        assert!(status.next_tier.is_none());
        assert_eq!(status.progress_fraction, 1.0);
        assert_eq!(status.points_to_next, None);
        assert!(status.is_max_tier());
    }

    #[test]
    fn test_resolve_boundaries() {
        let table = TierTable::default_table();

        assert_eq!(resolve_tier(0, &table).current_tier.id, 1);
        assert_eq!(resolve_tier(0, &table).progress_fraction, 0.0);
        assert_eq!(resolve_tier(500, &table).current_tier.id, 1);
        assert_eq!(resolve_tier(500, &table).progress_fraction, 1.0);
        assert_eq!(resolve_tier(500, &table).points_to_next, Some(1));
        assert_eq!(resolve_tier(501, &table).current_tier.id, 2);
        assert_eq!(resolve_tier(501, &table).progress_fraction, 0.0);
        assert_eq!(resolve_tier(u64::MAX, &table).current_tier.id, 4);
    }

    #[test]
    fn test_degenerate_single_point_tier() {
        let table =
            TierTable::new(vec![tier(1, 0, Some(0)), tier(2, 1, Some(9)), tier(3, 10, None)])
                .unwrap();
        let status = resolve_tier(0, &table);
        assert_eq!(status.current_tier.id, 1);
        assert_eq!(status.progress_fraction, 1.0);
        assert_eq!(status.points_to_next, Some(1));
    }

    #[test]
    fn test_single_unbounded_tier() {
        let table = TierTable::new(vec![tier(1, 0, None)]).unwrap();
        let status = resolve_tier(42, &table);
        assert_eq!(status.current_tier.id, 1);
        assert!(status.next_tier.is_none());
        assert_eq!(status.progress_fraction, 1.0);
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(TierTable::new(vec![]), Err(TierTableError::Empty));
    }

    #[test]
    fn test_rejects_nonzero_start() {
        assert_eq!(
            TierTable::new(vec![tier(1, 5, None)]),
            Err(TierTableError::FirstTierNotZero(5))
        );
    }

    #[test]
    fn test_rejects_gap_and_overlap() {
        let gap = TierTable::new(vec![tier(1, 0, Some(100)), tier(2, 150, None)]);
        assert_eq!(
            gap,
            Err(TierTableError::NotContiguous {
                id: 2,
                expected: 101,
                found: 150
            })
        );

        let overlap = TierTable::new(vec![tier(1, 0, Some(100)), tier(2, 100, None)]);
        assert!(matches!(
            overlap,
            Err(TierTableError::NotContiguous { found: 100, .. })
        ));
    }

    #[test]
    fn test_rejects_bad_bounds() {
        assert_eq!(
            TierTable::new(vec![tier(1, 0, Some(10))]),
            Err(TierTableError::LastTierBounded(1))
        );
        assert_eq!(
            TierTable::new(vec![tier(1, 0, None), tier(2, 1, None)]),
            Err(TierTableError::UnboundedNotLast(1))
        );
        assert_eq!(
            TierTable::new(vec![tier(1, 0, Some(10)), tier(2, 11, Some(5)), tier(3, 6, None)]),
            Err(TierTableError::InvertedRange {
                id: 2,
                min: 11,
                max: 5
            })
        );
    }

    #[test]
    fn test_rejects_tier_after_max_bound() {
        let table = TierTable::new(vec![tier(1, 0, Some(u64::MAX)), tier(2, u64::MAX, None)]);
        assert_eq!(table, Err(TierTableError::BoundOverflow(1)));
    }

    #[test]
    fn test_rejects_descending_ids() {
        assert_eq!(
            TierTable::new(vec![tier(2, 0, Some(10)), tier(1, 11, None)]),
            Err(TierTableError::IdsNotAscending { prev: 2, next: 1 })
        );
    }

    #[test]
    fn test_range_label() {
        let table = TierTable::default_table();
        assert_eq!(table.tiers()[1].range_label(), "501 - 1500");
        assert_eq!(table.last().range_label(), "3001 - ∞");
    }
}
