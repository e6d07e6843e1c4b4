//! Progression Module
//!
//! Boost Point leveling for Daily Boost.
//!
//! ## Tiers
//!
//! - Ordered, contiguous point bands with capability unlocks
//! - Validated once at startup, immutable afterwards
//! - Pure resolution of current tier, next tier and progress
//!
//! ## Points
//!
//! - Monotonic total seeded at startup
//! - Award events from achievements, card draws and challenges

pub mod points;
pub mod tiers;

pub use points::{AwardEvent, AwardOutcome, AwardSource, PointsLedger, DEFAULT_SEED_POINTS};
pub use tiers::{resolve_tier, Tier, TierStatus, TierTable, TierTableError, DEFAULT_TIER_BANDS};
