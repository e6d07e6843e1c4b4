//! Daily Boost Common - gamified productivity core
//!
//! Boost Points, tiers and everything that feeds them: achievements,
//! the daily card game, tasks, mood, the journal, the simulated wallet and the
//! Business team dashboard. State lives in a `Session`.

pub mod achievements;
pub mod cards;
pub mod coach;
pub mod config;
pub mod error;
pub mod flags;
pub mod focus;
pub mod journal;
pub mod leaderboard;
pub mod mood;
pub mod pricing;
pub mod progression;
pub mod session;
pub mod settings;
pub mod tasks;
pub mod team;
pub mod unlocks;
pub mod wallet;

pub use config::BoostConfig;
pub use error::{BoostError, Result};
pub use progression::{
    resolve_tier, AwardOutcome, AwardSource, PointsLedger, Tier, TierStatus, TierTable,
    TierTableError,
};
pub use session::Session;
