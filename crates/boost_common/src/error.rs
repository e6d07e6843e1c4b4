//! Error types for Daily Boost.

use thiserror::Error;

use crate::progression::TierTableError;

#[derive(Error, Debug)]
pub enum BoostError {
    #[error("Invalid tier table: {0}")]
    TierTable(#[from] TierTableError),

    #[error("Please enter an email address")]
    EmptyEmail,

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("{0} has already been invited or is a member")]
    DuplicateInvite(String),

    #[error("Member limit reached ({0} seats). Upgrade the plan to invite more people")]
    SeatLimitReached(u32),

    #[error("Unknown {kind}: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Achievement '{0}' is not completed yet")]
    NotCompleted(String),

    #[error("Reward for '{0}' was already claimed")]
    AlreadyClaimed(String),

    #[error("No plays left. Share to earn more plays")]
    NoPlaysLeft,

    #[error("Every card has already been collected")]
    DeckExhausted,

    #[error("Card '{0}' is not in the collection")]
    CardNotCollected(String),

    #[error("No active challenge")]
    NoActiveChallenge,

    #[error("Task title must not be blank")]
    BlankTitle,

    #[error("Mood value {0} is out of range (1-5)")]
    MoodOutOfRange(u8),

    #[error("AI level {0} is out of range (0-100)")]
    AiLevelOutOfRange(u8),

    #[error("Seat count must be at least 1")]
    NoSeats,

    #[error("The Business dashboard is locked. Purchase the Business plan first")]
    BusinessLocked,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl BoostError {
    /// NotFound for a kind and id
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        BoostError::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Stable numeric code, grouped by concern.
    pub fn code(&self) -> i32 {
        match self {
            BoostError::TierTable(_) => 1001,
            BoostError::ConfigParse(_) => 1002,
            BoostError::ConfigSerialize(_) => 1003,
            BoostError::EmptyEmail => 2001,
            BoostError::InvalidEmail(_) => 2002,
            BoostError::DuplicateInvite(_) => 2003,
            BoostError::SeatLimitReached(_) => 2004,
            BoostError::NoSeats => 2005,
            BoostError::BusinessLocked => 2006,
            BoostError::NotFound { .. } => 3001,
            BoostError::NotCompleted(_) => 3002,
            BoostError::AlreadyClaimed(_) => 3003,
            BoostError::NoPlaysLeft => 4001,
            BoostError::DeckExhausted => 4002,
            BoostError::CardNotCollected(_) => 4003,
            BoostError::NoActiveChallenge => 4004,
            BoostError::BlankTitle => 5001,
            BoostError::MoodOutOfRange(_) => 5002,
            BoostError::AiLevelOutOfRange(_) => 5003,
            BoostError::Io(_) => 9001,
            BoostError::Json(_) => 9002,
        }
    }
}

pub type Result<T> = std::result::Result<T, BoostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_grouped() {
        assert_eq!(BoostError::EmptyEmail.code(), 2001);
        assert_eq!(BoostError::NoPlaysLeft.code(), 4001);
        assert_eq!(BoostError::not_found("task", "7").code(), 3001);
    }

    #[test]
    fn test_serialize_error_is_config_group() {
        let err: BoostError = <toml::ser::Error as serde::ser::Error>::custom("bad value").into();
        assert_eq!(err.code(), 1003);
        assert!(err.to_string().contains("bad value"));
    }

    #[test]
    fn test_not_found_message() {
        let err = BoostError::not_found("achievement", "42");
        assert_eq!(err.to_string(), "Unknown achievement: 42");
    }
}
