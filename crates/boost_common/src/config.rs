//! Daily Boost Configuration
//!
//! Configuration lives in `$BOOST_CONFIG`, or `dailyboost/config.toml` under
//! the user config directory. A missing file means defaults; a malformed file
//! or an invalid tier table is a startup error.
//!
//! ```toml
//! [core]
//! seed_points = 1250
//!
//! [[tiers]]
//! id = 1
//! min_points = 0
//! max_points = 500
//! display_name = "Beginner"
//! ```

use crate::error::Result;
use crate::progression::{Tier, TierTable, TierTableError, DEFAULT_SEED_POINTS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "BOOST_CONFIG";
const APP_DIR: &str = "dailyboost";
const CONFIG_FILE: &str = "config.toml";
const FLAG_FILE: &str = "flags.json";

/// Session seed values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Boost Points at session start
    #[serde(default = "default_seed_points")]
    pub seed_points: u64,

    /// Daily streak at session start
    #[serde(default = "default_streak")]
    pub starting_streak: u32,

    /// Card draws available per day (valid: 1-20)
    #[serde(default = "default_card_plays")]
    pub card_plays: u32,

    /// Card game points at session start
    #[serde(default = "default_card_points")]
    pub card_points: u64,
}

fn default_seed_points() -> u64 {
    DEFAULT_SEED_POINTS
}

fn default_streak() -> u32 {
    7
}

fn default_card_plays() -> u32 {
    3
}

fn default_card_points() -> u64 {
    250
}

impl CoreConfig {
    /// Starting plays, at least 1
    pub fn effective_card_plays(&self) -> u32 {
        self.card_plays.clamp(1, 20)
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            seed_points: default_seed_points(),
            starting_streak: default_streak(),
            card_plays: default_card_plays(),
            card_points: default_card_points(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Where the persisted flag file lives
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub flag_file: Option<PathBuf>,
}

impl StorageConfig {
    /// Configured flag file, or the default under the data dir
    pub fn flag_path(&self) -> PathBuf {
        self.flag_file
            .clone()
            .unwrap_or_else(|| data_dir().join(FLAG_FILE))
    }
}

/// Simulated latencies for fake remote actions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_coach_delay")]
    pub coach_delay_ms: u64,

    #[serde(default = "default_payment_delay")]
    pub payment_delay_ms: u64,

    #[serde(default = "default_card_flip_delay")]
    pub card_flip_delay_ms: u64,
}

fn default_coach_delay() -> u64 {
    1500
}

fn default_payment_delay() -> u64 {
    2000
}

fn default_card_flip_delay() -> u64 {
    1500
}

/// Upper bound for any simulated delay
const MAX_DELAY_MS: u64 = 10_000;

impl SimulationConfig {
    /// Coach delay capped at MAX_DELAY_MS
    pub fn effective_coach_delay(&self) -> u64 {
        self.coach_delay_ms.min(MAX_DELAY_MS)
    }

    /// Payment delay capped at MAX_DELAY_MS
    pub fn effective_payment_delay(&self) -> u64 {
        self.payment_delay_ms.min(MAX_DELAY_MS)
    }

    /// Card flip delay capped at MAX_DELAY_MS
    pub fn effective_card_flip_delay(&self) -> u64 {
        self.card_flip_delay_ms.min(MAX_DELAY_MS)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            coach_delay_ms: default_coach_delay(),
            payment_delay_ms: default_payment_delay(),
            card_flip_delay_ms: default_card_flip_delay(),
        }
    }
}

/// Complete Daily Boost configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BoostConfig {
    #[serde(default)]
    pub core: CoreConfig,

    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Tier table override; empty means the built-in table
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tiers: Vec<Tier>,
}

impl BoostConfig {
    /// Load from the resolved config path, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse TOML and validate the tier table
    pub fn parse(content: &str) -> Result<Self> {
        let config: BoostConfig = toml::from_str(content)?;
        // Reject a bad table at load time rather than at first use
        config.tier_table()?;
        Ok(config)
    }

    /// The validated tier table
    pub fn tier_table(&self) -> std::result::Result<TierTable, TierTableError> {
        if self.tiers.is_empty() {
            Ok(TierTable::default_table())
        } else {
            TierTable::new(self.tiers.clone())
        }
    }

    /// Render as pretty TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Resolve the config file path
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    config_dir().join(CONFIG_FILE)
}

/// Per-user config directory
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Per-user data directory (flag file)
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoostError;

    #[test]
    fn test_default_config() {
        let config = BoostConfig::default();
        assert_eq!(config.core.seed_points, 1250);
        assert_eq!(config.core.starting_streak, 7);
        assert_eq!(config.core.card_plays, 3);
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.simulation.coach_delay_ms, 1500);
        assert_eq!(config.simulation.payment_delay_ms, 2000);
        assert_eq!(config.tier_table().unwrap().len(), 4);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = BoostConfig::parse("[core]\nseed_points = 10\n").unwrap();
        assert_eq!(config.core.seed_points, 10);
        assert_eq!(config.core.card_plays, 3);
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_custom_tiers() {
        let toml_str = r#"
[[tiers]]
id = 1
min_points = 0
max_points = 99
display_name = "Bronze"
unlocked_capabilities = ["Badge"]

[[tiers]]
id = 2
min_points = 100
display_name = "Silver"
"#;
        let config = BoostConfig::parse(toml_str).unwrap();
        let table = config.tier_table().unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve(150).current_tier.display_name, "Silver");
    }

    #[test]
    fn test_malformed_tiers_rejected_at_load() {
        let toml_str = r#"
[[tiers]]
id = 1
min_points = 0
max_points = 99
display_name = "Bronze"

[[tiers]]
id = 2
min_points = 120
display_name = "Silver"
"#;
        let err = BoostConfig::parse(toml_str).unwrap_err();
        assert!(matches!(err, BoostError::TierTable(_)));
    }

    #[test]
    fn test_clamping() {
        let core = CoreConfig {
            card_plays: 0,
            ..Default::default()
        };
        assert_eq!(core.effective_card_plays(), 1);

        let sim = SimulationConfig {
            coach_delay_ms: 60_000,
            ..Default::default()
        };
        assert_eq!(sim.effective_coach_delay(), 10_000);
        assert_eq!(sim.effective_payment_delay(), 2000);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BoostConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.core.seed_points, 1250);
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = BoostConfig::default().to_toml().unwrap();
        assert!(toml_str.contains("[core]"));
        assert!(toml_str.contains("[simulation]"));
        assert!(!toml_str.contains("[[tiers]]"));
    }
}
