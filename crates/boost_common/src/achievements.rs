//! Achievements
//!
//! Daily, weekly and special goals. Completing one makes its Boost Point
//! reward claimable exactly once.

use crate::error::{BoostError, Result};
use crate::progression::{AwardOutcome, AwardSource, PointsLedger};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Daily,
    Weekly,
    Special,
}

impl AchievementCategory {
    /// Category name
    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementCategory::Daily => "daily",
            AchievementCategory::Weekly => "weekly",
            AchievementCategory::Special => "special",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub points: u64,
    pub category: AchievementCategory,
    pub progress: u32,
    pub max_progress: u32,
    pub reward: String,
    #[serde(default)]
    pub claimed: bool,
}

impl Achievement {
    /// Whether progress reached the target
    pub fn completed(&self) -> bool {
        self.progress >= self.max_progress
    }

    /// Progress as percentage (0-100)
    pub fn progress_percent(&self) -> u8 {
        if self.max_progress == 0 {
            return 100;
        }
        ((self.progress.min(self.max_progress) as f64 / self.max_progress as f64) * 100.0) as u8
    }
}

/// (id, title, description, points, category, progress, max, reward)
const SEED_ACHIEVEMENTS: &[(&str, &str, &str, u64, AchievementCategory, u32, u32, &str)] = &[
    ("1", "Early Bird", "Finish your first task before 8 AM", 50, AchievementCategory::Daily, 1, 1, "+50 BP"),
    ("2", "Streak Master", "Keep a 7-day streak", 100, AchievementCategory::Weekly, 7, 7, "+100 BP + Epic card"),
    ("3", "Task Crusher", "Complete 10 tasks in one day", 75, AchievementCategory::Daily, 6, 10, "+75 BP"),
    ("4", "Focus Champion", "Complete 5 Focus Mode sessions", 120, AchievementCategory::Weekly, 3, 5, "+120 BP + AI feature"),
    ("5", "Social Butterfly", "Invite 5 friends", 200, AchievementCategory::Special, 2, 5, "+200 BP + Legendary card"),
    ("6", "Energy Master", "Keep energy above 70% for 3 days", 90, AchievementCategory::Weekly, 1, 3, "+90 BP"),
    ("7", "Card Collector", "Collect 10 different cards", 150, AchievementCategory::Special, 8, 10, "+150 BP + Custom theme"),
    ("8", "Wellness Warrior", "Complete 5 wellness challenges", 80, AchievementCategory::Weekly, 5, 5, "+80 BP"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementBoard {
    achievements: Vec<Achievement>,
}

impl AchievementBoard {
    /// Board over the given achievements
    pub fn new(achievements: Vec<Achievement>) -> Self {
        Self { achievements }
    }

    /// Board with the eight built-in achievements
    pub fn seeded() -> Self {
        let achievements = SEED_ACHIEVEMENTS
            .iter()
            .map(
                |&(id, title, description, points, category, progress, max_progress, reward)| {
                    Achievement {
                        id: id.to_string(),
                        title: title.to_string(),
                        description: description.to_string(),
                        points,
                        category,
                        progress,
                        max_progress,
                        reward: reward.to_string(),
                        claimed: false,
                    }
                },
            )
            .collect();
        Self { achievements }
    }

    /// All achievements in display order
    pub fn all(&self) -> &[Achievement] {
        &self.achievements
    }

    /// Look up an achievement by id
    pub fn get(&self, id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    /// Achievements in one category
    pub fn by_category(&self, category: AchievementCategory) -> Vec<&Achievement> {
        self.achievements
            .iter()
            .filter(|a| a.category == category)
            .collect()
    }

    /// Number of completed achievements, claimed or not
    pub fn completed_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.completed()).count()
    }

    /// Advance progress, capped at the goal. Returns true if this completed it.
    pub fn record_progress(&mut self, id: &str, delta: u32) -> Result<bool> {
        let achievement = self
            .achievements
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| BoostError::not_found("achievement", id))?;

        let was_completed = achievement.completed();
        achievement.progress = achievement
            .progress
            .saturating_add(delta)
            .min(achievement.max_progress);
        Ok(!was_completed && achievement.completed())
    }

    /// Claim a completed achievement's reward into the ledger
    pub fn claim(&mut self, id: &str, ledger: &mut PointsLedger) -> Result<AwardOutcome> {
        let achievement = self
            .achievements
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| BoostError::not_found("achievement", id))?;

        if !achievement.completed() {
            return Err(BoostError::NotCompleted(achievement.title.clone()));
        }
        if achievement.claimed {
            return Err(BoostError::AlreadyClaimed(achievement.title.clone()));
        }

        achievement.claimed = true;
        info!("Claimed achievement '{}'", achievement.title);
        Ok(ledger.award(
            AwardSource::Achievement,
            &achievement.title,
            achievement.points,
        ))
    }
}

impl Default for AchievementBoard {
    fn default() -> Self {
        Self::seeded()
    }
}
