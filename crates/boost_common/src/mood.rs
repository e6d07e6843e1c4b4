//! Mood tracking over a rolling week.

use crate::error::{BoostError, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Entries kept in the rolling history
pub const HISTORY_LEN: usize = 7;

/// (id, emoji, label, value)
pub const MOODS: &[(&str, &str, &str, u8)] = &[
    ("amazing", "🤩", "Amazing", 5),
    ("good", "😊", "Good", 4),
    ("okay", "😐", "Okay", 3),
    ("bad", "😟", "Not great", 2),
    ("terrible", "😢", "Terrible", 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// Coaching note picked from the average mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodInsight {
    /// Average of 4 or more
    Positive,
    /// Average of 3 or more
    Steady,
    Stressed,
}

impl MoodInsight {
    /// Bucket for an average mood value
    pub fn from_average(average: f64) -> Self {
        if average >= 4.0 {
            MoodInsight::Positive
        } else if average >= 3.0 {
            MoodInsight::Steady
        } else {
            MoodInsight::Stressed
        }
    }

    /// Suggestion text for this bucket
    pub fn message(&self) -> &'static str {
        match self {
            MoodInsight::Positive => {
                "Great! You are staying positive. Keep your morning routine and balance work with rest."
            }
            MoodInsight::Steady => {
                "You are steady. Energy tends to dip in the afternoon; try a 15-minute break after lunch."
            }
            MoodInsight::Stressed => {
                "You seem under pressure. Cut back on tasks, focus on the 2-3 that matter most and take care of yourself."
            }
        }
    }
}

/// Boost activity suggestions: (title, subtitle, action)
pub const BOOST_ACTIVITIES: &[(&str, &str, &str)] = &[
    ("Relaxing music", "30-minute lo-fi playlist", "Play"),
    ("Short break", "15-minute power nap", "Start"),
    ("Deep breathing", "5 minutes of calm", "Try now"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodTracker {
    selected: Option<String>,
    history: VecDeque<u8>,
}

impl MoodTracker {
    /// Tracker over an initial history, keeping the newest entries
    pub fn new(history: impl IntoIterator<Item = u8>) -> Self {
        let mut history: VecDeque<u8> = history.into_iter().collect();
        while history.len() > HISTORY_LEN {
            history.pop_front();
        }
        Self {
            selected: None,
            history,
        }
    }

    /// Tracker with a sample week of moods
    pub fn seeded() -> Self {
        Self::new([4, 5, 3, 5, 4, 5, 4])
    }

    /// Id of the last selected mood
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Mood values, oldest first
    pub fn history(&self) -> Vec<u8> {
        self.history.iter().copied().collect()
    }

    /// Record a mood by id ("good") or value ("4")
    pub fn select(&mut self, mood: &str) -> Result<u8> {
        let (id, value) = match MOODS.iter().find(|m| m.0 == mood) {
            Some(&(id, _, _, value)) => (id, value),
            None => {
                let value: u8 = mood
                    .parse()
                    .map_err(|_| BoostError::not_found("mood", mood))?;
                let &(id, _, _, value) = MOODS
                    .iter()
                    .find(|m| m.3 == value)
                    .ok_or(BoostError::MoodOutOfRange(value))?;
                (id, value)
            }
        };

        self.selected = Some(id.to_string());
        self.history.push_back(value);
        if self.history.len() > HISTORY_LEN {
            self.history.pop_front();
        }
        Ok(value)
    }

    /// Mean of the history, `None` when empty
    pub fn average(&self) -> Option<f64> {
        if self.history.is_empty() {
            return None;
        }
        let sum: u32 = self.history.iter().map(|&v| v as u32).sum();
        Some(sum as f64 / self.history.len() as f64)
    }

    /// Insight for the current average, `None` without history
    pub fn insight(&self) -> Option<MoodInsight> {
        self.average().map(MoodInsight::from_average)
    }

    /// Up when the latest entry beats the oldest, otherwise down
    pub fn trend(&self) -> Option<Trend> {
        let first = self.history.front()?;
        let last = self.history.back()?;
        Some(if last > first { Trend::Up } else { Trend::Down })
    }
}

impl Default for MoodTracker {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_stats() {
        let tracker = MoodTracker::seeded();
        let avg = tracker.average().unwrap();
        assert!((avg - 30.0 / 7.0).abs() < 1e-9);
        assert_eq!(tracker.trend(), Some(Trend::Down));
    }

    #[test]
    fn test_select_rolls_window() {
        let mut tracker = MoodTracker::seeded();
        assert_eq!(tracker.select("amazing").unwrap(), 5);
        assert_eq!(tracker.history(), vec![5, 3, 5, 4, 5, 4, 5]);
        assert_eq!(tracker.selected(), Some("amazing"));
        assert_eq!(tracker.trend(), Some(Trend::Down));

        tracker.select("1").unwrap();
        assert_eq!(tracker.history().len(), HISTORY_LEN);
        assert_eq!(tracker.selected(), Some("terrible"));
    }

    #[test]
    fn test_trend_up() {
        let mut tracker = MoodTracker::new([2]);
        tracker.select("good").unwrap();
        assert_eq!(tracker.trend(), Some(Trend::Up));
    }

    #[test]
    fn test_invalid_mood() {
        let mut tracker = MoodTracker::seeded();
        assert!(matches!(
            tracker.select("9"),
            Err(BoostError::MoodOutOfRange(9))
        ));
        assert!(matches!(
            tracker.select("ecstatic"),
            Err(BoostError::NotFound { .. })
        ));
        assert_eq!(tracker.history().len(), 7);
    }

    #[test]
    fn test_insight_buckets() {
        assert_eq!(MoodTracker::seeded().insight(), Some(MoodInsight::Positive));
        assert_eq!(MoodTracker::new([4, 2]).insight(), Some(MoodInsight::Steady));
        assert_eq!(MoodTracker::new([3, 2]).insight(), Some(MoodInsight::Stressed));
        assert_eq!(MoodInsight::from_average(4.0), MoodInsight::Positive);
        assert_eq!(MoodInsight::from_average(3.0), MoodInsight::Steady);
        assert_eq!(MoodInsight::from_average(2.99), MoodInsight::Stressed);
    }

    #[test]
    fn test_empty_history() {
        let tracker = MoodTracker::new(Vec::new());
        assert_eq!(tracker.insight(), None);
        assert_eq!(tracker.average(), None);
        assert_eq!(tracker.trend(), None);
    }
}
