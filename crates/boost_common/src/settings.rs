//! User preferences: AI assistance level, coach tone and feature toggles.

use crate::error::{BoostError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_AI_LEVEL: u8 = 60;
pub const MAX_AI_LEVEL: u8 = 100;
pub const DEFAULT_EMAIL: &str = "minhanh@example.com";

/// Toggle names accepted by `Settings::toggle`
pub const TOGGLES: [&str; 5] = ["notifications", "pomodoro", "tips", "breathing", "sound"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiTone {
    Calm,
    #[default]
    Motivational,
    Analytical,
}

impl AiTone {
    /// Tone name
    pub fn as_str(&self) -> &'static str {
        match self {
            AiTone::Calm => "calm",
            AiTone::Motivational => "motivational",
            AiTone::Analytical => "analytical",
        }
    }

    /// Parse a tone name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "calm" => Some(AiTone::Calm),
            "motivational" => Some(AiTone::Motivational),
            "analytical" => Some(AiTone::Analytical),
            _ => None,
        }
    }
}

/// Label for an AI level: below 30 Minimal, below 70 Balanced, else Full AI
pub fn ai_level_label(level: u8) -> &'static str {
    match level {
        0..=29 => "Minimal",
        30..=69 => "Balanced",
        _ => "Full AI",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub ai_level: u8,
    pub ai_tone: AiTone,
    pub email: String,
    pub notifications: bool,
    pub pomodoro: bool,
    pub tips: bool,
    pub breathing: bool,
    pub sound: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ai_level: DEFAULT_AI_LEVEL,
            ai_tone: AiTone::default(),
            email: DEFAULT_EMAIL.to_string(),
            notifications: true,
            pomodoro: true,
            tips: true,
            breathing: false,
            sound: true,
        }
    }
}

impl Settings {
    /// Label for the current AI level
    pub fn ai_level_label(&self) -> &'static str {
        ai_level_label(self.ai_level)
    }

    /// Set the AI level (0-100)
    pub fn set_ai_level(&mut self, level: u8) -> Result<()> {
        if level > MAX_AI_LEVEL {
            return Err(BoostError::AiLevelOutOfRange(level));
        }
        self.ai_level = level;
        Ok(())
    }

    /// Flip a named toggle and return its new value
    pub fn toggle(&mut self, name: &str) -> Result<bool> {
        let flag = match name {
            "notifications" => &mut self.notifications,
            "pomodoro" => &mut self.pomodoro,
            "tips" => &mut self.tips,
            "breathing" => &mut self.breathing,
            "sound" => &mut self.sound,
            other => return Err(BoostError::not_found("setting", other)),
        };
        *flag = !*flag;
        Ok(*flag)
    }

    /// (name, value) for every toggle, in `TOGGLES` order
    pub fn toggles(&self) -> [(&'static str, bool); 5] {
        [
            ("notifications", self.notifications),
            ("pomodoro", self.pomodoro),
            ("tips", self.tips),
            ("breathing", self.breathing),
            ("sound", self.sound),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_labels() {
        assert_eq!(ai_level_label(0), "Minimal");
        assert_eq!(ai_level_label(29), "Minimal");
        assert_eq!(ai_level_label(30), "Balanced");
        assert_eq!(ai_level_label(69), "Balanced");
        assert_eq!(ai_level_label(70), "Full AI");
        assert_eq!(Settings::default().ai_level_label(), "Balanced");
    }

    #[test]
    fn test_level_bounds() {
        let mut settings = Settings::default();
        settings.set_ai_level(100).unwrap();
        assert_eq!(settings.ai_level_label(), "Full AI");
        assert!(matches!(
            settings.set_ai_level(101),
            Err(BoostError::AiLevelOutOfRange(101))
        ));
        assert_eq!(settings.ai_level, 100);
    }

    #[test]
    fn test_toggles() {
        let mut settings = Settings::default();
        assert!(settings.toggle("breathing").unwrap());
        assert!(!settings.toggle("sound").unwrap());
        assert!(settings.toggle("darkmode").is_err());
        let names: Vec<_> = settings.toggles().iter().map(|t| t.0).collect();
        assert_eq!(names, TOGGLES);
    }

    #[test]
    fn test_tone_parse() {
        assert_eq!(AiTone::parse("Calm"), Some(AiTone::Calm));
        assert_eq!(AiTone::parse("angry"), None);
        assert_eq!(AiTone::default().as_str(), "motivational");
    }
}
