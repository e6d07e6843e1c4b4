//! Feature unlocks gated by tier.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnlockCategory {
    Ai,
    Cards,
    Theme,
}

impl UnlockCategory {
    /// Category name
    pub fn as_str(&self) -> &'static str {
        match self {
            UnlockCategory::Ai => "ai",
            UnlockCategory::Cards => "cards",
            UnlockCategory::Theme => "theme",
        }
    }

    /// Categories in display order
    pub fn all() -> [UnlockCategory; 3] {
        [UnlockCategory::Ai, UnlockCategory::Cards, UnlockCategory::Theme]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlockFeature {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tier_required: u32,
    pub category: UnlockCategory,
}

impl UnlockFeature {
    /// Whether the given tier has reached this feature
    pub fn is_unlocked(&self, current_tier_id: u32) -> bool {
        self.tier_required <= current_tier_id
    }
}

const SEED_FEATURES: &[(&str, &str, &str, u32, UnlockCategory)] = &[
    ("basic-ai", "Basic AI Coach", "Basic productivity tips from the AI assistant", 1, UnlockCategory::Ai),
    ("common-cards", "Common Cards", "Unlock 3 common cards", 1, UnlockCategory::Cards),
    ("default-theme", "Default Theme", "The default Daily Boost look", 1, UnlockCategory::Theme),
    ("ai-productivity", "AI Productivity Tips", "AI analysis with productivity suggestions", 2, UnlockCategory::Ai),
    ("rare-cards", "Rare Cards Collection", "Unlock 5 rare cards", 2, UnlockCategory::Cards),
    ("dark-mode", "Dark Mode", "Dark theme that is easy on the eyes", 2, UnlockCategory::Theme),
    ("focus-advanced", "Focus Mode Advanced", "Focus Mode with Pomodoro and white noise", 2, UnlockCategory::Ai),
    ("ai-personal-coach", "AI Personal Coach", "Coaching personalised to your habits", 3, UnlockCategory::Ai),
    ("epic-cards", "Epic Cards Collection", "Unlock 3 epic cards", 3, UnlockCategory::Cards),
    ("custom-themes", "Custom Themes", "Create and customise your own theme", 3, UnlockCategory::Theme),
    ("advanced-analytics", "Advanced Analytics", "Detailed reports and deeper insights", 3, UnlockCategory::Ai),
    ("ai-mentor-pro", "AI Mentor Pro", "Mentoring backed by advanced models", 4, UnlockCategory::Ai),
    ("legendary-cards", "Legendary Cards", "Unlock every legendary card", 4, UnlockCategory::Cards),
    ("premium-themes", "Premium Themes Pack", "Access to every premium theme", 4, UnlockCategory::Theme),
    ("api-access", "API Access", "Integrate with other apps through the API", 4, UnlockCategory::Ai),
];

/// The catalogue of tier-gated features
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlockCatalog {
    features: Vec<UnlockFeature>,
}

impl UnlockCatalog {
    /// Catalog with the fifteen built-in features
    pub fn seeded() -> Self {
        let features = SEED_FEATURES
            .iter()
            .map(|&(id, title, description, tier_required, category)| UnlockFeature {
                id: id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                tier_required,
                category,
            })
            .collect();
        Self { features }
    }

    /// Every feature
    pub fn all(&self) -> &[UnlockFeature] {
        &self.features
    }

    /// Features in one category
    pub fn by_category(&self, category: UnlockCategory) -> Vec<&UnlockFeature> {
        self.features
            .iter()
            .filter(|f| f.category == category)
            .collect()
    }

    /// Features available at a tier
    pub fn unlocked(&self, current_tier_id: u32) -> Vec<&UnlockFeature> {
        self.features
            .iter()
            .filter(|f| f.is_unlocked(current_tier_id))
            .collect()
    }

    /// (unlocked, total)
    pub fn counts(&self, current_tier_id: u32) -> (usize, usize) {
        (self.unlocked(current_tier_id).len(), self.features.len())
    }
}

impl Default for UnlockCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}
