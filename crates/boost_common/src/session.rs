//! One in-memory Daily Boost session
//!
//! A session is built from `BoostConfig` and owns every piece of state.
//! Everything that earns Boost Points goes through the session's
//! `PointsLedger`, so tier changes are observed in one place.

use crate::achievements::AchievementBoard;
use crate::cards::{Card, CardGame};
use crate::coach::Coach;
use crate::config::BoostConfig;
use crate::error::{BoostError, Result};
use crate::flags::{BusinessAccess, FlagStore};
use crate::focus::FocusTimer;
use crate::journal::Journal;
use crate::leaderboard::{self, LeaderboardEntry};
use crate::mood::MoodTracker;
use crate::pricing;
use crate::progression::{AwardOutcome, AwardSource, PointsLedger, TierStatus};
use crate::settings::Settings;
use crate::tasks::TaskList;
use crate::team::{Invitation, InviteRole, Team};
use crate::unlocks::{UnlockCatalog, UnlockFeature};
use crate::wallet::{PaymentMethod, TopUpReceipt, Wallet};
use chrono::{Local, Timelike};
use rand::Rng;
use serde::Serialize;
use tracing::info;

pub const DEFAULT_USER_NAME: &str = "Minh Anh";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: &'static str,
    pub label: &'static str,
}

const MENU: &[(&str, &str)] = &[
    ("dashboard", "Dashboard"),
    ("schedule", "Schedule"),
    ("cards", "Game Cards"),
    ("business", "Business"),
    ("insights", "Insights"),
    ("analytics", "Analytics"),
    ("pricing", "Pricing"),
    ("settings", "Settings"),
    ("rewards", "Rewards"),
    ("wallet", "Wallet"),
];

/// Dashboard greeting: morning before 12, afternoon before 18, else evening
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

/// Navigation entries; Business only once unlocked
pub fn menu_items(business_unlocked: bool) -> Vec<MenuItem> {
    MENU.iter()
        .filter(|(id, _)| *id != "business" || business_unlocked)
        .map(|&(id, label)| MenuItem { id, label })
        .collect()
}

pub struct Session {
    user_name: String,
    config: BoostConfig,
    ledger: PointsLedger,
    achievements: AchievementBoard,
    unlocks: UnlockCatalog,
    cards: CardGame,
    tasks: TaskList,
    mood: MoodTracker,
    wallet: Wallet,
    team: Team,
    coach: Coach,
    focus: FocusTimer,
    journal: Journal,
    settings: Settings,
    access: BusinessAccess,
}

impl Session {
    /// Seeded session using the configured flag file
    pub fn from_config(config: BoostConfig) -> Result<Self> {
        let store = FlagStore::new(config.storage.flag_path());
        Self::with_flag_store(config, store)
    }

    /// Seeded session with an explicit flag store
    pub fn with_flag_store(config: BoostConfig, store: FlagStore) -> Result<Self> {
        let table = config.tier_table()?;
        let core = &config.core;
        let ledger = PointsLedger::new(table, core.seed_points);
        let cards = CardGame::seeded(
            core.effective_card_plays(),
            core.card_points,
            core.starting_streak,
        );
        let coach = Coach::new(config.simulation.effective_coach_delay());

        info!(
            "Session started at {} points ({})",
            ledger.total(),
            ledger.current_tier().display_name
        );

        Ok(Self {
            user_name: DEFAULT_USER_NAME.to_string(),
            ledger,
            achievements: AchievementBoard::seeded(),
            unlocks: UnlockCatalog::seeded(),
            cards,
            tasks: TaskList::seeded(),
            mood: MoodTracker::seeded(),
            wallet: Wallet::seeded(),
            team: Team::seeded(),
            coach,
            focus: FocusTimer::default(),
            journal: Journal::new(),
            settings: Settings::default(),
            access: BusinessAccess::new(store),
            config,
        })
    }

    /// Display name of the user
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Greeting for the local time of day, e.g. "Good morning, Minh Anh"
    pub fn greeting(&self) -> String {
        format!("{}, {}", greeting_for_hour(Local::now().hour()), self.user_name)
    }

    /// Configuration the session was built from
    pub fn config(&self) -> &BoostConfig {
        &self.config
    }

    /// Current Boost Point total
    pub fn points(&self) -> u64 {
        self.ledger.total()
    }

    /// Tier status for the current total
    pub fn status(&self) -> TierStatus<'_> {
        self.ledger.status()
    }

    /// The points ledger
    pub fn ledger(&self) -> &PointsLedger {
        &self.ledger
    }

    /// Award Boost Points
    pub fn award(&mut self, source: AwardSource, detail: &str, amount: u64) -> AwardOutcome {
        self.ledger.award(source, detail, amount)
    }

    /// Achievement board
    pub fn achievements(&self) -> &AchievementBoard {
        &self.achievements
    }

    /// Achievement board, mutable
    pub fn achievements_mut(&mut self) -> &mut AchievementBoard {
        &mut self.achievements
    }

    /// Claim a completed achievement into the ledger
    pub fn claim_achievement(&mut self, id: &str) -> Result<AwardOutcome> {
        self.achievements.claim(id, &mut self.ledger)
    }

    /// Unlock catalog
    pub fn unlocks(&self) -> &UnlockCatalog {
        &self.unlocks
    }

    /// Features available at the current tier
    pub fn unlocked_features(&self) -> Vec<&UnlockFeature> {
        self.unlocks.unlocked(self.ledger.current_tier().id)
    }

    /// Leaderboard including the user
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        leaderboard::build(&self.user_name, self.ledger.total(), self.ledger.table())
    }

    /// Card game state
    pub fn cards(&self) -> &CardGame {
        &self.cards
    }

    /// Card game state, mutable
    pub fn cards_mut(&mut self) -> &mut CardGame {
        &mut self.cards
    }

    /// Draw a card; its points also count as Boost Points
    pub fn draw_card<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(Card, AwardOutcome)> {
        let card = self.cards.draw(rng)?;
        let outcome = self.ledger.award(AwardSource::CardDraw, &card.title, card.points);
        Ok((card, outcome))
    }

    /// Complete the active challenge; its points count as Boost Points
    pub fn complete_challenge(&mut self) -> Result<(Card, AwardOutcome)> {
        let card = self.cards.complete_challenge()?;
        let outcome = self.ledger.award(AwardSource::Challenge, &card.title, card.points);
        Ok((card, outcome))
    }

    /// Task list
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Task list, mutable
    pub fn tasks_mut(&mut self) -> &mut TaskList {
        &mut self.tasks
    }

    /// Mood tracker
    pub fn mood(&self) -> &MoodTracker {
        &self.mood
    }

    /// Mood tracker, mutable
    pub fn mood_mut(&mut self) -> &mut MoodTracker {
        &mut self.mood
    }

    /// Wallet
    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    /// Top up with the configured payment delay
    pub fn top_up(&mut self, package_id: &str, method: PaymentMethod) -> Result<TopUpReceipt> {
        let delay = self.config.simulation.effective_payment_delay();
        self.wallet.top_up(package_id, method, delay)
    }

    /// AI coach
    pub fn coach(&self) -> &Coach {
        &self.coach
    }

    /// AI coach, mutable
    pub fn coach_mut(&mut self) -> &mut Coach {
        &mut self.coach
    }

    /// Focus timer
    pub fn focus(&self) -> &FocusTimer {
        &self.focus
    }

    /// Focus timer, mutable
    pub fn focus_mut(&mut self) -> &mut FocusTimer {
        &mut self.focus
    }

    /// Daily journal
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Daily journal, mutable
    pub fn journal_mut(&mut self) -> &mut Journal {
        &mut self.journal
    }

    /// User settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// User settings, mutable
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Business unlock state and events
    pub fn business(&self) -> &BusinessAccess {
        &self.access
    }

    /// Whether Business has been purchased
    pub fn is_business_unlocked(&self) -> bool {
        self.access.is_unlocked()
    }

    /// Buy Business for `seats` users and unlock the dashboard
    pub fn buy_business(&mut self, seats: u32) -> Result<i64> {
        pricing::buy_business(seats, &self.access)
    }

    /// Navigation entries for the current unlock state
    pub fn menu_items(&self) -> Vec<MenuItem> {
        menu_items(self.is_business_unlocked())
    }

    /// The team dashboard, available once Business is unlocked
    pub fn team(&self) -> Result<&Team> {
        if !self.is_business_unlocked() {
            return Err(BoostError::BusinessLocked);
        }
        Ok(&self.team)
    }

    /// Invite to the team; requires Business
    pub fn invite(&mut self, email: &str, role: InviteRole) -> Result<&Invitation> {
        if !self.is_business_unlocked() {
            return Err(BoostError::BusinessLocked);
        }
        self.team.invite(email, role)
    }

    /// The team dashboard, mutable; requires Business
    pub fn team_mut(&mut self) -> Result<&mut Team> {
        if !self.is_business_unlocked() {
            return Err(BoostError::BusinessLocked);
        }
        Ok(&mut self.team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::TierTable;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn session(dir: &TempDir) -> Session {
        let store = FlagStore::new(dir.path().join("flags.json"));
        Session::with_flag_store(BoostConfig::default(), store).unwrap()
    }

    #[test]
    fn test_seeded_session() {
        let dir = TempDir::new().unwrap();
        let s = session(&dir);
        assert_eq!(s.points(), 1250);
        assert_eq!(s.status().current_tier.id, 2);
        assert_eq!(s.unlocked_features().len(), 7);
        assert_eq!(s.user_name(), "Minh Anh");
    }

    #[test]
    fn test_greeting_by_hour() {
        assert_eq!(greeting_for_hour(0), "Good morning");
        assert_eq!(greeting_for_hour(11), "Good morning");
        assert_eq!(greeting_for_hour(12), "Good afternoon");
        assert_eq!(greeting_for_hour(17), "Good afternoon");
        assert_eq!(greeting_for_hour(18), "Good evening");
        assert_eq!(greeting_for_hour(23), "Good evening");

        let dir = TempDir::new().unwrap();
        assert!(session(&dir).greeting().ends_with(", Minh Anh"));
    }

    #[test]
    fn test_menu_hides_business_until_unlocked() {
        let dir = TempDir::new().unwrap();
        let mut s = session(&dir);
        assert_eq!(s.menu_items().len(), 9);
        assert!(s.menu_items().iter().all(|m| m.id != "business"));
        assert!(matches!(s.team(), Err(BoostError::BusinessLocked)));

        s.buy_business(5).unwrap();
        let items = s.menu_items();
        assert_eq!(items.len(), 10);
        assert_eq!(items[3].label, "Business");
        assert!(s.team().is_ok());
    }

    #[test]
    fn test_unlock_survives_new_session() {
        let dir = TempDir::new().unwrap();
        session(&dir).buy_business(1).unwrap();
        assert!(session(&dir).is_business_unlocked());
    }

    #[test]
    fn test_claim_crosses_tier() {
        let dir = TempDir::new().unwrap();
        let mut s = session(&dir);
        s.award(AwardSource::Manual, "top up", 200);
        // Streak Master is completed and worth 100
        let outcome = s.claim_achievement("2").unwrap();
        assert_eq!(outcome.total, 1550);
        assert!(outcome.level_up());
        assert_eq!(s.status().current_tier.id, 3);
        assert_eq!(s.unlocked_features().len(), 11);
    }

    #[test]
    fn test_card_draw_awards_points() {
        let dir = TempDir::new().unwrap();
        let mut s = session(&dir);
        let mut rng = StdRng::seed_from_u64(7);
        let (card, outcome) = s.draw_card(&mut rng).unwrap();
        assert_eq!(outcome.amount, card.points);
        assert_eq!(s.points(), 1250 + card.points);
        assert_eq!(s.cards().plays_left(), 2);
    }

    #[test]
    fn test_top_up_uses_configured_delay() {
        let dir = TempDir::new().unwrap();
        let mut s = session(&dir);
        let receipt = s.top_up("2", PaymentMethod::Vnpay).unwrap();
        assert_eq!(receipt.processing_delay_ms, 2000);
        assert_eq!(s.wallet().balance(), 1_360_000);
    }

    #[test]
    fn test_bad_tier_table_rejected() {
        let dir = TempDir::new().unwrap();
        let mut config = BoostConfig::default();
        let mut tiers = TierTable::default_table().tiers().to_vec();
        tiers[1].min_points = 600;
        config.tiers = tiers;
        let store = FlagStore::new(dir.path().join("flags.json"));
        assert!(matches!(
            Session::with_flag_store(config, store),
            Err(BoostError::TierTable(_))
        ));
    }
}
