//! Daily Boost card game
//!
//! Players spend daily plays to draw challenge cards they have not collected
//! yet. Each card carries Boost Points and a challenge that can be accepted
//! and completed for more points and a longer streak. Sharing a result grants
//! extra plays.

use crate::error::{BoostError, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Plays granted for sharing to a social platform
pub const SHARE_BONUS_PLAYS: u32 = 2;
const SHARE_URL: &str = "https://dailyboost.app";
const INVITE_CODE_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Rarity name
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardCategory {
    Productivity,
    Wellness,
    Creativity,
    Energy,
}

impl CardCategory {
    /// Category name
    pub fn as_str(&self) -> &'static str {
        match self {
            CardCategory::Productivity => "productivity",
            CardCategory::Wellness => "wellness",
            CardCategory::Creativity => "creativity",
            CardCategory::Energy => "energy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    pub description: String,
    pub challenge: String,
    pub reward: String,
    pub rarity: Rarity,
    pub category: CardCategory,
    pub points: u64,
}

/// (id, title, description, challenge, reward, rarity, category, points)
const SEED_DECK: &[(&str, &str, &str, &str, &str, Rarity, CardCategory, u64)] = &[
    ("1", "Morning Warrior", "Start the day full of energy", "Wake up at 6 AM and exercise for 15 minutes", "+50 Energy Points", Rarity::Common, CardCategory::Energy, 50),
    ("2", "Focus Master", "Reach a state of perfect focus", "Finish 2 hours of uninterrupted deep work", "+100 Productivity Points", Rarity::Rare, CardCategory::Productivity, 100),
    ("3", "Wellness Champion", "Look after your mental health", "Meditate for 20 minutes and write a mood journal", "+75 Wellness Points", Rarity::Common, CardCategory::Wellness, 75),
    ("4", "Creative Genius", "Unleash your creativity", "Come up with one new idea and develop it in detail", "+120 Creative Points", Rarity::Epic, CardCategory::Creativity, 120),
    ("5", "Energy Booster", "Maximise your energy", "Drink 2L of water and eat 5 small meals today", "+80 Energy Points", Rarity::Rare, CardCategory::Energy, 80),
    ("6", "Goal Crusher", "Conquer your goals", "Finish 100% of today's to-do list", "+150 Achievement Points", Rarity::Epic, CardCategory::Productivity, 150),
    ("7", "Social Butterfly", "Connect with people", "Share your achievements with 3 friends", "+60 Social Points", Rarity::Common, CardCategory::Wellness, 60),
    ("8", "Legend Maker", "Become a productivity legend", "Keep a 30-day streak and finish 10 epic challenges", "+500 Legend Points + Exclusive Badge", Rarity::Legendary, CardCategory::Productivity, 500),
];

/// The eight built-in cards
pub fn seed_deck() -> Vec<Card> {
    SEED_DECK
        .iter()
        .map(
            |&(id, title, description, challenge, reward, rarity, category, points)| Card {
                id: id.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                challenge: challenge.to_string(),
                reward: reward.to_string(),
                rarity,
                category,
                points,
            },
        )
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharePlatform {
    Facebook,
    Twitter,
    Whatsapp,
    Copy,
}

impl SharePlatform {
    /// Parse a platform name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "facebook" | "fb" => Some(SharePlatform::Facebook),
            "twitter" | "x" => Some(SharePlatform::Twitter),
            "whatsapp" => Some(SharePlatform::Whatsapp),
            "copy" | "clipboard" => Some(SharePlatform::Copy),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareOutcome {
    pub text: String,
    /// Platform share URL; `None` for a plain copy
    pub url: Option<String>,
    pub plays_granted: u32,
}

fn encode(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

/// Card game state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardGame {
    deck: Vec<Card>,
    collected: Vec<String>,
    plays_left: u32,
    points: u64,
    streak: u32,
    last_drawn: Option<String>,
    active_challenge: Option<String>,
}

impl CardGame {
    /// Game over a deck with some cards already collected
    pub fn new(deck: Vec<Card>, collected: Vec<String>, plays: u32, points: u64, streak: u32) -> Self {
        Self {
            deck,
            collected,
            plays_left: plays,
            points,
            streak,
            last_drawn: None,
            active_challenge: None,
        }
    }

    /// The sample state: first three cards collected
    pub fn seeded(plays: u32, points: u64, streak: u32) -> Self {
        let collected = vec!["1".to_string(), "2".to_string(), "3".to_string()];
        Self::new(seed_deck(), collected, plays, points, streak)
    }

    /// Every card in the deck
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    /// Draws remaining
    pub fn plays_left(&self) -> u32 {
        self.plays_left
    }

    /// Card game points
    pub fn points(&self) -> u64 {
        self.points
    }

    /// Consecutive completed challenges
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Look up a card by id
    pub fn card(&self, id: &str) -> Option<&Card> {
        self.deck.iter().find(|c| c.id == id)
    }

    /// Whether the card has been drawn
    pub fn is_collected(&self, id: &str) -> bool {
        self.collected.iter().any(|c| c == id)
    }

    /// Collected cards in collection order
    pub fn collection(&self) -> Vec<&Card> {
        self.collected
            .iter()
            .filter_map(|id| self.card(id))
            .collect()
    }

    /// Cards not yet collected
    pub fn available(&self) -> Vec<&Card> {
        self.deck
            .iter()
            .filter(|c| !self.is_collected(&c.id))
            .collect()
    }

    /// Card whose challenge is in progress
    pub fn active_challenge(&self) -> Option<&Card> {
        self.active_challenge.as_deref().and_then(|id| self.card(id))
    }

    /// Draw a random uncollected card, spending one play
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card> {
        if self.plays_left == 0 {
            return Err(BoostError::NoPlaysLeft);
        }

        let card = self
            .available()
            .choose(rng)
            .map(|c| (*c).clone())
            .ok_or(BoostError::DeckExhausted)?;

        self.collected.push(card.id.clone());
        self.plays_left -= 1;
        self.points = self.points.saturating_add(card.points);
        self.last_drawn = Some(card.id.clone());

        info!(
            "Drew card '{}' ({}), +{} points, {} plays left",
            card.title,
            card.rarity.as_str(),
            card.points,
            self.plays_left
        );
        Ok(card)
    }

    /// Build share text; platform shares grant bonus plays
    pub fn share(&mut self, platform: SharePlatform) -> ShareOutcome {
        let subject = self
            .last_drawn
            .as_deref()
            .and_then(|id| self.card(id))
            .map(|c| c.title.clone())
            .unwrap_or_else(|| "challenge".to_string());
        let text = format!(
            "I just unlocked the {} card on Daily Boost! 🚀 Join me! #DailyBoost #ProductivityGame",
            subject
        );

        let url = match platform {
            SharePlatform::Facebook => Some(format!(
                "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
                encode(SHARE_URL),
                encode(&text)
            )),
            SharePlatform::Twitter => Some(format!(
                "https://twitter.com/intent/tweet?text={}&url={}",
                encode(&text),
                encode(SHARE_URL)
            )),
            SharePlatform::Whatsapp => Some(format!(
                "https://wa.me/?text={}",
                encode(&format!("{} {}", text, SHARE_URL))
            )),
            SharePlatform::Copy => None,
        };

        let plays_granted = if url.is_some() { SHARE_BONUS_PLAYS } else { 0 };
        self.plays_left = self.plays_left.saturating_add(plays_granted);
        debug!("Shared via {:?}, granted {} plays", platform, plays_granted);

        ShareOutcome {
            text,
            url,
            plays_granted,
        }
    }

    /// Start the challenge of a collected card
    pub fn accept_challenge(&mut self, card_id: &str) -> Result<&Card> {
        if self.card(card_id).is_none() {
            return Err(BoostError::not_found("card", card_id));
        }
        if !self.is_collected(card_id) {
            return Err(BoostError::CardNotCollected(card_id.to_string()));
        }
        self.active_challenge = Some(card_id.to_string());
        self.card(card_id)
            .ok_or_else(|| BoostError::not_found("card", card_id))
    }

    /// Finish the active challenge, returning the completed card
    pub fn complete_challenge(&mut self) -> Result<Card> {
        let id = self
            .active_challenge
            .take()
            .ok_or(BoostError::NoActiveChallenge)?;
        let card = self
            .card(&id)
            .cloned()
            .ok_or_else(|| BoostError::not_found("card", id))?;

        self.points = self.points.saturating_add(card.points);
        self.streak += 1;
        info!(
            "Completed challenge '{}', +{} points, streak {}",
            card.title, card.points, self.streak
        );
        Ok(card)
    }
}

/// Referral code: "DB" followed by six uppercase alphanumerics
pub fn invite_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix: String = (0..6)
        .map(|_| INVITE_CODE_CHARSET[rng.gen_range(0..INVITE_CODE_CHARSET.len())] as char)
        .collect();
    format!("DB{}", suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game() -> CardGame {
        CardGame::seeded(3, 250, 7)
    }

    #[test]
    fn test_seeded_state() {
        let game = game();
        assert_eq!(game.deck().len(), 8);
        assert_eq!(game.collection().len(), 3);
        assert_eq!(game.available().len(), 5);
    }

    #[test]
    fn test_draw_picks_unseen_card() {
        let mut game = game();
        let mut rng = StdRng::seed_from_u64(7);

        let card = game.draw(&mut rng).unwrap();
        assert!(!["1", "2", "3"].contains(&card.id.as_str()));
        assert!(game.is_collected(&card.id));
        assert_eq!(game.plays_left(), 2);
        assert_eq!(game.points(), 250 + card.points);
    }

    #[test]
    fn test_draw_never_repeats() {
        let deck = seed_deck();
        let mut game = CardGame::new(deck, Vec::new(), 8, 0, 0);
        let mut rng = StdRng::seed_from_u64(1);

        let mut seen = std::collections::HashSet::new();
        for _ in 0..8 {
            let card = game.draw(&mut rng).unwrap();
            assert!(seen.insert(card.id));
        }
        assert_eq!(game.points(), 1135);
    }

    #[test]
    fn test_draw_without_plays() {
        let mut game = CardGame::seeded(0, 250, 7);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(matches!(game.draw(&mut rng), Err(BoostError::NoPlaysLeft)));
    }

    #[test]
    fn test_draw_exhausted_deck_keeps_play() {
        let deck = seed_deck();
        let all: Vec<String> = deck.iter().map(|c| c.id.clone()).collect();
        let mut game = CardGame::new(deck, all, 3, 0, 0);
        let mut rng = StdRng::seed_from_u64(3);

        assert!(matches!(game.draw(&mut rng), Err(BoostError::DeckExhausted)));
        assert_eq!(game.plays_left(), 3);
    }

    #[test]
    fn test_share_grants_plays() {
        let mut game = game();
        let outcome = game.share(SharePlatform::Twitter);
        assert_eq!(outcome.plays_granted, 2);
        assert_eq!(game.plays_left(), 5);
        let url = outcome.url.unwrap();
        assert!(url.starts_with("https://twitter.com/intent/tweet?text="));
        assert!(url.contains("dailyboost.app"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_copy_share_grants_nothing() {
        let mut game = game();
        let outcome = game.share(SharePlatform::Copy);
        assert_eq!(outcome.plays_granted, 0);
        assert!(outcome.url.is_none());
        assert!(outcome.text.contains("challenge"));
        assert_eq!(game.plays_left(), 3);
    }

    #[test]
    fn test_challenge_flow() {
        let mut game = game();

        assert!(matches!(
            game.complete_challenge(),
            Err(BoostError::NoActiveChallenge)
        ));
        assert!(matches!(
            game.accept_challenge("8"),
            Err(BoostError::CardNotCollected(_))
        ));
        assert!(matches!(
            game.accept_challenge("99"),
            Err(BoostError::NotFound { .. })
        ));

        game.accept_challenge("2").unwrap();
        assert_eq!(game.active_challenge().unwrap().title, "Focus Master");

        let card = game.complete_challenge().unwrap();
        assert_eq!(card.points, 100);
        assert_eq!(game.points(), 350);
        assert_eq!(game.streak(), 8);
        assert!(game.active_challenge().is_none());
    }

    #[test]
    fn test_invite_code_shape() {
        let mut rng = StdRng::seed_from_u64(11);
        let code = invite_code(&mut rng);
        assert_eq!(code.len(), 8);
        assert!(code.starts_with("DB"));
        assert!(code[2..]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_platform_parse() {
        assert_eq!(SharePlatform::parse("FB"), Some(SharePlatform::Facebook));
        assert_eq!(SharePlatform::parse("whatsapp"), Some(SharePlatform::Whatsapp));
        assert_eq!(SharePlatform::parse("myspace"), None);
    }
}
