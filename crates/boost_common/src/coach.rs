//! Scripted AI coach
//!
//! Replies come from a fixed table keyed by the quick-action prompts; any
//! other message gets a generic answer that quotes it back.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

pub const GREETING: &str = "Hi! I'm your AI Coach. How can I help you today? 🚀";

/// (prompt, reply)
pub const QUICK_ACTIONS: &[(&str, &str)] = &[
    (
        "What should I do next?",
        "Based on your current energy (75%), I suggest focusing on \"Finish Q4 report\" for the next 2 hours. This is your high-energy window! 💪",
    ),
    (
        "Analyze my productivity",
        "This week you completed 62 tasks (+10.7% over last week). Your energy peaks between 9:00 and 12:00, but productivity drops 30% after 15:00. Schedule important tasks in the morning! 📊",
    ),
    (
        "Suggest a new habit",
        "You are missing a \"power nap\" after lunch. Try resting 15 minutes at 13:30 to recharge for the afternoon! 😴",
    ),
    (
        "Optimize my schedule",
        "I analyzed your calendar: move \"Review code\" from 16:00 to 10:00 (higher energy) and admin tasks to 15:00-16:00 (lower energy). Expected productivity gain: 25%! ⚡",
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoachReply {
    pub text: String,
    /// How long the UI shows the typing indicator
    pub delay_ms: u64,
    pub quick_action: bool,
}

/// Prompts offered as one-tap quick actions
pub fn quick_prompts() -> impl Iterator<Item = &'static str> {
    QUICK_ACTIONS.iter().map(|(prompt, _)| *prompt)
}

/// Pure reply lookup, no history
pub fn reply_for(text: &str) -> (String, bool) {
    match QUICK_ACTIONS.iter().find(|(prompt, _)| *prompt == text) {
        Some((_, reply)) => (reply.to_string(), true),
        None => (
            format!(
                "I understand you want to know about \"{}\". Based on your data, I suggest keeping up your morning routine and adding more deep-work time. You're doing great! 🌟",
                text
            ),
            false,
        ),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Coach {
    delay_ms: u64,
    next_id: u64,
    history: Vec<ChatMessage>,
}

impl Coach {
    /// Coach whose history starts with the greeting
    pub fn new(delay_ms: u64) -> Self {
        let mut coach = Self {
            delay_ms,
            next_id: 1,
            history: Vec::new(),
        };
        coach.push(Sender::Ai, GREETING.to_string());
        coach
    }

    fn push(&mut self, sender: Sender, text: String) {
        self.history.push(ChatMessage {
            id: self.next_id,
            text,
            sender,
            timestamp: Utc::now(),
        });
        self.next_id += 1;
    }

    /// Conversation so far, greeting first
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Blank input is ignored and returns None
    pub fn reply(&mut self, text: &str) -> Option<CoachReply> {
        if text.trim().is_empty() {
            return None;
        }
        self.push(Sender::User, text.to_string());
        let (reply, quick_action) = reply_for(text);
        debug!("Coach reply (quick action: {})", quick_action);
        self.push(Sender::Ai, reply.clone());
        Some(CoachReply {
            text: reply,
            delay_ms: self.delay_ms,
            quick_action,
        })
    }

    /// Voice input is simulated as the first quick prompt
    pub fn voice_input(&mut self) -> Option<CoachReply> {
        self.reply(QUICK_ACTIONS[0].0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_greeting() {
        let coach = Coach::new(1500);
        assert_eq!(coach.history().len(), 1);
        assert_eq!(coach.history()[0].sender, Sender::Ai);
        assert_eq!(coach.history()[0].text, GREETING);
    }

    #[test]
    fn test_quick_action_reply() {
        let mut coach = Coach::new(1500);
        let reply = coach.reply("Analyze my productivity").unwrap();
        assert!(reply.quick_action);
        assert!(reply.text.contains("62 tasks"));
        assert_eq!(reply.delay_ms, 1500);
        assert_eq!(coach.history().len(), 3);
        assert_eq!(coach.history()[1].sender, Sender::User);
    }

    #[test]
    fn test_generic_reply_quotes_input() {
        let mut coach = Coach::new(0);
        let reply = coach.reply("sleep schedule").unwrap();
        assert!(!reply.quick_action);
        assert!(reply.text.contains("\"sleep schedule\""));
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut coach = Coach::new(0);
        assert!(coach.reply("   ").is_none());
        assert!(coach.reply("").is_none());
        assert_eq!(coach.history().len(), 1);
    }

    #[test]
    fn test_voice_input() {
        let mut coach = Coach::new(0);
        let reply = coach.voice_input().unwrap();
        assert!(reply.quick_action);
        assert_eq!(coach.history()[1].text, "What should I do next?");
    }

    #[test]
    fn test_ids_increase() {
        let mut coach = Coach::new(0);
        coach.reply("a");
        coach.reply("b");
        let ids: Vec<u64> = coach.history().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(quick_prompts().count(), 4);
    }
}
