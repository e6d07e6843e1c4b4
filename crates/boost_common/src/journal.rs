//! End-of-day journal
//!
//! Three reflection questions answered one at a time. `advance` on the last
//! question submits the entry and resets the wizard for the next day.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

/// (question, placeholder)
pub const JOURNAL_QUESTIONS: [(&str, &str); 3] = [
    (
        "How do you feel about your productivity today?",
        "e.g. I felt productive and finished a lot of tasks...",
    ),
    (
        "What made you feel best today?",
        "e.g. Finishing a hard task, having time to relax...",
    ),
    (
        "What do you want to improve tomorrow?",
        "e.g. Focus more, start earlier, get enough rest...",
    ),
];

/// A submitted set of answers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JournalEntry {
    pub answers: [String; 3],
    pub submitted_at: DateTime<Utc>,
}

/// Result of stepping forward
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum JournalStep {
    /// Moved to the question at this index
    Question(usize),
    /// The last question was answered and the entry submitted
    Submitted(JournalEntry),
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Journal {
    current: usize,
    answers: [String; 3],
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Empty journal on the first question
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the question being answered
    pub fn current(&self) -> usize {
        self.current
    }

    /// (question, placeholder) for the current step
    pub fn question(&self) -> (&'static str, &'static str) {
        JOURNAL_QUESTIONS[self.current]
    }

    /// Answer typed for the current question
    pub fn answer(&self) -> &str {
        &self.answers[self.current]
    }

    /// Replace the answer to the current question
    pub fn set_answer(&mut self, text: &str) {
        self.answers[self.current] = text.to_string();
    }

    /// Whether the current question is the final one
    pub fn is_last(&self) -> bool {
        self.current == JOURNAL_QUESTIONS.len() - 1
    }

    /// Advance, or submit and reset when on the last question
    pub fn advance(&mut self) -> JournalStep {
        if !self.is_last() {
            self.current += 1;
            return JournalStep::Question(self.current);
        }

        let entry = JournalEntry {
            answers: std::mem::take(&mut self.answers),
            submitted_at: Utc::now(),
        };
        self.current = 0;
        self.entries.push(entry.clone());
        info!("Journal entry {} submitted", self.entries.len());
        JournalStep::Submitted(entry)
    }

    /// Step back; stays on the first question. Answers are kept.
    pub fn back(&mut self) -> usize {
        self.current = self.current.saturating_sub(1);
        self.current
    }

    /// Submitted entries, oldest first
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }
}
