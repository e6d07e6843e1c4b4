//! Pomodoro-style focus timer, advanced explicitly with `tick`.

use serde::Serialize;

pub const DEFAULT_FOCUS_MINUTES: u32 = 25;
/// Longest selectable session (8 hours)
pub const MAX_FOCUS_MINUTES: u32 = 480;
pub const PRESET_MINUTES: [u32; 3] = [15, 25, 45];
pub const QUOTE_ROTATION_SECS: u64 = 10;

/// (text, author)
pub const FOCUS_QUOTES: &[(&str, &str)] = &[
    ("Focus on being productive instead of busy.", "Tim Ferriss"),
    ("The key is not to prioritize schedule, but to schedule priorities.", "Stephen Covey"),
    ("You can do anything, but not everything.", "David Allen"),
    ("The way to get started is to quit talking and begin doing.", "Walt Disney"),
    ("Small progress is still progress.", "Anonymous"),
];

#[derive(Debug, Clone, Serialize)]
pub struct FocusTimer {
    length_secs: u32,
    remaining_secs: u32,
    running: bool,
}

impl FocusTimer {
    /// Timer of `minutes`, clamped to 1..=MAX_FOCUS_MINUTES
    pub fn new(minutes: u32) -> Self {
        let length_secs = minutes.clamp(1, MAX_FOCUS_MINUTES) * 60;
        Self {
            length_secs,
            remaining_secs: length_secs,
            running: false,
        }
    }

    /// Seconds left in the session
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    /// Selected session length in seconds
    pub fn length_secs(&self) -> u32 {
        self.length_secs
    }

    /// Whether the countdown is running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True once the countdown reached zero
    pub fn is_finished(&self) -> bool {
        self.remaining_secs == 0
    }

    /// No-op once finished
    pub fn start(&mut self) {
        if !self.is_finished() {
            self.running = true;
        }
    }

    /// Stop the countdown, keeping the remaining time
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Start when paused, pause when running
    pub fn toggle(&mut self) {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Refill to the selected length and stop
    pub fn reset(&mut self) {
        self.remaining_secs = self.length_secs;
        self.running = false;
    }

    /// Switch to a new session length; stops and refills the timer
    pub fn set_minutes(&mut self, minutes: u32) {
        *self = Self::new(minutes);
    }

    /// Advance by `secs` if running. Returns true when this tick finished the session.
    pub fn tick(&mut self, secs: u32) -> bool {
        if !self.running || self.is_finished() {
            return false;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(secs);
        if self.is_finished() {
            self.running = false;
            return true;
        }
        false
    }

    /// Elapsed share of the session, 0-100
    pub fn progress(&self) -> f64 {
        let elapsed = self.length_secs - self.remaining_secs;
        elapsed as f64 / self.length_secs as f64 * 100.0
    }

    /// Remaining time as "mm:ss"
    pub fn format_mm_ss(&self) -> String {
        format!("{:02}:{:02}", self.remaining_secs / 60, self.remaining_secs % 60)
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new(DEFAULT_FOCUS_MINUTES)
    }
}

/// Quote shown after `elapsed_secs` of wall time
pub fn quote_at(elapsed_secs: u64) -> (&'static str, &'static str) {
    let idx = (elapsed_secs / QUOTE_ROTATION_SECS) as usize % FOCUS_QUOTES.len();
    FOCUS_QUOTES[idx]
}
