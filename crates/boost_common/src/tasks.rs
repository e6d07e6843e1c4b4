//! Personal task list.

use crate::error::{BoostError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Priority name
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Parse a priority name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" | "med" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

/// Priority filter for the task view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    /// Parse a filter name ("all" or a priority)
    pub fn parse(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("all") {
            return Some(PriorityFilter::All);
        }
        Priority::parse(s).map(PriorityFilter::Only)
    }

    fn matches(&self, task: &Task) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(p) => task.priority == *p,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub note: String,
    pub priority: Priority,
    pub mood: String,
    pub time: String,
    pub completed: bool,
    #[serde(default)]
    pub ai_suggested: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields for a new task
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub note: String,
    pub priority: Priority,
    pub mood: String,
    pub time: String,
}

impl NewTask {
    /// New medium-priority task with a title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            note: String::new(),
            priority: Priority::Medium,
            mood: "😌".to_string(),
            time: String::new(),
        }
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskList {
    /// Empty task list
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Task list with the sample day
    pub fn seeded() -> Self {
        let now = Utc::now();
        let seed = [
            ("Finish Q4 report", "Needs review before sending", Priority::High, "🔥", "9:00 - 11:00", false, true),
            ("Team brainstorm meeting", "Prepare new ideas", Priority::Medium, "😌", "14:00 - 15:30", false, false),
            ("Review pull request", "", Priority::Medium, "💻", "16:00 - 17:00", false, false),
            ("Meditate for 10 minutes", "Wind down at the end of the day", Priority::Low, "🌙", "20:00", true, false),
        ];
        let tasks: Vec<Task> = seed
            .iter()
            .enumerate()
            .map(|(i, &(title, note, priority, mood, time, completed, ai))| Task {
                id: i as u64 + 1,
                title: title.to_string(),
                note: note.to_string(),
                priority,
                mood: mood.to_string(),
                time: time.to_string(),
                completed,
                ai_suggested: ai,
                created_at: now,
            })
            .collect();
        let next_id = tasks.len() as u64 + 1;
        Self { tasks, next_id }
    }

    /// All tasks in insertion order
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Add a task; the title must not be blank
    pub fn add(&mut self, new: NewTask) -> Result<&Task> {
        let title = new.title.trim();
        if title.is_empty() {
            return Err(BoostError::BlankTitle);
        }
        let task = Task {
            id: self.next_id,
            title: title.to_string(),
            note: new.note,
            priority: new.priority,
            mood: new.mood,
            time: new.time,
            completed: false,
            ai_suggested: false,
            created_at: Utc::now(),
        };
        self.next_id += 1;
        debug!("Added task {} '{}'", task.id, task.title);
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Flip completion, returning the new state
    pub fn toggle(&mut self, id: u64) -> Result<bool> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| BoostError::not_found("task", id.to_string()))?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    /// Remove a task and return it
    pub fn delete(&mut self, id: u64) -> Result<Task> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| BoostError::not_found("task", id.to_string()))?;
        Ok(self.tasks.remove(pos))
    }

    /// Tasks matching a priority filter
    pub fn filter(&self, filter: PriorityFilter) -> Vec<&Task> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// (completed, total)
    pub fn completion(&self) -> (usize, usize) {
        let done = self.tasks.iter().filter(|t| t.completed).count();
        (done, self.tasks.len())
    }
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}
