//! Text rendering for boostctl output.
//!
//! Renderers return strings so the shell and tests can capture them.

use boost_common::achievements::AchievementBoard;
use boost_common::cards::{Card, CardGame};
use boost_common::journal::{Journal, JOURNAL_QUESTIONS};
use boost_common::leaderboard::LeaderboardEntry;
use boost_common::mood::{MoodTracker, Trend, MOODS};
use boost_common::pricing::Plan;
use boost_common::progression::{AwardOutcome, TierStatus, TierTable};
use boost_common::settings::Settings;
use boost_common::tasks::Task;
use boost_common::team::Team;
use boost_common::unlocks::{UnlockCatalog, UnlockCategory};
use boost_common::wallet::{format_vnd, Transaction, TransactionStatus};
use owo_colors::OwoColorize;

const BAR_WIDTH: usize = 20;

/// "[=====-----] 50%" style bar
pub fn progress_bar(percent: u8, width: usize) -> String {
    let percent = percent.min(100) as usize;
    let filled = (percent * width) / 100;
    let empty = width.saturating_sub(filled);
    format!("[{}{}] {}%", "=".repeat(filled), "-".repeat(empty), percent)
}

/// Points, tier and progress toward the next tier
pub fn status(status: &TierStatus<'_>) -> String {
    let tier = status.current_tier;
    let mut lines = vec![
        format!("{} Boost Points", status.points.to_string().bold()),
        format!(
            "Tier {}: {} ({})",
            tier.id,
            tier.display_name.cyan(),
            tier.range_label()
        ),
        progress_bar(status.progress_percent(), BAR_WIDTH),
    ];
    match (status.next_tier, status.points_to_next) {
        (Some(next), Some(missing)) => {
            lines.push(format!("{} points to {}", missing, next.display_name))
        }
        _ => lines.push("Max tier reached".green().to_string()),
    }
    lines.join("\n")
}

/// Tier table with the current tier starred
pub fn tier_table(table: &TierTable, current_id: u32) -> String {
    table
        .tiers()
        .iter()
        .map(|tier| {
            let marker = if tier.id == current_id { "*" } else { " " };
            let mut line = format!(
                "{} {} {:<10} {:<12} {}",
                marker,
                tier.id,
                tier.display_name,
                tier.range_label(),
                tier.title.dimmed()
            );
            if !tier.unlocked_capabilities.is_empty() {
                line.push_str(&format!("\n      {}", tier.unlocked_capabilities.join(", ")));
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result of an award, including level-ups
pub fn award_outcome(outcome: &AwardOutcome) -> String {
    let mut lines = vec![format!("+{} Boost Points (total {})", outcome.amount, outcome.total)];
    if outcome.level_up() {
        lines.push(format!(
            "{} {}",
            "Level up!".yellow().bold(),
            outcome.tiers_gained.join(" -> ")
        ));
        for cap in &outcome.unlocked {
            lines.push(format!("  unlocked: {}", cap));
        }
    }
    lines.join("\n")
}

/// Achievements with completion and claim state
pub fn achievements(board: &AchievementBoard) -> String {
    let mut lines = vec![format!(
        "{}/{} completed",
        board.completed_count(),
        board.all().len()
    )];
    for a in board.all() {
        let state = if a.claimed {
            "claimed".dimmed().to_string()
        } else if a.completed() {
            "ready".green().to_string()
        } else {
            format!("{}/{}", a.progress, a.max_progress)
        };
        lines.push(format!(
            "{:>2} {:<18} {:<8} {:>4} BP  {}",
            a.id,
            a.title,
            a.category.as_str(),
            a.points,
            state
        ));
    }
    lines.join("\n")
}

/// Feature catalog with lock state for a tier
pub fn unlocks(catalog: &UnlockCatalog, tier_id: u32) -> String {
    let (unlocked, total) = catalog.counts(tier_id);
    let mut lines = vec![format!("{}/{} features unlocked", unlocked, total)];
    for category in UnlockCategory::all() {
        lines.push(format!("[{}]", category.as_str()));
        for f in catalog.by_category(category) {
            let mark = if f.is_unlocked(tier_id) {
                "+".green().to_string()
            } else {
                format!("tier {}", f.tier_required).dimmed().to_string()
            };
            lines.push(format!("  {} {}", mark, f.title));
        }
    }
    lines.join("\n")
}

/// Ranked leaderboard rows
pub fn leaderboard(rows: &[LeaderboardEntry]) -> String {
    rows.iter()
        .map(|r| {
            let line = format!("#{:<3} {:<20} {:>6} {}", r.rank, r.name, r.points, r.tier);
            if r.is_you {
                line.cyan().to_string()
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One card with rarity and challenge
pub fn card(card: &Card) -> String {
    format!(
        "{} [{} / {}] +{} points\n  {}\n  Challenge: {}\n  Reward: {}",
        card.title.bold(),
        card.rarity.as_str(),
        card.category.as_str(),
        card.points,
        card.description,
        card.challenge,
        card.reward
    )
}

/// Collected cards and game counters
pub fn collection(game: &CardGame) -> String {
    let mut lines = vec![format!(
        "{}/{} collected, {} plays left, {} points, {}-day streak",
        game.collection().len(),
        game.deck().len(),
        game.plays_left(),
        game.points(),
        game.streak()
    )];
    for c in game.collection() {
        lines.push(format!("  {} {} ({})", c.id, c.title, c.rarity.as_str()));
    }
    if let Some(active) = game.active_challenge() {
        lines.push(format!("Active challenge: {}", active.challenge));
    }
    lines.join("\n")
}

/// Task rows with a completion count
pub fn tasks(rows: &[&Task], completion: (usize, usize)) -> String {
    let mut lines = vec![format!("{}/{} done", completion.0, completion.1)];
    for t in rows {
        let check = if t.completed { "[x]" } else { "[ ]" };
        let mut line = format!("{} {:>2} {} ({})", check, t.id, t.title, t.priority.as_str());
        if t.ai_suggested {
            line.push_str(&format!(" {}", "AI".magenta()));
        }
        lines.push(line);
    }
    lines.join("\n")
}

/// Mood history, average, trend and insight
pub fn mood(tracker: &MoodTracker) -> String {
    let history: Vec<String> = tracker
        .history()
        .iter()
        .map(|v| {
            MOODS
                .iter()
                .find(|m| m.3 == *v)
                .map(|m| m.1.to_string())
                .unwrap_or_else(|| v.to_string())
        })
        .collect();
    let mut lines = vec![format!("Last 7: {}", history.join(" "))];
    if let Some(avg) = tracker.average() {
        let arrow = match tracker.trend() {
            Some(Trend::Up) => "up",
            _ => "down",
        };
        lines.push(format!("Average {:.1}/5, trend {}", avg, arrow));
    }
    if let Some(insight) = tracker.insight() {
        lines.push(format!("{} {}", "Insight:".magenta(), insight.message()));
    }
    lines.join("\n")
}

/// Current journal question and answer
pub fn journal(journal: &Journal) -> String {
    let (question, placeholder) = journal.question();
    let answer = if journal.answer().is_empty() {
        placeholder.dimmed().to_string()
    } else {
        journal.answer().to_string()
    };
    format!(
        "Question {} / {}: {}\n> {}",
        journal.current() + 1,
        JOURNAL_QUESTIONS.len(),
        question,
        answer
    )
}

/// Settings with toggle states
pub fn settings(settings: &Settings) -> String {
    let mut lines = vec![
        format!("email      {}", settings.email),
        format!(
            "ai level   {} ({})",
            settings.ai_level,
            settings.ai_level_label().cyan()
        ),
        format!("ai tone    {}", settings.ai_tone.as_str()),
    ];
    for (name, on) in settings.toggles() {
        let value = if on { "on".green().to_string() } else { "off".dimmed().to_string() };
        lines.push(format!("{:<10} {}", name, value));
    }
    lines.join("\n")
}

fn status_label(status: TransactionStatus) -> String {
    match status {
        TransactionStatus::Completed => status.as_str().green().to_string(),
        TransactionStatus::Pending => status.as_str().yellow().to_string(),
        TransactionStatus::Failed => status.as_str().red().to_string(),
    }
}

/// Transaction history rows
pub fn transactions(rows: &[&Transaction]) -> String {
    rows.iter()
        .map(|t| {
            format!(
                "{} {:<10} {:>14} {:<28} {}",
                t.date.format("%Y-%m-%d %H:%M"),
                t.kind.as_str(),
                format_vnd(t.amount),
                t.description,
                status_label(t.status)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Plans with the Business total for `seats`
pub fn plans(plans: &[Plan], seats: u32, business_total: i64) -> String {
    let mut lines = Vec::new();
    for plan in plans {
        let price = match plan.period {
            Some(period) => format!("{}{}", format_vnd(plan.price), period.period()),
            None => "Free".to_string(),
        };
        let mut head = format!("{} {}", plan.kind.name().bold(), price);
        if plan.popular {
            head.push_str(&format!(" {}", "Most Popular".yellow()));
        }
        lines.push(head);
        if plan.per_seat {
            lines.push(format!(
                "  {}/year for {} users",
                format_vnd(business_total),
                seats
            ));
        }
        for f in &plan.features {
            let mark = if f.included { "+" } else { "-" };
            lines.push(format!("  {} {}", mark, f.text));
        }
    }
    lines.join("\n")
}

/// Team overview: plan, members, invitations and projects
pub fn team(team: &Team) -> String {
    let plan = team.plan();
    let summary = team.summary();
    let mut lines = vec![
        format!(
            "{}: {}/{} members",
            plan.name.bold(),
            plan.current_members,
            plan.max_members
        ),
        format!(
            "{} projects ({} off track), tasks: {} done, {} in progress, {} pending",
            summary.projects,
            summary.projects_off_track,
            summary.tasks_completed,
            summary.tasks_in_progress,
            summary.tasks_pending
        ),
        "Members:".to_string(),
    ];
    for m in team.members() {
        lines.push(format!("  {:<14} {:<26} {}", m.name, m.email, m.role.as_str()));
    }
    lines.push("Pending invitations:".to_string());
    for inv in team.pending_invitations() {
        lines.push(format!(
            "  {} {} ({}) by {}",
            inv.id,
            inv.email,
            inv.role.as_str(),
            inv.invited_by
        ));
    }
    lines.join("\n")
}
