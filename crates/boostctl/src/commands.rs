//! Command execution against a session.

use crate::cli::{CardAction, Command};
use crate::display;
use anyhow::{anyhow, bail, Context, Result};
use boost_common::cards::{invite_code, SharePlatform};
use boost_common::config;
use boost_common::pricing::{self, Billing};
use boost_common::journal::JournalStep;
use boost_common::progression::AwardSource;
use boost_common::settings::AiTone;
use boost_common::tasks::{NewTask, PriorityFilter};
use boost_common::team::{invite_link, InviteRole};
use boost_common::wallet::{format_vnd, PaymentMethod, TransactionStatus, TransactionType};
use boost_common::Session;
use owo_colors::OwoColorize;
use rand::Rng;

fn parse_source(s: &str) -> Result<AwardSource> {
    match s.to_lowercase().as_str() {
        "achievement" => Ok(AwardSource::Achievement),
        "card_draw" | "card" => Ok(AwardSource::CardDraw),
        "challenge" => Ok(AwardSource::Challenge),
        "manual" => Ok(AwardSource::Manual),
        other => bail!("Unknown award source '{}'", other),
    }
}

/// Run one command and return its rendered output
pub fn execute<R: Rng + ?Sized>(session: &mut Session, command: Command, rng: &mut R) -> Result<String> {
    match command {
        Command::Status => Ok(display::status(&session.status())),

        Command::Tiers => {
            let current = session.status().current_tier.id;
            Ok(display::tier_table(session.ledger().table(), current))
        }

        Command::Award { amount, source } => {
            let source = parse_source(&source)?;
            let outcome = session.award(source, "boostctl", amount);
            Ok(display::award_outcome(&outcome))
        }

        Command::Achievements { claim } => match claim {
            Some(id) => {
                let outcome = session.claim_achievement(&id)?;
                Ok(display::award_outcome(&outcome))
            }
            None => Ok(display::achievements(session.achievements())),
        },

        Command::Unlocks => {
            let tier_id = session.status().current_tier.id;
            Ok(display::unlocks(session.unlocks(), tier_id))
        }

        Command::Leaderboard => Ok(display::leaderboard(&session.leaderboard())),

        Command::Cards { action } => cards(session, action.unwrap_or(CardAction::Collection), rng),

        Command::Tasks {
            priority,
            add,
            toggle,
            delete,
        } => {
            let mut notes = Vec::new();
            if let Some(title) = add {
                let task = session.tasks_mut().add(NewTask::titled(title))?;
                notes.push(format!("Added task {}", task.id));
            }
            if let Some(id) = toggle {
                let done = session.tasks_mut().toggle(id)?;
                notes.push(format!("Task {} {}", id, if done { "done" } else { "reopened" }));
            }
            if let Some(id) = delete {
                let task = session.tasks_mut().delete(id)?;
                notes.push(format!("Deleted '{}'", task.title));
            }
            let filter = match priority {
                Some(p) => PriorityFilter::parse(&p).ok_or_else(|| anyhow!("Unknown priority '{}'", p))?,
                None => PriorityFilter::All,
            };
            let tasks = session.tasks();
            notes.push(display::tasks(&tasks.filter(filter), tasks.completion()));
            Ok(notes.join("\n"))
        }

        Command::Mood { log } => {
            let mut out = String::new();
            if let Some(mood) = log {
                let value = session.mood_mut().select(&mood)?;
                out.push_str(&format!("Logged mood {}\n", value));
            }
            out.push_str(&display::mood(session.mood()));
            Ok(out)
        }

        Command::Wallet {
            topup,
            method,
            kind,
            status,
        } => wallet(session, topup, &method, kind, status),

        Command::Pricing {
            seats,
            yearly,
            buy_business,
        } => {
            let seats = seats.unwrap_or(pricing::DEFAULT_SEATS);
            let billing = if yearly { Billing::Yearly } else { Billing::Monthly };
            if buy_business {
                let total = session.buy_business(seats)?;
                return Ok(format!(
                    "Business purchased for {} users: {}/year\nThe Business dashboard is now unlocked",
                    seats,
                    format_vnd(total)
                ));
            }
            let total = pricing::business_total(seats)?;
            Ok(display::plans(&pricing::plans(billing), seats, total))
        }

        Command::Team {
            invite,
            role,
            cancel,
            resend,
            link,
        } => {
            let role = InviteRole::parse(&role).ok_or_else(|| anyhow!("Unknown role '{}'", role))?;
            if link {
                return Ok(invite_link(role));
            }
            if let Some(email) = invite {
                let inv = session.invite(&email, role)?;
                return Ok(format!("Invitation sent to {} ({})", inv.email, inv.role.as_str()));
            }
            if let Some(id) = cancel {
                let inv = session.team_mut()?.cancel(&id)?;
                return Ok(format!("Invitation to {} cancelled", inv.email));
            }
            if let Some(id) = resend {
                let inv = session.team()?.resend(&id)?;
                return Ok(format!("Invitation resent to {}", inv.email));
            }
            Ok(display::team(session.team()?))
        }

        Command::Coach { message } => {
            let text = message.join(" ");
            match session.coach_mut().reply(&text) {
                Some(reply) => Ok(format!("{} {}", "Coach:".magenta(), reply.text)),
                None => bail!("Say something to the coach"),
            }
        }

        Command::Focus {
            minutes,
            run,
            reset,
        } => {
            let timer = session.focus_mut();
            if let Some(m) = minutes {
                timer.set_minutes(m);
            }
            if reset {
                timer.reset();
            }
            let mut out = String::new();
            if let Some(secs) = run {
                timer.start();
                if timer.tick(secs) {
                    out.push_str("Focus session complete!\n");
                }
                timer.pause();
            }
            out.push_str(&format!(
                "{} {}",
                timer.format_mm_ss(),
                display::progress_bar(timer.progress().round() as u8, 20)
            ));
            Ok(out)
        }

        Command::Journal { answer, next, back } => {
            let journal = session.journal_mut();
            if let Some(text) = answer {
                journal.set_answer(&text);
            }
            if back {
                journal.back();
            }
            if next {
                if let JournalStep::Submitted(entry) = journal.advance() {
                    let answered = entry.answers.iter().filter(|a| !a.trim().is_empty()).count();
                    return Ok(format!(
                        "Journal saved ({}/{} answered). Suggestions arrive tomorrow morning",
                        answered,
                        entry.answers.len()
                    ));
                }
            }
            Ok(display::journal(session.journal()))
        }

        Command::Settings {
            ai_level,
            tone,
            toggle,
        } => {
            let settings = session.settings_mut();
            if let Some(level) = ai_level {
                settings.set_ai_level(level)?;
            }
            if let Some(t) = tone {
                settings.ai_tone = AiTone::parse(&t).ok_or_else(|| anyhow!("Unknown tone '{}'", t))?;
            }
            if let Some(name) = toggle {
                settings.toggle(&name)?;
            }
            Ok(display::settings(session.settings()))
        }

        Command::Greet => Ok(session.greeting()),

        Command::Menu => Ok(session
            .menu_items()
            .iter()
            .map(|m| m.label)
            .collect::<Vec<_>>()
            .join("\n")),

        Command::Config => {
            let path = config::config_path();
            let rendered = session
                .config()
                .to_toml()
                .context("Failed to render the configuration")?;
            Ok(format!("# {}\n{}", path.display(), rendered))
        }

        Command::Shell => bail!("Already in the shell"),
    }
}

fn cards<R: Rng + ?Sized>(session: &mut Session, action: CardAction, rng: &mut R) -> Result<String> {
    match action {
        CardAction::Draw => {
            let flip_ms = session.config().simulation.effective_card_flip_delay();
            let (card, outcome) = session.draw_card(rng)?;
            Ok(format!(
                "Flipping card ({} ms)...\n{}\n{}\n{} plays left",
                flip_ms,
                display::card(&card),
                display::award_outcome(&outcome),
                session.cards().plays_left()
            ))
        }
        CardAction::Collection => Ok(display::collection(session.cards())),
        CardAction::Share { platform } => {
            let platform = SharePlatform::parse(&platform)
                .ok_or_else(|| anyhow!("Unknown platform '{}'", platform))?;
            let share = session.cards_mut().share(platform);
            let mut lines = vec![share.text];
            if let Some(url) = share.url {
                lines.push(url);
            }
            if share.plays_granted > 0 {
                lines.push(format!(
                    "+{} plays ({} left)",
                    share.plays_granted,
                    session.cards().plays_left()
                ));
            }
            Ok(lines.join("\n"))
        }
        CardAction::Accept { id } => {
            let card = session.cards_mut().accept_challenge(&id)?;
            Ok(format!("Challenge accepted: {}", card.challenge))
        }
        CardAction::Complete => {
            let (card, outcome) = session.complete_challenge()?;
            Ok(format!(
                "Completed '{}' ({}-day streak)\n{}",
                card.title,
                session.cards().streak(),
                display::award_outcome(&outcome)
            ))
        }
        CardAction::Invite => Ok(format!("Your invite code: {}", invite_code(rng))),
    }
}

fn wallet(
    session: &mut Session,
    topup: Option<String>,
    method: &str,
    kind: Option<String>,
    status: Option<String>,
) -> Result<String> {
    let mut lines = Vec::new();
    if let Some(package) = topup {
        let method = PaymentMethod::parse(method)
            .ok_or_else(|| anyhow!("Unknown payment method '{}'", method))?;
        let receipt = session
            .top_up(&package, method)
            .with_context(|| format!("Top-up with package {} failed", package))?;
        lines.push(format!(
            "Processing via {} ({} ms)... credited {}",
            method.name(),
            receipt.processing_delay_ms,
            format_vnd(receipt.credited).green()
        ));
    }

    let kind = kind
        .map(|k| TransactionType::parse(&k).ok_or_else(|| anyhow!("Unknown transaction type '{}'", k)))
        .transpose()?;
    let status = status
        .map(|s| TransactionStatus::parse(&s).ok_or_else(|| anyhow!("Unknown status '{}'", s)))
        .transpose()?;

    let wallet = session.wallet();
    lines.push(format!(
        "Balance {}  (bonus {})",
        format_vnd(wallet.balance()).bold(),
        format_vnd(wallet.bonus_balance())
    ));
    lines.push(display::transactions(&wallet.history(kind, status)));
    Ok(lines.join("\n"))
}
