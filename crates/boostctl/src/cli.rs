//! Command line definition, shared by argv parsing and the shell.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "boostctl")]
#[command(about = "Daily Boost - gamified productivity from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (overrides $BOOST_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Shell lines are parsed without the global flags
#[derive(Parser, Debug)]
#[command(name = "boostctl", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show Boost Points, tier and progress
    Status,

    /// List the tier table
    Tiers,

    /// Award Boost Points
    Award {
        amount: u64,

        /// achievement, card_draw, challenge or manual
        #[arg(long, default_value = "manual")]
        source: String,
    },

    /// List achievements or claim one
    Achievements {
        /// Claim a completed achievement by id
        #[arg(long)]
        claim: Option<String>,
    },

    /// Show features unlocked by tier
    Unlocks,

    /// Show the leaderboard
    Leaderboard,

    /// Daily Boost card game
    Cards {
        #[command(subcommand)]
        action: Option<CardAction>,
    },

    /// List or edit tasks
    Tasks {
        /// high, medium, low or all
        #[arg(long)]
        priority: Option<String>,

        /// Add a task with this title
        #[arg(long)]
        add: Option<String>,

        /// Toggle completion by id
        #[arg(long)]
        toggle: Option<u64>,

        /// Delete a task by id
        #[arg(long)]
        delete: Option<u64>,
    },

    /// Show mood history or log a mood
    Mood {
        /// Mood id (amazing, good, okay, bad, terrible) or value 1-5
        #[arg(long)]
        log: Option<String>,
    },

    /// Wallet balance, history and top-ups
    Wallet {
        /// Top up with a package id
        #[arg(long)]
        topup: Option<String>,

        /// momo, zalopay, vnpay or bank
        #[arg(long, default_value = "momo")]
        method: String,

        /// Filter history by type
        #[arg(long = "type")]
        kind: Option<String>,

        /// Filter history by status
        #[arg(long)]
        status: Option<String>,
    },

    /// Plans and prices
    Pricing {
        /// Business seat count
        #[arg(long)]
        seats: Option<u32>,

        /// Show yearly Premium pricing
        #[arg(long)]
        yearly: bool,

        /// Purchase Business (unlocks the team dashboard)
        #[arg(long)]
        buy_business: bool,
    },

    /// Business team dashboard
    Team {
        /// Invite an email address
        #[arg(long)]
        invite: Option<String>,

        /// manager or member
        #[arg(long, default_value = "member")]
        role: String,

        /// Cancel an invitation by id
        #[arg(long)]
        cancel: Option<String>,

        /// Resend an invitation by id
        #[arg(long)]
        resend: Option<String>,

        /// Print the invite link for --role
        #[arg(long)]
        link: bool,
    },

    /// Ask the AI coach
    Coach {
        #[arg(trailing_var_arg = true, num_args = 1..)]
        message: Vec<String>,
    },

    /// Focus timer
    Focus {
        /// Session length in minutes
        #[arg(long)]
        minutes: Option<u32>,

        /// Run the timer for this many seconds
        #[arg(long)]
        run: Option<u32>,

        /// Reset the timer
        #[arg(long)]
        reset: bool,
    },

    /// End-of-day journal, one question at a time
    Journal {
        /// Answer the current question
        #[arg(long)]
        answer: Option<String>,

        /// Go to the next question, submitting after the last one
        #[arg(long)]
        next: bool,

        /// Go back one question
        #[arg(long, conflicts_with = "next")]
        back: bool,
    },

    /// Show or change settings
    Settings {
        /// AI assistance level, 0-100
        #[arg(long)]
        ai_level: Option<u8>,

        /// calm, motivational or analytical
        #[arg(long)]
        tone: Option<String>,

        /// Flip a toggle: notifications, pomodoro, tips, breathing or sound
        #[arg(long)]
        toggle: Option<String>,
    },

    /// Time-of-day greeting
    Greet,

    /// Navigation menu
    Menu,

    /// Print the effective configuration
    Config,

    /// Read commands from stdin against one session
    Shell,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CardAction {
    /// Draw a random card
    Draw,

    /// Show collected cards
    Collection,

    /// Share to facebook, twitter, whatsapp or copy
    Share { platform: String },

    /// Accept a collected card's challenge
    Accept { id: String },

    /// Complete the active challenge
    Complete,

    /// Generate a referral code
    Invite,
}
