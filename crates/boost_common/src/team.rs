//! Business dashboard: plan seats, members, invitations and team work.

use crate::error::{BoostError, Result};
use crate::tasks::Priority;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::info;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const INVITE_LINK_BASE: &str = "https://dailyboost.com/invite/company123";
pub const DEFAULT_INVITER: &str = "Nguyen Van A";

/// Loose address check: something@something.tld
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessPlan {
    pub name: String,
    pub max_members: u32,
    pub current_members: u32,
    pub features: Vec<String>,
}

impl BusinessPlan {
    /// The Business Pro plan: 20 seats, 8 used
    pub fn business_pro() -> Self {
        Self {
            name: "Business Pro".to_string(),
            max_members: 20,
            current_members: 8,
            features: [
                "Unlimited projects",
                "Team analytics",
                "Priority support",
                "Custom integrations",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }

    /// Whether every seat is taken
    pub fn seats_full(&self) -> bool {
        self.current_members >= self.max_members
    }

    /// Free seats
    pub fn seats_left(&self) -> u32 {
        self.max_members.saturating_sub(self.current_members)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Admin,
    Manager,
    Member,
}

impl MemberRole {
    /// Role name
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Admin => "admin",
            MemberRole::Manager => "manager",
            MemberRole::Member => "member",
        }
    }
}

/// Roles that can be granted by invitation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InviteRole {
    Manager,
    #[default]
    Member,
}

impl InviteRole {
    /// Role name
    pub fn as_str(&self) -> &'static str {
        match self {
            InviteRole::Manager => "manager",
            InviteRole::Member => "member",
        }
    }

    /// Parse an invitable role
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "manager" => Some(InviteRole::Manager),
            "member" => Some(InviteRole::Member),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: MemberRole,
    pub joined: Option<NaiveDate>,
    pub status: MemberStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    Pending,
    Expired,
}

#[derive(Debug, Clone, Serialize)]
pub struct Invitation {
    pub id: String,
    pub email: String,
    pub role: InviteRole,
    pub invited_by: String,
    pub sent_at: DateTime<Utc>,
    pub status: InvitationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    OnTrack,
    AtRisk,
    Delayed,
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub progress: u8,
    pub status: ProjectStatus,
    pub due: Option<NaiveDate>,
    pub team_size: u32,
    pub budget: u64,
    pub spent: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeamTaskStatus {
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamTask {
    pub id: String,
    pub title: String,
    pub assigned_to: String,
    pub priority: Priority,
    pub status: TeamTaskStatus,
    pub due: Option<NaiveDate>,
    pub project: String,
}

/// Counts shown on the overview page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSummary {
    pub projects: usize,
    pub projects_off_track: usize,
    pub tasks_completed: usize,
    pub tasks_in_progress: usize,
    pub tasks_pending: usize,
}

fn date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn date_utc(s: &str) -> DateTime<Utc> {
    date(s)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
        .unwrap_or_else(Utc::now)
}

const MEMBERS: &[(&str, &str, MemberRole, &str, MemberStatus)] = &[
    ("Nguyen Van A", "nguyenvana@company.com", MemberRole::Admin, "2024-01-15", MemberStatus::Active),
    ("Tran Thi B", "tranthib@company.com", MemberRole::Manager, "2024-03-20", MemberStatus::Active),
    ("Le Van C", "levanc@company.com", MemberRole::Manager, "2024-05-10", MemberStatus::Active),
    ("Pham Thi D", "phamthid@company.com", MemberRole::Member, "2024-06-15", MemberStatus::Active),
    ("Hoang Van E", "hoangvane@company.com", MemberRole::Member, "2024-07-20", MemberStatus::Active),
    ("Do Thi F", "dothif@company.com", MemberRole::Member, "2024-08-05", MemberStatus::Active),
    ("Vu Van G", "vuvang@company.com", MemberRole::Member, "2024-09-12", MemberStatus::Active),
    ("Bui Thi H", "buithih@company.com", MemberRole::Member, "2024-10-01", MemberStatus::Inactive),
];

const INVITATIONS: &[(&str, InviteRole, &str, &str, InvitationStatus)] = &[
    ("newmember1@company.com", InviteRole::Member, "Nguyen Van A", "2025-01-10", InvitationStatus::Pending),
    ("newmanager@company.com", InviteRole::Manager, "Nguyen Van A", "2025-01-12", InvitationStatus::Pending),
    ("expired@company.com", InviteRole::Member, "Tran Thi B", "2024-12-20", InvitationStatus::Expired),
];

const PROJECTS: &[(&str, u8, ProjectStatus, &str, u32, u64, u64)] = &[
    ("Website Redesign", 75, ProjectStatus::OnTrack, "2025-01-15", 5, 50_000, 35_000),
    ("Mobile App Development", 45, ProjectStatus::AtRisk, "2025-02-28", 8, 120_000, 65_000),
    ("Marketing Campaign Q1", 30, ProjectStatus::Delayed, "2025-01-31", 3, 30_000, 22_000),
    ("CRM Integration", 90, ProjectStatus::OnTrack, "2025-01-10", 4, 40_000, 38_000),
];

const TEAM_TASKS: &[(&str, &str, Priority, TeamTaskStatus, &str, &str)] = &[
    ("Complete API documentation", "Nguyen Van A", Priority::High, TeamTaskStatus::InProgress, "2025-01-02", "CRM Integration"),
    ("Design homepage mockup", "Tran Thi B", Priority::High, TeamTaskStatus::InProgress, "2025-01-03", "Website Redesign"),
    ("Review sprint backlog", "Le Van C", Priority::Medium, TeamTaskStatus::Pending, "2025-01-05", "Mobile App Development"),
    ("Create social media content", "Pham Thi D", Priority::Medium, TeamTaskStatus::Completed, "2024-12-30", "Marketing Campaign Q1"),
    ("Optimize database queries", "Hoang Van E", Priority::High, TeamTaskStatus::InProgress, "2025-01-04", "CRM Integration"),
];

#[derive(Debug, Clone, Serialize)]
pub struct Team {
    plan: BusinessPlan,
    members: Vec<TeamMember>,
    invitations: Vec<Invitation>,
    projects: Vec<Project>,
    tasks: Vec<TeamTask>,
}

impl Team {
    /// Team with no invitations, projects or tasks
    pub fn new(plan: BusinessPlan, members: Vec<TeamMember>) -> Self {
        Self {
            plan,
            members,
            invitations: Vec::new(),
            projects: Vec::new(),
            tasks: Vec::new(),
        }
    }

    /// Team with the sample members, invitations and projects
    pub fn seeded() -> Self {
        let members = MEMBERS
            .iter()
            .enumerate()
            .map(|(i, &(name, email, role, joined, status))| TeamMember {
                id: (i + 1).to_string(),
                name: name.to_string(),
                email: email.to_string(),
                role,
                joined: date(joined),
                status,
            })
            .collect();
        let invitations = INVITATIONS
            .iter()
            .enumerate()
            .map(|(i, &(email, role, by, sent, status))| Invitation {
                id: (i + 1).to_string(),
                email: email.to_string(),
                role,
                invited_by: by.to_string(),
                sent_at: date_utc(sent),
                status,
            })
            .collect();
        let projects = PROJECTS
            .iter()
            .enumerate()
            .map(|(i, &(name, progress, status, due, team_size, budget, spent))| Project {
                id: (i + 1).to_string(),
                name: name.to_string(),
                progress,
                status,
                due: date(due),
                team_size,
                budget,
                spent,
            })
            .collect();
        let tasks = TEAM_TASKS
            .iter()
            .enumerate()
            .map(|(i, &(title, who, priority, status, due, project))| TeamTask {
                id: (i + 1).to_string(),
                title: title.to_string(),
                assigned_to: who.to_string(),
                priority,
                status,
                due: date(due),
                project: project.to_string(),
            })
            .collect();

        Self {
            plan: BusinessPlan::business_pro(),
            members,
            invitations,
            projects,
            tasks,
        }
    }

    /// The plan the team is on
    pub fn plan(&self) -> &BusinessPlan {
        &self.plan
    }

    /// Current members
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    /// Every invitation, pending or expired
    pub fn invitations(&self) -> &[Invitation] {
        &self.invitations
    }

    /// Invitations still awaiting a reply
    pub fn pending_invitations(&self) -> Vec<&Invitation> {
        self.invitations
            .iter()
            .filter(|i| i.status == InvitationStatus::Pending)
            .collect()
    }

    /// Team projects
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Tasks across all projects
    pub fn tasks(&self) -> &[TeamTask] {
        &self.tasks
    }

    /// Checks run in order: empty, seats, format, duplicate
    pub fn invite(&mut self, email: &str, role: InviteRole) -> Result<&Invitation> {
        if email.is_empty() {
            return Err(BoostError::EmptyEmail);
        }
        if self.plan.seats_full() {
            return Err(BoostError::SeatLimitReached(self.plan.max_members));
        }
        if !is_valid_email(email) {
            return Err(BoostError::InvalidEmail(email.to_string()));
        }
        let taken = self.members.iter().any(|m| m.email == email)
            || self
                .invitations
                .iter()
                .any(|i| i.email == email && i.status == InvitationStatus::Pending);
        if taken {
            return Err(BoostError::DuplicateInvite(email.to_string()));
        }

        let invitation = Invitation {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.to_string(),
            role,
            invited_by: DEFAULT_INVITER.to_string(),
            sent_at: Utc::now(),
            status: InvitationStatus::Pending,
        };
        info!("Invited {} as {}", email, role.as_str());
        self.invitations.push(invitation);
        Ok(&self.invitations[self.invitations.len() - 1])
    }

    /// Withdraw an invitation and return it
    pub fn cancel(&mut self, id: &str) -> Result<Invitation> {
        let pos = self
            .invitations
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| BoostError::not_found("invitation", id))?;
        Ok(self.invitations.remove(pos))
    }

    /// Resend only notifies; the invitation itself is unchanged
    pub fn resend(&self, id: &str) -> Result<&Invitation> {
        let invitation = self
            .invitations
            .iter()
            .find(|i| i.id == id)
            .ok_or_else(|| BoostError::not_found("invitation", id))?;
        info!("Resent invitation to {}", invitation.email);
        Ok(invitation)
    }

    /// Counts for the overview tab
    pub fn summary(&self) -> TeamSummary {
        let count = |status: TeamTaskStatus| self.tasks.iter().filter(|t| t.status == status).count();
        TeamSummary {
            projects: self.projects.len(),
            projects_off_track: self
                .projects
                .iter()
                .filter(|p| p.status != ProjectStatus::OnTrack)
                .count(),
            tasks_completed: count(TeamTaskStatus::Completed),
            tasks_in_progress: count(TeamTaskStatus::InProgress),
            tasks_pending: count(TeamTaskStatus::Pending),
        }
    }
}

/// Shareable join link for a role
pub fn invite_link(role: InviteRole) -> String {
    format!("{}?role={}", INVITE_LINK_BASE, role.as_str())
}
