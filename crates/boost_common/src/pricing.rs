//! Subscription plans and prices (VND).

use crate::error::{BoostError, Result};
use crate::flags::BusinessAccess;
use serde::Serialize;

pub const PREMIUM_MONTHLY_VND: i64 = 199_000;
pub const PREMIUM_YEARLY_DISCOUNT: f64 = 0.15;
pub const BUSINESS_YEARLY_PER_SEAT_VND: i64 = 799_000;

/// Seat stepper bounds on the pricing page
pub const MIN_STEPPER_SEATS: u32 = 5;
pub const MAX_STEPPER_SEATS: u32 = 20;
pub const DEFAULT_SEATS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanKind {
    Free,
    Premium,
    Business,
}

impl PlanKind {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            PlanKind::Free => "Free",
            PlanKind::Premium => "Premium",
            PlanKind::Business => "Business",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Billing {
    Monthly,
    Yearly,
}

impl Billing {
    /// Billing period label
    pub fn period(&self) -> &'static str {
        match self {
            Billing::Monthly => "/month",
            Billing::Yearly => "/year",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanFeature {
    pub text: &'static str,
    pub included: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub kind: PlanKind,
    pub description: &'static str,
    /// Price per period; per seat for Business
    pub price: i64,
    pub period: Option<Billing>,
    pub features: Vec<PlanFeature>,
    pub popular: bool,
    pub per_seat: bool,
}

const FREE_FEATURES: &[(&str, bool)] = &[
    ("Basic tasks & habits", true),
    ("Basic statistics", true),
    ("Minimal AI", true),
    ("Basic analytics", true),
    ("Gamification", false),
    ("AI personalization", false),
    ("Export & share", false),
    ("Team collaboration", false),
];

const PREMIUM_FEATURES: &[(&str, bool)] = &[
    ("Everything in Free", true),
    ("Full AI & Pomodoro", true),
    ("Predictive analytics", true),
    ("Unlimited tasks", true),
    ("Full gamification", true),
    ("AI personalization", true),
    ("Export PDF & share", true),
    ("Small sharing (3 people)", true),
];

const BUSINESS_FEATURES: &[(&str, bool)] = &[
    ("Everything in Premium", true),
    ("Team AI assistant", true),
    ("Team analytics & KPI", true),
    ("Team dashboard", true),
    ("Leaderboard & challenges", true),
    ("Priority support", true),
    ("Custom integrations", true),
    ("Admin controls", true),
];

fn features(rows: &[(&'static str, bool)]) -> Vec<PlanFeature> {
    rows.iter()
        .map(|&(text, included)| PlanFeature { text, included })
        .collect()
}

/// 199 000 * 12 * 0.85, rounded
pub fn premium_yearly() -> i64 {
    (PREMIUM_MONTHLY_VND as f64 * 12.0 * (1.0 - PREMIUM_YEARLY_DISCOUNT)).round() as i64
}

/// Premium price for one billing period
pub fn premium_price(billing: Billing) -> i64 {
    match billing {
        Billing::Monthly => PREMIUM_MONTHLY_VND,
        Billing::Yearly => premium_yearly(),
    }
}

/// Yearly Business price for `seats` users
pub fn business_total(seats: u32) -> Result<i64> {
    if seats == 0 {
        return Err(BoostError::NoSeats);
    }
    Ok(BUSINESS_YEARLY_PER_SEAT_VND * seats as i64)
}

/// Clamp a requested seat count into the stepper range
pub fn stepper_seats(requested: u32) -> u32 {
    requested.clamp(MIN_STEPPER_SEATS, MAX_STEPPER_SEATS)
}

/// Free, Premium and Business plans for a billing period
pub fn plans(billing: Billing) -> Vec<Plan> {
    vec![
        Plan {
            kind: PlanKind::Free,
            description: "Try the basic features",
            price: 0,
            period: None,
            features: features(FREE_FEATURES),
            popular: false,
            per_seat: false,
        },
        Plan {
            kind: PlanKind::Premium,
            description: "Unlock every AI feature and in-depth analytics",
            price: premium_price(billing),
            period: Some(billing),
            features: features(PREMIUM_FEATURES),
            popular: true,
            per_seat: false,
        },
        Plan {
            kind: PlanKind::Business,
            description: "For companies (team dashboard)",
            price: BUSINESS_YEARLY_PER_SEAT_VND,
            period: Some(Billing::Yearly),
            features: features(BUSINESS_FEATURES),
            popular: false,
            per_seat: true,
        },
    ]
}

/// Simulated Business purchase; unlocks the dashboard and returns the total
pub fn buy_business(seats: u32, access: &BusinessAccess) -> Result<i64> {
    let total = business_total(seats)?;
    access.unlock()?;
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::FlagStore;
    use tempfile::TempDir;

    #[test]
    fn test_premium_prices() {
        assert_eq!(premium_price(Billing::Monthly), 199_000);
        assert_eq!(premium_yearly(), 2_029_800);
    }

    #[test]
    fn test_business_total() {
        assert_eq!(business_total(1).unwrap(), 799_000);
        assert_eq!(business_total(5).unwrap(), 3_995_000);
        assert!(matches!(business_total(0), Err(BoostError::NoSeats)));
    }

    #[test]
    fn test_stepper_bounds() {
        assert_eq!(stepper_seats(1), 5);
        assert_eq!(stepper_seats(12), 12);
        assert_eq!(stepper_seats(50), 20);
    }

    #[test]
    fn test_plans_follow_billing() {
        let yearly = plans(Billing::Yearly);
        assert_eq!(yearly.len(), 3);
        assert_eq!(yearly[1].price, 2_029_800);
        assert!(yearly[1].popular);
        assert!(yearly[2].per_seat);
        assert_eq!(yearly[0].features.iter().filter(|f| !f.included).count(), 4);
    }

    #[test]
    fn test_buy_business_unlocks() {
        let dir = TempDir::new().unwrap();
        let access = BusinessAccess::new(FlagStore::new(dir.path().join("flags.json")));
        assert_eq!(buy_business(3, &access).unwrap(), 2_397_000);
        assert!(access.is_unlocked());
    }

    #[test]
    fn test_buy_business_zero_seats_keeps_locked() {
        let dir = TempDir::new().unwrap();
        let access = BusinessAccess::new(FlagStore::new(dir.path().join("flags.json")));
        assert!(buy_business(0, &access).is_err());
        assert!(!access.is_unlocked());
    }
}
