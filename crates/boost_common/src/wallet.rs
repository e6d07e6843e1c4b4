//! Simulated wallet
//!
//! Balances are whole Vietnamese dong. Top-ups never touch a payment
//! provider: they credit the package amount plus bonus immediately and
//! report the delay the UI would show while "processing".

use crate::error::{BoostError, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

pub const SEED_BALANCE: i64 = 1_250_000;
pub const SEED_BONUS_BALANCE: i64 = 350_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    Reward,
    Purchase,
}

impl TransactionType {
    /// Type name
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Deposit => "deposit",
            TransactionType::Withdrawal => "withdrawal",
            TransactionType::Reward => "reward",
            TransactionType::Purchase => "purchase",
        }
    }

    /// Parse a type name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "deposit" => Some(TransactionType::Deposit),
            "withdrawal" => Some(TransactionType::Withdrawal),
            "reward" => Some(TransactionType::Reward),
            "purchase" => Some(TransactionType::Purchase),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    /// Status name
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "completed",
            TransactionStatus::Pending => "pending",
            TransactionStatus::Failed => "failed",
        }
    }

    /// Parse a status name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "completed" => Some(TransactionStatus::Completed),
            "pending" => Some(TransactionStatus::Pending),
            "failed" => Some(TransactionStatus::Failed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Momo,
    Zalopay,
    Vnpay,
    Bank,
}

impl PaymentMethod {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            PaymentMethod::Momo => "MoMo",
            PaymentMethod::Zalopay => "ZaloPay",
            PaymentMethod::Vnpay => "VNPay",
            PaymentMethod::Bank => "Bank Transfer",
        }
    }

    /// Parse a method name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "momo" => Some(PaymentMethod::Momo),
            "zalopay" => Some(PaymentMethod::Zalopay),
            "vnpay" => Some(PaymentMethod::Vnpay),
            "bank" | "bank-transfer" => Some(PaymentMethod::Bank),
            _ => None,
        }
    }

    /// Every payment method
    pub fn all() -> [PaymentMethod; 4] {
        [
            PaymentMethod::Momo,
            PaymentMethod::Zalopay,
            PaymentMethod::Vnpay,
            PaymentMethod::Bank,
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionType,
    /// Signed amount; purchases are negative
    pub amount: i64,
    pub description: String,
    pub status: TransactionStatus,
    pub date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopUpPackage {
    pub id: String,
    pub amount: i64,
    pub bonus: i64,
    pub price: i64,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub badge: Option<String>,
}

impl TopUpPackage {
    /// Amount plus bonus
    pub fn total_credit(&self) -> i64 {
        self.amount + self.bonus
    }
}

/// (id, amount, bonus, popular, badge); price equals amount
const PACKAGES: &[(&str, i64, i64, bool, Option<&str>)] = &[
    ("1", 50_000, 0, false, None),
    ("2", 100_000, 10_000, false, Some("+10%")),
    ("3", 200_000, 30_000, true, Some("+15%")),
    ("4", 500_000, 100_000, false, Some("+20%")),
    ("5", 1_000_000, 250_000, false, Some("+25%")),
    ("6", 2_000_000, 600_000, false, Some("+30%")),
];

/// The six top-up packages
pub fn top_up_packages() -> Vec<TopUpPackage> {
    PACKAGES
        .iter()
        .map(|&(id, amount, bonus, popular, badge)| TopUpPackage {
            id: id.to_string(),
            amount,
            bonus,
            price: amount,
            popular,
            badge: badge.map(str::to_string),
        })
        .collect()
}

/// (id, type, amount, description, status, date, method)
const SEED_TRANSACTIONS: &[(&str, TransactionType, i64, &str, TransactionStatus, &str, Option<&str>)] = &[
    ("1", TransactionType::Deposit, 500_000, "Wallet top-up", TransactionStatus::Completed, "2025-01-15T10:30:00", Some("MoMo")),
    ("2", TransactionType::Reward, 50_000, "Challenge completion reward", TransactionStatus::Completed, "2025-01-14T15:20:00", None),
    ("3", TransactionType::Purchase, -150_000, "Premium plan, 1 month", TransactionStatus::Completed, "2025-01-13T09:15:00", Some("Wallet")),
    ("4", TransactionType::Deposit, 200_000, "Wallet top-up", TransactionStatus::Completed, "2025-01-12T14:45:00", Some("ZaloPay")),
    ("5", TransactionType::Reward, 100_000, "Friend referral reward", TransactionStatus::Completed, "2025-01-11T11:30:00", None),
    ("6", TransactionType::Deposit, 1_000_000, "Wallet top-up", TransactionStatus::Pending, "2025-01-15T16:00:00", Some("Bank Transfer")),
    ("7", TransactionType::Purchase, -50_000, "5 card game plays", TransactionStatus::Completed, "2025-01-10T13:20:00", Some("Wallet")),
    ("8", TransactionType::Deposit, 300_000, "Wallet top-up", TransactionStatus::Completed, "2025-01-08T10:10:00", Some("MoMo")),
];

fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Result of a simulated top-up
#[derive(Debug, Clone, Serialize)]
pub struct TopUpReceipt {
    pub package: TopUpPackage,
    pub method: PaymentMethod,
    pub credited: i64,
    pub balance: i64,
    pub bonus_balance: i64,
    pub processing_delay_ms: u64,
    pub transaction_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    balance: i64,
    bonus_balance: i64,
    transactions: Vec<Transaction>,
    packages: Vec<TopUpPackage>,
}

impl Wallet {
    /// Empty wallet with the given balances
    pub fn new(balance: i64, bonus_balance: i64) -> Self {
        Self {
            balance,
            bonus_balance,
            transactions: Vec::new(),
            packages: top_up_packages(),
        }
    }

    /// Wallet with the sample balances and transactions
    pub fn seeded() -> Self {
        let transactions = SEED_TRANSACTIONS
            .iter()
            .filter_map(|&(id, kind, amount, description, status, date, method)| {
                Some(Transaction {
                    id: id.to_string(),
                    kind,
                    amount,
                    description: description.to_string(),
                    status,
                    date: parse_date(date)?,
                    method: method.map(str::to_string),
                })
            })
            .collect();
        Self {
            transactions,
            ..Self::new(SEED_BALANCE, SEED_BONUS_BALANCE)
        }
    }

    /// Spendable balance in VND
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Bonus credit received from top-ups
    pub fn bonus_balance(&self) -> i64 {
        self.bonus_balance
    }

    /// Available top-up packages
    pub fn packages(&self) -> &[TopUpPackage] {
        &self.packages
    }

    /// Transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Newest first, optionally narrowed by type and status
    pub fn history(
        &self,
        kind: Option<TransactionType>,
        status: Option<TransactionStatus>,
    ) -> Vec<&Transaction> {
        let mut rows: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| kind.map_or(true, |k| t.kind == k))
            .filter(|t| status.map_or(true, |s| t.status == s))
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        rows
    }

    /// Transactions still pending
    pub fn pending(&self) -> Vec<&Transaction> {
        self.history(None, Some(TransactionStatus::Pending))
    }

    /// Credit a package to the wallet
    pub fn top_up(
        &mut self,
        package_id: &str,
        method: PaymentMethod,
        processing_delay_ms: u64,
    ) -> Result<TopUpReceipt> {
        let package = self
            .packages
            .iter()
            .find(|p| p.id == package_id)
            .cloned()
            .ok_or_else(|| BoostError::not_found("package", package_id))?;

        let credited = package.total_credit();
        self.balance += credited;
        if package.bonus > 0 {
            self.bonus_balance += package.bonus;
        }

        let transaction_id = uuid::Uuid::new_v4().to_string();
        self.transactions.push(Transaction {
            id: transaction_id.clone(),
            kind: TransactionType::Deposit,
            amount: credited,
            description: "Wallet top-up".to_string(),
            status: TransactionStatus::Completed,
            date: Utc::now(),
            method: Some(method.name().to_string()),
        });

        info!(
            "Top-up {} via {}: +{} (bonus {})",
            package.id,
            method.name(),
            credited,
            package.bonus
        );

        Ok(TopUpReceipt {
            package,
            method,
            credited,
            balance: self.balance,
            bonus_balance: self.bonus_balance,
            processing_delay_ms,
            transaction_id,
        })
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Format as Vietnamese dong, e.g. "1.250.000 ₫"
pub fn format_vnd(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}{} ₫", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_vnd() {
        assert_eq!(format_vnd(0), "0 ₫");
        assert_eq!(format_vnd(999), "999 ₫");
        assert_eq!(format_vnd(1000), "1.000 ₫");
        assert_eq!(format_vnd(1_250_000), "1.250.000 ₫");
        assert_eq!(format_vnd(-150_000), "-150.000 ₫");
    }

    #[test]
    fn test_seeded_wallet() {
        let wallet = Wallet::seeded();
        assert_eq!(wallet.balance(), 1_250_000);
        assert_eq!(wallet.bonus_balance(), 350_000);
        assert_eq!(wallet.transactions().len(), 8);
        assert_eq!(wallet.pending().len(), 1);
        assert_eq!(wallet.packages().len(), 6);
    }

    #[test]
    fn test_history_sorted_and_filtered() {
        let wallet = Wallet::seeded();
        let all = wallet.history(None, None);
        assert_eq!(all[0].id, "6");
        assert!(all.windows(2).all(|w| w[0].date >= w[1].date));

        let rewards = wallet.history(Some(TransactionType::Reward), None);
        assert_eq!(rewards.len(), 2);
        assert!(rewards.iter().all(|t| t.kind == TransactionType::Reward));

        let completed_deposits = wallet.history(
            Some(TransactionType::Deposit),
            Some(TransactionStatus::Completed),
        );
        assert_eq!(completed_deposits.len(), 3);
    }

    #[test]
    fn test_top_up_with_bonus() {
        let mut wallet = Wallet::seeded();
        let receipt = wallet.top_up("3", PaymentMethod::Zalopay, 2000).unwrap();

        assert_eq!(receipt.credited, 230_000);
        assert_eq!(wallet.balance(), 1_480_000);
        assert_eq!(wallet.bonus_balance(), 380_000);
        assert_eq!(receipt.processing_delay_ms, 2000);
        assert_eq!(wallet.transactions().len(), 9);
        assert_eq!(wallet.history(None, None)[0].id, receipt.transaction_id);
    }

    #[test]
    fn test_top_up_without_bonus() {
        let mut wallet = Wallet::seeded();
        wallet.top_up("1", PaymentMethod::Momo, 0).unwrap();
        assert_eq!(wallet.balance(), 1_300_000);
        assert_eq!(wallet.bonus_balance(), 350_000);
    }

    #[test]
    fn test_unknown_package() {
        let mut wallet = Wallet::seeded();
        assert!(wallet.top_up("42", PaymentMethod::Bank, 0).is_err());
        assert_eq!(wallet.balance(), 1_250_000);
    }

    #[test]
    fn test_method_parse() {
        assert_eq!(PaymentMethod::parse("VNPay"), Some(PaymentMethod::Vnpay));
        assert_eq!(PaymentMethod::parse("bank"), Some(PaymentMethod::Bank));
        assert_eq!(PaymentMethod::parse("paypal"), None);
        assert_eq!(PaymentMethod::default(), PaymentMethod::Momo);
    }
}
