use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Sentinel for `days_since_last_tx` when the last transaction is unknown.
pub const DAYS_UNKNOWN: u32 = 999;

/// A merchant registered on the platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Merchant {
    /// Unique merchant identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Country code as captured at onboarding. Not validated: the source
    /// data mixes ISO codes with currency codes ("MXN", "GTQ") and typos.
    pub country: String,
    /// Lifetime transaction counter.
    pub counter: u64,
    /// Whether the merchant was onboarded through the platform.
    pub on_platform: bool,
    /// Whether the merchant is enabled.
    pub is_enabled: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Transaction aggregate for one merchant over the analysed period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionStats {
    pub total_transactions: u64,
    pub successful: u64,
    pub failed: u64,
    /// Approval rate as a percentage (0.0–100.0), precomputed upstream.
    /// May disagree with `successful / total_transactions`.
    pub success_rate: f64,
    /// Total processed volume in USD.
    pub total_usd: f64,
    /// Average ticket in USD.
    pub avg_ticket_usd: f64,
    /// Date of the last transaction, if known.
    pub last_transaction: Option<NaiveDate>,
    /// Days since the last transaction ([`DAYS_UNKNOWN`] when never seen).
    pub days_since_last_tx: u32,
    /// Channels the merchant sells through (e.g. "web", "app", "wa").
    #[serde(default)]
    pub channels: Vec<String>,
    #[serde(default)]
    pub payment_types: Vec<String>,
}

/// Categorical health classification for a merchant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HealthLevel {
    Critical,
    Risk,
    Healthy,
}

impl std::fmt::Display for HealthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthLevel::Critical => write!(f, "critical"),
            HealthLevel::Risk => write!(f, "risk"),
            HealthLevel::Healthy => write!(f, "healthy"),
        }
    }
}

/// Derived merchant health. Always recomputed, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MerchantHealth {
    /// Score in 0–100. Starts at 100 and only decreases.
    pub score: u8,
    pub level: HealthLevel,
    /// Human-readable reasons, in the order the checks fired.
    pub reasons: Vec<String>,
}
